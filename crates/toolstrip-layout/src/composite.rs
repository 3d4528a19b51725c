//! Partitioning of an item's content rectangle into text and image areas.

use crate::alignment::{ContentAlignment, align_in_rect};
use crate::geometry::{Rect, Size};
use crate::logging::targets;
use crate::metrics::LayoutMetrics;
use crate::sequential::layout_side_by_side;
use crate::style::{DisplayStyle, TextImageRelation};

/// Content description consumed by [`layout_text_and_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentInputs {
    /// Which parts of the item are shown.
    pub display_style: DisplayStyle,
    /// Whether the item's text is non-empty.
    pub has_text: bool,
    /// Measured size of the text.
    pub text_size: Size,
    /// Anchor of the text.
    pub text_align: ContentAlignment,
    /// Size the image is drawn at, if the item has an image.
    pub image_size: Option<Size>,
    /// Anchor of the image.
    pub image_align: ContentAlignment,
    /// Arrangement of text and image when both are shown.
    pub relation: TextImageRelation,
}

/// Where text and image are drawn. Absent content gets [`Rect::EMPTY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentLayout {
    pub text_rect: Rect,
    pub image_rect: Rect,
}

impl ContentLayout {
    fn text(text_rect: Rect) -> Self {
        Self {
            text_rect,
            ..Default::default()
        }
    }

    fn image(image_rect: Rect) -> Self {
        Self {
            image_rect,
            ..Default::default()
        }
    }
}

/// Compute the text and image rectangles inside `content`.
pub fn layout_text_and_image(
    content: Rect,
    inputs: &ContentInputs,
    metrics: &LayoutMetrics,
) -> ContentLayout {
    let text = || align_in_rect(content, inputs.text_size, inputs.text_align);

    let layout = match inputs.display_style {
        DisplayStyle::None => ContentLayout::default(),
        DisplayStyle::Text if inputs.has_text => ContentLayout::text(text()),
        DisplayStyle::Text => ContentLayout::default(),
        DisplayStyle::Image => match inputs.image_size {
            Some(image) => ContentLayout::image(align_in_rect(content, image, inputs.image_align)),
            None => ContentLayout::default(),
        },
        DisplayStyle::ImageAndText => match (inputs.has_text, inputs.image_size) {
            (true, None) => ContentLayout::text(text()),
            (false, Some(image)) => {
                ContentLayout::image(align_in_rect(content, image, inputs.image_align))
            }
            (false, None) => ContentLayout::default(),
            (true, Some(image)) => layout_both(content, inputs, image, metrics),
        },
    };

    tracing::trace!(
        target: targets::COMPOSITE,
        style = ?inputs.display_style,
        relation = ?inputs.relation,
        text = ?layout.text_rect,
        image = ?layout.image_rect,
        "content layout"
    );
    layout
}

fn layout_both(
    content: Rect,
    inputs: &ContentInputs,
    image: Size,
    metrics: &LayoutMetrics,
) -> ContentLayout {
    let band_height = inputs.text_size.height - metrics.text_band_inset;

    let (text_area, image_area) = match inputs.relation {
        TextImageRelation::Overlay => (content, content),
        TextImageRelation::ImageAboveText => {
            let text_area = Rect::new(
                content.left(),
                content.bottom() - band_height,
                content.width,
                band_height,
            );
            let image_area = Rect::new(
                content.left(),
                content.top(),
                content.width,
                content.height - text_area.height,
            );
            (text_area, image_area)
        }
        TextImageRelation::TextAboveImage => {
            let text_area = Rect::new(content.left(), content.top(), content.width, band_height);
            let image_area = Rect::new(
                content.left(),
                text_area.bottom(),
                content.width,
                content.height - text_area.height,
            );
            (text_area, image_area)
        }
        TextImageRelation::ImageBeforeText | TextImageRelation::TextBeforeImage => {
            let text_first = inputs.relation == TextImageRelation::TextBeforeImage;
            let (text_rect, image_rect) = layout_side_by_side(
                content,
                text_first,
                inputs.text_size,
                image,
                inputs.text_align,
                inputs.image_align,
            );
            return ContentLayout {
                text_rect,
                image_rect,
            };
        }
    };

    ContentLayout {
        text_rect: align_in_rect(text_area, inputs.text_size, inputs.text_align),
        image_rect: align_in_rect(image_area, image, inputs.image_align),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both(relation: TextImageRelation) -> ContentInputs {
        ContentInputs {
            display_style: DisplayStyle::ImageAndText,
            has_text: true,
            text_size: Size::new(60, 14),
            image_size: Some(Size::new(16, 16)),
            relation,
            ..Default::default()
        }
    }

    #[test]
    fn test_none_is_empty() {
        let m = LayoutMetrics::default();
        let mut i = both(TextImageRelation::Overlay);
        i.display_style = DisplayStyle::None;
        let layout = layout_text_and_image(Rect::new(0, 0, 50, 50), &i, &m);
        assert_eq!(layout, ContentLayout::default());
    }

    #[test]
    fn test_text_style_ignores_image() {
        let m = LayoutMetrics::default();
        let i = ContentInputs {
            display_style: DisplayStyle::Text,
            has_text: true,
            text_size: Size::new(40, 16),
            image_size: Some(Size::new(16, 16)),
            ..Default::default()
        };
        let layout = layout_text_and_image(Rect::new(0, 0, 100, 30), &i, &m);
        assert_eq!(layout.text_rect, Rect::new(30, 7, 40, 16));
        assert_eq!(layout.image_rect, Rect::EMPTY);
    }

    #[test]
    fn test_text_style_without_text() {
        let m = LayoutMetrics::default();
        let i = ContentInputs {
            display_style: DisplayStyle::Text,
            text_size: Size::new(40, 16),
            ..Default::default()
        };
        let layout = layout_text_and_image(Rect::new(0, 0, 100, 30), &i, &m);
        assert_eq!(layout, ContentLayout::default());
    }

    #[test]
    fn test_image_style() {
        let m = LayoutMetrics::default();
        let i = ContentInputs {
            display_style: DisplayStyle::Image,
            has_text: true,
            text_size: Size::new(40, 16),
            image_size: Some(Size::new(16, 16)),
            ..Default::default()
        };
        let layout = layout_text_and_image(Rect::new(2, 2, 20, 20), &i, &m);
        assert_eq!(layout.image_rect, Rect::new(4, 4, 16, 16));
        assert_eq!(layout.text_rect, Rect::EMPTY);
    }

    #[test]
    fn test_single_content_under_image_and_text() {
        let m = LayoutMetrics::default();
        let content = Rect::new(0, 0, 100, 30);

        let mut i = both(TextImageRelation::ImageBeforeText);
        i.image_size = None;
        let layout = layout_text_and_image(content, &i, &m);
        assert_eq!(layout.text_rect, Rect::new(20, 8, 60, 14));
        assert_eq!(layout.image_rect, Rect::EMPTY);

        let mut i = both(TextImageRelation::ImageBeforeText);
        i.has_text = false;
        let layout = layout_text_and_image(content, &i, &m);
        assert_eq!(layout.image_rect, Rect::new(42, 7, 16, 16));
        assert_eq!(layout.text_rect, Rect::EMPTY);
    }

    #[test]
    fn test_overlay_shares_content() {
        let m = LayoutMetrics::default();
        let layout = layout_text_and_image(
            Rect::new(0, 0, 60, 40),
            &both(TextImageRelation::Overlay),
            &m,
        );
        assert_eq!(layout.text_rect, Rect::new(0, 13, 60, 14));
        assert_eq!(layout.image_rect, Rect::new(22, 12, 16, 16));
        assert!(layout.text_rect.intersect(&layout.image_rect).is_some());
    }

    #[test]
    fn test_image_above_text_bands() {
        let m = LayoutMetrics::default();
        let layout = layout_text_and_image(
            Rect::new(0, 0, 60, 40),
            &both(TextImageRelation::ImageAboveText),
            &m,
        );
        // Text band: y = 30, height 10; the 14px text is clamped to it.
        assert_eq!(layout.text_rect, Rect::new(0, 28, 60, 10));
        // Image band: (0, 0, 60, 30).
        assert_eq!(layout.image_rect, Rect::new(22, 7, 16, 16));
    }

    #[test]
    fn test_text_above_image_bands() {
        let m = LayoutMetrics::default();
        let layout = layout_text_and_image(
            Rect::new(0, 0, 60, 40),
            &both(TextImageRelation::TextAboveImage),
            &m,
        );
        // Text band: (0, 0, 60, 10); image band: (0, 10, 60, 30).
        assert_eq!(layout.text_rect, Rect::new(0, -2, 60, 10));
        assert_eq!(layout.image_rect, Rect::new(22, 17, 16, 16));
    }

    #[test]
    fn test_before_relations_delegate() {
        let m = LayoutMetrics::default();
        let content = Rect::new(0, 0, 100, 20);

        let mut i = both(TextImageRelation::ImageBeforeText);
        i.text_align = ContentAlignment::MiddleLeft;
        i.image_align = ContentAlignment::MiddleLeft;
        let layout = layout_text_and_image(content, &i, &m);
        assert_eq!(layout.image_rect, Rect::new(0, 2, 16, 16));
        assert_eq!(layout.text_rect, Rect::new(16, 3, 60, 14));

        i.relation = TextImageRelation::TextBeforeImage;
        let layout = layout_text_and_image(content, &i, &m);
        assert_eq!(layout.text_rect, Rect::new(0, 3, 60, 14));
        assert_eq!(layout.image_rect, Rect::new(60, 2, 16, 16));
    }

    #[test]
    fn test_custom_band_inset() {
        let m = LayoutMetrics {
            text_band_inset: 0,
            ..Default::default()
        };
        let layout = layout_text_and_image(
            Rect::new(0, 0, 60, 40),
            &both(TextImageRelation::TextAboveImage),
            &m,
        );
        assert_eq!(layout.text_rect, Rect::new(0, 0, 60, 14));
        assert_eq!(layout.image_rect, Rect::new(22, 19, 16, 16));
    }
}
