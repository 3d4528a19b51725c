//! Preferred size computation for a tool item.
//!
//! The calculator is a pure function of [`SizeInputs`]. Policy that depends
//! on the kind of item (whether it draws a border, whether it reserves room
//! for a drop-down arrow) is passed in explicitly by the caller.

use crate::geometry::{Padding, Size};
use crate::logging::targets;
use crate::metrics::LayoutMetrics;
use crate::style::{DisplayStyle, ImageScaling, TextImageRelation};

/// Everything the size calculator looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeInputs {
    /// Which parts of the item are shown.
    pub display_style: DisplayStyle,
    /// Measured size of the item's text (zero when there is no text).
    pub text_size: Size,
    /// Native size of the item's image, if it has one.
    pub image_size: Option<Size>,
    /// How the image is sized.
    pub image_scaling: ImageScaling,
    /// Scaled image size supplied by the owning strip, if the item has one.
    pub scaled_image_size: Option<Size>,
    /// Arrangement of text and image when both are shown.
    pub relation: TextImageRelation,
    /// Padding around the text.
    pub padding: Padding,
    /// Whether the item draws a border around its content.
    pub has_border: bool,
    /// Extra width reserved after the content, such as a drop-down arrow.
    pub trailing_width: i32,
    /// When false the explicit size is returned unchanged.
    pub auto_size: bool,
    /// Size assigned by the owner, used when auto-sizing is off.
    pub explicit_size: Size,
}

impl Default for SizeInputs {
    fn default() -> Self {
        Self {
            display_style: DisplayStyle::default(),
            text_size: Size::ZERO,
            image_size: None,
            image_scaling: ImageScaling::default(),
            scaled_image_size: None,
            relation: TextImageRelation::default(),
            padding: Padding::ZERO,
            has_border: true,
            trailing_width: 0,
            auto_size: true,
            explicit_size: Size::ZERO,
        }
    }
}

/// Compute the preferred outer size of an item.
///
/// Items showing only text or text and image may come out smaller than
/// `metrics.default_size`; only the empty branches fall back to it.
pub fn preferred_size(inputs: &SizeInputs, metrics: &LayoutMetrics) -> Size {
    if !inputs.auto_size {
        return inputs.explicit_size;
    }

    let content = match inputs.display_style {
        DisplayStyle::None => metrics.default_size,
        DisplayStyle::Text => padded_text(inputs),
        DisplayStyle::Image => match inputs.image_size {
            None => metrics.default_size,
            Some(image) => match inputs.image_scaling {
                ImageScaling::None => image,
                ImageScaling::SizeToFit => inputs.scaled_image_size.unwrap_or(image),
            },
        },
        DisplayStyle::ImageAndText => {
            let text = padded_text(inputs);
            match inputs.image_size {
                None => text,
                Some(image) => combine(text, image, inputs.relation),
            }
        }
    };

    let mut size = content;
    if inputs.has_border {
        let border = metrics.border_total();
        size = size.expanded(border, border);
    }
    size.width += inputs.trailing_width;

    let size = size.non_negative();
    tracing::trace!(
        target: targets::SIZE,
        style = ?inputs.display_style,
        width = size.width,
        height = size.height,
        "preferred size"
    );
    size
}

fn padded_text(inputs: &SizeInputs) -> Size {
    inputs
        .text_size
        .expanded(inputs.padding.horizontal(), inputs.padding.vertical())
}

// The image is added at its native size here even under SizeToFit.
fn combine(text: Size, image: Size, relation: TextImageRelation) -> Size {
    if relation.is_stacked() {
        Size::new(text.width.max(image.width), text.height + image.height)
    } else if relation.is_side_by_side() {
        Size::new(text.width + image.width, text.height.max(image.height))
    } else {
        Size::new(text.width.max(image.width), text.height.max(image.height))
    }
}
