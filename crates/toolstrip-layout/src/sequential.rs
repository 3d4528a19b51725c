//! Side-by-side placement of text and image.
//!
//! Used for the before/after relations. The pair is laid out without a gap
//! and shifted horizontally as a whole; the shift is picked from the two
//! horizontal alignments using thirds of the excess width. This is not a
//! justification algorithm, and existing layouts rely on the exact values,
//! integer truncation included.

use crate::alignment::{ContentAlignment, HorizontalAlignment, align_in_rect};
use crate::geometry::{Rect, Size};

/// Horizontal shift applied to the leading element.
///
/// `excess_width` may be negative when the pair does not fit.
pub fn horizontal_offset(
    image: HorizontalAlignment,
    text: HorizontalAlignment,
    excess_width: i32,
) -> i32 {
    use crate::alignment::HorizontalAlignment::{Center, Left, Right};

    match (image, text) {
        (Left, _) => 0,
        (Right, Right) => excess_width,
        (Center, Left | Center) => excess_width / 3,
        _ => 2 * (excess_width / 3),
    }
}

/// Place text and image next to each other inside `total`.
///
/// Returns `(text_rect, image_rect)`. With `text_first` the text leads and the
/// image starts at the text's right edge; otherwise the image leads. Each
/// element keeps its own size; only its vertical position comes from its
/// alignment within `total`.
pub fn layout_side_by_side(
    total: Rect,
    text_first: bool,
    text_size: Size,
    image_size: Size,
    text_align: ContentAlignment,
    image_align: ContentAlignment,
) -> (Rect, Rect) {
    let total_width = text_size.width + image_size.width;
    let excess_width = total.width - total_width;
    let offset = horizontal_offset(
        image_align.horizontal(),
        text_align.horizontal(),
        excess_width,
    );

    let text_top = align_in_rect(total, text_size, text_align).top();
    let image_top = align_in_rect(total, image_size, image_align).top();

    if text_first {
        let text = Rect::new(total.left() + offset, text_top, text_size.width, text_size.height);
        let image = Rect::new(text.right(), image_top, image_size.width, image_size.height);
        (text, image)
    } else {
        let image = Rect::new(total.left() + offset, image_top, image_size.width, image_size.height);
        let text = Rect::new(image.right(), text_top, text_size.width, text_size.height);
        (text, image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::HorizontalAlignment::{Center, Left, Right};

    #[test]
    fn test_offset_table() {
        for text in [Left, Center, Right] {
            assert_eq!(horizontal_offset(Left, text, 30), 0);
        }
        assert_eq!(horizontal_offset(Right, Right, 30), 30);
        assert_eq!(horizontal_offset(Center, Left, 30), 10);
        assert_eq!(horizontal_offset(Center, Center, 30), 10);
        assert_eq!(horizontal_offset(Center, Right, 30), 20);
        assert_eq!(horizontal_offset(Right, Left, 30), 20);
        assert_eq!(horizontal_offset(Right, Center, 30), 20);
    }

    #[test]
    fn test_offset_truncates() {
        // 2 * (14 / 3) == 8, not 2 * 14 / 3 == 9
        assert_eq!(horizontal_offset(Right, Left, 14), 8);
        assert_eq!(horizontal_offset(Center, Center, 14), 4);
        // Toward zero for negative excess.
        assert_eq!(horizontal_offset(Center, Left, -5), -1);
        assert_eq!(horizontal_offset(Right, Center, -5), -2);
        assert_eq!(horizontal_offset(Right, Right, -5), -5);
    }

    #[test]
    fn test_image_first_left() {
        let (text, image) = layout_side_by_side(
            Rect::new(0, 0, 50, 50),
            false,
            Size::new(20, 10),
            Size::new(16, 16),
            ContentAlignment::MiddleLeft,
            ContentAlignment::MiddleLeft,
        );
        assert_eq!(image, Rect::new(0, 17, 16, 16));
        assert_eq!(text, Rect::new(16, 20, 20, 10));
    }

    #[test]
    fn test_text_first_centered() {
        // excess = 100 - 60 = 40, offset = 40 / 3 = 13
        let (text, image) = layout_side_by_side(
            Rect::new(5, 0, 100, 20),
            true,
            Size::new(44, 12),
            Size::new(16, 16),
            ContentAlignment::MiddleCenter,
            ContentAlignment::MiddleCenter,
        );
        assert_eq!(text, Rect::new(18, 4, 44, 12));
        assert_eq!(image, Rect::new(62, 2, 16, 16));
    }

    #[test]
    fn test_flush_right_pair() {
        let (text, image) = layout_side_by_side(
            Rect::new(0, 0, 100, 20),
            false,
            Size::new(30, 10),
            Size::new(20, 20),
            ContentAlignment::TopRight,
            ContentAlignment::BottomRight,
        );
        assert_eq!(image, Rect::new(50, 0, 20, 20));
        assert_eq!(text, Rect::new(70, 0, 30, 10));
        assert_eq!(text.right(), 100);
    }

    #[test]
    fn test_sizes_are_not_clamped() {
        let (text, image) = layout_side_by_side(
            Rect::new(0, 0, 10, 10),
            true,
            Size::new(40, 30),
            Size::new(16, 16),
            ContentAlignment::TopLeft,
            ContentAlignment::TopLeft,
        );
        assert_eq!(text.size(), Size::new(40, 30));
        assert_eq!(image, Rect::new(40, 0, 16, 16));
    }
}
