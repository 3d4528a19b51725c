//! Item kinds and the layout policy that depends on them.

use toolstrip_layout::{LayoutMetrics, Rect, Size};

/// The kind of a tool item, as far as layout is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemKind {
    /// A push button. Draws a border.
    #[default]
    Button,
    /// A text/image label. Borderless.
    Label,
    /// A label inside a status strip. Borderless.
    StatusLabel,
    /// A button that opens a drop-down, optionally showing an arrow glyph.
    DropDownButton { show_arrow: bool },
    /// Hosts an arbitrary control that sizes itself.
    ControlHost,
}

impl ItemKind {
    /// Whether the item reserves a border around its content.
    pub fn has_border(self) -> bool {
        !matches!(self, Self::Label | Self::StatusLabel)
    }

    /// Extra width reserved after the content.
    pub fn trailing_width(self, metrics: &LayoutMetrics) -> i32 {
        match self {
            Self::DropDownButton { show_arrow: true } => metrics.drop_down_arrow_width,
            _ => 0,
        }
    }

    /// Whether the item's size follows its content.
    ///
    /// Hosted controls manage their own size.
    pub fn auto_sizes(self) -> bool {
        !matches!(self, Self::ControlHost)
    }

    /// The area inside an item of the given size where content is drawn.
    ///
    /// The rectangle is relative to the item's own origin. Items smaller
    /// than their frame get an empty rectangle rather than a negative one.
    pub fn content_rect(self, size: Size, metrics: &LayoutMetrics) -> Rect {
        if !self.has_border() {
            return Rect::from_size(size.non_negative());
        }

        let b = metrics.border_width;
        Rect::new(
            b,
            b,
            (size.width - 2 * b - self.trailing_width(metrics)).max(0),
            (size.height - 2 * b).max(0),
        )
    }
}
