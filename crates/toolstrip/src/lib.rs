//! Toolstrip - layout of toolbar items.
//!
//! This is the umbrella crate. It re-exports the pure layout engine from
//! `toolstrip-layout` and adds the item-side boundary that feeds it: a
//! [`ToolItem`] holding layout state, the [`TextMeasurer`] seam, and the
//! [`ItemKind`] policy that decides borders and drop-down arrows.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use toolstrip::prelude::*;
//!
//! let item = ToolItem::new(Arc::new(FixedCellMeasurer::default()))
//!     .with_kind(ItemKind::DropDownButton { show_arrow: true })
//!     .with_text("File")
//!     .with_display_style(DisplayStyle::Text);
//!
//! let layout = item.text_and_image_rects();
//! assert!(item.content_rectangle().intersect(&layout.text_rect).is_some());
//! ```

pub mod item;
pub mod kind;
pub mod logging;
pub mod measure;
pub mod prelude;

pub use item::{AutoSizeOutcome, ParentContext, ToolItem};
pub use kind::ItemKind;
pub use measure::{CachedMeasurer, FixedCellMeasurer, FontSpec, TextMeasurer};

/// The layout engine.
pub mod layout {
    pub use toolstrip_layout::*;
}
