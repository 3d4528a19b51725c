//! Content layout engine for toolbar items.
//!
//! Given an item's text size, image size and layout preferences, this crate
//! computes the item's preferred size and the rectangles its text and image
//! are drawn in. Everything here is a pure function over `Copy` values, so
//! it can be called from any thread without coordination.
//!
//! - [`preferred_size`] — outer size of an item from its content.
//! - [`align_in_rect`] — nine-way placement of content in a rectangle.
//! - [`layout_text_and_image`] — split a content rectangle between text and image.
//!
//! # Example
//!
//! ```
//! use toolstrip_layout::{
//!     ContentAlignment, ContentInputs, DisplayStyle, LayoutMetrics, Rect, Size,
//!     layout_text_and_image,
//! };
//!
//! let inputs = ContentInputs {
//!     display_style: DisplayStyle::Text,
//!     has_text: true,
//!     text_size: Size::new(40, 16),
//!     text_align: ContentAlignment::MiddleCenter,
//!     ..Default::default()
//! };
//! let layout = layout_text_and_image(Rect::new(0, 0, 100, 30), &inputs, &LayoutMetrics::default());
//! assert_eq!(layout.text_rect, Rect::new(30, 7, 40, 16));
//! ```

pub mod alignment;
pub mod composite;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod metrics;
pub mod sequential;
pub mod size;
pub mod style;

pub use alignment::{
    ContentAlignment, HorizontalAlignment, VerticalAlignment, align_in_rect, align_in_rect_raw,
};
pub use composite::{ContentInputs, ContentLayout, layout_text_and_image};
pub use error::{LayoutError, Result};
pub use geometry::{Padding, Rect, Size};
pub use metrics::LayoutMetrics;
pub use sequential::{horizontal_offset, layout_side_by_side};
pub use size::{SizeInputs, preferred_size};
pub use style::{DisplayStyle, ImageScaling, TextImageRelation};

static_assertions::assert_impl_all!(Size: Send, Sync, Copy);
static_assertions::assert_impl_all!(Rect: Send, Sync, Copy);
static_assertions::assert_impl_all!(SizeInputs: Send, Sync, Copy);
static_assertions::assert_impl_all!(ContentInputs: Send, Sync, Copy);
static_assertions::assert_impl_all!(LayoutMetrics: Send, Sync, Copy);
static_assertions::assert_impl_all!(LayoutError: Send, Sync);
