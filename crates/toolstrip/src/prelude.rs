//! Prelude module for Toolstrip.
//!
//! ```ignore
//! use toolstrip::prelude::*;
//! ```

// ============================================================================
// Items
// ============================================================================

pub use crate::item::{AutoSizeOutcome, ParentContext, ToolItem};
pub use crate::kind::ItemKind;
pub use crate::measure::{CachedMeasurer, FixedCellMeasurer, FontSpec, TextMeasurer};

// ============================================================================
// Layout engine
// ============================================================================

pub use toolstrip_layout::{
    ContentAlignment, ContentLayout, DisplayStyle, ImageScaling, LayoutError, LayoutMetrics,
    Padding, Rect, Size, TextImageRelation,
};
