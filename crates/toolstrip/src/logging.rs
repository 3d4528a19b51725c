//! Tracing targets for tool items.
//!
//! Engine targets live in [`toolstrip_layout::logging::targets`].

/// Target names for log filtering.
pub mod targets {
    /// Tool item state changes.
    pub const ITEM: &str = "toolstrip::item";
}
