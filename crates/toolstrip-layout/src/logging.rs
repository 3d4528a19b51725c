//! Tracing targets for the layout engine.
//!
//! The engine emits `trace` events for every computed result and a `warn`
//! event when a raw alignment value falls back to the origin. Install a
//! subscriber in your application to see them:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("toolstrip_layout=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Content alignment.
    pub const ALIGN: &str = "toolstrip_layout::align";
    /// Preferred size computation.
    pub const SIZE: &str = "toolstrip_layout::size";
    /// Text and image placement.
    pub const COMPOSITE: &str = "toolstrip_layout::composite";
    /// Metrics configuration loading.
    pub const CONFIG: &str = "toolstrip_layout::config";
}
