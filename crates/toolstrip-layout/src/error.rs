//! Error types for the layout engine.
//!
//! The layout functions themselves are total and never fail. Errors only
//! arise at the boundaries: validating raw enum values, parsing names, and
//! loading [`LayoutMetrics`](crate::LayoutMetrics) from configuration.

use std::path::PathBuf;

/// Result type alias for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors that can occur at the layout boundary.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// A raw content alignment value outside the nine defined values.
    #[error("invalid content alignment value {0:#x}")]
    InvalidAlignment(u32),

    /// A name that does not match any variant of an enum.
    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// Layout metrics could not be parsed.
    #[error("invalid layout metrics: {0}")]
    Config(#[from] toml::de::Error),

    /// Layout metrics could not be serialized.
    #[error("failed to serialize layout metrics: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A metric holds a value the engine cannot work with.
    #[error("invalid value {value} for metric '{field}'")]
    InvalidMetrics { field: &'static str, value: i32 },

    /// Reading a metrics file failed.
    #[error("failed to read layout metrics '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LayoutError {
    /// Create an unknown-variant error.
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
