//! Fixed measurements of the reference toolbar look.
//!
//! The defaults reproduce the classic toolbar item: a 23×23 default size, a
//! 2px border on every side, a 9px drop-down arrow and a 4px inset applied to
//! the text band of stacked layouts. They can be overridden from TOML:
//!
//! ```toml
//! border_width = 1
//! drop_down_arrow_width = 11
//!
//! [default_size]
//! width = 24
//! height = 24
//! ```
//!
//! Missing keys keep their default values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::geometry::Size;
use crate::logging::targets;

/// Constants used by the size calculator and composite layouter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutMetrics {
    /// Border thickness on each side of bordered items.
    pub border_width: i32,
    /// Extra width reserved for a drop-down arrow glyph.
    pub drop_down_arrow_width: i32,
    /// Amount subtracted from the text height for stacked text bands.
    pub text_band_inset: i32,
    /// Size used when an item has nothing to show.
    pub default_size: Size,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            border_width: 2,
            drop_down_arrow_width: 9,
            text_band_inset: 4,
            default_size: Size::new(23, 23),
        }
    }
}

impl LayoutMetrics {
    /// Parse metrics from a TOML document and validate them.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let metrics: Self = toml::from_str(s)?;
        metrics.validate()?;
        Ok(metrics)
    }

    /// Load metrics from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| LayoutError::io(path, e))?;
        let metrics = Self::from_toml_str(&contents)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?metrics, "loaded layout metrics");
        Ok(metrics)
    }

    /// Serialize the metrics to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Total border added to each axis of a bordered item.
    #[inline]
    pub fn border_total(&self) -> i32 {
        self.border_width * 2
    }

    /// Reject negative measurements.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("default_size.width", self.default_size.width),
            ("default_size.height", self.default_size.height),
            ("border_width", self.border_width),
            ("drop_down_arrow_width", self.drop_down_arrow_width),
            ("text_band_inset", self.text_band_inset),
        ];
        for (field, value) in fields {
            if value < 0 {
                return Err(LayoutError::InvalidMetrics { field, value });
            }
        }
        Ok(())
    }
}
