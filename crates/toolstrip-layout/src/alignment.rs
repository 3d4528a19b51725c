//! Nine-way content alignment and placement of content inside a rectangle.
//!
//! [`align_in_rect`] is the leaf utility of the engine: both the composite
//! layouter and the sequential placement use it to anchor text and images.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::geometry::{Rect, Size};
use crate::logging::targets;

/// Horizontal component of a [`ContentAlignment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
}

/// Vertical component of a [`ContentAlignment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    Top,
    Middle,
    Bottom,
}

/// Anchor of content within a rectangle on a 3×3 grid.
///
/// The raw values follow the classic flag encoding, one bit per cell, so
/// values coming from serialized designer data can be validated with
/// [`TryFrom<u32>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u32)]
pub enum ContentAlignment {
    TopLeft = 0x001,
    TopCenter = 0x002,
    TopRight = 0x004,
    MiddleLeft = 0x010,
    #[default]
    MiddleCenter = 0x020,
    MiddleRight = 0x040,
    BottomLeft = 0x100,
    BottomCenter = 0x200,
    BottomRight = 0x400,
}

impl ContentAlignment {
    /// All nine alignments, row by row.
    pub const ALL: [ContentAlignment; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::MiddleLeft,
        Self::MiddleCenter,
        Self::MiddleRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Compose an alignment from its two axes.
    pub const fn from_parts(vertical: VerticalAlignment, horizontal: HorizontalAlignment) -> Self {
        use HorizontalAlignment as H;
        use VerticalAlignment as V;
        match (vertical, horizontal) {
            (V::Top, H::Left) => Self::TopLeft,
            (V::Top, H::Center) => Self::TopCenter,
            (V::Top, H::Right) => Self::TopRight,
            (V::Middle, H::Left) => Self::MiddleLeft,
            (V::Middle, H::Center) => Self::MiddleCenter,
            (V::Middle, H::Right) => Self::MiddleRight,
            (V::Bottom, H::Left) => Self::BottomLeft,
            (V::Bottom, H::Center) => Self::BottomCenter,
            (V::Bottom, H::Right) => Self::BottomRight,
        }
    }

    /// The horizontal component, ignoring the vertical one.
    pub const fn horizontal(self) -> HorizontalAlignment {
        match self {
            Self::TopLeft | Self::MiddleLeft | Self::BottomLeft => HorizontalAlignment::Left,
            Self::TopCenter | Self::MiddleCenter | Self::BottomCenter => {
                HorizontalAlignment::Center
            }
            Self::TopRight | Self::MiddleRight | Self::BottomRight => HorizontalAlignment::Right,
        }
    }

    /// The vertical component, ignoring the horizontal one.
    pub const fn vertical(self) -> VerticalAlignment {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => VerticalAlignment::Top,
            Self::MiddleLeft | Self::MiddleCenter | Self::MiddleRight => VerticalAlignment::Middle,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => VerticalAlignment::Bottom,
        }
    }

    /// The raw flag value.
    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for ContentAlignment {
    type Error = LayoutError;

    fn try_from(raw: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|align| align.bits() == raw)
            .ok_or(LayoutError::InvalidAlignment(raw))
    }
}

impl FromStr for ContentAlignment {
    type Err = LayoutError;

    /// Accepts `middle-center`, `middle_center` and `MiddleCenter` spellings.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let align = match normalized.as_str() {
            "topleft" => Self::TopLeft,
            "topcenter" => Self::TopCenter,
            "topright" => Self::TopRight,
            "middleleft" => Self::MiddleLeft,
            "middlecenter" => Self::MiddleCenter,
            "middleright" => Self::MiddleRight,
            "bottomleft" => Self::BottomLeft,
            "bottomcenter" => Self::BottomCenter,
            "bottomright" => Self::BottomRight,
            _ => return Err(LayoutError::unknown_variant("content alignment", s)),
        };
        Ok(align)
    }
}

/// Place content of size `inner` inside `outer` at the given anchor.
///
/// The returned rectangle never exceeds `outer` in width or height, even
/// when the content is nominally larger. Its position is computed from the
/// unclamped content size, so oversized right/bottom anchored content
/// starts before the outer edge.
pub fn align_in_rect(outer: Rect, inner: Size, align: ContentAlignment) -> Rect {
    let x = match align.horizontal() {
        HorizontalAlignment::Left => outer.left(),
        HorizontalAlignment::Center => {
            (outer.x + (outer.width - inner.width) / 2).max(outer.left())
        }
        HorizontalAlignment::Right => outer.right() - inner.width,
    };

    let y = match align.vertical() {
        VerticalAlignment::Top => outer.top(),
        VerticalAlignment::Middle => outer.y + (outer.height - inner.height) / 2,
        VerticalAlignment::Bottom => outer.bottom() - inner.height,
    };

    clamped(x, y, outer, inner)
}

/// Like [`align_in_rect`], for an alignment that has not been validated.
///
/// Values outside the nine defined alignments are placed at the absolute
/// origin `(0, 0)` with the same clamped size. This never fails.
pub fn align_in_rect_raw(outer: Rect, inner: Size, raw: u32) -> Rect {
    match ContentAlignment::try_from(raw) {
        Ok(align) => align_in_rect(outer, inner, align),
        Err(_) => {
            tracing::warn!(
                target: targets::ALIGN,
                raw,
                "unrecognized content alignment, placing at origin"
            );
            clamped(0, 0, outer, inner)
        }
    }
}

#[inline]
fn clamped(x: i32, y: i32, outer: Rect, inner: Size) -> Rect {
    Rect::new(
        x,
        y,
        inner.width.min(outer.width),
        inner.height.min(outer.height),
    )
}
