//! Policy enums that select which layout branch runs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Which parts of an item are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayStyle {
    /// Neither text nor image.
    None,
    /// Text only.
    Text,
    /// Image only.
    Image,
    /// Both text and image, arranged by a [`TextImageRelation`].
    #[default]
    ImageAndText,
}

impl DisplayStyle {
    /// Whether text takes part in layout under this style.
    #[inline]
    pub fn shows_text(self) -> bool {
        matches!(self, Self::Text | Self::ImageAndText)
    }

    /// Whether the image takes part in layout under this style.
    #[inline]
    pub fn shows_image(self) -> bool {
        matches!(self, Self::Image | Self::ImageAndText)
    }
}

/// How an item's image is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageScaling {
    /// Draw the image at its native size.
    None,
    /// Resize the image to the size provided by the owning strip.
    #[default]
    SizeToFit,
}

/// Spatial relationship between text and image when both are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextImageRelation {
    /// Text and image share the full content area and may intersect.
    Overlay,
    /// Image stacked on top of the text.
    ImageAboveText,
    /// Text stacked on top of the image.
    TextAboveImage,
    /// Image to the left of the text.
    #[default]
    ImageBeforeText,
    /// Text to the left of the image.
    TextBeforeImage,
}

impl TextImageRelation {
    /// Whether the relation stacks the two elements vertically.
    #[inline]
    pub fn is_stacked(self) -> bool {
        matches!(self, Self::ImageAboveText | Self::TextAboveImage)
    }

    /// Whether the relation places the two elements side by side.
    #[inline]
    pub fn is_side_by_side(self) -> bool {
        matches!(self, Self::ImageBeforeText | Self::TextBeforeImage)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for DisplayStyle {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "none" => Ok(Self::None),
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "imageandtext" => Ok(Self::ImageAndText),
            _ => Err(LayoutError::unknown_variant("display style", s)),
        }
    }
}

impl FromStr for ImageScaling {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "none" => Ok(Self::None),
            "sizetofit" => Ok(Self::SizeToFit),
            _ => Err(LayoutError::unknown_variant("image scaling", s)),
        }
    }
}

impl FromStr for TextImageRelation {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "overlay" => Ok(Self::Overlay),
            "imageabovetext" => Ok(Self::ImageAboveText),
            "textaboveimage" => Ok(Self::TextAboveImage),
            "imagebeforetext" => Ok(Self::ImageBeforeText),
            "textbeforeimage" => Ok(Self::TextBeforeImage),
            _ => Err(LayoutError::unknown_variant("text/image relation", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(DisplayStyle::default(), DisplayStyle::ImageAndText);
        assert_eq!(ImageScaling::default(), ImageScaling::SizeToFit);
        assert_eq!(TextImageRelation::default(), TextImageRelation::ImageBeforeText);
    }

    #[test]
    fn test_display_style_parts() {
        assert!(!DisplayStyle::None.shows_text());
        assert!(!DisplayStyle::None.shows_image());
        assert!(DisplayStyle::Text.shows_text());
        assert!(!DisplayStyle::Text.shows_image());
        assert!(DisplayStyle::ImageAndText.shows_text());
        assert!(DisplayStyle::ImageAndText.shows_image());
    }

    #[test]
    fn test_relation_orientation() {
        use crate::style::TextImageRelation::*;

        assert!(ImageAboveText.is_stacked());
        assert!(TextAboveImage.is_stacked());
        assert!(ImageBeforeText.is_side_by_side());
        assert!(TextBeforeImage.is_side_by_side());
        assert!(!Overlay.is_stacked());
        assert!(!Overlay.is_side_by_side());
        assert!(!ImageAboveText.is_side_by_side());
        assert!(!TextBeforeImage.is_stacked());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("image-and-text".parse::<DisplayStyle>().unwrap(), DisplayStyle::ImageAndText);
        assert_eq!("SizeToFit".parse::<ImageScaling>().unwrap(), ImageScaling::SizeToFit);
        assert_eq!(
            "text_before_image".parse::<TextImageRelation>().unwrap(),
            TextImageRelation::TextBeforeImage
        );

        let err = "sideways".parse::<TextImageRelation>().unwrap_err();
        assert_eq!(err.to_string(), "unknown text/image relation 'sideways'");
    }
}
