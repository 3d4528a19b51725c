//! Layout state of a single tool item.
//!
//! [`ToolItem`] holds the properties that influence layout and keeps its
//! bounds in sync with its content. Every property change re-measures the
//! text and recomputes the preferred size; the returned [`AutoSizeOutcome`]
//! tells the owner whether the strip must lay its items out again.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use toolstrip::{AutoSizeOutcome, FixedCellMeasurer, ItemKind, ParentContext, ToolItem};
//! use toolstrip_layout::{DisplayStyle, Size};
//!
//! let mut item = ToolItem::new(Arc::new(FixedCellMeasurer::new(6, 13)))
//!     .with_kind(ItemKind::Button)
//!     .with_display_style(DisplayStyle::Text)
//!     .with_parent(ParentContext::default());
//!
//! let outcome = item.set_text("Save");
//! assert_eq!(
//!     outcome,
//!     AutoSizeOutcome::Resized { size: Size::new(28, 17), parent_layout_needed: true }
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use toolstrip_layout::{
    ContentAlignment, ContentInputs, ContentLayout, DisplayStyle, ImageScaling, LayoutMetrics,
    Padding, Rect, Result, Size, SizeInputs, TextImageRelation, layout_text_and_image,
    preferred_size,
};

use crate::kind::ItemKind;
use crate::logging::targets;
use crate::measure::{FontSpec, TextMeasurer};

/// What the owning strip provides to its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentContext {
    /// Size images are scaled to under [`ImageScaling::SizeToFit`].
    pub image_scaling_size: Size,
}

impl Default for ParentContext {
    fn default() -> Self {
        Self {
            image_scaling_size: Size::new(16, 16),
        }
    }
}

/// Result of recomputing an item's size after a property change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoSizeOutcome {
    /// The item's size did not change, or the item does not auto-size.
    Unchanged,
    /// The item took a new size.
    Resized {
        size: Size,
        /// Whether an owning strip must lay out its items again.
        parent_layout_needed: bool,
    },
}

impl AutoSizeOutcome {
    /// Whether the item's size changed.
    pub fn is_resized(self) -> bool {
        matches!(self, Self::Resized { .. })
    }

    /// Whether the owning strip must lay out its items again.
    pub fn parent_layout_needed(self) -> bool {
        matches!(
            self,
            Self::Resized {
                parent_layout_needed: true,
                ..
            }
        )
    }
}

/// Layout-relevant state of a toolbar item.
pub struct ToolItem {
    kind: ItemKind,
    text: String,
    font: FontSpec,
    /// Size of `text` measured with `font`.
    text_size: Size,
    /// Native size of the image, if any.
    image: Option<Size>,
    display_style: DisplayStyle,
    image_scaling: ImageScaling,
    relation: TextImageRelation,
    text_align: ContentAlignment,
    image_align: ContentAlignment,
    padding: Padding,
    auto_size: bool,
    explicit_size: Size,
    bounds: Rect,
    parent: Option<ParentContext>,
    metrics: LayoutMetrics,
    measurer: Arc<dyn TextMeasurer>,
}

impl ToolItem {
    /// Create an empty item with default metrics.
    pub fn new(measurer: Arc<dyn TextMeasurer>) -> Self {
        Self::with_metrics(measurer, LayoutMetrics::default())
    }

    /// Create an empty item with the given metrics.
    pub fn with_metrics(measurer: Arc<dyn TextMeasurer>, metrics: LayoutMetrics) -> Self {
        Self {
            kind: ItemKind::default(),
            text: String::new(),
            font: FontSpec::default(),
            text_size: Size::ZERO,
            image: None,
            display_style: DisplayStyle::default(),
            image_scaling: ImageScaling::default(),
            relation: TextImageRelation::default(),
            text_align: ContentAlignment::default(),
            image_align: ContentAlignment::default(),
            padding: Padding::ZERO,
            auto_size: true,
            explicit_size: metrics.default_size,
            bounds: Rect::from_size(metrics.default_size),
            parent: None,
            metrics,
            measurer,
        }
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Get the item's kind.
    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    /// Set the item's kind.
    pub fn set_kind(&mut self, kind: ItemKind) -> AutoSizeOutcome {
        self.kind = kind;
        self.calculate_auto_size()
    }

    /// Set the kind using builder pattern.
    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.set_kind(kind);
        self
    }

    /// Get the item's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the item's text.
    pub fn set_text(&mut self, text: impl Into<String>) -> AutoSizeOutcome {
        self.text = text.into();
        self.calculate_auto_size()
    }

    /// Set the text using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    /// Get the font text is measured with.
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// Set the font.
    pub fn set_font(&mut self, font: FontSpec) -> AutoSizeOutcome {
        self.font = font;
        self.calculate_auto_size()
    }

    /// Set the font using builder pattern.
    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.set_font(font);
        self
    }

    /// Measured size of the current text.
    pub fn text_size(&self) -> Size {
        self.text_size
    }

    /// Native size of the image, if the item has one.
    pub fn image(&self) -> Option<Size> {
        self.image
    }

    /// Set or clear the image by its native size.
    pub fn set_image(&mut self, image: Option<Size>) -> AutoSizeOutcome {
        self.image = image;
        self.calculate_auto_size()
    }

    /// Set the image using builder pattern.
    pub fn with_image(mut self, image: Size) -> Self {
        self.set_image(Some(image));
        self
    }

    // =========================================================================
    // Layout policy
    // =========================================================================

    /// Get the display style.
    pub fn display_style(&self) -> DisplayStyle {
        self.display_style
    }

    /// Set the display style.
    pub fn set_display_style(&mut self, style: DisplayStyle) -> AutoSizeOutcome {
        if self.display_style == style {
            return AutoSizeOutcome::Unchanged;
        }
        self.display_style = style;
        self.calculate_auto_size()
    }

    /// Set the display style using builder pattern.
    pub fn with_display_style(mut self, style: DisplayStyle) -> Self {
        self.set_display_style(style);
        self
    }

    /// Get the image scaling mode.
    pub fn image_scaling(&self) -> ImageScaling {
        self.image_scaling
    }

    /// Set the image scaling mode.
    pub fn set_image_scaling(&mut self, scaling: ImageScaling) -> AutoSizeOutcome {
        if self.image_scaling == scaling {
            return AutoSizeOutcome::Unchanged;
        }
        self.image_scaling = scaling;
        self.calculate_auto_size()
    }

    /// Set the image scaling mode using builder pattern.
    pub fn with_image_scaling(mut self, scaling: ImageScaling) -> Self {
        self.set_image_scaling(scaling);
        self
    }

    /// Get the text/image relation.
    pub fn text_image_relation(&self) -> TextImageRelation {
        self.relation
    }

    /// Set the text/image relation.
    pub fn set_text_image_relation(&mut self, relation: TextImageRelation) -> AutoSizeOutcome {
        if self.relation == relation {
            return AutoSizeOutcome::Unchanged;
        }
        self.relation = relation;
        self.calculate_auto_size()
    }

    /// Set the text/image relation using builder pattern.
    pub fn with_text_image_relation(mut self, relation: TextImageRelation) -> Self {
        self.set_text_image_relation(relation);
        self
    }

    /// Get the text alignment.
    pub fn text_align(&self) -> ContentAlignment {
        self.text_align
    }

    /// Set the text alignment. Alignment never affects the item's size.
    pub fn set_text_align(&mut self, align: ContentAlignment) {
        self.text_align = align;
    }

    /// Set the text alignment from a raw value, rejecting unknown values.
    pub fn set_text_align_raw(&mut self, raw: u32) -> Result<()> {
        self.text_align = ContentAlignment::try_from(raw)?;
        Ok(())
    }

    /// Set the text alignment using builder pattern.
    pub fn with_text_align(mut self, align: ContentAlignment) -> Self {
        self.text_align = align;
        self
    }

    /// Get the image alignment.
    pub fn image_align(&self) -> ContentAlignment {
        self.image_align
    }

    /// Set the image alignment. Alignment never affects the item's size.
    pub fn set_image_align(&mut self, align: ContentAlignment) {
        self.image_align = align;
    }

    /// Set the image alignment from a raw value, rejecting unknown values.
    pub fn set_image_align_raw(&mut self, raw: u32) -> Result<()> {
        self.image_align = ContentAlignment::try_from(raw)?;
        Ok(())
    }

    /// Set the image alignment using builder pattern.
    pub fn with_image_align(mut self, align: ContentAlignment) -> Self {
        self.image_align = align;
        self
    }

    /// Get the padding.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Set the padding.
    pub fn set_padding(&mut self, padding: Padding) -> AutoSizeOutcome {
        self.padding = padding;
        self.calculate_auto_size()
    }

    /// Set the padding using builder pattern.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.set_padding(padding);
        self
    }

    /// Get the layout metrics.
    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Replace the layout metrics.
    pub fn set_metrics(&mut self, metrics: LayoutMetrics) -> AutoSizeOutcome {
        self.metrics = metrics;
        self.calculate_auto_size()
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Whether the item's size follows its content.
    pub fn auto_size(&self) -> bool {
        self.auto_size
    }

    /// Enable or disable auto-sizing.
    pub fn set_auto_size(&mut self, auto_size: bool) -> AutoSizeOutcome {
        self.auto_size = auto_size;
        self.calculate_auto_size()
    }

    /// Set auto-sizing using builder pattern.
    pub fn with_auto_size(mut self, auto_size: bool) -> Self {
        self.set_auto_size(auto_size);
        self
    }

    /// Size assigned by the owner, used when auto-sizing is off.
    pub fn explicit_size(&self) -> Size {
        self.explicit_size
    }

    /// The item's bounds in its owner's coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The item's current size.
    pub fn size(&self) -> Size {
        self.bounds.size()
    }

    /// Move the item within its owner.
    pub fn set_location(&mut self, x: i32, y: i32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    /// Assign an explicit width.
    pub fn set_width(&mut self, width: i32) -> AutoSizeOutcome {
        self.bounds.width = width;
        self.explicit_size.width = width;
        self.calculate_auto_size()
    }

    /// Assign an explicit height.
    pub fn set_height(&mut self, height: i32) -> AutoSizeOutcome {
        self.bounds.height = height;
        self.explicit_size.height = height;
        self.calculate_auto_size()
    }

    /// Assign an explicit size.
    pub fn set_size(&mut self, size: Size) -> AutoSizeOutcome {
        self.bounds.width = size.width;
        self.bounds.height = size.height;
        self.explicit_size = size;
        self.calculate_auto_size()
    }

    /// The owning strip, if the item is attached to one.
    pub fn parent(&self) -> Option<ParentContext> {
        self.parent
    }

    /// Attach the item to a strip or detach it.
    pub fn set_parent(&mut self, parent: Option<ParentContext>) -> AutoSizeOutcome {
        self.parent = parent;
        self.calculate_auto_size()
    }

    /// Attach the item to a strip using builder pattern.
    pub fn with_parent(mut self, parent: ParentContext) -> Self {
        self.set_parent(Some(parent));
        self
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Size the image is laid out at.
    ///
    /// Zero when there is no image, or when the image scales to fit but the
    /// item has no owning strip to provide the target size.
    pub fn layout_image_size(&self) -> Size {
        match (self.image, self.image_scaling, self.parent) {
            (None, _, _) => Size::ZERO,
            (Some(image), ImageScaling::None, _) => image,
            (Some(_), ImageScaling::SizeToFit, None) => Size::ZERO,
            (Some(_), ImageScaling::SizeToFit, Some(parent)) => parent.image_scaling_size,
        }
    }

    /// Inputs for the size calculator reflecting the current state.
    pub fn size_inputs(&self) -> SizeInputs {
        SizeInputs {
            display_style: self.display_style,
            text_size: self.text_size,
            image_size: self.image,
            image_scaling: self.image_scaling,
            scaled_image_size: self.parent.map(|p| p.image_scaling_size),
            relation: self.relation,
            padding: self.padding,
            has_border: self.kind.has_border(),
            trailing_width: self.kind.trailing_width(&self.metrics),
            auto_size: self.auto_size,
            explicit_size: self.explicit_size,
        }
    }

    /// The size the item would like to have.
    pub fn preferred_size(&self) -> Size {
        preferred_size(&self.size_inputs(), &self.metrics)
    }

    /// Area inside the item where text and image are drawn.
    pub fn content_rectangle(&self) -> Rect {
        self.kind.content_rect(self.bounds.size(), &self.metrics)
    }

    /// Text and image rectangles inside [`content_rectangle`](Self::content_rectangle).
    pub fn text_and_image_rects(&self) -> ContentLayout {
        self.text_and_image_rects_in(self.content_rectangle())
    }

    /// Text and image rectangles inside an arbitrary content rectangle.
    pub fn text_and_image_rects_in(&self, content: Rect) -> ContentLayout {
        let inputs = ContentInputs {
            display_style: self.display_style,
            has_text: !self.text.is_empty(),
            text_size: self.text_size,
            text_align: self.text_align,
            image_size: self.image.map(|_| self.layout_image_size()),
            image_align: self.image_align,
            relation: self.relation,
        };
        layout_text_and_image(content, &inputs, &self.metrics)
    }

    /// Re-measure the text and resize the item to its preferred size.
    pub fn calculate_auto_size(&mut self) -> AutoSizeOutcome {
        self.text_size = self.measurer.measure(&self.text, &self.font);

        if !self.auto_size || !self.kind.auto_sizes() {
            return AutoSizeOutcome::Unchanged;
        }

        let size = self.preferred_size();
        if size == self.bounds.size() {
            return AutoSizeOutcome::Unchanged;
        }

        self.bounds.width = size.width;
        self.bounds.height = size.height;
        let parent_layout_needed = self.parent.is_some();

        tracing::debug!(
            target: targets::ITEM,
            text = %self.text,
            width = size.width,
            height = size.height,
            parent_layout_needed,
            "item resized"
        );

        AutoSizeOutcome::Resized {
            size,
            parent_layout_needed,
        }
    }
}

impl fmt::Debug for ToolItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolItem")
            .field("kind", &self.kind)
            .field("text", &self.text)
            .field("text_size", &self.text_size)
            .field("image", &self.image)
            .field("display_style", &self.display_style)
            .field("relation", &self.relation)
            .field("bounds", &self.bounds)
            .field("auto_size", &self.auto_size)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(ToolItem: Send, Sync);
