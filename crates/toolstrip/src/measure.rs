//! Text measurement seam.
//!
//! Layout only needs the pixel size of a string under a font. Real shaping
//! lives in the rendering backend, which plugs in through [`TextMeasurer`].

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use toolstrip_layout::Size;

/// Description of the font text is measured with.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Font family name.
    pub family: String,
    /// Point size.
    pub size_points: f32,
}

impl FontSpec {
    /// Create a font description.
    pub fn new(family: impl Into<String>, size_points: f32) -> Self {
        Self {
            family: family.into(),
            size_points,
        }
    }

    fn cache_key(&self) -> (String, u32) {
        (self.family.clone(), self.size_points.to_bits())
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Tahoma", 8.25)
    }
}

/// Measures the pixel size of a single line of text.
pub trait TextMeasurer: Send + Sync {
    /// Size of `text` rendered with `font`. Empty text measures as zero.
    fn measure(&self, text: &str, font: &FontSpec) -> Size;
}

/// Measurer with a fixed advance per character.
///
/// Advance and line height are given for a reference point size and scale
/// linearly with the font's size. Suited to monospace output and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedCellMeasurer {
    /// Horizontal advance per character at `reference_points`.
    pub advance: f32,
    /// Line height at `reference_points`.
    pub line_height: f32,
    /// Point size the advance and line height are given for.
    pub reference_points: f32,
}

impl FixedCellMeasurer {
    /// Create a measurer whose cells do not scale with the font size.
    pub fn new(advance: i32, line_height: i32) -> Self {
        Self {
            advance: advance as f32,
            line_height: line_height as f32,
            reference_points: 0.0,
        }
    }

    /// Scale cells with the font size relative to `reference_points`.
    pub fn scaled_from(mut self, reference_points: f32) -> Self {
        self.reference_points = reference_points;
        self
    }

    fn scale(&self, font: &FontSpec) -> f32 {
        if self.reference_points > 0.0 {
            font.size_points / self.reference_points
        } else {
            1.0
        }
    }
}

impl Default for FixedCellMeasurer {
    fn default() -> Self {
        Self::new(6, 13).scaled_from(8.25)
    }
}

impl TextMeasurer for FixedCellMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let scale = self.scale(font);
        let columns = text.chars().count() as f32;
        Size::new(
            (columns * self.advance * scale).ceil() as i32,
            (self.line_height * scale).ceil() as i32,
        )
    }
}

/// Memoizes the results of another measurer.
///
/// Items re-measure their text on every property change; the cache makes
/// repeated measurement of unchanged text free. It holds at most
/// [`capacity`](Self::capacity) entries and evicts the least recently used.
pub struct CachedMeasurer<M> {
    inner: M,
    cache: Mutex<LruCache<(String, String, u32), Size>>,
}

impl<M: TextMeasurer> CachedMeasurer<M> {
    /// Entries kept by [`new`](Self::new).
    pub const DEFAULT_CAPACITY: usize = 1024;

    /// Wrap a measurer with the default capacity.
    pub fn new(inner: M) -> Self {
        Self::with_capacity(inner, Self::DEFAULT_CAPACITY)
    }

    /// Wrap a measurer, keeping at most `capacity` entries (at least one).
    pub fn with_capacity(inner: M, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Maximum number of cached measurements.
    pub fn capacity(&self) -> usize {
        self.cache.lock().cap().get()
    }

    /// Number of cached measurements.
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Whether nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Drop all cached measurements, e.g. after a font change.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }

    /// The wrapped measurer.
    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: TextMeasurer> TextMeasurer for CachedMeasurer<M> {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        let (family, points) = font.cache_key();
        let key = (text.to_owned(), family, points);

        if let Some(size) = self.cache.lock().get(&key).copied() {
            return size;
        }

        // Measure outside the lock; a racing thread computes the same value.
        let size = self.inner.measure(text, font);
        self.cache.lock().put(key, size);
        size
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct CountingMeasurer {
        calls: AtomicUsize,
    }

    impl TextMeasurer for CountingMeasurer {
        fn measure(&self, text: &str, _font: &FontSpec) -> Size {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Size::new(text.len() as i32, 10)
        }
    }

    #[test]
    fn test_fixed_cell_measure() {
        let m = FixedCellMeasurer::new(7, 12);
        assert_eq!(m.measure("abc", &FontSpec::default()), Size::new(21, 12));
        assert_eq!(m.measure("", &FontSpec::default()), Size::ZERO);
    }

    #[test]
    fn test_fixed_cell_scales_with_font() {
        let m = FixedCellMeasurer::new(6, 12).scaled_from(8.0);
        let big = FontSpec::new("Tahoma", 16.0);
        assert_eq!(m.measure("ab", &big), Size::new(24, 24));
    }

    #[test]
    fn test_default_measurer_matches_default_font() {
        let m = FixedCellMeasurer::default();
        assert_eq!(m.measure("Save", &FontSpec::default()), Size::new(24, 13));
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let m = FixedCellMeasurer::new(5, 10);
        assert_eq!(m.measure("héllo", &FontSpec::default()).width, 25);
    }

    #[test]
    fn test_cache_hits() {
        let cached = CachedMeasurer::new(CountingMeasurer {
            calls: AtomicUsize::new(0),
        });
        let font = FontSpec::default();

        assert_eq!(cached.measure("Open", &font), Size::new(4, 10));
        assert_eq!(cached.measure("Open", &font), Size::new(4, 10));
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 1);

        // Different font is a different entry.
        cached.measure("Open", &FontSpec::new("Tahoma", 12.0));
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 2);
        assert_eq!(cached.len(), 2);

        cached.clear();
        assert!(cached.is_empty());
    }

    #[test]
    fn test_cache_is_bounded() {
        let cached = CachedMeasurer::with_capacity(FixedCellMeasurer::new(6, 13), 64);
        let font = FontSpec::default();

        for i in 0..1000 {
            cached.measure(&format!("item {i}"), &font);
        }
        assert_eq!(cached.capacity(), 64);
        assert_eq!(cached.len(), 64);
        assert_eq!(CachedMeasurer::new(FixedCellMeasurer::default()).capacity(), 1024);
    }

    #[test]
    fn test_cache_evicts_least_recently_used() {
        let cached = CachedMeasurer::with_capacity(
            CountingMeasurer {
                calls: AtomicUsize::new(0),
            },
            2,
        );
        let font = FontSpec::default();

        cached.measure("Cut", &font);
        cached.measure("Copy", &font);
        // Touch "Cut" so "Copy" becomes the eviction candidate.
        cached.measure("Cut", &font);
        cached.measure("Paste", &font);
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 3);

        cached.measure("Cut", &font);
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 3);
        cached.measure("Copy", &font);
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_zero_capacity_keeps_one_entry() {
        let cached = CachedMeasurer::with_capacity(FixedCellMeasurer::default(), 0);
        cached.measure("a", &FontSpec::default());
        cached.measure("b", &FontSpec::default());
        assert_eq!(cached.capacity(), 1);
        assert_eq!(cached.len(), 1);
    }
}
