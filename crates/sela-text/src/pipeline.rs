//! The reorder -> shape pipeline and its result caches.

use crate::bidi::{BidiEngine, ParagraphDirection, UnicodeBidiEngine};
use crate::cache::{CacheStats, ResultCache};
use crate::script::contains_arabic_script;
use crate::shaping::{GlyphShaper, HarfrustShaper, Segment};
use crate::{Outcome, UnchangedReason, WideText};

/// Cache settings applied at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    pub cache_enabled: bool,
    /// Per-cache entry bound; 0 means unbounded.
    pub max_cache_size: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            max_cache_size: 1000,
        }
    }
}

/// Prepares logical-order text for display: bidi reordering followed by
/// Arabic shaping, with bounded caches in front.
///
/// No method fails. Anything that cannot be processed comes back as it
/// went in; the `*_detailed` variants report why.
///
/// The pipeline is not internally synchronised. Share one instance behind
/// a lock or give each thread its own.
pub struct Pipeline<S: GlyphShaper = HarfrustShaper, B: BidiEngine = UnicodeBidiEngine> {
    bidi: B,
    shaper: S,
    initialized: bool,
    cache_enabled: bool,
    /// Reorder-stage results, keyed by raw input.
    reorder_cache: ResultCache,
    /// Full pipeline results, keyed by raw input. Hits/misses counted here.
    full_cache: ResultCache,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::with_options(PipelineOptions::default())
    }

    pub fn with_options(options: PipelineOptions) -> Self {
        Self::with_engines(UnicodeBidiEngine, HarfrustShaper::new(), options)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GlyphShaper, B: BidiEngine> Pipeline<S, B> {
    pub fn with_engines(bidi: B, shaper: S, options: PipelineOptions) -> Self {
        Self {
            bidi,
            shaper,
            initialized: false,
            cache_enabled: options.cache_enabled,
            reorder_cache: ResultCache::new(options.max_cache_size),
            full_cache: ResultCache::new(options.max_cache_size),
        }
    }

    /// Bind the shaping session to `font`.
    ///
    /// Returns `true` without doing anything once initialized. Returns
    /// `false`, leaving state untouched, when `font` is `None` or the
    /// engine rejects it.
    pub fn initialize(&mut self, font: Option<&S::Font>) -> bool {
        if self.initialized {
            return true;
        }
        let Some(font) = font else {
            log::warn!("initialize called without a font");
            return false;
        };
        self.bind(font)
    }

    /// Replace the bound font even if already initialized.
    ///
    /// Cached results were produced with the old font, so both caches are
    /// cleared on success.
    pub fn rebind(&mut self, font: &S::Font) -> bool {
        if !self.bind(font) {
            return false;
        }
        self.clear_cache();
        true
    }

    fn bind(&mut self, font: &S::Font) -> bool {
        match self.shaper.bind(font) {
            Ok(()) => {
                self.initialized = true;
                true
            }
            Err(err) => {
                log::warn!("font bind failed: {err}");
                false
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn reorder_bidi(&mut self, text: &WideText) -> WideText {
        self.reorder_bidi_detailed(text).into_text()
    }

    pub fn reorder_bidi_detailed(&mut self, text: &WideText) -> Outcome {
        if text.is_empty() {
            return Outcome::unchanged(text, UnchangedReason::Empty);
        }
        if self.cache_enabled {
            if let Some(cached) = self.reorder_cache.get(text) {
                return Outcome::Processed(cached);
            }
        }

        let direction = ParagraphDirection::for_text(text);
        let reordered = match self.bidi.reorder(text, direction) {
            Ok(reordered) => reordered,
            Err(err) => {
                log::debug!("bidi engine failed, leaving text in logical order: {err}");
                return Outcome::unchanged(text, UnchangedReason::Engine(err));
            }
        };
        if reordered.max_level == 0 {
            return Outcome::unchanged(text, UnchangedReason::NoReorderingNeeded);
        }

        if self.cache_enabled {
            self.reorder_cache.put(text.clone(), reordered.visual.clone());
        }
        Outcome::Processed(reordered.visual)
    }

    pub fn shape(&mut self, text: &WideText) -> WideText {
        self.shape_detailed(text).into_text()
    }

    /// Shape `text` as right-to-left Arabic.
    ///
    /// Output units are the engine's glyph ids reinterpreted as
    /// characters. That is only meaningful for fonts whose glyph ids track
    /// codepoints; rendering-accurate output needs a glyph renderer.
    pub fn shape_detailed(&mut self, text: &WideText) -> Outcome {
        if text.is_empty() {
            return Outcome::unchanged(text, UnchangedReason::Empty);
        }
        if !self.initialized || !self.shaper.is_bound() {
            return Outcome::unchanged(text, UnchangedReason::NotInitialized);
        }
        // Shaping has a fixed per-call cost; skip it for non-Arabic text.
        if !contains_arabic_script(text) {
            return Outcome::unchanged(text, UnchangedReason::NoArabicScript);
        }

        match self.shaper.shape(text, &Segment::arabic()) {
            Ok(glyphs) if glyphs.is_empty() => {
                Outcome::unchanged(text, UnchangedReason::EmptyShapeResult)
            }
            Ok(glyphs) => Outcome::Processed(WideText::from_units(glyphs)),
            Err(err) => {
                log::debug!("shaping failed, leaving text unshaped: {err}");
                Outcome::unchanged(text, UnchangedReason::Engine(err))
            }
        }
    }

    pub fn process(&mut self, text: &WideText) -> WideText {
        self.process_detailed(text).into_text()
    }

    /// Reorder then shape, caching the final result.
    ///
    /// A full-pipeline cache hit is reported as `Processed`, whatever the
    /// outcome of the stages was when it was computed.
    pub fn process_detailed(&mut self, text: &WideText) -> Outcome {
        if text.is_empty() {
            return Outcome::unchanged(text, UnchangedReason::Empty);
        }
        if !contains_arabic_script(text) {
            return Outcome::unchanged(text, UnchangedReason::NoArabicScript);
        }

        if self.cache_enabled {
            if let Some(cached) = self.full_cache.get(text) {
                self.full_cache.record_hit();
                return Outcome::Processed(cached);
            }
            self.full_cache.record_miss();
        }

        let reordered = self.reorder_bidi_detailed(text);
        let shaped = self.shape_detailed(reordered.text());
        let outcome = match (reordered, shaped) {
            (_, shaped @ Outcome::Processed(_)) => shaped,
            (reordered @ Outcome::Processed(_), Outcome::Unchanged { .. }) => reordered,
            (Outcome::Unchanged { .. }, shaped @ Outcome::Unchanged { .. }) => shaped,
        };

        if self.cache_enabled {
            self.full_cache.put(text.clone(), outcome.text().clone());
        }
        outcome
    }

    pub fn set_cache_enabled(&mut self, enabled: bool) {
        self.cache_enabled = enabled;
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled
    }

    /// Bound both caches to `max_size` entries each (0 = unbounded).
    pub fn set_max_cache_size(&mut self, max_size: usize) {
        self.reorder_cache.set_max_entries(max_size);
        self.full_cache.set_max_entries(max_size);
    }

    /// Empty both caches and reset the hit/miss counters.
    pub fn clear_cache(&mut self) {
        self.reorder_cache.clear();
        self.full_cache.clear();
    }

    /// Size and counters of the full-pipeline cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.full_cache.stats()
    }

    pub fn reorder_cache_len(&self) -> usize {
        self.reorder_cache.len()
    }
}
