use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use sela_text::bidi::{BidiEngine, ParagraphDirection, Reordered, UnicodeBidiEngine};
use sela_text::shaping::{Direction, GlyphShaper, Script, Segment};
use sela_text::{
    CacheStats, EngineError, Outcome, Pipeline, PipelineOptions, UnchangedReason, WideText,
    process_str,
};

/// Stand-in font: the fake shaper only accepts fonts marked valid.
#[derive(Debug, Clone, Copy)]
struct FakeFont {
    valid: bool,
}

/// Deterministic shaper: every unit maps to `unit + 0x1000`, and a
/// `lam, alef` pair collapses into one ligature glyph.
#[derive(Default)]
struct FakeShaper {
    bound: bool,
    binds: Rc<Cell<usize>>,
    calls: Rc<Cell<usize>>,
    empty_output: bool,
}

const LAM: u32 = 0x0644;
const ALEF: u32 = 0x0627;
const LAM_ALEF_LIGATURE: u32 = 0xFEFB;

impl GlyphShaper for FakeShaper {
    type Font = FakeFont;

    fn bind(&mut self, font: &FakeFont) -> Result<(), EngineError> {
        if !font.valid {
            return Err(EngineError::BindFailure("rejected".into()));
        }
        self.binds.set(self.binds.get() + 1);
        self.bound = true;
        Ok(())
    }

    fn is_bound(&self) -> bool {
        self.bound
    }

    fn shape(&mut self, text: &[u32], segment: &Segment) -> Result<Vec<u32>, EngineError> {
        assert_eq!(segment.direction, Direction::RightToLeft);
        assert_eq!(segment.script, Script::Arabic);
        assert_eq!(segment.language, "ar");
        self.calls.set(self.calls.get() + 1);
        if self.empty_output {
            return Ok(Vec::new());
        }
        let mut out = Vec::with_capacity(text.len());
        let mut i = 0;
        while i < text.len() {
            if text[i] == LAM && text.get(i + 1) == Some(&ALEF) {
                out.push(LAM_ALEF_LIGATURE);
                i += 2;
            } else {
                out.push(text[i] + 0x1000);
                i += 1;
            }
        }
        Ok(out)
    }
}

/// Wraps the real engine and counts calls.
#[derive(Default)]
struct CountingBidi {
    calls: Rc<Cell<usize>>,
}

impl BidiEngine for CountingBidi {
    fn reorder(
        &self,
        text: &[u32],
        direction: ParagraphDirection,
    ) -> Result<Reordered, EngineError> {
        self.calls.set(self.calls.get() + 1);
        UnicodeBidiEngine.reorder(text, direction)
    }
}

struct FailingBidi;

impl BidiEngine for FailingBidi {
    fn reorder(&self, _: &[u32], _: ParagraphDirection) -> Result<Reordered, EngineError> {
        Err(EngineError::Reorder("engine unavailable".into()))
    }
}

fn pipeline() -> (Pipeline<FakeShaper, CountingBidi>, Rc<Cell<usize>>, Rc<Cell<usize>>) {
    let shaper = FakeShaper::default();
    let bidi = CountingBidi::default();
    let (shape_calls, bidi_calls) = (shaper.calls.clone(), bidi.calls.clone());
    let pipeline = Pipeline::with_engines(bidi, shaper, PipelineOptions::default());
    (pipeline, shape_calls, bidi_calls)
}

fn mixed() -> WideText {
    WideText::from("Hello مرحبا")
}

#[test]
fn repeated_process_hits_the_cache() -> Result<()> {
    let (mut pipeline, shape_calls, bidi_calls) = pipeline();
    assert!(pipeline.initialize(Some(&FakeFont { valid: true })));

    let text = mixed();
    let first = pipeline.process(&text);
    assert!(!first.is_empty());
    assert_ne!(first, text);
    assert_eq!(
        pipeline.cache_stats(),
        CacheStats {
            size: 1,
            hits: 0,
            misses: 1
        }
    );

    let second = pipeline.process(&text);
    let third = pipeline.process(&text);
    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(
        pipeline.cache_stats(),
        CacheStats {
            size: 1,
            hits: 2,
            misses: 1
        }
    );
    assert_eq!(shape_calls.get(), 1);
    assert_eq!(bidi_calls.get(), 1);
    Ok(())
}

#[test]
fn process_reorders_then_shapes() {
    let (mut pipeline, _, _) = pipeline();
    pipeline.initialize(Some(&FakeFont { valid: true }));

    // Visual order of "Hello مرحبا" in an RTL paragraph is "ابحرم Hello";
    // every unit is then shifted by the fake shaper.
    let expected: WideText = "ابحرم Hello".chars().map(|c| c as u32 + 0x1000).collect();
    let outcome = pipeline.process_detailed(&mixed());
    assert!(outcome.is_processed());
    assert_eq!(outcome.into_text(), expected);
}

#[test]
fn shaped_output_length_may_differ() {
    let (mut pipeline, _, _) = pipeline();
    pipeline.initialize(Some(&FakeFont { valid: true }));
    let text = WideText::from_units(vec![LAM, ALEF]);
    assert_eq!(pipeline.shape(&text).units(), &[LAM_ALEF_LIGATURE]);
}

#[test]
fn latin_text_never_touches_engines() {
    let (mut pipeline, shape_calls, bidi_calls) = pipeline();
    pipeline.initialize(Some(&FakeFont { valid: true }));
    let hello = WideText::from("Hello");
    assert_eq!(pipeline.process(&hello), hello);
    assert_eq!(pipeline.shape(&hello), hello);
    assert_eq!(pipeline.cache_stats(), CacheStats::default());
    assert_eq!(shape_calls.get(), 0);
    assert_eq!(bidi_calls.get(), 0);
}

#[test]
fn initialize_is_idempotent() {
    let shaper = FakeShaper::default();
    let binds = shaper.binds.clone();
    let mut pipeline =
        Pipeline::with_engines(CountingBidi::default(), shaper, PipelineOptions::default());

    assert!(!pipeline.initialize(Some(&FakeFont { valid: false })));
    assert!(!pipeline.is_initialized());
    assert!(pipeline.initialize(Some(&FakeFont { valid: true })));
    assert!(pipeline.initialize(Some(&FakeFont { valid: true })));
    assert!(pipeline.initialize(None));
    assert_eq!(binds.get(), 1);
}

#[test]
fn rebind_replaces_session_and_drops_results() {
    let shaper = FakeShaper::default();
    let binds = shaper.binds.clone();
    let mut pipeline =
        Pipeline::with_engines(CountingBidi::default(), shaper, PipelineOptions::default());
    pipeline.initialize(Some(&FakeFont { valid: true }));
    pipeline.process(&mixed());
    assert_eq!(pipeline.cache_stats().size, 1);

    assert!(!pipeline.rebind(&FakeFont { valid: false }));
    assert_eq!(pipeline.cache_stats().size, 1);

    assert!(pipeline.rebind(&FakeFont { valid: true }));
    assert_eq!(binds.get(), 2);
    assert_eq!(pipeline.cache_stats(), CacheStats::default());
}

#[test]
fn empty_shape_result_keeps_input() {
    let shaper = FakeShaper {
        empty_output: true,
        ..FakeShaper::default()
    };
    let mut pipeline =
        Pipeline::with_engines(CountingBidi::default(), shaper, PipelineOptions::default());
    pipeline.initialize(Some(&FakeFont { valid: true }));
    let text = WideText::from("مرحبا");
    let outcome = pipeline.shape_detailed(&text);
    assert_eq!(outcome.reason(), Some(&UnchangedReason::EmptyShapeResult));
    assert_eq!(outcome.into_text(), text);
}

#[test]
fn bidi_failure_is_not_cached() {
    let mut pipeline =
        Pipeline::with_engines(FailingBidi, FakeShaper::default(), PipelineOptions::default());
    let text = WideText::from("مرحبا");
    let outcome = pipeline.reorder_bidi_detailed(&text);
    assert!(matches!(
        outcome,
        Outcome::Unchanged {
            reason: UnchangedReason::Engine(EngineError::Reorder(_)),
            ..
        }
    ));
    assert_eq!(outcome.into_text(), text);
    assert_eq!(pipeline.reorder_cache_len(), 0);
}

#[test]
fn clear_cache_resets_everything() {
    let (mut pipeline, _, _) = pipeline();
    pipeline.initialize(Some(&FakeFont { valid: true }));
    pipeline.process(&mixed());
    pipeline.process(&mixed());
    pipeline.clear_cache();
    assert_eq!(pipeline.cache_stats(), CacheStats::default());
    assert_eq!(pipeline.reorder_cache_len(), 0);
}

#[test]
fn cache_stays_bounded() {
    let (mut pipeline, _, _) = pipeline();
    pipeline.initialize(Some(&FakeFont { valid: true }));
    let max = 5;
    pipeline.set_max_cache_size(max);
    for i in 0..(max + 20) {
        let text = WideText::from(format!("مرحبا {i}").as_str());
        pipeline.process(&text);
        assert!(pipeline.cache_stats().size <= max);
        assert!(pipeline.reorder_cache_len() <= max);
    }
    assert_eq!(pipeline.cache_stats().misses, max + 20);
}

#[test]
fn string_facade_runs_full_pipeline() {
    let (mut pipeline, _, _) = pipeline();
    pipeline.initialize(Some(&FakeFont { valid: true }));
    let out = process_str(&mut pipeline, "مرحبا");
    let expected: String = "ابحرم"
        .chars()
        .filter_map(|c| char::from_u32(c as u32 + 0x1000))
        .collect();
    assert_eq!(out, expected);
}
