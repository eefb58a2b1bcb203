use std::path::PathBuf;

use anyhow::Result;
use sela_text::{CacheStats, FontFace, Pipeline, WideText, process_str, process_utf8};

fn dejavu() -> Result<FontFace> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fonts/DejaVuSans.ttf");
    Ok(FontFace::from_path(path, 0)?)
}

#[test]
fn mixed_text_is_reordered_and_shaped() -> Result<()> {
    let font = dejavu()?;
    let mut pipeline = Pipeline::new();
    assert!(pipeline.initialize(Some(&font)));

    let input = WideText::from("Hello مرحبا");
    let first = pipeline.process_detailed(&input);
    assert!(first.is_processed());
    assert!(!first.text().is_empty());
    assert_ne!(first.text(), &input);

    let second = pipeline.process(&input);
    assert_eq!(&second, first.text());
    assert_eq!(
        pipeline.cache_stats(),
        CacheStats {
            size: 1,
            hits: 1,
            misses: 1
        }
    );
    Ok(())
}

#[test]
fn shaping_output_is_glyph_ids() -> Result<()> {
    let font = dejavu()?;
    let mut pipeline = Pipeline::new();
    assert!(pipeline.initialize(Some(&font)));

    let text = WideText::from("مرحبا");
    let shaped = pipeline.shape_detailed(&text);
    assert!(shaped.is_processed());
    // Glyph ids never coincide with the Arabic codepoints they came from.
    assert!(shaped.text().iter().all(|unit| !text.contains(unit)));
    Ok(())
}

#[test]
fn string_facade_with_real_font() -> Result<()> {
    let font = dejavu()?;
    let mut pipeline = Pipeline::new();
    pipeline.initialize(Some(&font));
    let out = process_str(&mut pipeline, "مرحبا بالعالم");
    assert!(!out.is_empty());
    assert_ne!(out, "مرحبا بالعالم");
    Ok(())
}

#[test]
fn uncovered_characters_become_nul_bytes() -> Result<()> {
    let font = dejavu()?;
    let mut pipeline = Pipeline::new();
    pipeline.initialize(Some(&font));
    let out = process_utf8(&mut pipeline, "\u{08B6}\u{08B7}".as_bytes());
    assert_eq!(out, vec![0, 0]);
    Ok(())
}
