//! sela-text: prepares mixed Arabic/Latin text for on-screen rendering.
//!
//! The crate does not implement the bidirectional algorithm or glyph shaping
//! itself. It sequences them:
//! - script classification of wide-character text
//! - bidi reordering through [`bidi::BidiEngine`] (`unicode-bidi` by default)
//! - Arabic shaping through [`shaping::GlyphShaper`] (`harfrust` by default)
//! - a bounded result cache in front of both stages
//! - UTF-8 <-> wide-text conversion at the API edge

pub mod bidi;
pub mod cache;
pub mod codec;
pub mod error;
pub mod facade;
pub mod font;
pub mod pipeline;
pub mod script;
pub mod shaping;
pub mod text;

pub use cache::{CacheStats, ResultCache};
pub use codec::{decode, encode};
pub use error::{CodecError, EngineError, Outcome, UnchangedReason};
pub use facade::{needs_processing, process_str, process_utf8};
pub use font::{FontError, FontFace};
pub use pipeline::{Pipeline, PipelineOptions};
pub use script::{ScriptClass, contains_arabic_script, is_arabic_script, is_digit};
pub use text::WideText;
