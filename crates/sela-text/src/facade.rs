//! UTF-8 entry points for callers that work with byte strings.

use crate::bidi::BidiEngine;
use crate::shaping::GlyphShaper;
use crate::{Pipeline, codec, script};

/// Does this UTF-8 text contain Arabic script?
pub fn needs_processing(utf8: &[u8]) -> bool {
    script::contains_arabic_script(&codec::decode(utf8))
}

/// Decode, run [`Pipeline::process`], and encode back to UTF-8.
pub fn process_utf8<S: GlyphShaper, B: BidiEngine>(
    pipeline: &mut Pipeline<S, B>,
    utf8: &[u8],
) -> Vec<u8> {
    if utf8.is_empty() {
        return Vec::new();
    }
    let wide = codec::decode(utf8);
    let processed = pipeline.process(&wide);
    codec::encode(&processed)
}

/// [`process_utf8`] for `&str` input. Bytes produced by the encode
/// fallback are replaced with U+FFFD.
pub fn process_str<S: GlyphShaper, B: BidiEngine>(
    pipeline: &mut Pipeline<S, B>,
    text: &str,
) -> String {
    let bytes = process_utf8(pipeline, text.as_bytes());
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
