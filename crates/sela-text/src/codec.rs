//! UTF-8 <-> wide text conversion used at the API edge.
//!
//! The lenient [`decode`]/[`encode`] never fail: malformed input is widened
//! or narrowed byte-for-byte instead. Use [`try_decode`]/[`try_encode`] to
//! observe the failure.

use crate::{CodecError, WideText};

pub fn try_decode(bytes: &[u8]) -> Result<WideText, CodecError> {
    let s = core::str::from_utf8(bytes).map_err(|e| CodecError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })?;
    Ok(WideText::from(s))
}

pub fn try_encode(text: &WideText) -> Result<Vec<u8>, CodecError> {
    let mut out = String::with_capacity(text.len());
    for (index, &unit) in text.iter().enumerate() {
        let ch = char::from_u32(unit).ok_or(CodecError::InvalidScalar { index, unit })?;
        out.push(ch);
    }
    Ok(out.into_bytes())
}

/// Decode UTF-8 into wide units, widening each byte on malformed input.
pub fn decode(bytes: &[u8]) -> WideText {
    if bytes.is_empty() {
        return WideText::new();
    }
    match try_decode(bytes) {
        Ok(text) => text,
        Err(err) => {
            log::debug!("decode fallback to byte widening: {err}");
            bytes.iter().map(|&b| u32::from(b)).collect()
        }
    }
}

/// Encode wide units as UTF-8, keeping only each unit's low byte when any
/// unit is not a scalar value.
pub fn encode(text: &WideText) -> Vec<u8> {
    if text.is_empty() {
        return Vec::new();
    }
    match try_encode(text) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::debug!("encode fallback to low-byte truncation: {err}");
            text.iter().map(|&u| (u & 0xFF) as u8).collect()
        }
    }
}
