//! C exports for native hosts.
//!
//! Strings are NUL-terminated UTF-8. Null pointers are accepted everywhere
//! and treated as "nothing to do".

use std::ffi::{CStr, CString, c_char};

use sela_text::FontFace;

/// Bind the shared pipeline to a font.
///
/// The host owns the font file; its bytes are copied here.
///
/// # Returns
/// `true` on success or if already initialized, `false` if the data is
/// null, empty, or not a usable font.
#[unsafe(no_mangle)]
pub extern "C" fn sela_init(font_data: *const u8, len: usize, face_index: u32) -> bool {
    let _ = env_logger::try_init();

    if font_data.is_null() || len == 0 {
        log::error!("sela_init: font data is null or empty");
        return false;
    }
    let bytes = unsafe { std::slice::from_raw_parts(font_data, len) }.to_vec();

    match FontFace::from_vec(bytes, face_index) {
        Ok(face) => crate::initialize(&face),
        Err(e) => {
            log::error!("sela_init: {e}");
            false
        }
    }
}

/// Release the shared pipeline.
#[unsafe(no_mangle)]
pub extern "C" fn sela_shutdown() {
    log::info!("sela_shutdown");
    crate::shutdown();
}

#[unsafe(no_mangle)]
pub extern "C" fn sela_needs_processing(text: *const c_char) -> bool {
    if text.is_null() {
        return false;
    }
    let bytes = unsafe { CStr::from_ptr(text) }.to_bytes();
    crate::needs_processing(bytes)
}

/// Process a string for display.
///
/// Output that cannot be represented as a C string is replaced by a copy
/// of the input. In practice this happens whenever the bound font has no
/// glyph for some character: the shaper emits `.notdef` (glyph 0), which
/// becomes a NUL byte, so a single missing glyph leaves the whole string
/// unprocessed.
///
/// # Returns
/// A newly allocated string to be released with [`sela_string_free`], or
/// null if `text` is null.
#[unsafe(no_mangle)]
pub extern "C" fn sela_process_utf8(text: *const c_char) -> *mut c_char {
    if text.is_null() {
        return std::ptr::null_mut();
    }
    let input = unsafe { CStr::from_ptr(text) };
    let processed = crate::process_utf8(input.to_bytes());
    c_output_or_input(processed, input).into_raw()
}

fn c_output_or_input(processed: Vec<u8>, input: &CStr) -> CString {
    CString::new(processed).unwrap_or_else(|_| {
        log::debug!("sela_process_utf8: output contains NUL, returning input");
        input.to_owned()
    })
}

/// Free a string returned by [`sela_process_utf8`].
#[unsafe(no_mangle)]
pub extern "C" fn sela_string_free(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    drop(unsafe { CString::from_raw(s) });
}

#[unsafe(no_mangle)]
pub extern "C" fn sela_set_cache_enabled(enabled: bool) {
    crate::with_pipeline(|p| p.set_cache_enabled(enabled));
}

/// Bound each cache to `max_size` entries (0 = unbounded).
#[unsafe(no_mangle)]
pub extern "C" fn sela_set_max_cache_size(max_size: usize) {
    crate::with_pipeline(|p| p.set_max_cache_size(max_size));
}

#[unsafe(no_mangle)]
pub extern "C" fn sela_clear_cache() {
    crate::with_pipeline(|p| p.clear_cache());
}

/// Write full-pipeline cache size and hit/miss counters. Null outputs are
/// skipped.
#[unsafe(no_mangle)]
pub extern "C" fn sela_cache_stats(size: *mut usize, hits: *mut usize, misses: *mut usize) {
    let stats = crate::cache_stats();
    unsafe {
        if !size.is_null() {
            *size = stats.size;
        }
        if !hits.is_null() {
            *hits = stats.hits;
        }
        if !misses.is_null() {
            *misses = stats.misses;
        }
    }
}
