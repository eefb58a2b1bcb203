//! The process-wide text pipeline shared by every caller in the host
//! application, plus C exports in [`ffi`].
//!
//! The instance is created on first use and dropped by [`shutdown`].
//! All access goes through one mutex, so callers on different threads are
//! serialised.

pub mod ffi;

use once_cell::sync::Lazy;
use parking_lot::Mutex;
use sela_config::SelaConfig;
use sela_text::{CacheStats, FontFace, Pipeline};

static PIPELINE: Lazy<Mutex<Option<Pipeline>>> = Lazy::new(|| Mutex::new(None));

/// Run `f` on the shared pipeline, creating it if needed.
pub fn with_pipeline<F, R>(f: F) -> R
where
    F: FnOnce(&mut Pipeline) -> R,
{
    let mut guard = PIPELINE.lock();
    let pipeline = guard.get_or_insert_with(|| {
        log::debug!("creating shared text pipeline");
        Pipeline::new()
    });
    f(pipeline)
}

/// Apply the cache section of `config` to the shared pipeline.
pub fn configure(config: &SelaConfig) {
    let options = config.cache.pipeline_options();
    with_pipeline(|p| {
        p.set_cache_enabled(options.cache_enabled);
        p.set_max_cache_size(options.max_cache_size);
    });
}

/// Bind the shared pipeline to `font`. No-op returning `true` when
/// already initialized.
pub fn initialize(font: &FontFace) -> bool {
    with_pipeline(|p| p.initialize(Some(font)))
}

pub fn needs_processing(utf8: &[u8]) -> bool {
    sela_text::needs_processing(utf8)
}

pub fn process_utf8(utf8: &[u8]) -> Vec<u8> {
    if utf8.is_empty() {
        return Vec::new();
    }
    with_pipeline(|p| sela_text::process_utf8(p, utf8))
}

pub fn cache_stats() -> CacheStats {
    with_pipeline(|p| p.cache_stats())
}

/// Drop the shared pipeline, releasing its font session and caches. The
/// next call creates a fresh, uninitialized one.
pub fn shutdown() {
    PIPELINE.lock().take();
}
