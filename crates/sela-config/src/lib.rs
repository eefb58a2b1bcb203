//! Sela configuration system
//!
//! Loads text pipeline settings from `sela.toml`, with environment
//! variables taking precedence over file values.

use serde::{Deserialize, Serialize};
use sela_text::PipelineOptions;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SelaConfig {
    /// Font used for shaping
    pub text: TextConfig,
    /// Result cache settings
    pub cache: CacheConfig,
}

/// Font configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TextConfig {
    /// Path to the font file (.ttf/.otf) loaded by the host
    pub font: Option<PathBuf>,
    /// Face index within a font collection
    pub face_index: u32,
}

/// Result cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache processed text (default: true)
    pub enabled: bool,
    /// Maximum entries per cache, 0 for unbounded (default: 1000)
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        let options = PipelineOptions::default();
        Self {
            enabled: options.cache_enabled,
            max_entries: options.max_cache_size,
        }
    }
}

impl CacheConfig {
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            cache_enabled: self.enabled,
            max_cache_size: self.max_entries,
        }
    }
}

fn parse_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl SelaConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load `sela.toml` from the current directory, or defaults if it is
    /// missing or invalid
    pub fn load_or_default() -> Self {
        Self::load_from_file("sela.toml").unwrap_or_default()
    }

    /// Override values from `SELA_*` environment variables
    pub fn merge_with_env(&mut self) {
        if let Ok(font) = std::env::var("SELA_FONT") {
            self.text.font = Some(PathBuf::from(font));
        }
        if let Ok(val) = std::env::var("SELA_FACE_INDEX") {
            if let Ok(index) = val.parse::<u32>() {
                self.text.face_index = index;
            }
        }
        if let Ok(val) = std::env::var("SELA_CACHE") {
            self.cache.enabled = parse_flag(&val);
        }
        if let Ok(val) = std::env::var("SELA_CACHE_MAX") {
            if let Ok(max) = val.parse::<usize>() {
                self.cache.max_entries = max;
            }
        }
    }

    /// Load from `sela.toml` (or defaults), then apply environment overrides
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
