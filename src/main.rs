//! Command-line front end: prepares each argument (or each stdin line when
//! no arguments are given) for display and prints the result.
//!
//! Font and cache settings come from `sela.toml` and `SELA_*` variables.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use sela_config::SelaConfig;
use sela_text::{FontFace, Pipeline, process_str};

fn main() -> Result<()> {
    env_logger::init();

    let config = SelaConfig::load();
    let mut pipeline = Pipeline::with_options(config.cache.pipeline_options());

    match &config.text.font {
        Some(path) => {
            let face = FontFace::from_path(path, config.text.face_index)
                .with_context(|| format!("Failed to load font {:?}", path))?;
            if !pipeline.initialize(Some(&face)) {
                log::warn!("font {:?} rejected by shaper, output will be unshaped", path);
            }
        }
        None => log::info!("no font configured (SELA_FONT), shaping disabled"),
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read stdin")?;
            writeln!(out, "{}", process_str(&mut pipeline, &line))?;
        }
    } else {
        for arg in &args {
            writeln!(out, "{}", process_str(&mut pipeline, arg))?;
        }
    }

    let stats = pipeline.cache_stats();
    log::info!(
        "cache: size={} hits={} misses={}",
        stats.size,
        stats.hits,
        stats.misses
    );
    Ok(())
}
