// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod input;
pub mod options;
pub mod presentation;

use crate::config::Config;
use crate::input::Source;
use crate::presentation::Report;
use text_stats_shared_kernel::InputError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reports for every readable input plus the inputs that failed to load.
#[derive(Debug, Default)]
pub struct RunResult {
    pub reports: Vec<Report>,
    pub errors: Vec<(Source, InputError)>,
}

/// Load and analyze every configured source, in order.
///
/// A source that cannot be read is recorded in [`RunResult::errors`] and skipped.
pub fn run(config: &Config) -> RunResult {
    let mut result = RunResult::default();
    for source in &config.sources {
        match input::load(source) {
            Ok(document) => {
                let breakdown = text_stats_engine::analyze_detailed(&document.text);
                result.reports.push(Report::new(&document, breakdown, config.detailed));
            }
            Err(err) => {
                log::warn!("skipping {}: {err}", source.label());
                result.errors.push((source.clone(), err));
            }
        }
    }
    log::info!(
        "analyzed {} inputs ({} failed)",
        result.reports.len(),
        result.errors.len()
    );
    result
}
