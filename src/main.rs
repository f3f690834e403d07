// src/main.rs
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use text_stats::args::Args;
use text_stats::config::Config;
use text_stats::presentation;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG があればそちらを優先
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn run(config: &Config) -> anyhow::Result<bool> {
    let result = text_stats::run(config);

    for (source, err) in &result.errors {
        eprintln!("Error processing {}: {err}", source.label());
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    presentation::print_results(&mut out, &result.reports, config)
        .context("failed to render results")?;
    out.flush().context("failed to flush output")?;

    Ok(result.errors.is_empty())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Application Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
