//! Crchunt - CRC-32 parameter brute-forcer
//!
//! Sweeps the 32-bit polynomial space against a fixed set of known
//! (checksum, plaintext) pairs and records every parameter combination that
//! reproduces at least one of them.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use thiserror::Error;

use crchunt_core::{
    exit_code_description, reference_samples, sweep, write_report, ConfigError, ExitCodes,
    ReportError, ReportFormat, SampleError, SweepConfig,
};

/// Result file format
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One `<poly> <xorout> <init>: <count>` line per result
    Text,
    /// JSON array for scripting
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

/// Crchunt CLI
#[derive(Parser, Debug)]
#[command(
    name = "crchunt",
    version,
    about = "Brute-force recovery of unknown CRC-32 parameters",
    long_about = None
)]
struct Cli {
    /// First polynomial to test (decimal or 0x-prefixed hex); use to resume
    /// an interrupted sweep
    #[arg(long, value_parser = parse_polynomial)]
    start: Option<u32>,

    /// Last polynomial to test, inclusive
    #[arg(long, value_parser = parse_polynomial)]
    end: Option<u32>,

    /// Result file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Result file format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print every candidate polynomial to stdout as 8-digit uppercase hex
    #[arg(long)]
    echo: bool,

    /// Log a progress line every N candidates (0 disables)
    #[arg(long)]
    progress_every: Option<u64>,

    /// Config file (TOML)
    #[arg(short, long, env = "CRCHUNT_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    quiet: bool,
}

fn parse_polynomial(value: &str) -> Result<u32, String> {
    let value = value.trim();
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|e| format!("invalid polynomial {value:?}: {e}"))
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sample(#[from] SampleError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => ExitCodes::CONFIG_ERROR,
            Self::Sample(_) => ExitCodes::ENCODING_FAILED,
            Self::Report(_) => ExitCodes::WRITE_FAILED,
            Self::Other(_) => ExitCodes::INTERNAL_ERROR,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.quiet {
        tracing::Level::ERROR
    } else if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            let code = err.exit_code();
            tracing::error!("{err}");
            if !cli.quiet {
                eprintln!("error: {err} ({})", exit_code_description(code));
            }
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> Result<u8, AppError> {
    let mut config = SweepConfig::load(cli.config.as_deref())?;
    if let Some(start) = cli.start {
        config.start = start;
    }
    if let Some(end) = cli.end {
        config.end = end;
    }
    if let Some(ref output) = cli.output {
        config.output = output.clone();
    }
    if let Some(format) = cli.format {
        config.format = format.into();
    }
    if let Some(every) = cli.progress_every {
        config.progress_every = every;
    }
    config.echo |= cli.echo;

    if config.start > config.end {
        tracing::error!(
            "start {:08X} is beyond end {:08X}",
            config.start,
            config.end
        );
        return Ok(ExitCodes::INVALID_ARGS);
    }

    let samples = reference_samples()?;
    let total = u64::from(config.end - config.start) + 1;
    tracing::info!(
        "Starting crchunt v{}: sweeping {:08X}..={:08X} ({} candidates) against {} samples",
        env!("CARGO_PKG_VERSION"),
        config.start,
        config.end,
        total,
        samples.len()
    );

    let cancel = Arc::new(AtomicBool::new(false));
    let handler_flag = cancel.clone();
    ctrlc::set_handler(move || {
        handler_flag.store(true, Ordering::Relaxed);
    })
    .context("failed to install interrupt handler")?;

    let started = Instant::now();
    let echo = config.echo;
    let progress_every = config.progress_every;
    let mut seen = 0u64;
    let progress = |polynomial: u32| {
        if echo {
            println!("{polynomial:08X}");
        }
        seen += 1;
        if progress_every > 0 && seen % progress_every == 0 {
            let elapsed = started.elapsed().as_secs_f64();
            let rate = seen as f64 / elapsed.max(f64::EPSILON);
            tracing::info!(
                "at {:08X}: {}/{} candidates ({:.1}%), {:.0}/s",
                polynomial,
                seen,
                total,
                seen as f64 / total as f64 * 100.0,
                rate
            );
        }
    };

    let outcome = sweep(&samples, config.start..=config.end, &cancel, progress);

    write_report(&config.output, &outcome.scores, config.format)?;
    tracing::info!(
        "tested {} candidates in {:.1?}, {} result(s) written to {}",
        outcome.tested,
        started.elapsed(),
        outcome.scores.len(),
        config.output.display()
    );

    if let Some(resume) = outcome.resume_at {
        tracing::warn!(
            "interrupted; partial results written, resume with --start 0x{resume:08X}"
        );
        Ok(ExitCodes::INTERRUPTED)
    } else {
        Ok(ExitCodes::SUCCESS)
    }
}
