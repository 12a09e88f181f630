//! # Crchunt Core Library
//!
//! Brute-force recovery of unknown CRC-32 parameters. Given a handful of
//! known (checksum, plaintext) pairs, the library sweeps the 32-bit
//! polynomial space and scores every candidate under four fixed
//! (initial value, output-XOR) combinations:
//!
//! - Reflected-table CRC-32 engine for arbitrary polynomials
//! - Exhaustive, resumable polynomial sweep with cancellation
//! - Score accumulation that merges across split ranges
//! - Text and JSON result reports
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::atomic::AtomicBool;
//! use crchunt_core::{reference_samples, sweep};
//!
//! fn main() -> anyhow::Result<()> {
//!     let samples = reference_samples()?;
//!     let cancel = AtomicBool::new(false);
//!
//!     let outcome = sweep(&samples, 0..=0xFFFF, &cancel, |_poly| {});
//!     for (key, count) in &outcome.scores {
//!         println!("{key}: {count}");
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;

// Re-exports for convenience
pub use crate::cli::{exit_code_description, ExitCodes};
pub use crate::config::{ConfigError, SweepConfig};
pub use crate::core::crc32::{Crc32, DEFAULT_POLYNOMIAL};
pub use crate::core::report::{render_json, render_text, write_report, ReportError, ReportFormat};
pub use crate::core::samples::{reference_samples, KnownSample, SampleError};
pub use crate::core::search::{merge, sweep, ScoreKey, ScoreMap, SearchParams, SweepOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
