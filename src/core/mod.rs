//! Core module containing the main functionality of Crchunt
//!
//! This module provides:
//! - Table-driven CRC-32 engine parameterized by generator polynomial
//! - Known checksum/plaintext sample data
//! - Exhaustive polynomial sweep with scoring and cancellation
//! - Result rendering and persistence

pub mod crc32;
pub mod report;
pub mod samples;
pub mod search;

pub use crc32::{Crc32, DEFAULT_POLYNOMIAL};
pub use report::{render_json, render_text, write_report, ReportError, ReportFormat};
pub use samples::{reference_samples, KnownSample, SampleError};
pub use search::{merge, sweep, ScoreKey, ScoreMap, SearchParams, SweepOutcome};
