//! Result persistence
//!
//! Writes the accumulated score map to disk, either as the classic one line
//! per record text format or as JSON for downstream tooling.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use super::search::ScoreMap;

/// Errors raised while persisting results.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output file could not be written.
    #[error("failed to write results to {path}: {source}")]
    Io {
        /// The report path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Report serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `<poly hex> <xorout> <init>: <count>` lines.
    Text,
    /// JSON array of result objects.
    Json,
}

/// Render the score map in the classic text format, one newline-terminated
/// line per retained record.
pub fn render_text(scores: &ScoreMap) -> String {
    let mut out = String::new();
    for (key, count) in scores {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{key}: {count}");
    }
    out
}

/// Render the score map as pretty-printed JSON.
pub fn render_json(scores: &ScoreMap) -> String {
    let records: Vec<serde_json::Value> = scores
        .iter()
        .map(|(key, count)| {
            json!({
                "polynomial": format!("{:08X}", key.polynomial),
                "xorout": key.params.xorout,
                "init": key.params.init,
                "matches": count,
            })
        })
        .collect();
    serde_json::to_string_pretty(&records).unwrap_or_else(|_| "[]".to_string())
}

/// Write the score map to `path` in the requested format.
///
/// Written once at the end of a run (or after an interrupted run's partial
/// accumulation); any I/O failure is fatal to the caller.
pub fn write_report(path: &Path, scores: &ScoreMap, format: ReportFormat) -> Result<(), ReportError> {
    let body = match format {
        ReportFormat::Text => render_text(scores),
        ReportFormat::Json => render_json(scores),
    };
    fs::write(path, body).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}
