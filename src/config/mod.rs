//! Configuration module
//!
//! Sweep settings with optional TOML file loading. Command-line flags
//! override file values; defaults fill whatever remains.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::report::ReportFormat;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// The config path that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The config file is not valid TOML for [`SweepConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// The config path that failed.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Sweep configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// First polynomial to test; nonzero when resuming an earlier run.
    pub start: u32,
    /// Last polynomial to test, inclusive.
    pub end: u32,
    /// Result file path.
    pub output: PathBuf,
    /// Result file format.
    pub format: ReportFormat,
    /// Print every candidate polynomial to stdout as 8-digit uppercase hex.
    pub echo: bool,
    /// Log a progress line every this many candidates (0 disables).
    pub progress_every: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: 0,
            end: u32::MAX,
            output: PathBuf::from("crc.txt"),
            format: ReportFormat::Text,
            echo: false,
            progress_every: 16 * 1024 * 1024,
        }
    }
}

impl SweepConfig {
    /// Load config from a TOML file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_cover_full_space() {
        let config = SweepConfig::default();
        assert_eq!(config.start, 0);
        assert_eq!(config.end, u32::MAX);
        assert_eq!(config.output, PathBuf::from("crc.txt"));
        assert_eq!(config.format, ReportFormat::Text);
        assert!(!config.echo);
    }

    #[test]
    fn missing_path_yields_defaults() {
        let config = SweepConfig::load(None).unwrap();
        assert_eq!(config.end, u32::MAX);
    }

    #[test]
    fn loads_partial_toml_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "start = 1024").unwrap();
        writeln!(file, "format = \"json\"").unwrap();
        drop(file);

        let config = SweepConfig::load(Some(&path)).unwrap();
        assert_eq!(config.start, 1024);
        assert_eq!(config.format, ReportFormat::Json);
        // untouched fields keep their defaults
        assert_eq!(config.end, u32::MAX);
        assert_eq!(config.output, PathBuf::from("crc.txt"));
    }

    #[test]
    fn rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.toml");
        std::fs::write(&path, "start = \"not a number\"").unwrap();
        assert!(matches!(
            SweepConfig::load(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn surfaces_read_failure() {
        let path = Path::new("/nonexistent/sweep.toml");
        assert!(matches!(
            SweepConfig::load(Some(path)),
            Err(ConfigError::Read { .. })
        ));
    }
}
