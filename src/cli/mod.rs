//! CLI Module
//!
//! Provides command-line interface support:
//! - Exit codes for automation

pub mod exit_codes;

pub use exit_codes::{exit_code_description, ExitCodes};
