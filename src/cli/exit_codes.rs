//! CLI Exit Codes
//!
//! Standard exit codes for scripted and automated runs.

/// Exit code constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCodes;

impl ExitCodes {
    /// Success
    pub const SUCCESS: u8 = 0;

    /// General error
    pub const ERROR: u8 = 1;

    /// Invalid arguments
    pub const INVALID_ARGS: u8 = 2;

    /// Configuration error
    pub const CONFIG_ERROR: u8 = 8;

    /// Sample label could not be encoded
    pub const ENCODING_FAILED: u8 = 17;

    /// Result file could not be written
    pub const WRITE_FAILED: u8 = 18;

    /// Sweep interrupted before completing its range
    pub const INTERRUPTED: u8 = 20;

    /// Internal error
    pub const INTERNAL_ERROR: u8 = 127;
}

/// Human-readable description of an exit code.
pub fn exit_code_description(code: u8) -> &'static str {
    match code {
        ExitCodes::SUCCESS => "Success",
        ExitCodes::ERROR => "General error",
        ExitCodes::INVALID_ARGS => "Invalid arguments",
        ExitCodes::CONFIG_ERROR => "Configuration error",
        ExitCodes::ENCODING_FAILED => "Sample label encoding failed",
        ExitCodes::WRITE_FAILED => "Result file write failed",
        ExitCodes::INTERRUPTED => "Sweep interrupted (partial results written)",
        ExitCodes::INTERNAL_ERROR => "Internal error",
        _ => "Unknown exit code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let codes = [
            ExitCodes::SUCCESS,
            ExitCodes::ERROR,
            ExitCodes::INVALID_ARGS,
            ExitCodes::CONFIG_ERROR,
            ExitCodes::ENCODING_FAILED,
            ExitCodes::WRITE_FAILED,
            ExitCodes::INTERRUPTED,
            ExitCodes::INTERNAL_ERROR,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn descriptions_cover_known_codes() {
        assert_eq!(exit_code_description(ExitCodes::SUCCESS), "Success");
        assert_eq!(
            exit_code_description(ExitCodes::INTERRUPTED),
            "Sweep interrupted (partial results written)"
        );
        assert_eq!(exit_code_description(200), "Unknown exit code");
    }
}
