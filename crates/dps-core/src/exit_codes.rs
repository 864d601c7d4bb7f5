//! Exit codes for the dps CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing. Empty listings are a success, not an error.

/// Exit codes for dps operations.
///
/// These codes are a stable contract for automation. Changes require
/// a major version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success, including empty listings.
    Clean = 0,

    /// The device collaborator failed to enumerate.
    EnumerationFail = 1,

    /// Invalid arguments (the value clap itself exits with on usage
    /// errors).
    ArgsError = 2,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success.
    pub fn is_success(self) -> bool {
        matches!(self, ExitCode::Clean)
    }

    /// Get the error code name as a string constant.
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK_CLEAN",
            ExitCode::EnumerationFail => "ERR_ENUMERATION",
            ExitCode::ArgsError => "ERR_ARGS",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Clean.as_i32(), 0);
        assert_eq!(ExitCode::EnumerationFail.as_i32(), 1);
        assert_eq!(ExitCode::ArgsError.as_i32(), 2);
    }

    #[test]
    fn test_is_success() {
        assert!(ExitCode::Clean.is_success());
        assert!(!ExitCode::EnumerationFail.is_success());
        assert!(!ExitCode::ArgsError.is_success());
    }

    #[test]
    fn test_display() {
        assert_eq!(ExitCode::EnumerationFail.to_string(), "ERR_ENUMERATION (1)");
    }
}
