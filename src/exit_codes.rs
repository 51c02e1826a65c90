/// Exit codes for docstrict
///
/// These exit codes allow users and CI/CD systems to distinguish between
/// different types of failures.
/// Success - No issues found, or the fixer completed
pub const SUCCESS: i32 = 0;

/// Structural violations found by the checker
pub const VIOLATIONS_FOUND: i32 = 1;

/// Tool error - Configuration error, file access error, or decoding error
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{SUCCESS, TOOL_ERROR, VIOLATIONS_FOUND};

    /// Exit with success code (0)
    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    /// Exit with violations found code (1)
    pub fn violations_found() -> ! {
        std::process::exit(VIOLATIONS_FOUND);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
