//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success (informational notices included)
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Item or template not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Item already on the list.
    pub const DUPLICATE_ITEM: i32 = 5;
}

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "SHOPSMART_LOG";
