//! Error types for lockwatch.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for lockwatch operations.
///
/// Each variant maps to a specific process exit code. None of them are
/// recovered from inside the polling loop: a failed cycle ends the process.
#[derive(Error, Debug)]
pub enum LockwatchError {
    /// A required setting is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The lock-listing command could not be run or exited unsuccessfully.
    #[error("Lock listing failed: {0}")]
    ExternalCommand(String),

    /// A line of the lock listing did not have the expected shape.
    #[error("Malformed lock line {line_number}: {line:?} (expected <file>\\t<owner>\\t<id>)")]
    MalformedLockLine { line_number: usize, line: String },

    /// The notification could not be delivered.
    #[error("Notification failed: {0}")]
    Notification(String),
}

impl LockwatchError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LockwatchError::Config(_) => exit_codes::CONFIG_ERROR,
            LockwatchError::ExternalCommand(_) => exit_codes::COMMAND_FAILURE,
            LockwatchError::MalformedLockLine { .. } => exit_codes::MALFORMED_OUTPUT,
            LockwatchError::Notification(_) => exit_codes::NOTIFICATION_FAILURE,
        }
    }
}

/// Result type alias for lockwatch operations.
pub type Result<T> = std::result::Result<T, LockwatchError>;
