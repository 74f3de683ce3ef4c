//! Exit code constants for the lockwatch CLI.
//!
//! - 0: Success (including a graceful stop on interrupt)
//! - 1: Configuration error (missing or invalid settings)
//! - 2: Reserved for argument parsing errors reported by clap
//! - 3: Lock-listing command failure
//! - 4: Malformed lock-listing output
//! - 5: Notification delivery failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Missing or invalid `REPO_DIR` / `WEBHOOK_URL`.
pub const CONFIG_ERROR: i32 = 1;

/// `git lfs locks` could not be executed or exited non-zero.
pub const COMMAND_FAILURE: i32 = 3;

/// The lock listing contained a line that could not be parsed.
pub const MALFORMED_OUTPUT: i32 = 4;

/// The webhook call failed or timed out.
pub const NOTIFICATION_FAILURE: i32 = 5;
