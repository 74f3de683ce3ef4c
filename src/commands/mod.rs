//! Command implementations for lockwatch.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod list;
mod watch;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Watch(args) => watch::cmd_watch(args),
        Command::List => list::cmd_list(),
    }
}
