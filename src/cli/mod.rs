//! CLI argument parsing for lockwatch.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::logging::LogFormat;
use crate::poll::DEFAULT_INTERVAL_SECS;
use clap::{Parser, Subcommand};

/// Lockwatch: reports Git LFS lock changes to a chat webhook.
///
/// Reads `REPO_DIR` (repository working copy) and `WEBHOOK_URL`
/// (notification webhook) from the environment.
#[derive(Parser, Debug)]
#[command(name = "lockwatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log output format.
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Human)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for lockwatch.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Poll the lock list and post a message whenever it changes.
    ///
    /// The first load only records the current locks. Every later poll
    /// reports locks that appeared ("Locked:") or disappeared ("Unlocked:").
    /// Stops cleanly on Ctrl+C once the current poll finishes.
    Watch(WatchArgs),

    /// Print the locks currently held in the repository and exit.
    List,
}

/// Arguments for the `watch` command.
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Seconds to wait between polls.
    #[arg(long, default_value_t = DEFAULT_INTERVAL_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_secs: u64,

    /// Print reports to stdout instead of posting them to the webhook.
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
