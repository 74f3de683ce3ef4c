//! Fixed-interval scheduling with interrupt-driven cancellation.

use crate::error::{LockwatchError, Result};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;
use tracing::info;

/// Seconds between cycles when no interval is given.
pub const DEFAULT_INTERVAL_SECS: u64 = 5 * 60;

/// Call `tick` immediately and then once per `interval` until cancelled.
///
/// Cancellation is only observed while waiting: a message on `cancel` (or a
/// disconnected channel) that arrives during a tick stops the loop after
/// that tick completes. The first tick error stops the loop and is returned.
pub fn run_every<F>(interval: Duration, cancel: &Receiver<()>, mut tick: F) -> Result<()>
where
    F: FnMut() -> Result<()>,
{
    loop {
        tick()?;

        match cancel.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => continue,
            Ok(()) => {
                info!("stopping");
                return Ok(());
            }
            Err(RecvTimeoutError::Disconnected) => {
                info!(reason = "cancel channel closed", "stopping");
                return Ok(());
            }
        }
    }
}

/// Install a SIGINT/SIGTERM handler that feeds a cancel channel.
///
/// The handler only sends; the process keeps running until the scheduler
/// reaches its next wait.
pub fn cancel_on_interrupt() -> Result<Receiver<()>> {
    let (tx, rx) = mpsc::channel();
    ctrlc::set_handler(move || {
        let _ = tx.send(());
    })
    .map_err(|e| LockwatchError::Config(format!("failed to install signal handler: {}", e)))?;
    Ok(rx)
}
