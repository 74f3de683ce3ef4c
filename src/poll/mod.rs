//! The polling loop.
//!
//! A [`Watcher`] owns the remembered lock set and runs one
//! load → diff → notify → remember cycle per [`Watcher::check`]. The
//! [`run_every`] scheduler drives those checks on a fixed interval until an
//! interrupt arrives on its cancel channel.

mod cycle;
mod scheduler;


pub use cycle::{CycleOutcome, Watcher, poll_cycle};
pub use scheduler::{DEFAULT_INTERVAL_SECS, cancel_on_interrupt, run_every};
