//! Dry-run notifier.

use super::{LockReport, Notifier};
use crate::error::Result;

/// Prints reports to stdout instead of sending them anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, report: &LockReport) -> Result<()> {
        println!("{}", report);
        Ok(())
    }
}
