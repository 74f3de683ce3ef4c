//! One poll cycle and the state carried between cycles.

use crate::error::Result;
use crate::locks::{LockSet, LockSource, diff};
use crate::notify::{LockReport, Notifier};
use tracing::info;

/// Result of a completed cycle.
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    /// The freshly loaded lock set, to be remembered for the next cycle.
    pub locks: LockSet,
    /// The report that was sent, if anything changed.
    pub report: Option<LockReport>,
}

/// Load the current locks, compare them with `remembered`, and notify once
/// if anything changed.
///
/// Load and notify errors are returned as-is; the caller keeps its old lock
/// set in that case.
pub fn poll_cycle<S, N>(remembered: &LockSet, source: &S, notifier: &N) -> Result<CycleOutcome>
where
    S: LockSource + ?Sized,
    N: Notifier + ?Sized,
{
    let locks = source.load()?;
    let changes = diff(remembered, &locks);

    if changes.is_empty() {
        info!(locks = locks.len(), "no changes");
        return Ok(CycleOutcome {
            locks,
            report: None,
        });
    }

    info!(
        added = changes.added.len(),
        removed = changes.removed.len(),
        "publishing changes"
    );
    let report = LockReport::from_changes(&changes.resolve(remembered, &locks));
    notifier.notify(&report)?;
    info!("published changes");

    Ok(CycleOutcome {
        locks,
        report: Some(report),
    })
}

/// Watches a lock source and reports changes to a notifier.
pub struct Watcher<S, N> {
    source: S,
    notifier: N,
    locks: LockSet,
}

impl<S: LockSource, N: Notifier> Watcher<S, N> {
    /// Load the baseline lock set. Nothing is reported for it.
    pub fn start(source: S, notifier: N) -> Result<Self> {
        let locks = source.load()?;
        info!(locks = locks.len(), "baseline loaded");
        Ok(Self {
            source,
            notifier,
            locks,
        })
    }

    /// Run one cycle, remembering the new lock set only if it succeeds.
    pub fn check(&mut self) -> Result<Option<LockReport>> {
        let outcome = poll_cycle(&self.locks, &self.source, &self.notifier)?;
        self.locks = outcome.locks;
        Ok(outcome.report)
    }

    /// The lock set the next cycle will be compared against.
    pub fn locks(&self) -> &LockSet {
        &self.locks
    }

    #[cfg(test)]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
