//! Implementation of the `lockwatch watch` command.
//!
//! Loads a baseline lock set, then polls on a fixed interval and reports
//! every change. Any failed poll ends the command with its error; an
//! interrupt ends it cleanly once the current poll has finished.

use crate::cli::WatchArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::locks::{GitLfsLockSource, LockSource};
use crate::notify::{Notifier, StdoutNotifier, WebhookNotifier};
use crate::poll::{Watcher, cancel_on_interrupt, run_every};
use std::sync::mpsc::Receiver;
use std::time::Duration;
use tracing::info;

pub fn cmd_watch(args: WatchArgs) -> Result<()> {
    let settings = Settings::from_env()?;
    let interval = Duration::from_secs(args.interval_secs);
    let source = GitLfsLockSource::new(settings.repo_dir.clone());
    let cancel = cancel_on_interrupt()?;

    info!(
        repo = %settings.repo_dir.display(),
        interval_secs = args.interval_secs,
        dry_run = args.dry_run,
        "lockwatch started"
    );

    if args.dry_run {
        watch(source, StdoutNotifier, interval, &cancel)
    } else {
        let notifier = WebhookNotifier::new(settings.webhook_url)?;
        watch(source, notifier, interval, &cancel)
    }
}

fn watch<S, N>(source: S, notifier: N, interval: Duration, cancel: &Receiver<()>) -> Result<()>
where
    S: LockSource,
    N: Notifier,
{
    info!("loading repository");
    let mut watcher = Watcher::start(source, notifier)?;
    info!(locks = watcher.locks().len(), "repository loaded");

    run_every(interval, cancel, || watcher.check().map(|_| ()))?;

    info!("stopped, bye bye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LockwatchError;
    use crate::locks::LockSet;
    use crate::test_support::{RecordingNotifier, ScriptedLockSource, lock_set};
    use std::sync::mpsc::{self, Sender};
    use std::thread;

    /// Raises a cancel while a given load is still running, like Ctrl+C
    /// arriving during a slow `git lfs locks`.
    struct InterruptedDuringLoad {
        inner: ScriptedLockSource,
        interrupt_on_load: usize,
        cancel: Sender<()>,
    }

    impl LockSource for InterruptedDuringLoad {
        fn load(&self) -> Result<LockSet> {
            let result = self.inner.load();
            if self.inner.loads() == self.interrupt_on_load {
                self.cancel.send(()).unwrap();
                thread::sleep(Duration::from_millis(20));
            }
            result
        }
    }

    #[test]
    fn interrupt_during_load_completes_cycle_and_stops_cleanly() {
        let (tx, rx) = mpsc::channel();
        let source = InterruptedDuringLoad {
            inner: ScriptedLockSource::new(vec![
                Ok(lock_set(&[("a.psd", "Alice", "1")])),
                Ok(lock_set(&[("a.psd", "Alice", "1"), ("b.psd", "Bob", "2")])),
            ]),
            interrupt_on_load: 2,
            cancel: tx,
        };
        let notifier = RecordingNotifier::default();

        let result = watch(&source, &notifier, Duration::from_secs(3600), &rx);

        assert!(result.is_ok());
        assert_eq!(source.inner.loads(), 2);
        // The interrupted cycle still published its change.
        assert_eq!(notifier.reports().len(), 1);
    }

    #[test]
    fn interrupt_stops_after_first_cycle() {
        let source = ScriptedLockSource::new(vec![
            Ok(lock_set(&[("a.psd", "Alice", "1")])),
            Ok(lock_set(&[("a.psd", "Alice", "1")])),
        ]);
        let (tx, rx) = mpsc::channel();
        tx.send(()).unwrap();

        let result = watch(source, RecordingNotifier::default(), Duration::from_secs(3600), &rx);

        assert!(result.is_ok());
    }

    #[test]
    fn baseline_failure_ends_watch() {
        let source = ScriptedLockSource::new(vec![Err(LockwatchError::ExternalCommand(
            "git: 'lfs' is not a git command".to_string(),
        ))]);
        let (_tx, rx) = mpsc::channel::<()>();

        let err = watch(source, RecordingNotifier::default(), Duration::from_millis(1), &rx)
            .unwrap_err();

        assert!(matches!(err, LockwatchError::ExternalCommand(_)));
    }

    #[test]
    fn notify_failure_ends_watch() {
        let source = ScriptedLockSource::new(vec![
            Ok(lock_set(&[])),
            Ok(lock_set(&[("a.psd", "Alice", "1")])),
        ]);
        let (_tx, rx) = mpsc::channel::<()>();

        let err = watch(source, RecordingNotifier::failing(), Duration::from_millis(1), &rx)
            .unwrap_err();

        assert!(matches!(err, LockwatchError::Notification(_)));
    }
}
