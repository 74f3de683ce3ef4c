//! Lock change notifications.
//!
//! A [`LockReport`] is rendered once per changed cycle and handed to a
//! [`Notifier`]. The webhook notifier posts it as a chat embed; the stdout
//! notifier prints it for dry runs.

mod report;
mod stdout;
mod webhook;


pub use report::{LOCKED_TITLE, LockReport, ReportSection, Severity, UNLOCKED_TITLE};
pub use stdout::StdoutNotifier;
pub use webhook::{
    MAX_EMBED_CHARS, MAX_FIELD_VALUE_CHARS, MAX_FIELDS, OVERFLOW_FIELD_NAME, WebhookNotifier,
    WebhookPayload,
};

use crate::error::Result;

/// A sink for lock change reports.
///
/// Implementations send exactly one message per call and do not retry.
pub trait Notifier {
    fn notify(&self, report: &LockReport) -> Result<()>;
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, report: &LockReport) -> Result<()> {
        (**self).notify(report)
    }
}
