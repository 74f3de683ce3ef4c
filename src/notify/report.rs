//! Rendering lock changes into a report.

use crate::locks::{Lock, LockChanges};
use std::fmt;

/// Section title for newly acquired locks.
pub const LOCKED_TITLE: &str = "Locked:";

/// Section title for released locks.
pub const UNLOCKED_TITLE: &str = "Unlocked:";

/// How loudly a report should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// At least one file became locked.
    Warning,
    /// Files were only unlocked.
    Ok,
}

impl Severity {
    /// Embed colour as a 24-bit RGB integer.
    pub fn color(&self) -> u32 {
        match self {
            Severity::Warning => 0xFFFF00,
            Severity::Ok => 0x00FF00,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Ok => "ok",
        }
    }
}

/// One titled block of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    pub title: &'static str,
    /// One `<file>, by <owner>` line per lock, newline separated.
    pub body: String,
}

/// The message sent for one changed cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockReport {
    pub severity: Severity,
    pub sections: Vec<ReportSection>,
}

impl LockReport {
    /// Build a report from added and removed locks, keeping their order.
    ///
    /// A section is left out when its list is empty.
    pub fn new(added: &[Lock], removed: &[Lock]) -> Self {
        let severity = if added.is_empty() {
            Severity::Ok
        } else {
            Severity::Warning
        };

        let sections = [(LOCKED_TITLE, added), (UNLOCKED_TITLE, removed)]
            .into_iter()
            .filter(|(_, locks)| !locks.is_empty())
            .map(|(title, locks)| ReportSection {
                title,
                body: render_lines(locks),
            })
            .collect();

        Self { severity, sections }
    }

    pub fn from_changes(changes: &LockChanges) -> Self {
        Self::new(&changes.added, &changes.removed)
    }

    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

impl fmt::Display for LockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.severity.as_str())?;
        for section in &self.sections {
            write!(f, "\n{}\n{}", section.title, section.body)?;
        }
        Ok(())
    }
}

fn render_lines(locks: &[Lock]) -> String {
    locks
        .iter()
        .map(Lock::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
