//! Lock set comparison.

use std::collections::HashSet;

use super::types::{Lock, LockSet};

/// Ids that disappeared from, or appeared in, a lock set between two polls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockDiff {
    /// Ids held in the old set but not in the new one.
    pub removed: HashSet<String>,
    /// Ids held in the new set but not in the old one.
    pub added: HashSet<String>,
}

impl LockDiff {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }

    /// Look the changed ids back up in the sets they came from.
    pub fn resolve(&self, old: &LockSet, new: &LockSet) -> LockChanges {
        LockChanges {
            added: self
                .added
                .iter()
                .filter_map(|id| new.get(id).cloned())
                .collect(),
            removed: self
                .removed
                .iter()
                .filter_map(|id| old.get(id).cloned())
                .collect(),
        }
    }
}

/// Changed locks with their full records, ready to be reported.
#[derive(Debug, Clone, Default)]
pub struct LockChanges {
    pub added: Vec<Lock>,
    pub removed: Vec<Lock>,
}

impl LockChanges {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Compare two lock sets by id.
///
/// Only ids are compared: a lock whose file or owner changed while its id
/// stayed the same is not a change, and a lock released and re-acquired
/// under a new id is reported as one removal plus one addition.
pub fn diff(old: &LockSet, new: &LockSet) -> LockDiff {
    let removed = old
        .ids()
        .filter(|id| !new.contains(id))
        .map(str::to_string)
        .collect();
    let added = new
        .ids()
        .filter(|id| !old.contains(id))
        .map(str::to_string)
        .collect();

    LockDiff { removed, added }
}
