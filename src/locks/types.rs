//! Lock and lock set definitions.

use std::collections::HashMap;
use std::fmt;

/// A single file lock as reported by the lock listing.
///
/// Two locks are equal when their ids are equal; `file` and `owner` are
/// descriptive only.
#[derive(Debug, Clone, Eq)]
pub struct Lock {
    /// Repository-relative path of the locked file.
    pub file: String,
    /// Display name of the user holding the lock.
    pub owner: String,
    /// Identifier assigned by the lock server, stable while the lock is held.
    pub id: String,
}

impl Lock {
    pub fn new(file: impl Into<String>, owner: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            owner: owner.into(),
            id: id.into(),
        }
    }
}

impl PartialEq for Lock {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Lock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, by {}", self.file, self.owner)
    }
}

/// All locks held at one point in time, keyed by lock id.
#[derive(Debug, Clone, Default)]
pub struct LockSet {
    locks: HashMap<String, Lock>,
}

impl LockSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a lock, replacing (and returning) any lock with the same id.
    pub fn insert(&mut self, lock: Lock) -> Option<Lock> {
        self.locks.insert(lock.id.clone(), lock)
    }

    pub fn get(&self, id: &str) -> Option<&Lock> {
        self.locks.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.locks.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }

    /// Iterate the lock ids in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.locks.keys().map(String::as_str)
    }

    /// Locks sorted by file path, then id. Used for stable console output.
    pub fn sorted(&self) -> Vec<&Lock> {
        let mut locks: Vec<&Lock> = self.locks.values().collect();
        locks.sort_by(|a, b| a.file.cmp(&b.file).then_with(|| a.id.cmp(&b.id)));
        locks
    }
}

impl FromIterator<Lock> for LockSet {
    fn from_iter<I: IntoIterator<Item = Lock>>(iter: I) -> Self {
        let mut set = LockSet::new();
        for lock in iter {
            set.insert(lock);
        }
        set
    }
}
