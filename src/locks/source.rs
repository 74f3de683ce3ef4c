//! Where lock sets come from.

use crate::error::Result;
use crate::git;
use std::path::PathBuf;
use tracing::debug;

use super::parser::parse_lock_listing;
use super::types::LockSet;

/// Anything that can produce the current lock set.
pub trait LockSource {
    /// Load a fresh snapshot of every currently held lock.
    fn load(&self) -> Result<LockSet>;
}

impl<T: LockSource + ?Sized> LockSource for &T {
    fn load(&self) -> Result<LockSet> {
        (**self).load()
    }
}

/// Reads locks with `git lfs locks` in a repository working copy.
#[derive(Debug, Clone)]
pub struct GitLfsLockSource {
    repo_dir: PathBuf,
}

impl GitLfsLockSource {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }
}

impl LockSource for GitLfsLockSource {
    fn load(&self) -> Result<LockSet> {
        let raw = git::lfs_locks(&self.repo_dir)?;
        let locks = parse_lock_listing(&raw)?;
        debug!(repo = %self.repo_dir.display(), locks = locks.len(), "loaded lock set");
        Ok(locks)
    }
}
