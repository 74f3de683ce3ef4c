//! Lock set model, loading, and diffing.
//!
//! A [`LockSet`] is a snapshot of every LFS lock held at one observation
//! point. Snapshots are built fresh from the lock listing on every poll and
//! compared by lock id only:
//!
//! - `parser` turns `<file>\t<owner>\t<id>` lines into a [`LockSet`]
//! - `source` runs the listing command against a repository
//! - `diff` computes the added/removed ids between two snapshots

mod diff;
mod parser;
mod source;
mod types;


pub use diff::{LockChanges, LockDiff, diff};
pub use parser::parse_lock_listing;
pub use source::{GitLfsLockSource, LockSource};
pub use types::{Lock, LockSet};
