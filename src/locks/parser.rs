//! Parsing of the tab-separated lock listing.

use crate::error::{LockwatchError, Result};

use super::types::{Lock, LockSet};

const FIELD_DELIMITER: char = '\t';
const FIELD_COUNT: usize = 3;

/// Parse the raw output of the lock listing into a [`LockSet`].
///
/// Every non-blank line must hold exactly three tab-separated fields:
/// file path, owner, and lock id. Fields are trimmed; a field that is empty
/// after trimming makes the line malformed. The first malformed line aborts
/// the whole parse, so a partial lock set is never returned.
///
/// Lines are applied in order; if an id repeats, the later line wins.
pub fn parse_lock_listing(raw: &str) -> Result<LockSet> {
    let mut locks = LockSet::new();

    for (index, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let lock = parse_lock_line(line).ok_or_else(|| LockwatchError::MalformedLockLine {
            line_number: index + 1,
            line: line.to_string(),
        })?;
        locks.insert(lock);
    }

    Ok(locks)
}

fn parse_lock_line(line: &str) -> Option<Lock> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    if fields.len() != FIELD_COUNT || fields.iter().any(|f| f.is_empty()) {
        return None;
    }

    Some(Lock::new(fields[0], fields[1], fields[2]))
}
