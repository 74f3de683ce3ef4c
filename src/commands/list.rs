//! Implementation of the `lockwatch list` command.

use crate::config::Settings;
use crate::error::Result;
use crate::locks::{GitLfsLockSource, LockSet, LockSource};

pub fn cmd_list() -> Result<()> {
    let repo_dir = Settings::repo_dir_from_env()?;
    let locks = GitLfsLockSource::new(repo_dir).load()?;
    print!("{}", render_locks(&locks));
    Ok(())
}

fn render_locks(locks: &LockSet) -> String {
    if locks.is_empty() {
        return "No locks held.\n".to_string();
    }

    let id_width = locks.ids().map(str::len).max().unwrap_or(0);
    let mut out = format!("Locks: {}\n", locks.len());
    for lock in locks.sorted() {
        out.push_str(&format!(
            "  {:<width$}  {}  ({})\n",
            lock.id,
            lock.file,
            lock.owner,
            width = id_width
        ));
    }
    out
}
