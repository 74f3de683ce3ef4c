//! Runtime settings for lockwatch.
//!
//! Two settings are required, both read from the environment:
//! - `REPO_DIR`: path to the working copy whose LFS locks are watched
//! - `WEBHOOK_URL`: chat webhook that receives lock change reports
//!
//! Settings are validated once at startup so a bad value stops the process
//! before the first load instead of on first use.

use crate::error::{LockwatchError, Result};
use reqwest::Url;
use std::path::PathBuf;

/// Environment variable naming the repository working copy.
pub const REPO_DIR_VAR: &str = "REPO_DIR";

/// Environment variable naming the webhook destination.
pub const WEBHOOK_URL_VAR: &str = "WEBHOOK_URL";

/// Validated startup settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Existing directory containing the repository working copy.
    pub repo_dir: PathBuf,
    /// http(s) URL of the notification webhook.
    pub webhook_url: Url,
}

impl Settings {
    /// Read and validate settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read and validate only `REPO_DIR`, for commands that never notify.
    pub fn repo_dir_from_env() -> Result<PathBuf> {
        repo_dir(&|key: &str| std::env::var(key).ok())
    }

    /// Read and validate settings through an arbitrary variable lookup.
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - Both settings present and valid
    /// * `Err(LockwatchError::Config)` - A setting is missing, blank, or invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let repo_dir = repo_dir(&lookup)?;

        let raw_url = required(&lookup, WEBHOOK_URL_VAR)?;
        let webhook_url = Url::parse(&raw_url).map_err(|e| {
            LockwatchError::Config(format!(
                "{} '{}' is not a valid URL: {}",
                WEBHOOK_URL_VAR, raw_url, e
            ))
        })?;
        if !matches!(webhook_url.scheme(), "http" | "https") {
            return Err(LockwatchError::Config(format!(
                "{} must use http or https, got '{}'",
                WEBHOOK_URL_VAR,
                webhook_url.scheme()
            )));
        }

        Ok(Self {
            repo_dir,
            webhook_url,
        })
    }
}

fn repo_dir<F>(lookup: &F) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let repo_dir = PathBuf::from(required(lookup, REPO_DIR_VAR)?);
    if !repo_dir.is_dir() {
        return Err(LockwatchError::Config(format!(
            "{} '{}' is not an existing directory",
            REPO_DIR_VAR,
            repo_dir.display()
        )));
    }
    Ok(repo_dir)
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        Some(_) => Err(LockwatchError::Config(format!("{} is set but empty", key))),
        None => Err(LockwatchError::Config(format!(
            "{} is not set. Export it before starting lockwatch.",
            key
        ))),
    }
}
