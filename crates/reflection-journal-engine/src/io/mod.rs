//! Filesystem access: journal exports and the persisted cooldown timestamp.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{comments::validation::LastSubmissionStore, models::journal::Journal};

/// File, inside a state directory, holding the last successful submission time.
pub const LAST_SUBMISSION_FILE: &str = "last_comment_at";

#[derive(Debug, Error)]
pub enum IoError {
    #[error("Journal file not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse journal at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Reads a TOML export with `[[entries]]` and `[[comments]]` tables.
pub fn load_journal(path: &Path) -> Result<Journal, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let journal: Journal = toml::from_str(&content).map_err(|source| IoError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "loaded {} entries and {} comments from {}",
        journal.entries.len(),
        journal.comments.len(),
        path.display()
    );
    Ok(journal)
}

/// Keeps the cooldown timestamp in a small file so it survives restarts.
///
/// Failures are logged and otherwise ignored; a lost timestamp only means
/// the next submission skips the cooldown.
#[derive(Debug, Clone)]
pub struct FileLastSubmission {
    path: PathBuf,
}

impl FileLastSubmission {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(LAST_SUBMISSION_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, at: DateTime<Utc>) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, at.to_rfc3339())
    }
}

impl LastSubmissionStore for FileLastSubmission {
    fn last(&self) -> Option<DateTime<Utc>> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match DateTime::parse_from_rfc3339(content.trim()) {
            Ok(at) => Some(at.with_timezone(&Utc)),
            Err(e) => {
                log::warn!("ignoring unreadable {}: {e}", self.path.display());
                None
            }
        }
    }

    fn record(&mut self, at: DateTime<Utc>) {
        if let Err(e) = self.write(at) {
            log::warn!("failed to record submission time in {}: {e}", self.path.display());
        }
    }
}
