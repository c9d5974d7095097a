use crate::error::{AdScoreError, Result};
use crate::scoring::PassOutcome;
use crate::types::config::MissingPicturePolicy;
use chrono::NaiveDate;
use chrono_tz::Tz;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Inputs that determine the result of a scoring pass.
#[derive(Debug, Clone, Copy)]
pub struct PassKey<'a> {
    pub data: &'a [u8],
    pub irrelevant_date: NaiveDate,
    pub timezone: Tz,
    pub policy: MissingPicturePolicy,
}

impl PassKey<'_> {
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(env!("CARGO_PKG_VERSION").as_bytes());
        hasher.update([0]);
        hasher.update(self.irrelevant_date.to_string().as_bytes());
        hasher.update([0]);
        hasher.update(self.timezone.name().as_bytes());
        hasher.update([0]);
        hasher.update(self.policy.as_str().as_bytes());
        hasher.update([0]);
        hasher.update(self.data);
        format!("{:x}", hasher.finalize())
    }
}

/// Read-through store of scoring passes, one JSON file per [`PassKey`] digest.
#[derive(Debug, Clone)]
pub struct ScoreCache {
    dir: PathBuf,
}

impl ScoreCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, digest: &str) -> PathBuf {
        self.dir.join(format!("pass-{digest}.json"))
    }

    /// An unreadable or corrupt entry counts as a miss and gets overwritten.
    pub fn get(&self, key: &PassKey<'_>) -> Option<PassOutcome> {
        let path = self.entry_path(&key.digest());
        if !path.is_file() {
            return None;
        }
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable cache entry");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring corrupt cache entry");
                None
            }
        }
    }

    pub fn put(&self, key: &PassKey<'_>, outcome: &PassOutcome) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(AdScoreError::Io)?;
        let path = self.entry_path(&key.digest());
        let json = serde_json::to_string(outcome)?;
        fs::write(&path, json).map_err(AdScoreError::Io)?;
        Ok(path)
    }

    /// Return the cached outcome for `key`, or compute, store and return it.
    /// A failed store is logged; only scoring errors reach the caller.
    pub fn get_or_score<F>(&self, key: &PassKey<'_>, score: F) -> Result<PassOutcome>
    where
        F: FnOnce() -> Result<PassOutcome>,
    {
        if let Some(outcome) = self.get(key) {
            info!(dir = %self.dir.display(), "score cache hit");
            return Ok(outcome);
        }
        info!(dir = %self.dir.display(), "score cache miss");
        let outcome = score()?;
        if let Err(e) = self.put(key, &outcome) {
            warn!(dir = %self.dir.display(), error = %e, "failed to store scoring pass");
        }
        Ok(outcome)
    }
}
