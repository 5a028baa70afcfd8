//! Per-key alert cooldown registry.
//!
//! Maps `"{symbol}_{timeframe}"` to the last time an alert fired for that
//! key. The registry is read on every evaluation, written only when an
//! alert fires, and persisted as a whole-file JSON snapshot on every
//! write — the same shape the log tooling already understands
//! (`{"BTC/USDT_15m": "2025-03-04T12:30:00Z", ...}`).
//!
//! Entries are never evicted; the map grows with the set of keys that have
//! ever fired. That matches the intended lifecycle.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use indexmap::IndexMap;
use thiserror::Error;

/// Failures while loading or snapshotting the registry file.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Reading or writing the snapshot file failed.
    #[error("registry I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file exists but is not valid registry JSON.
    #[error("registry snapshot is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Last-alert times per (symbol, timeframe) key, backed by a JSON file.
#[derive(Debug)]
pub struct CooldownRegistry {
    path: PathBuf,
    entries: IndexMap<String, DateTime<Utc>>,
}

impl CooldownRegistry {
    /// Builds the registry key for one (symbol, timeframe) pair.
    pub fn key(symbol: &str, timeframe: &str) -> String {
        format!("{symbol}_{timeframe}")
    }

    /// Loads the snapshot at `path`; a missing file is an empty registry.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, RegistryError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => IndexMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    /// Whether an alert for `key` must be suppressed at `now`: a prior
    /// alert exists and less than `cooldown` has elapsed since it.
    pub fn suppressed(&self, key: &str, now: DateTime<Utc>, cooldown: Duration) -> bool {
        match self.entries.get(key) {
            Some(prior) => now - *prior < cooldown,
            None => false,
        }
    }

    /// The last-alert time recorded for `key`, if any.
    pub fn last_fired(&self, key: &str) -> Option<DateTime<Utc>> {
        self.entries.get(key).copied()
    }

    /// Records an alert at `now` for `key` and persists the whole snapshot.
    pub fn mark(&mut self, key: &str, now: DateTime<Utc>) -> Result<(), RegistryError> {
        self.entries.insert(key.to_string(), now);
        self.save()
    }

    /// Overwrites the snapshot file with the current contents.
    fn save(&self) -> Result<(), RegistryError> {
        let text = serde_json::to_string(&self.entries)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }

    /// Path of the backing snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
