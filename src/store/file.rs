//! Snapshot-file backed store.
//!
//! A snapshot is a JSON object mapping storage keys to their values, as
//! dumped from the browser. Values are normally JSON-encoded strings;
//! any other JSON value is accepted and kept in its serialized form.

use super::KeyValueStore;
use crate::error::StoreError;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// How the snapshot file looked when it was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotState {
    /// Parsed successfully.
    Loaded,
    /// No file at the path.
    Missing,
    /// The file exists but could not be read or parsed.
    Unusable,
}

/// A [`KeyValueStore`] loaded from, and optionally written back to, a file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    state: SnapshotState,
}

impl JsonFileStore {
    /// Opens the snapshot at `path`.
    ///
    /// A missing, unreadable or malformed file yields an empty store.
    pub fn open(path: &Path) -> Self {
        let (entries, state) = match std::fs::read_to_string(path) {
            Ok(content) => match parse_snapshot(path, &content) {
                Some(entries) => (entries, SnapshotState::Loaded),
                None => (BTreeMap::new(), SnapshotState::Unusable),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Store snapshot {} not found, starting empty", path.display());
                (BTreeMap::new(), SnapshotState::Missing)
            }
            Err(e) => {
                warn!("Failed to read store snapshot {}: {}", path.display(), e);
                (BTreeMap::new(), SnapshotState::Unusable)
            }
        };

        info!("Loaded {} stored keys from {}", entries.len(), path.display());

        Self {
            path: path.to_path_buf(),
            entries,
            state,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> SnapshotState {
        self.state
    }

    /// Writes the current contents back to the snapshot file.
    ///
    /// Refuses to overwrite a file that could not be loaded, since its
    /// contents were never in memory.
    pub fn persist(&self) -> Result<(), StoreError> {
        if self.state == SnapshotState::Unusable {
            return Err(StoreError::Unusable {
                path: self.path.clone(),
            });
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!("Persisted {} keys to {}", self.entries.len(), self.path.display());
        Ok(())
    }
}

fn parse_snapshot(path: &Path, content: &str) -> Option<BTreeMap<String, String>> {
    let raw: BTreeMap<String, Value> = match serde_json::from_str(content) {
        Ok(map) => map,
        Err(e) => {
            warn!("Ignoring malformed store snapshot {}: {}", path.display(), e);
            return None;
        }
    };

    let entries = raw
        .into_iter()
        .map(|(key, value)| {
            let blob = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (key, blob)
        })
        .collect();

    Some(entries)
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
