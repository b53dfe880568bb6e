//! Local key-value store access.
//!
//! The dashboard's only data source is the browser's local storage.
//! This module models it as a string-to-string map behind the
//! [`KeyValueStore`] trait, with an in-memory implementation and one
//! backed by a JSON snapshot file.

mod file;
mod reader;

pub use file::{JsonFileStore, SnapshotState};
pub use reader::StoreReader;

#[cfg(test)]
use std::collections::BTreeMap;

/// Key holding the signed-in user profile.
pub const USER_KEY: &str = "user";
/// Key holding the ordered list of uploaded lectures.
pub const LECTURES_KEY: &str = "courseLectures";
/// Key holding the ordered list of enrolled students.
pub const STUDENTS_KEY: &str = "enrolledStudents";

/// A string key-value store with local-storage semantics.
pub trait KeyValueStore {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Removes `key`. Removing a missing key is a no-op.
    fn remove(&mut self, key: &str);
}

/// In-memory store used by tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.entries.insert(key.to_string(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
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
