//! Soft-failing typed reads over a [`KeyValueStore`].

use super::{KeyValueStore, LECTURES_KEY, STUDENTS_KEY, USER_KEY};
use crate::models::{StoredLecture, Student, UserProfile};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Reads dashboard collections from a store.
///
/// Every read degrades to "no data": a missing key yields `None` or an
/// empty collection, and so does a value that is not valid JSON or does
/// not match the expected shape.
pub struct StoreReader<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> StoreReader<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Returns the raw blob stored under `key`.
    pub fn read(&self, key: &str) -> Option<String> {
        let value = self.store.get(key);
        if value.is_none() {
            debug!("No value stored under '{}'", key);
        }
        value
    }

    /// Parses the value under `key` as `T`.
    pub fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.read(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring malformed value under '{}': {}", key, e);
                None
            }
        }
    }

    /// Parses the value under `key` as a list, empty when absent or malformed.
    pub fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.read_json::<Vec<T>>(key).unwrap_or_default()
    }

    pub fn read_user(&self) -> Option<UserProfile> {
        self.read_json(USER_KEY)
    }

    pub fn read_lectures(&self) -> Vec<StoredLecture> {
        self.read_collection(LECTURES_KEY)
    }

    pub fn read_students(&self) -> Vec<Student> {
        self.read_collection(STUDENTS_KEY)
    }
}
