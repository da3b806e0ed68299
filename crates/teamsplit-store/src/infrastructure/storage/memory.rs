//! In-memory key-value store.
//!
//! The storage fake for unit and integration tests, and the backend the app
//! shell falls back to when no data directory is available. Never fails.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{KeyValueStore, StoreError};

/// A [`KeyValueStore`] backed by a process-local map.
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Injects a raw entry, as if it had been persisted by an earlier run.
    pub async fn seed(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.lock().await.insert(key.into(), value.into());
    }

    /// Returns the raw stored string for `key`, for asserting on the exact
    /// persisted layout in tests.
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().await.get(key).cloned()
    }

    /// Number of stored entries.
    pub async fn entry_count(&self) -> usize {
        self.entries.lock().await.len()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.lock().await.remove(key);
        Ok(())
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let mut keys: Vec<String> = self
            .entries
            .lock()
            .await
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }
}
