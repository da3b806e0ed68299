//! JSON-file key-value store.
//!
//! The durable backend: the whole key→value map is one JSON object on disk,
//! read and rewritten wholesale on every mutation. The data set — a handful
//! of groups and their rosters — is small enough that this stays cheap, and
//! replacing the entire file keeps every mutation atomic-by-replacement from
//! the caller's perspective.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{KeyValueStore, StoreError};

/// A [`KeyValueStore`] persisted as a single JSON object.
///
/// The backing map is a `BTreeMap` so the file layout is deterministic and
/// diffable across writes. An internal mutex serializes the file
/// read-modify-write cycles; the per-key locks in
/// [`KeyLocks`](super::KeyLocks) serialize the logical operations above this
/// layer.
pub struct FileStore {
    path: PathBuf,
    io_guard: Mutex<()>,
}

impl FileStore {
    /// Creates a store backed by `path`.
    ///
    /// The file is created lazily on the first write; until then — and
    /// whenever the file is missing — reads see an empty map.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| StoreError::Corrupted {
                    path: self.path.clone(),
                    source,
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    async fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        // Ensure the data directory exists before the first write.
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| StoreError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }

        let content = serde_json::to_string_pretty(map).map_err(StoreError::Encode)?;
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _io = self.io_guard.lock().await;
        Ok(self.read_map().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _io = self.io_guard.lock().await;
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _io = self.io_guard.lock().await;
        let mut map = self.read_map().await?;
        if map.remove(key).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let _io = self.io_guard.lock().await;
        // BTreeMap iteration is already sorted.
        Ok(self
            .read_map()
            .await?
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("teamsplit_test_{}", uuid::Uuid::new_v4()))
            .join("storage.json")
    }

    fn cleanup(path: &Path) {
        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).ok();
        }
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty_map() {
        let path = temp_path();
        let store = FileStore::new(&path);

        assert_eq!(store.get("anything").await.unwrap(), None);
        assert!(store.keys("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_set_creates_directory_and_round_trips() {
        let path = temp_path();
        let store = FileStore::new(&path);

        store.set("k", "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
        assert!(store.path().exists());

        cleanup(&path);
    }

    #[tokio::test]
    async fn test_data_survives_reopening_the_store() {
        let path = temp_path();
        {
            let store = FileStore::new(&path);
            store.set("k", "v").await.unwrap();
        }

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("k").await.unwrap().as_deref(), Some("v"));

        cleanup(&path);
    }

    #[tokio::test]
    async fn test_remove_deletes_and_is_idempotent() {
        let path = temp_path();
        let store = FileStore::new(&path);

        store.set("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);

        // Absent key: no error, no write
        store.remove("k").await.unwrap();

        cleanup(&path);
    }

    #[tokio::test]
    async fn test_corrupted_file_surfaces_as_error_not_reset() {
        let path = temp_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        let err = store.get("k").await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupted { .. }));

        cleanup(&path);
    }

    #[tokio::test]
    async fn test_keys_filters_by_prefix_in_sorted_order() {
        let path = temp_path();
        let store = FileStore::new(&path);

        store.set("app:b", "1").await.unwrap();
        store.set("app:a", "2").await.unwrap();
        store.set("zzz", "3").await.unwrap();

        assert_eq!(store.keys("app:").await.unwrap(), ["app:a", "app:b"]);

        cleanup(&path);
    }

    #[tokio::test]
    async fn test_file_layout_is_deterministic() {
        let path = temp_path();
        let store = FileStore::new(&path);

        store.set("b", "2").await.unwrap();
        store.set("a", "1").await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let a_pos = content.find("\"a\"").unwrap();
        let b_pos = content.find("\"b\"").unwrap();
        assert!(a_pos < b_pos, "keys must be written in sorted order");

        cleanup(&path);
    }
}
