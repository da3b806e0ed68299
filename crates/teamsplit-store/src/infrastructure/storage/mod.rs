//! Storage infrastructure: the key-value port, its adapters, and the
//! key-derivation convention.
//!
//! The application services never talk to a concrete backend. They hold a
//! [`StorageContext`] — a store handle behind the [`KeyValueStore`] trait,
//! the [`StorageKeys`] naming convention, and a shared [`KeyLocks`] table —
//! and everything else is an adapter concern:
//!
//! - [`memory::MemoryStore`] – process-local map; the test fake and the
//!   backend the app shell runs on when no data directory is available.
//! - [`json_file::FileStore`] – the durable backend; one JSON file holding
//!   the whole map, read and rewritten wholesale.
//! - [`config`] – the TOML configuration file, including the storage
//!   namespaces the key convention is derived from.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::{Mutex, OwnedMutexGuard};

pub mod config;
pub mod json_file;
pub mod memory;

/// Error type for storage backend operations.
///
/// Everything here is the "unexpected" failure tier: the UI never shows these
/// messages, it logs them and falls back to a generic alert.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing storage at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file exists but does not parse as a JSON map.
    #[error("storage file {path} is corrupted: {source}")]
    Corrupted {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory map could not be encoded for writing.
    #[error("failed to encode storage file: {0}")]
    Encode(#[source] serde_json::Error),
}

/// The flat key-value storage port.
///
/// An async, string-keyed, string-valued persistent map — the only storage
/// primitive the application services use. Implementations must treat
/// absence as a value, not an error: `get` on a missing key returns
/// `Ok(None)`, and `remove` on a missing key succeeds.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, overwriting unconditionally.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes `key`. Removing an absent key is a no-op, not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Returns all stored keys starting with `prefix`, sorted.
    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError>;
}

// ── Key derivation ────────────────────────────────────────────────────────────

/// Key-derivation convention for the two persisted collections.
///
/// The group-name list lives under one well-known key; each group's roster
/// lives under `"<player-namespace>-<group-name>"`. The store itself enforces
/// no relationship between the two — the cascade on group removal is the
/// group directory's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    groups_key: String,
    player_prefix: String,
}

impl StorageKeys {
    pub fn new(groups_key: impl Into<String>, player_prefix: impl Into<String>) -> Self {
        Self {
            groups_key: groups_key.into(),
            player_prefix: player_prefix.into(),
        }
    }

    /// The key holding the JSON array of group names.
    pub fn groups(&self) -> &str {
        &self.groups_key
    }

    /// The key holding the JSON roster array for `group`.
    pub fn roster(&self, group: &str) -> String {
        format!("{}-{}", self.player_prefix, group)
    }

    /// The prefix shared by every roster key.
    pub fn roster_prefix(&self) -> &str {
        &self.player_prefix
    }
}

impl Default for StorageKeys {
    /// The canonical namespaces the app persists under.
    fn default() -> Self {
        Self::new("@teamsplit:groups", "@teamsplit:players")
    }
}

// ── Per-key write serialization ───────────────────────────────────────────────

/// One async mutex per storage key.
///
/// Every mutating service operation is a read-modify-write cycle against the
/// store; two concurrent cycles on the same key would let the second write
/// silently clobber the first. Holding the key's lock across the whole cycle
/// serializes them. Reads are side-effect free and take no lock.
#[derive(Default)]
pub struct KeyLocks {
    locks: StdMutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl KeyLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock for `key`, creating it on first use.
    ///
    /// Lock entries are never evicted; the key space is bounded by the number
    /// of groups plus one.
    pub async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().expect("lock table poisoned");
            Arc::clone(locks.entry(key.to_string()).or_default())
        };
        lock.lock_owned().await
    }
}

// ── Service wiring ────────────────────────────────────────────────────────────

/// Everything a storage service is constructed from: the store handle, the
/// key convention, and the shared per-key lock table.
///
/// Clones share the same lock table. That is what makes the cascading delete
/// in the group directory safe to run alongside direct roster mutations —
/// both go through the same lock for the same roster key.
#[derive(Clone)]
pub struct StorageContext {
    store: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
    locks: Arc<KeyLocks>,
}

impl StorageContext {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self {
            store,
            keys,
            locks: Arc::new(KeyLocks::new()),
        }
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        &*self.store
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Acquires the write lock for `key`; held across a read-modify-write.
    pub async fn lock_key(&self, key: &str) -> OwnedMutexGuard<()> {
        self.locks.acquire(key).await
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
