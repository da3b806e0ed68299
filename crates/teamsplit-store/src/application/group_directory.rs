//! GroupDirectory: maintains the unique set of group names.
//!
//! Every mutation is one read-modify-write cycle against the group-list key,
//! held under that key's lock. The full list is re-read and rewritten each
//! time, so a failed write never leaves a partially merged list behind.

use teamsplit_core::{GroupSet, GroupSetError};
use tracing::{error, info};

use crate::application::player_roster::PlayerRoster;
use crate::application::{AppError, Result};
use crate::infrastructure::storage::StorageContext;

/// Directory of all group names, with cascading removal of rosters.
///
/// Cheap to clone; clones share the storage context and its lock table.
#[derive(Clone)]
pub struct GroupDirectory {
    ctx: StorageContext,
    roster: PlayerRoster,
}

impl GroupDirectory {
    /// Builds the directory on a storage context.
    ///
    /// The internal roster handle shares the context's lock table, so the
    /// cascade in [`remove_group`](Self::remove_group) serializes against
    /// direct roster mutations on the same group.
    pub fn new(ctx: StorageContext) -> Self {
        Self {
            roster: PlayerRoster::new(ctx.clone()),
            ctx,
        }
    }

    /// All group names, in the order they were created.
    ///
    /// An absent list reads as empty, never as an error.
    pub async fn list_groups(&self) -> Result<Vec<String>> {
        Ok(self.load_set().await?.into_names())
    }

    /// Returns `true` if a group with this name is registered.
    pub async fn group_exists(&self, name: &str) -> Result<bool> {
        Ok(self.list_groups().await?.iter().any(|n| n == name))
    }

    /// Registers a new group.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateGroup`] — without writing anything — if
    /// the name is already registered.
    pub async fn create_group(&self, name: &str) -> Result<()> {
        let _guard = self.ctx.lock_key(self.ctx.keys().groups()).await;

        let mut set = self.load_set().await?;
        set.insert(name).map_err(|e| match e {
            GroupSetError::DuplicateName(name) => AppError::DuplicateGroup { name },
        })?;
        self.persist_set(set).await?;

        info!("group created: {name}");
        Ok(())
    }

    /// Removes a group and everything it owns.
    ///
    /// The store has no foreign keys, so the cascade is explicit: the group's
    /// roster key is deleted first, then the group list is rewritten with the
    /// name filtered out. Removing a group that does not exist is a no-op,
    /// not an error.
    pub async fn remove_group(&self, name: &str) -> Result<()> {
        // Lock ordering: group-list key first, then (inside the roster call)
        // the group's roster key. No operation acquires them the other way
        // around.
        let _guard = self.ctx.lock_key(self.ctx.keys().groups()).await;

        self.roster.remove_all_players(name).await?;

        let mut set = self.load_set().await?;
        let removed = set.remove(name);
        self.persist_set(set).await?;

        if removed {
            info!("group removed: {name}");
        }
        Ok(())
    }

    async fn load_set(&self) -> Result<GroupSet> {
        let key = self.ctx.keys().groups();
        let stored = self.ctx.store().get(key).await.map_err(|e| {
            error!("group list read failed: {e}");
            e
        })?;

        let names = match stored {
            Some(raw) => serde_json::from_str::<Vec<String>>(&raw).map_err(|source| {
                error!("stored group list under {key} is malformed: {source}");
                AppError::Malformed {
                    key: key.to_string(),
                    source,
                }
            })?,
            None => Vec::new(),
        };
        Ok(GroupSet::from(names))
    }

    async fn persist_set(&self, set: GroupSet) -> Result<()> {
        let key = self.ctx.keys().groups();
        let raw = serde_json::to_string(&set.into_names()).map_err(|source| AppError::Malformed {
            key: key.to_string(),
            source,
        })?;

        self.ctx.store().set(key, &raw).await.map_err(|e| {
            error!("group list write failed: {e}");
            e
        })?;
        Ok(())
    }
}
