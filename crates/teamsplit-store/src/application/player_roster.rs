//! PlayerRoster: maintains the players of one group, split by team.
//!
//! Rosters are partitioned per group: each group's list lives under its own
//! storage key, derived from the group name. Mutations hold that key's lock
//! across the whole read-modify-write cycle.

use teamsplit_core::{Player, Roster, RosterError, Team};
use tracing::{error, info};

use crate::application::{AppError, Result};
use crate::infrastructure::storage::StorageContext;

/// Service for one-group player lists.
///
/// Cheap to clone; clones share the storage context and its lock table.
#[derive(Clone)]
pub struct PlayerRoster {
    ctx: StorageContext,
}

impl PlayerRoster {
    pub fn new(ctx: StorageContext) -> Self {
        Self { ctx }
    }

    /// All players of `group`, in insertion order.
    ///
    /// An absent roster reads as empty, never as an error.
    pub async fn list_players(&self, group: &str) -> Result<Vec<Player>> {
        Ok(self.load_roster(group).await?.into_players())
    }

    /// Players of `group` on `team`, filtered client-side from the full
    /// roster; insertion order is preserved.
    pub async fn list_players_by_team(&self, group: &str, team: Team) -> Result<Vec<Player>> {
        Ok(self.load_roster(group).await?.by_team(team))
    }

    /// Adds a player to `group`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicatePlayer`] — without writing anything — if
    /// any player in the roster, on either team, already has this name.
    pub async fn add_player(&self, player: Player, group: &str) -> Result<()> {
        let key = self.ctx.keys().roster(group);
        let _guard = self.ctx.lock_key(&key).await;

        let mut roster = self.load_roster(group).await?;
        let name = player.name.clone();
        roster.add(player).map_err(|e| match e {
            RosterError::DuplicateName(name) => AppError::DuplicatePlayer { name },
        })?;
        self.persist_roster(&key, roster).await?;

        info!("player added to {group}: {name}");
        Ok(())
    }

    /// Removes every player named `name` from `group` and rewrites the full
    /// list. Unknown names are a no-op on the roster.
    pub async fn remove_player(&self, name: &str, group: &str) -> Result<()> {
        let key = self.ctx.keys().roster(group);
        let _guard = self.ctx.lock_key(&key).await;

        let mut roster = self.load_roster(group).await?;
        let removed = roster.remove(name);
        self.persist_roster(&key, roster).await?;

        if removed {
            info!("player removed from {group}: {name}");
        }
        Ok(())
    }

    /// Deletes the whole roster key for `group`.
    ///
    /// Used by the group directory when a group is removed; the store has no
    /// cascading delete of its own.
    pub async fn remove_all_players(&self, group: &str) -> Result<()> {
        let key = self.ctx.keys().roster(group);
        let _guard = self.ctx.lock_key(&key).await;

        self.ctx.store().remove(&key).await.map_err(|e| {
            error!("roster delete failed for {group}: {e}");
            e
        })?;
        Ok(())
    }

    async fn load_roster(&self, group: &str) -> Result<Roster> {
        let key = self.ctx.keys().roster(group);
        let stored = self.ctx.store().get(&key).await.map_err(|e| {
            error!("roster read failed for {group}: {e}");
            e
        })?;

        let players = match stored {
            Some(raw) => serde_json::from_str::<Vec<Player>>(&raw).map_err(|source| {
                error!("stored roster under {key} is malformed: {source}");
                AppError::Malformed { key, source }
            })?,
            None => Vec::new(),
        };
        Ok(Roster::from(players))
    }

    async fn persist_roster(&self, key: &str, roster: Roster) -> Result<()> {
        let raw =
            serde_json::to_string(&roster.into_players()).map_err(|source| AppError::Malformed {
                key: key.to_string(),
                source,
            })?;

        self.ctx.store().set(key, &raw).await.map_err(|e| {
            error!("roster write failed: {e}");
            e
        })?;
        Ok(())
    }
}
