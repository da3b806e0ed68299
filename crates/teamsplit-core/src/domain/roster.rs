//! Roster value type: one group's player list, split across the two teams.
//!
//! Insertion order is the display order — the list is never re-sorted, and
//! team filtering preserves the order players were added in.

use thiserror::Error;

use crate::domain::player::{Player, Team};

/// Errors raised by roster mutations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A player with this name is already in the roster, on either team.
    #[error("player name already in the roster: {0}")]
    DuplicateName(String),
}

/// The player list of one group.
///
/// Name uniqueness spans the whole roster: a name can only be on one team at
/// a time because [`Roster::add`] checks both teams, not just the target one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a player to the roster.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DuplicateName`] if any existing player — on
    /// either team — already has this name. No other validation is applied.
    pub fn add(&mut self, player: Player) -> Result<(), RosterError> {
        if self.contains(&player.name) {
            return Err(RosterError::DuplicateName(player.name));
        }
        self.players.push(player);
        Ok(())
    }

    /// Removes every entry whose name matches.
    ///
    /// Unknown names are a no-op; returns `true` if anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.name != name);
        self.players.len() != before
    }

    /// Returns `true` if any player, on either team, has this name.
    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    /// Players on the given team, in insertion order.
    pub fn by_team(&self, team: Team) -> Vec<Player> {
        self.players
            .iter()
            .filter(|p| p.team == team)
            .cloned()
            .collect()
    }

    /// All players in insertion order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Consumes the roster, yielding the raw player list for persistence.
    pub fn into_players(self) -> Vec<Player> {
        self.players
    }
}

impl From<Vec<Player>> for Roster {
    /// Wraps a persisted player list as-is. The list is trusted to have been
    /// written through [`Roster::add`] and is not re-checked for duplicates.
    fn from(players: Vec<Player>) -> Self {
        Self { players }
    }
}
