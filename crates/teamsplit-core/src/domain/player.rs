//! Player entity and the two-team enumeration.
//!
//! A player belongs to exactly one of the two fixed teams a group is split
//! into. The labels that appear on the wire ("Time A" / "Time B") are
//! preserved through serde renames, so rosters persisted by the original
//! mobile app keep deserializing unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the two fixed teams a group is split into.
///
/// The enumeration is closed: the system never deals in arbitrary team
/// labels, only these two. Each variant serializes as its display label,
/// matching the persisted roster layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// First team, persisted as `"Time A"`.
    #[serde(rename = "Time A")]
    A,
    /// Second team, persisted as `"Time B"`.
    #[serde(rename = "Time B")]
    B,
}

impl Team {
    /// Returns the wire/display label for this team.
    pub const fn label(self) -> &'static str {
        match self {
            Team::A => "Time A",
            Team::B => "Time B",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing a string that is not one of the two team labels.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown team label: {0}")]
pub struct ParseTeamError(pub String);

impl FromStr for Team {
    type Err = ParseTeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Time A" => Ok(Team::A),
            "Time B" => Ok(Team::B),
            other => Err(ParseTeamError(other.to_string())),
        }
    }
}

/// A named participant on one team within one group.
///
/// Names are unique within a group, never globally. The uniqueness rule is
/// enforced by [`Roster::add`](crate::domain::roster::Roster::add), not here,
/// and input validation (empty or whitespace-only names) stays with the
/// caller-facing UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, unique within the owning group.
    pub name: String,
    /// The team this player was placed on.
    pub team: Team,
}

impl Player {
    pub fn new(name: impl Into<String>, team: Team) -> Self {
        Self {
            name: name.into(),
            team,
        }
    }
}
