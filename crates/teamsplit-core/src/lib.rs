//! # teamsplit-core
//!
//! Pure domain crate for TeamSplit: the entities and rules behind organizing
//! an informal sports group ("turma") into two fixed teams.
//!
//! This crate has zero dependencies on OS APIs, storage backends, or UI
//! frameworks. The persistence layer (`teamsplit-store`) reads these types
//! from and writes them to a key-value store; the UI consumes both.
//!
//! It defines:
//!
//! - **`domain::player`** – the [`Player`] entity and the closed [`Team`]
//!   enumeration, including the wire labels rosters are persisted with.
//!
//! - **`domain::roster`** – the [`Roster`] value type: one group's
//!   insertion-ordered player list, enforcing name uniqueness across both
//!   teams.
//!
//! - **`domain::groups`** – the [`GroupSet`] value type: the unique,
//!   insertion-ordered set of group names.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `teamsplit_core::Player` instead of `teamsplit_core::domain::player::Player`.
pub use domain::groups::{GroupSet, GroupSetError};
pub use domain::player::{ParseTeamError, Player, Team};
pub use domain::roster::{Roster, RosterError};
