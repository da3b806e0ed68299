//! Application services: the storage-facing use cases the UI calls.
//!
//! - **`group_directory`** – maintains the unique set of group names and owns
//!   the cascading delete of a removed group's roster.
//! - **`player_roster`** – maintains one group's players, split across the
//!   two teams.
//!
//! Both services depend on the
//! [`KeyValueStore`](crate::infrastructure::storage::KeyValueStore)
//! abstraction, never on a concrete backend, and surface every failure
//! through [`AppError`].

use thiserror::Error;

use crate::infrastructure::storage::StoreError;

pub mod group_directory;
pub mod player_roster;

/// Application-level error taxonomy, in two tiers.
///
/// **Conflicts** ([`DuplicateGroup`](AppError::DuplicateGroup),
/// [`DuplicatePlayer`](AppError::DuplicatePlayer)) are expected and
/// user-actionable; their `Display` text is the exact message the UI shows
/// verbatim.
///
/// **Unexpected failures** ([`Store`](AppError::Store),
/// [`Malformed`](AppError::Malformed)) are logged where they are detected and
/// propagated unchanged; the UI replaces them with its own generic,
/// operation-specific fallback message.
///
/// [`user_message`](AppError::user_message) discriminates the two tiers, so
/// callers never resort to error-type inspection.
#[derive(Debug, Error)]
pub enum AppError {
    /// A group with the same name is already registered.
    #[error("a group with this name already exists")]
    DuplicateGroup {
        /// The rejected name.
        name: String,
    },

    /// A player with the same name is already on one of the group's teams.
    #[error("this person is already on one of the teams")]
    DuplicatePlayer {
        /// The rejected name.
        name: String,
    },

    /// The storage backend failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A persisted value did not decode as its expected JSON shape.
    #[error("malformed JSON under storage key {key}: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl AppError {
    /// The message to display verbatim, if this is a conflict the user can
    /// act on; `None` for unexpected failures.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::DuplicateGroup { .. } | Self::DuplicatePlayer { .. } => Some(self.to_string()),
            Self::Store(_) | Self::Malformed { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
