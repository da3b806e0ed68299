//! Domain entities for TeamSplit.
//!
//! Pure business logic with no infrastructure dependencies: the types here
//! can be compiled and unit-tested on any platform without external setup.
//! Outer layers (the storage services in `teamsplit-store`, the UI) depend on
//! this module; it never depends on them.

/// Group-name set — the unique, insertion-ordered list of group names.
pub mod groups;

/// Player entity and the two-team enumeration.
pub mod player;

/// Roster — one group's player list, split across the two teams.
pub mod roster;
