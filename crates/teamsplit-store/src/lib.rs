//! teamsplit-store library entry point.
//!
//! Persistence core for TeamSplit: the application services the UI calls
//! (`application`) and the key-value storage port plus its adapters and
//! configuration (`infrastructure`). Re-exports both module trees so that
//! integration tests in `tests/` and the UI shell share the same paths.

pub mod application;
pub mod infrastructure;
