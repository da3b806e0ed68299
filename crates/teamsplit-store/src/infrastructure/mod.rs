//! Infrastructure layer for the persistence core.
//!
//! Contains everything that touches the outside world: the key-value storage
//! port and its adapters, and the configuration file.
//!
//! **Dependency rule**: this layer may depend on `teamsplit_core`, but the
//! domain crate never imports from here.

pub mod storage;
