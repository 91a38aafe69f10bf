//! Projector: Directory-Scoped Settings
//!
//! Key/value settings attached to directories. A key resolves from the
//! current location upward to `/`, so deeper directories override their
//! ancestors; set and remove only ever touch the current location's scope.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod scope;
pub mod store;
