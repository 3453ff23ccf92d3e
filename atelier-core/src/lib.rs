//! Atelier core library — root-path lifecycle, project directories, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes, stored and reconstructed location handles
//! - [`error`] — [`AtelierError`]
//! - [`state`] — the persisted per-installation state file
//! - [`registry`] — install / repair / reset the root
//! - [`projects`] — create / list project directories under the root

pub mod error;
pub mod projects;
pub mod registry;
pub mod state;
pub mod types;

pub use error::AtelierError;
pub use registry::RootStatus;
pub use types::{Location, ProjectName, StoredLocation};
