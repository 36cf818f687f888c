//! # Sync pipelines
//!
//! The two repovault runs: [`WhitelistBootstrap`] walks the remote tree and
//! emits the human-editable checklist; [`SyncEngine`] walks the same tree
//! and materializes a note for every checked file, isolating per-file
//! failures so one bad file never aborts the rest of the run.

pub mod bootstrap;
pub mod engine;
pub mod error;

pub use bootstrap::WhitelistBootstrap;
pub use engine::{SyncEngine, SyncFailure, SyncReport};
pub use error::{SyncError, SyncResult};
