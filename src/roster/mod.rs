//! Roster persistence.
//!
//! The store is deliberately narrow: load the whole roster, save the whole
//! roster, under one fixed key. Any backend that can do that will serve.
//!
//! - [`MemoryRosterStore`]: in-process, for tests and embedding
//! - [`JsonFileRosterStore`]: a JSON key-value file on disk

mod file;
mod memory;

pub use file::JsonFileRosterStore;
pub use memory::MemoryRosterStore;

use thiserror::Error;

use crate::core::RosterEntry;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("roster store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("roster store holds malformed data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load/save contract for the player roster.
pub trait RosterStore {
    /// The roster saved under `key`, or `None` if nothing was ever saved.
    fn load(&self, key: &str) -> Result<Option<Vec<RosterEntry>>, StoreError>;

    /// Replace the roster saved under `key`.
    fn save(&mut self, key: &str, roster: &[RosterEntry]) -> Result<(), StoreError>;
}

impl<S: RosterStore + ?Sized> RosterStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<Vec<RosterEntry>>, StoreError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, roster: &[RosterEntry]) -> Result<(), StoreError> {
        (**self).save(key, roster)
    }
}
