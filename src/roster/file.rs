//! JSON key-value file store.
//!
//! The file is a single JSON object. Each key holds one roster as an array
//! of `{"name": ...}` records; other keys in the file are left alone.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::{RosterStore, StoreError};
use crate::core::RosterEntry;

#[derive(Clone, Debug)]
pub struct JsonFileRosterStore {
    path: PathBuf,
}

impl JsonFileRosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All keys in the file. A missing file is an empty map.
    fn read_map(&self) -> Result<BTreeMap<String, Value>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl RosterStore for JsonFileRosterStore {
    fn load(&self, key: &str) -> Result<Option<Vec<RosterEntry>>, StoreError> {
        let mut map = self.read_map()?;
        let roster = match map.remove(key) {
            Some(value) => Some(serde_json::from_value(value)?),
            None => None,
        };
        debug!(path = %self.path.display(), key, found = roster.is_some(), "roster loaded");
        Ok(roster)
    }

    fn save(&mut self, key: &str, roster: &[RosterEntry]) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), serde_json::to_value(roster)?);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&map)?)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), key, players = roster.len(), "roster saved");
        Ok(())
    }
}
