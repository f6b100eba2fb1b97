//! In-memory roster store.

use std::collections::HashMap;

use super::{RosterStore, StoreError};
use crate::core::RosterEntry;

#[derive(Clone, Debug, Default)]
pub struct MemoryRosterStore {
    rosters: HashMap<String, Vec<RosterEntry>>,
    saves: usize,
}

impl MemoryRosterStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `roster` under `key`.
    pub fn with_roster(key: impl Into<String>, roster: Vec<RosterEntry>) -> Self {
        let mut rosters = HashMap::new();
        rosters.insert(key.into(), roster);
        Self { rosters, saves: 0 }
    }

    /// Number of successful saves.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[RosterEntry]> {
        self.rosters.get(key).map(Vec::as_slice)
    }
}

impl RosterStore for MemoryRosterStore {
    fn load(&self, key: &str) -> Result<Option<Vec<RosterEntry>>, StoreError> {
        Ok(self.rosters.get(key).cloned())
    }

    fn save(&mut self, key: &str, roster: &[RosterEntry]) -> Result<(), StoreError> {
        self.rosters.insert(key.to_string(), roster.to_vec());
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_absent() {
        let store = MemoryRosterStore::new();
        assert_eq!(store.load("players").unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryRosterStore::new();
        let roster = vec![RosterEntry::new("Ana"), RosterEntry::new("Bo")];
        store.save("players", &roster).unwrap();

        assert_eq!(store.load("players").unwrap(), Some(roster));
        assert_eq!(store.load("other").unwrap(), None);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn test_with_roster() {
        let store = MemoryRosterStore::with_roster("players", vec![RosterEntry::new("Ana")]);
        assert_eq!(store.get("players"), Some(&[RosterEntry::new("Ana")][..]));
        assert_eq!(store.saves(), 0);
    }
}
