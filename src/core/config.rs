//! Table configuration.
//!
//! Defaults reproduce the classic rules: at least 3 players, a Mr. White
//! joins from 4 players up, and the roster lives under the `players` key.
//! Tables can override any of it, including the word catalog, from TOML:
//!
//! ```
//! use undercover::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str(r#"
//!     mr_white_min_players = 5
//!
//!     [[word_pairs]]
//!     civilian = "Coffee"
//!     undercover = "Tea"
//! "#).unwrap();
//!
//! assert_eq!(config.min_players, 3);
//! assert_eq!(config.mr_white_min_players, 5);
//! assert_eq!(config.catalog().unwrap().len(), 1);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, GameError};
use crate::words::{WordCatalog, WordPair};

/// Fewest players the rules can work with: one undercover and two
/// civilians.
pub const MIN_TABLE_SIZE: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Smallest roster that can start a game.
    pub min_players: usize,

    /// Smallest roster that gets a Mr. White.
    pub mr_white_min_players: usize,

    /// Placeholder word shown to Mr. White.
    pub mr_white_word: String,

    /// Key the roster is stored under.
    pub roster_key: String,

    /// Custom catalog. `None` uses the built-in pairs.
    pub word_pairs: Option<Vec<WordPair>>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: MIN_TABLE_SIZE,
            mr_white_min_players: MIN_TABLE_SIZE + 1,
            mr_white_word: "Mr. White".to_string(),
            roster_key: "players".to_string(),
            word_pairs: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum roster size.
    #[must_use]
    pub fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min;
        self
    }

    /// Set the roster size from which a Mr. White is dealt.
    #[must_use]
    pub fn with_mr_white_min_players(mut self, min: usize) -> Self {
        self.mr_white_min_players = min;
        self
    }

    #[must_use]
    pub fn with_mr_white_word(mut self, word: impl Into<String>) -> Self {
        self.mr_white_word = word.into();
        self
    }

    #[must_use]
    pub fn with_roster_key(mut self, key: impl Into<String>) -> Self {
        self.roster_key = key.into();
        self
    }

    #[must_use]
    pub fn with_word_pairs(mut self, pairs: Vec<WordPair>) -> Self {
        self.word_pairs = Some(pairs);
        self
    }

    /// Does a roster of this size get a Mr. White?
    #[must_use]
    pub fn deals_mr_white(&self, player_count: usize) -> bool {
        player_count >= self.mr_white_min_players
    }

    /// Build the catalog this config draws from.
    pub fn catalog(&self) -> Result<WordCatalog, GameError> {
        match &self.word_pairs {
            Some(pairs) => WordCatalog::new(pairs.clone()),
            None => Ok(WordCatalog::builtin()),
        }
    }

    /// Check the config can run a game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.min_players < MIN_TABLE_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "min_players must be at least {MIN_TABLE_SIZE}, got {}",
                self.min_players
            )));
        }
        if self.mr_white_min_players <= MIN_TABLE_SIZE {
            return Err(GameError::InvalidConfig(format!(
                "mr_white_min_players must be above {MIN_TABLE_SIZE}, got {}",
                self.mr_white_min_players
            )));
        }
        if self.mr_white_min_players < self.min_players {
            return Err(GameError::InvalidConfig(format!(
                "mr_white_min_players ({}) is below min_players ({})",
                self.mr_white_min_players, self.min_players
            )));
        }
        if self.mr_white_word.trim().is_empty() {
            return Err(GameError::InvalidConfig("mr_white_word cannot be blank".into()));
        }
        if self.roster_key.is_empty() {
            return Err(GameError::InvalidConfig("roster_key cannot be empty".into()));
        }
        self.catalog()?;
        Ok(())
    }

    /// Parse and validate a TOML config.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.min_players, 3);
        assert!(!config.deals_mr_white(3));
        assert!(config.deals_mr_white(4));
        assert_eq!(config.mr_white_word, "Mr. White");
        assert_eq!(config.roster_key, "players");
        assert!(config.validate().is_ok());
        assert_eq!(config.catalog().unwrap(), WordCatalog::builtin());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_min_players(4)
            .with_mr_white_min_players(6)
            .with_mr_white_word("???")
            .with_roster_key("table");

        assert_eq!(config.min_players, 4);
        assert!(!config.deals_mr_white(5));
        assert!(config.deals_mr_white(6));
        assert_eq!(config.mr_white_word, "???");
        assert_eq!(config.roster_key, "table");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_small_tables() {
        let config = GameConfig::new().with_min_players(2);
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        let config = GameConfig::new().with_mr_white_min_players(2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_catalog() {
        let config = GameConfig::new().with_word_pairs(vec![WordPair::new("Tea", "Tea")]);
        assert!(matches!(config.validate(), Err(GameError::InvalidCatalog(_))));
    }

    #[test]
    fn test_toml_empty_is_default() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_toml_invalid() {
        assert!(matches!(
            GameConfig::from_toml_str("min_players = \"three\""),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            GameConfig::from_toml_str("min_players = 1"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("undercover-config-does-not-exist.toml");
        assert!(matches!(GameConfig::load(&path), Err(ConfigError::Io(_))));
    }
}
