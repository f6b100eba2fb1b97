//! Error types.
//!
//! Every rejected event leaves the session untouched, so these are all
//! reported to the table and play continues.

use thiserror::Error;

use super::event::EventKind;
use super::phase::Phase;
use crate::roster::StoreError;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("You need at least {required} players to start the game.")]
    NotEnoughPlayers { required: usize, actual: usize },

    #[error("player name cannot be blank")]
    BlankName,

    #[error("a player named {0:?} is already on the roster")]
    DuplicateName(String),

    #[error("no player at position {index} (roster has {len})")]
    PlayerIndexOutOfRange { index: usize, len: usize },

    #[error("no player named {0:?} in this game")]
    UnknownPlayer(String),

    #[error("{0} has already been eliminated")]
    AlreadyEliminated(String),

    #[error("cannot {event} during the {phase} phase")]
    WrongPhase { event: EventKind, phase: Phase },

    #[error("the current word is not revealed")]
    WordHidden,

    #[error("invalid word catalog: {0}")]
    InvalidCatalog(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl GameError {
    /// Validation errors are the user's to fix; the rest come from storage.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, GameError::Store(_))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] GameError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_enough_players_message() {
        let err = GameError::NotEnoughPlayers { required: 3, actual: 2 };
        assert_eq!(err.to_string(), "You need at least 3 players to start the game.");
        assert!(err.is_validation());
    }

    #[test]
    fn test_wrong_phase_message() {
        let err = GameError::WrongPhase {
            event: EventKind::BeginVoting,
            phase: Phase::Setup,
        };
        assert_eq!(err.to_string(), "cannot begin voting during the setup phase");
    }

    #[test]
    fn test_store_error_is_not_validation() {
        let err = GameError::from(StoreError::Io(std::io::Error::other("disk full")));
        assert!(!err.is_validation());
    }
}
