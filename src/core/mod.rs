//! Core types: players, phases, events, session state, RNG, configuration.
//!
//! Everything here is plain data. The rules in `crate::rules` are the only
//! code that moves a session from one phase to the next.

pub mod config;
pub mod error;
pub mod event;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, MIN_TABLE_SIZE};
pub use error::{ConfigError, GameError};
pub use event::{EventKind, GameEvent, Notice};
pub use phase::Phase;
pub use player::{Player, Role, RosterEntry};
pub use rng::{GameRng, GameRngState};
pub use state::GameSession;
