//! # undercover
//!
//! Pass-and-play engine for the Undercover / Mr. White party game.
//!
//! Civilians share a word, one undercover player holds a related word,
//! and from four players up a Mr. White holds none. Players describe their
//! words round by round and vote one player out each round until only
//! civilians remain, or the threats survive into the final two.
//!
//! ## Design Principles
//!
//! 1. **Explicit session**: all state lives in a [`GameSession`]; there
//!    are no globals. Transitions are `(session, event) -> session`.
//!
//! 2. **No half-dealt players**: [`Player`] is either unassigned (setup)
//!    or assigned (role, word, alive flag).
//!
//! 3. **Atomic events**: a rejected event changes nothing, not the session
//!    and not the saved roster.
//!
//! 4. **Replayable**: every random draw goes through a seeded [`GameRng`].
//!
//! ## Modules
//!
//! - `core`: players, phases, events, session, RNG, configuration
//! - `words`: word pairs and the catalog
//! - `rules`: the phase state machine and win conditions
//! - `roster`: roster persistence
//! - `game`: the controller tying rules, session, and store together
//! - `view`: view models and a text shell contract
//!
//! ## Example
//!
//! ```
//! use undercover::{GameConfig, GameController, GameRng, MemoryRosterStore, Phase};
//!
//! let mut game = GameController::new(GameConfig::default(), MemoryRosterStore::new(), GameRng::new(7))?;
//! for name in ["Ana", "Bo", "Cy", "Dee"] {
//!     game.add_player(name)?;
//! }
//! game.start_game()?;
//! assert_eq!(game.session().phase(), Phase::Reveal);
//! # Ok::<(), undercover::GameError>(())
//! ```

pub mod core;
pub mod game;
pub mod roster;
pub mod rules;
pub mod view;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, EventKind, GameConfig, GameError, GameEvent, GameRng, GameRngState, GameSession,
    Notice, Phase, Player, Role, RosterEntry,
};

pub use crate::game::GameController;

pub use crate::roster::{JsonFileRosterStore, MemoryRosterStore, RosterStore, StoreError};

pub use crate::rules::{evaluate_winner, RulesEngine, UndercoverRules, Winner};

pub use crate::view::{render_text, EndSummary, PlayerView, ViewModel};

pub use crate::words::{WordCatalog, WordPair};
