//! Rules engine trait and the Undercover rules.
//!
//! A rules engine defines:
//! - Which events a shell should offer in the current phase
//! - How an event moves the session
//! - Whether the game is over

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{reveal, setup, start, summary, vote};
use crate::core::{EventKind, GameConfig, GameError, GameEvent, GameRng, GameSession, Notice, Phase};
use crate::words::WordCatalog;

/// Which side took the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Civilians,
    Undercover,
    MrWhite,
}

impl Winner {
    /// Banner shown on the end screen.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Winner::Civilians => "Civilians win!",
            Winner::Undercover => "Undercover wins!",
            Winner::MrWhite => "Mr White wins!",
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_events`: what the shell should render as actions
/// - `apply`: must leave the session untouched when it returns `Err`
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the table configuration.
    fn config(&self) -> &GameConfig;

    /// Events the shell should offer in the session's current phase.
    fn legal_events(&self, session: &GameSession) -> Vec<EventKind>;

    /// Apply one input event.
    fn apply(
        &self,
        session: &mut GameSession,
        event: &GameEvent,
        rng: &mut GameRng,
    ) -> Result<Vec<Notice>, GameError>;

    /// Check if the game is over.
    fn is_terminal(&self, session: &GameSession) -> Option<Winner> {
        if session.phase() == Phase::End {
            session.winner()
        } else {
            None
        }
    }

    // === Convenience Methods ===

    /// Would the shell offer this event right now?
    fn is_offered(&self, session: &GameSession, kind: EventKind) -> bool {
        self.legal_events(session).contains(&kind)
    }
}

/// The Undercover / Mr. White rules.
#[derive(Clone, Debug)]
pub struct UndercoverRules {
    config: GameConfig,
    catalog: WordCatalog,
}

impl Default for UndercoverRules {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            catalog: WordCatalog::builtin(),
        }
    }
}

impl UndercoverRules {
    /// Validate `config` and build its catalog.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let catalog = config.catalog()?;
        Ok(Self { config, catalog })
    }

    #[must_use]
    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }
}

impl RulesEngine for UndercoverRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_events(&self, session: &GameSession) -> Vec<EventKind> {
        match session.phase() {
            Phase::Setup => {
                let mut events = vec![EventKind::AddPlayer];
                if session.player_count() > 0 {
                    events.push(EventKind::RemovePlayer);
                }
                // Offered even on short rosters so the table hears why it
                // cannot start yet.
                events.push(EventKind::StartGame);
                events
            }
            Phase::Reveal if session.is_word_visible() => vec![EventKind::HideWord],
            Phase::Reveal => vec![EventKind::RevealWord],
            Phase::Play => vec![EventKind::BeginVoting],
            Phase::Vote => vec![EventKind::Eliminate],
            Phase::End => vec![EventKind::ResetGame],
        }
    }

    fn apply(
        &self,
        session: &mut GameSession,
        event: &GameEvent,
        rng: &mut GameRng,
    ) -> Result<Vec<Notice>, GameError> {
        trace!(event = ?event.kind(), phase = %session.phase(), "applying event");

        match event {
            GameEvent::AddPlayer { name } => setup::add_player(session, name).map(|()| vec![]),
            GameEvent::RemovePlayer { index } => setup::remove_player(session, *index).map(|()| vec![]),
            GameEvent::StartGame => start::start_game(session, &self.config, &self.catalog, rng),
            GameEvent::RevealWord => reveal::reveal_word(session).map(|()| vec![]),
            GameEvent::HideWord => reveal::hide_word(session),
            GameEvent::BeginVoting => vote::begin_voting(session).map(|()| vec![]),
            GameEvent::Eliminate { name } => vote::eliminate(session, name),
            GameEvent::ResetGame => summary::reset_game(session).map(|()| vec![]),
        }
    }
}

/// Reject `event` unless the session is in `phase`.
pub(crate) fn expect_phase(session: &GameSession, phase: Phase, event: EventKind) -> Result<(), GameError> {
    if session.phase() == phase {
        Ok(())
    } else {
        Err(GameError::WrongPhase {
            event,
            phase: session.phase(),
        })
    }
}
