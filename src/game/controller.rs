//! Game controller.
//!
//! Owns the session and its collaborators. Each event is applied to a copy
//! of the session; the copy replaces the live session only after the rules
//! accept it and, for roster edits, the store has saved it.

use tracing::{debug, info, warn};

use crate::core::{GameConfig, GameError, GameEvent, GameRng, GameSession, Notice};
use crate::roster::RosterStore;
use crate::rules::{RulesEngine, UndercoverRules};
use crate::view::ViewModel;

pub struct GameController<S: RosterStore> {
    rules: UndercoverRules,
    session: GameSession,
    store: S,
    rng: GameRng,
}

impl<S: RosterStore> GameController<S> {
    /// Build a controller, seating the roster saved in `store` (or none).
    pub fn new(config: GameConfig, store: S, rng: GameRng) -> Result<Self, GameError> {
        let rules = UndercoverRules::new(config)?;
        let roster = store.load(&rules.config().roster_key)?.unwrap_or_default();
        info!(players = roster.len(), seed = rng.seed(), "table ready");

        Ok(Self {
            rules,
            session: GameSession::from_roster(roster),
            store,
            rng,
        })
    }

    /// Apply one event.
    ///
    /// On `Err` nothing changed: not the session, not the store.
    pub fn dispatch(&mut self, event: GameEvent) -> Result<Vec<Notice>, GameError> {
        let mut next = self.session.clone();
        let mut rng = self.rng.clone();

        let notices = match self.rules.apply(&mut next, &event, &mut rng) {
            Ok(notices) => notices,
            Err(err) => {
                warn!(event = ?event.kind(), phase = %self.session.phase(), %err, "event rejected");
                return Err(err);
            }
        };

        if event.edits_roster() {
            self.store
                .save(&self.rules.config().roster_key, &next.roster_entries())?;
        }

        if next.phase() != self.session.phase() {
            debug!(from = %self.session.phase(), to = %next.phase(), "phase changed");
        }
        self.session = next;
        self.rng = rng;
        Ok(notices)
    }

    pub fn add_player(&mut self, name: impl Into<String>) -> Result<Vec<Notice>, GameError> {
        self.dispatch(GameEvent::AddPlayer { name: name.into() })
    }

    pub fn remove_player(&mut self, index: usize) -> Result<Vec<Notice>, GameError> {
        self.dispatch(GameEvent::RemovePlayer { index })
    }

    pub fn start_game(&mut self) -> Result<Vec<Notice>, GameError> {
        self.dispatch(GameEvent::StartGame)
    }

    pub fn reveal_word(&mut self) -> Result<Vec<Notice>, GameError> {
        self.dispatch(GameEvent::RevealWord)
    }

    pub fn hide_word(&mut self) -> Result<Vec<Notice>, GameError> {
        self.dispatch(GameEvent::HideWord)
    }

    pub fn begin_voting(&mut self) -> Result<Vec<Notice>, GameError> {
        self.dispatch(GameEvent::BeginVoting)
    }

    pub fn eliminate(&mut self, name: impl Into<String>) -> Result<Vec<Notice>, GameError> {
        self.dispatch(GameEvent::Eliminate { name: name.into() })
    }

    pub fn reset_game(&mut self) -> Result<Vec<Notice>, GameError> {
        self.dispatch(GameEvent::ResetGame)
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn rules(&self) -> &UndercoverRules {
        &self.rules
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// What the shell should draw right now.
    #[must_use]
    pub fn view(&self) -> ViewModel {
        ViewModel::build(&self.session, self.rules.legal_events(&self.session))
    }
}
