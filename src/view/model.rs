//! View models built from a session.

use serde::{Deserialize, Serialize};

use crate::core::{EventKind, GameSession, Phase, Role};
use crate::rules::Winner;
use crate::words::WordPair;

/// One roster row. Roles never leave the session through here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    /// `None` in setup.
    pub is_alive: Option<bool>,
}

/// Outcome shown on the end screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndSummary {
    pub winner: Winner,
    pub words: WordPair,
    pub undercover: Option<String>,
    /// `None` when the table was too small for a Mr. White.
    pub mr_white: Option<String>,
}

impl EndSummary {
    /// `None` unless the session has ended.
    #[must_use]
    pub fn from_session(session: &GameSession) -> Option<Self> {
        if session.phase() != Phase::End {
            return None;
        }
        let name_of = |role: Role| session.find_by_role(role).map(|p| p.name().to_string());

        Some(Self {
            winner: session.winner()?,
            words: session.words()?.clone(),
            undercover: name_of(Role::Undercover),
            mr_white: name_of(Role::MrWhite),
        })
    }

    #[must_use]
    pub fn mr_white_label(&self) -> &str {
        self.mr_white.as_deref().unwrap_or("No Mr. White this game")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
    pub phase: Phase,
    pub round: u32,
    pub players: Vec<PlayerView>,

    /// Reveal phase: whose turn it is.
    pub current_player: Option<String>,
    pub word_visible: bool,
    /// Reveal phase: the current player's word, only while shown.
    pub visible_word: Option<String>,

    /// Living players in description order (play and vote phases).
    pub living: Vec<String>,

    pub summary: Option<EndSummary>,
    pub legal_events: Vec<EventKind>,
}

impl ViewModel {
    #[must_use]
    pub fn build(session: &GameSession, legal_events: Vec<EventKind>) -> Self {
        let players = session
            .players()
            .iter()
            .map(|p| PlayerView {
                name: p.name().to_string(),
                is_alive: p.role().map(|_| p.is_alive()),
            })
            .collect();

        let living = match session.phase() {
            Phase::Play | Phase::Vote => session
                .living_players()
                .map(|p| p.name().to_string())
                .collect(),
            _ => Vec::new(),
        };

        Self {
            phase: session.phase(),
            round: session.round(),
            players,
            current_player: session.current_player().map(|p| p.name().to_string()),
            word_visible: session.is_word_visible(),
            visible_word: session.visible_word().map(str::to_string),
            living,
            summary: EndSummary::from_session(session),
            legal_events,
        }
    }

    #[must_use]
    pub fn offers(&self, kind: EventKind) -> bool {
        self.legal_events.contains(&kind)
    }
}
