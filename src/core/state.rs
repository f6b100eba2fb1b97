//! The game session: the single aggregate every event mutates.
//!
//! ## GameSession
//!
//! - Phase, round, reveal turn, word visibility
//! - Live players in turn order (rotated at game start)
//! - Initial roster, kept apart from the live players so "play again"
//!   restores the same table without re-entry
//! - Dealt word pair and declared winner
//!
//! Read access is public. Mutation goes through the rules.

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use super::player::{Player, Role, RosterEntry};
use crate::rules::Winner;
use crate::words::WordPair;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) phase: Phase,

    /// Turn order for reveal and description order for play.
    pub(crate) players: Vec<Player>,

    /// Names at the last game start or roster edit.
    pub(crate) initial_roster: Vec<RosterEntry>,

    /// Index into `players` whose reveal turn it is.
    pub(crate) turn: usize,

    pub(crate) words: Option<WordPair>,

    pub(crate) winner: Option<Winner>,

    /// Starts at 1, bumped by every vote that does not end the game.
    pub(crate) round: u32,

    pub(crate) word_visible: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// An empty table in setup.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Setup,
            players: Vec::new(),
            initial_roster: Vec::new(),
            turn: 0,
            words: None,
            winner: None,
            round: 1,
            word_visible: false,
        }
    }

    /// A table in setup seated from a saved roster.
    #[must_use]
    pub fn from_roster(roster: Vec<RosterEntry>) -> Self {
        Self {
            players: roster.iter().cloned().map(Player::from).collect(),
            initial_roster: roster,
            ..Self::new()
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn initial_roster(&self) -> &[RosterEntry] {
        &self.initial_roster
    }

    /// The live players as name-only entries.
    #[must_use]
    pub fn roster_entries(&self) -> Vec<RosterEntry> {
        self.players.iter().map(Player::to_entry).collect()
    }

    #[must_use]
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Whose reveal turn it is. `None` outside the reveal phase.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        if self.phase != Phase::Reveal {
            return None;
        }
        self.players.get(self.turn)
    }

    #[must_use]
    pub fn is_word_visible(&self) -> bool {
        self.word_visible
    }

    /// The current player's word, only while it is shown.
    #[must_use]
    pub fn visible_word(&self) -> Option<&str> {
        if !self.word_visible {
            return None;
        }
        self.current_player().and_then(Player::word)
    }

    #[must_use]
    pub fn words(&self) -> Option<&WordPair> {
        self.words.as_ref()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Living players in roster order.
    pub fn living_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.is_alive())
    }

    /// Find a player by exact name.
    #[must_use]
    pub fn find_player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Find the first player dealt `role`.
    ///
    /// `None` in setup, and for Mr. White in games too small to deal one.
    #[must_use]
    pub fn find_by_role(&self, role: Role) -> Option<&Player> {
        self.players.iter().find(|p| p.role() == Some(role))
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::End
    }
}
