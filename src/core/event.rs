//! Input events raised by a presentation shell, and the notices the
//! rules hand back.
//!
//! Every event carries its own payload; the rules never reach back into
//! the shell for input.

use serde::{Deserialize, Serialize};

use super::player::Role;
use crate::rules::Winner;

/// A discrete user input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    AddPlayer { name: String },
    RemovePlayer { index: usize },
    StartGame,
    RevealWord,
    HideWord,
    BeginVoting,
    Eliminate { name: String },
    ResetGame,
}

impl GameEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::AddPlayer { .. } => EventKind::AddPlayer,
            GameEvent::RemovePlayer { .. } => EventKind::RemovePlayer,
            GameEvent::StartGame => EventKind::StartGame,
            GameEvent::RevealWord => EventKind::RevealWord,
            GameEvent::HideWord => EventKind::HideWord,
            GameEvent::BeginVoting => EventKind::BeginVoting,
            GameEvent::Eliminate { .. } => EventKind::Eliminate,
            GameEvent::ResetGame => EventKind::ResetGame,
        }
    }

    /// Does this event edit the persisted roster?
    #[must_use]
    pub fn edits_roster(&self) -> bool {
        matches!(self, GameEvent::AddPlayer { .. } | GameEvent::RemovePlayer { .. })
    }
}

/// Payload-free event tag, used for legality listings and errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    AddPlayer,
    RemovePlayer,
    StartGame,
    RevealWord,
    HideWord,
    BeginVoting,
    Eliminate,
    ResetGame,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EventKind::AddPlayer => "add a player",
            EventKind::RemovePlayer => "remove a player",
            EventKind::StartGame => "start the game",
            EventKind::RevealWord => "reveal a word",
            EventKind::HideWord => "hide a word",
            EventKind::BeginVoting => "begin voting",
            EventKind::Eliminate => "eliminate a player",
            EventKind::ResetGame => "reset the game",
        };
        f.write_str(s)
    }
}

/// Something the table should be told after an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "notice", rename_all = "snake_case")]
pub enum Notice {
    /// Words are dealt; reveal phase begins.
    GameStarted { player_count: usize, has_mr_white: bool },
    /// Every player has seen their word.
    DescriptionsBegin { round: u32 },
    /// Shown whether or not the game continues.
    Eliminated { name: String, role: Role },
    /// Vote did not end the game.
    NextRound { round: u32 },
    GameOver { winner: Winner },
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::GameStarted { player_count, has_mr_white } => {
                write!(f, "Words dealt to {player_count} players")?;
                if *has_mr_white {
                    write!(f, " (a Mr. White is among you)")?;
                }
                Ok(())
            }
            Notice::DescriptionsBegin { round } => write!(f, "Everyone has seen their word. Round {round} begins."),
            Notice::Eliminated { name, role } => write!(f, "{name}'s role was: {role}."),
            Notice::NextRound { round } => write!(f, "Round {round} begins."),
            Notice::GameOver { winner } => f.write_str(winner.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(GameEvent::AddPlayer { name: "A".into() }.kind(), EventKind::AddPlayer);
        assert_eq!(GameEvent::Eliminate { name: "A".into() }.kind(), EventKind::Eliminate);
        assert_eq!(GameEvent::ResetGame.kind(), EventKind::ResetGame);
    }

    #[test]
    fn test_edits_roster() {
        assert!(GameEvent::AddPlayer { name: "A".into() }.edits_roster());
        assert!(GameEvent::RemovePlayer { index: 0 }.edits_roster());
        assert!(!GameEvent::StartGame.edits_roster());
        assert!(!GameEvent::ResetGame.edits_roster());
    }

    #[test]
    fn test_elimination_notice_text() {
        let notice = Notice::Eliminated {
            name: "Bo".into(),
            role: Role::MrWhite,
        };
        assert_eq!(notice.to_string(), "Bo's role was: Mr. White.");
    }

    #[test]
    fn test_event_serde() {
        let json = serde_json::to_string(&GameEvent::RemovePlayer { index: 2 }).unwrap();
        assert_eq!(json, r#"{"event":"remove_player","index":2}"#);
        let back: GameEvent = serde_json::from_str(r#"{"event":"begin_voting"}"#).unwrap();
        assert_eq!(back, GameEvent::BeginVoting);
    }
}
