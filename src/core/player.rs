//! Players, roles, and the persisted roster entry.
//!
//! ## Player
//!
//! A player is either `Unassigned` (setup, name only) or `Assigned`
//! (a game is running: role, word, alive flag). There is no half-assigned
//! record.
//!
//! ## RosterEntry
//!
//! The name-only shape written to and read from a roster store.

use serde::{Deserialize, Serialize};

/// Secret role dealt at game start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Holds the common word.
    Civilian,
    /// Holds the related but different word.
    Undercover,
    /// Holds no real word.
    MrWhite,
}

impl Role {
    /// Is this one of the roles civilians are hunting?
    #[must_use]
    pub const fn is_threat(self) -> bool {
        matches!(self, Role::Undercover | Role::MrWhite)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Civilian => write!(f, "civilian"),
            Role::Undercover => write!(f, "undercover"),
            Role::MrWhite => write!(f, "Mr. White"),
        }
    }
}

/// A name-only roster record, as persisted by a `RosterStore`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Player {
    /// Added during setup, no game dealt yet.
    Unassigned { name: String },
    /// Dealt into the running game.
    Assigned {
        name: String,
        role: Role,
        word: String,
        is_alive: bool,
    },
}

impl Player {
    /// Create a setup-phase player.
    pub fn unassigned(name: impl Into<String>) -> Self {
        Player::Unassigned { name: name.into() }
    }

    /// Deal a role and word to this player, marking them alive.
    ///
    /// Any previous assignment is overwritten.
    #[must_use]
    pub fn assign(self, role: Role, word: impl Into<String>) -> Self {
        Player::Assigned {
            name: self.into_name(),
            role,
            word: word.into(),
            is_alive: true,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Player::Unassigned { name } | Player::Assigned { name, .. } => name,
        }
    }

    pub fn into_name(self) -> String {
        match self {
            Player::Unassigned { name } | Player::Assigned { name, .. } => name,
        }
    }

    /// Role, if a game has been dealt.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self {
            Player::Unassigned { .. } => None,
            Player::Assigned { role, .. } => Some(*role),
        }
    }

    /// Secret word, if a game has been dealt.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        match self {
            Player::Unassigned { .. } => None,
            Player::Assigned { word, .. } => Some(word),
        }
    }

    /// Unassigned players are not in a game, so they are never alive.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        matches!(self, Player::Assigned { is_alive: true, .. })
    }

    /// Flip the alive flag off. Returns `false` if the player was not alive.
    pub fn eliminate(&mut self) -> bool {
        match self {
            Player::Assigned { is_alive, .. } if *is_alive => {
                *is_alive = false;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn to_entry(&self) -> RosterEntry {
        RosterEntry::new(self.name())
    }
}

impl From<RosterEntry> for Player {
    fn from(entry: RosterEntry) -> Self {
        Player::Unassigned { name: entry.name }
    }
}
