//! Roster editing before a game starts.

use tracing::debug;

use super::engine::expect_phase;
use crate::core::{EventKind, GameError, GameSession, Phase, Player};

/// Append a player.
///
/// Names are matched exactly (case-sensitive). Blank and duplicate names
/// are rejected.
pub fn add_player(session: &mut GameSession, name: &str) -> Result<(), GameError> {
    expect_phase(session, Phase::Setup, EventKind::AddPlayer)?;

    if name.trim().is_empty() {
        return Err(GameError::BlankName);
    }
    if session.find_player(name).is_some() {
        return Err(GameError::DuplicateName(name.to_string()));
    }

    session.players.push(Player::unassigned(name));
    session.initial_roster = session.roster_entries();
    debug!(name, players = session.player_count(), "player added");
    Ok(())
}

/// Remove the player at `index` from the live and initial roster.
pub fn remove_player(session: &mut GameSession, index: usize) -> Result<(), GameError> {
    expect_phase(session, Phase::Setup, EventKind::RemovePlayer)?;

    let len = session.player_count();
    if index >= len {
        return Err(GameError::PlayerIndexOutOfRange { index, len });
    }

    let removed = session.players.remove(index);
    session.initial_roster = session.roster_entries();
    debug!(name = removed.name(), players = session.player_count(), "player removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RosterEntry;

    fn names(session: &GameSession) -> Vec<&str> {
        session.players().iter().map(Player::name).collect()
    }

    #[test]
    fn test_add_appends_and_records_initial() {
        let mut session = GameSession::new();
        add_player(&mut session, "Ana").unwrap();
        add_player(&mut session, "Bo").unwrap();

        assert_eq!(names(&session), vec!["Ana", "Bo"]);
        assert_eq!(
            session.initial_roster(),
            &[RosterEntry::new("Ana"), RosterEntry::new("Bo")]
        );
        assert!(session.players().iter().all(|p| p.role().is_none()));
    }

    #[test]
    fn test_add_rejects_blank() {
        let mut session = GameSession::new();
        assert!(matches!(add_player(&mut session, ""), Err(GameError::BlankName)));
        assert!(matches!(add_player(&mut session, "   "), Err(GameError::BlankName)));
        assert_eq!(session, GameSession::new());
    }

    #[test]
    fn test_add_rejects_exact_duplicate_only() {
        let mut session = GameSession::new();
        add_player(&mut session, "Ana").unwrap();
        let before = session.clone();

        assert!(matches!(
            add_player(&mut session, "Ana"),
            Err(GameError::DuplicateName(n)) if n == "Ana"
        ));
        assert_eq!(session, before);

        // Case-sensitive
        add_player(&mut session, "ana").unwrap();
        assert_eq!(names(&session), vec!["Ana", "ana"]);
    }

    #[test]
    fn test_remove() {
        let mut session = GameSession::new();
        for n in ["Ana", "Bo", "Cy"] {
            add_player(&mut session, n).unwrap();
        }

        remove_player(&mut session, 1).unwrap();
        assert_eq!(names(&session), vec!["Ana", "Cy"]);
        assert_eq!(
            session.initial_roster(),
            &[RosterEntry::new("Ana"), RosterEntry::new("Cy")]
        );
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut session = GameSession::new();
        add_player(&mut session, "Ana").unwrap();
        let before = session.clone();

        assert!(matches!(
            remove_player(&mut session, 1),
            Err(GameError::PlayerIndexOutOfRange { index: 1, len: 1 })
        ));
        assert_eq!(session, before);
    }

    #[test]
    fn test_edits_only_in_setup() {
        let mut session = GameSession::new();
        session.phase = Phase::Play;
        assert!(matches!(
            add_player(&mut session, "Ana"),
            Err(GameError::WrongPhase { .. })
        ));
        assert!(matches!(
            remove_player(&mut session, 0),
            Err(GameError::WrongPhase { .. })
        ));
    }
}
