//! Private word viewing, one player at a time in turn order.

use tracing::debug;

use super::engine::expect_phase;
use crate::core::{EventKind, GameError, GameSession, Notice, Phase};

/// Show the current player's word. Showing it twice is a no-op.
pub fn reveal_word(session: &mut GameSession) -> Result<(), GameError> {
    expect_phase(session, Phase::Reveal, EventKind::RevealWord)?;

    if !session.word_visible {
        session.word_visible = true;
        debug!(turn = session.turn, "word revealed");
    }
    Ok(())
}

/// Hide the word and pass the device on.
///
/// After the last player, descriptions begin at turn 0.
pub fn hide_word(session: &mut GameSession) -> Result<Vec<Notice>, GameError> {
    expect_phase(session, Phase::Reveal, EventKind::HideWord)?;
    if !session.word_visible {
        return Err(GameError::WordHidden);
    }

    session.word_visible = false;

    if session.turn + 1 >= session.player_count() {
        session.phase = Phase::Play;
        session.turn = 0;
        debug!(round = session.round, "all words seen");
        Ok(vec![Notice::DescriptionsBegin {
            round: session.round,
        }])
    } else {
        session.turn += 1;
        debug!(turn = session.turn, "next reveal turn");
        Ok(vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameRng, Player, RosterEntry};
    use crate::rules::start::start_game;
    use crate::words::WordCatalog;

    fn started(n: usize, seed: u64) -> GameSession {
        let mut session =
            GameSession::from_roster((0..n).map(|i| RosterEntry::new(format!("P{i}"))).collect());
        start_game(
            &mut session,
            &GameConfig::default(),
            &WordCatalog::builtin(),
            &mut GameRng::new(seed),
        )
        .unwrap();
        session
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let mut session = started(3, 1);
        reveal_word(&mut session).unwrap();
        let once = session.clone();
        reveal_word(&mut session).unwrap();
        assert_eq!(session, once);
        assert!(session.visible_word().is_some());
    }

    #[test]
    fn test_hide_requires_reveal() {
        let mut session = started(3, 1);
        let before = session.clone();
        assert!(matches!(hide_word(&mut session), Err(GameError::WordHidden)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_walk_visits_each_player_once() {
        let mut session = started(5, 8);
        let order: Vec<String> = session.players().iter().map(|p| p.name().to_string()).collect();
        let mut seen = Vec::new();

        while session.phase() == Phase::Reveal {
            reveal_word(&mut session).unwrap();
            let current = session.current_player().unwrap();
            assert_eq!(session.visible_word(), current.word());
            seen.push(current.name().to_string());
            hide_word(&mut session).unwrap();
            assert!(!session.is_word_visible());
        }

        assert_eq!(seen, order);
        assert_eq!(session.phase(), Phase::Play);
        assert_eq!(session.turn(), 0);
        assert_eq!(session.round(), 1);
        assert!(session.players().iter().all(Player::is_alive));
    }

    #[test]
    fn test_last_hide_announces_round() {
        let mut session = started(3, 2);
        for _ in 0..2 {
            reveal_word(&mut session).unwrap();
            assert!(hide_word(&mut session).unwrap().is_empty());
        }
        reveal_word(&mut session).unwrap();
        assert_eq!(
            hide_word(&mut session).unwrap(),
            vec![Notice::DescriptionsBegin { round: 1 }]
        );
    }

    #[test]
    fn test_reveal_outside_phase() {
        let mut session = GameSession::new();
        assert!(matches!(
            reveal_word(&mut session),
            Err(GameError::WrongPhase { .. })
        ));
        assert!(matches!(
            hide_word(&mut session),
            Err(GameError::WrongPhase { .. })
        ));
    }
}
