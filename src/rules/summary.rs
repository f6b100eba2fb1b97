//! Play again.

use tracing::debug;

use super::engine::expect_phase;
use crate::core::{EventKind, GameError, GameSession, Phase, Player};

/// Move `end -> setup`, seating the roster from the last start or edit.
pub fn reset_game(session: &mut GameSession) -> Result<(), GameError> {
    expect_phase(session, Phase::End, EventKind::ResetGame)?;

    session.players = session.initial_roster.iter().cloned().map(Player::from).collect();
    session.phase = Phase::Setup;
    session.turn = 0;
    session.winner = None;
    session.words = None;
    session.word_visible = false;
    session.round = 1;
    debug!(players = session.player_count(), "table reset");
    Ok(())
}
