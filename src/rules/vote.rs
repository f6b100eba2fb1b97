//! Discussion gate, elimination, and win conditions.
//!
//! Win conditions are checked in this order after every elimination:
//! 1. No undercover and no Mr. White alive: civilians win, even if only
//!    two players remain.
//! 2. Two or fewer alive: Mr. White wins if alive, otherwise undercover.
//! 3. Otherwise the next round begins.

use tracing::{debug, info};

use super::engine::{expect_phase, Winner};
use crate::core::{EventKind, GameError, GameSession, Notice, Phase, Player, Role};

/// Move `play -> vote`.
pub fn begin_voting(session: &mut GameSession) -> Result<(), GameError> {
    expect_phase(session, Phase::Play, EventKind::BeginVoting)?;
    session.phase = Phase::Vote;
    debug!(round = session.round, "voting opened");
    Ok(())
}

/// Decide the winner for the living set in `players`, if any.
#[must_use]
pub fn evaluate_winner(players: &[Player]) -> Option<Winner> {
    let living: Vec<&Player> = players.iter().filter(|p| p.is_alive()).collect();
    let undercover_alive = living.iter().any(|p| p.role() == Some(Role::Undercover));
    let mr_white_alive = living.iter().any(|p| p.role() == Some(Role::MrWhite));

    if !undercover_alive && !mr_white_alive {
        Some(Winner::Civilians)
    } else if living.len() <= 2 {
        if mr_white_alive {
            Some(Winner::MrWhite)
        } else {
            Some(Winner::Undercover)
        }
    } else {
        None
    }
}

/// Eliminate the living player named `name` (exact match).
pub fn eliminate(session: &mut GameSession, name: &str) -> Result<Vec<Notice>, GameError> {
    expect_phase(session, Phase::Vote, EventKind::Eliminate)?;

    let player = session
        .players
        .iter_mut()
        .find(|p| p.name() == name)
        .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))?;
    let Some(role) = player.role() else {
        return Err(GameError::UnknownPlayer(name.to_string()));
    };
    if !player.eliminate() {
        return Err(GameError::AlreadyEliminated(name.to_string()));
    }

    info!(name, round = session.round, "player eliminated");
    let mut notices = vec![Notice::Eliminated {
        name: name.to_string(),
        role,
    }];

    match evaluate_winner(&session.players) {
        Some(winner) => {
            session.winner = Some(winner);
            session.phase = Phase::End;
            info!(%winner, round = session.round, "game over");
            notices.push(Notice::GameOver { winner });
        }
        None => {
            session.phase = Phase::Play;
            session.round += 1;
            session.turn = 0;
            debug!(round = session.round, "next round");
            notices.push(Notice::NextRound {
                round: session.round,
            });
        }
    }

    Ok(notices)
}
