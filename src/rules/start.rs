//! Starting a game: dealing roles and words, then fixing turn order.
//!
//! Draw order is fixed so a seed replays the same table:
//! 1. word pair
//! 2. undercover seat
//! 3. Mr. White seat (only for large enough tables), redrawn until it
//!    differs from the undercover seat
//! 4. rotation offset
//!
//! Turn order is a cyclic shift of the roster, not a shuffle: neighbours
//! stay neighbours, only the starting player changes.

use tracing::{debug, info};

use super::engine::expect_phase;
use crate::core::{EventKind, GameConfig, GameError, GameRng, GameSession, Notice, Phase, Role};
use crate::words::WordCatalog;

/// Seats (indices into the pre-rotation roster) of the secret roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Seating {
    pub undercover: usize,
    pub mr_white: Option<usize>,
}

impl Seating {
    /// Draw seats for a table of `player_count`.
    ///
    /// Panics if `player_count` is zero.
    pub fn draw(player_count: usize, config: &GameConfig, rng: &mut GameRng) -> Self {
        let undercover = rng.gen_range_usize(0..player_count);

        let mr_white = if config.deals_mr_white(player_count) {
            loop {
                let seat = rng.gen_range_usize(0..player_count);
                if seat != undercover {
                    break Some(seat);
                }
            }
        } else {
            None
        };

        Self { undercover, mr_white }
    }
}

/// Roles for every seat: one undercover, at most one Mr. White, the rest
/// civilians.
#[must_use]
pub fn deal_roles(player_count: usize, seating: Seating) -> Vec<Role> {
    (0..player_count)
        .map(|seat| {
            if seat == seating.undercover {
                Role::Undercover
            } else if Some(seat) == seating.mr_white {
                Role::MrWhite
            } else {
                Role::Civilian
            }
        })
        .collect()
}

/// Move `setup -> reveal`.
///
/// Overwrites any earlier deal. Rejected without changes when the roster
/// is below the configured minimum.
pub fn start_game(
    session: &mut GameSession,
    config: &GameConfig,
    catalog: &WordCatalog,
    rng: &mut GameRng,
) -> Result<Vec<Notice>, GameError> {
    expect_phase(session, Phase::Setup, EventKind::StartGame)?;

    let player_count = session.player_count();
    if player_count < config.min_players {
        return Err(GameError::NotEnoughPlayers {
            required: config.min_players,
            actual: player_count,
        });
    }

    session.initial_roster = session.roster_entries();

    let pair = catalog.draw(rng).clone();
    let seating = Seating::draw(player_count, config, rng);
    let roles = deal_roles(player_count, seating);

    let mut players: Vec<_> = std::mem::take(&mut session.players)
        .into_iter()
        .zip(roles)
        .map(|(player, role)| {
            let word = match role {
                Role::Civilian => pair.civilian.as_str(),
                Role::Undercover => pair.undercover.as_str(),
                Role::MrWhite => config.mr_white_word.as_str(),
            };
            player.assign(role, word)
        })
        .collect();

    let offset = rng.gen_range_usize(0..player_count);
    players.rotate_left(offset);
    debug!(?seating, offset, civilian = %pair.civilian, undercover = %pair.undercover, "dealt");

    let has_mr_white = seating.mr_white.is_some();
    session.players = players;
    session.words = Some(pair);
    session.winner = None;
    session.phase = Phase::Reveal;
    session.turn = 0;
    session.round = 1;
    session.word_visible = false;

    info!(player_count, has_mr_white, "game started");
    Ok(vec![Notice::GameStarted {
        player_count,
        has_mr_white,
    }])
}
