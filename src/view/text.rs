//! Plain-text rendering for terminal shells.

use std::fmt::Write;

use super::model::ViewModel;
use crate::core::Phase;

/// Render the screen for the current phase.
#[must_use]
pub fn render_text(view: &ViewModel) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_view(&mut out, view);
    out
}

fn write_view(out: &mut String, view: &ViewModel) -> std::fmt::Result {
    match view.phase {
        Phase::Setup => {
            writeln!(out, "== Add Players ==")?;
            if view.players.is_empty() {
                writeln!(out, "(no players yet)")?;
            }
            for (i, player) in view.players.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, player.name)?;
            }
            writeln!(out, "Commands: add <name>, remove <number>, start")?;
        }
        Phase::Reveal => {
            let name = view.current_player.as_deref().unwrap_or("?");
            writeln!(out, "== {name}'s Turn ==")?;
            match &view.visible_word {
                Some(word) => {
                    writeln!(out, "Your word is: {word}")?;
                    writeln!(out, "Commands: hide")?;
                }
                None => writeln!(out, "Commands: reveal")?,
            }
        }
        Phase::Play => {
            writeln!(out, "== Round {} ==", view.round)?;
            writeln!(out, "Players should describe their word in the following order:")?;
            for (i, name) in view.living.iter().enumerate() {
                writeln!(out, "{}. {name}", i + 1)?;
            }
            writeln!(out, "Are you ready to vote? Commands: vote")?;
        }
        Phase::Vote => {
            writeln!(out, "== Voting Time ==")?;
            writeln!(out, "As a group, decide who to eliminate:")?;
            for (i, name) in view.living.iter().enumerate() {
                writeln!(out, "{}. {name}", i + 1)?;
            }
            writeln!(out, "Commands: eliminate <name|number>")?;
        }
        Phase::End => {
            writeln!(out, "== Game Over ==")?;
            if let Some(summary) = &view.summary {
                writeln!(out, "{}", summary.winner.label())?;
                writeln!(out, "The words were:")?;
                writeln!(out, "  Civilian: {}", summary.words.civilian)?;
                writeln!(out, "  Undercover: {}", summary.words.undercover)?;
                writeln!(
                    out,
                    "The undercover player was: {}",
                    summary.undercover.as_deref().unwrap_or("?")
                )?;
                writeln!(out, "The Mr White player was: {}", summary.mr_white_label())?;
            }
            writeln!(out, "Commands: again")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EventKind, GameSession, RosterEntry};
    use crate::rules::Winner;
    use crate::view::{EndSummary, ViewModel};
    use crate::words::WordPair;

    #[test]
    fn test_setup_lists_players() {
        let session = GameSession::from_roster(vec![RosterEntry::new("Ana"), RosterEntry::new("Bo")]);
        let text = render_text(&ViewModel::build(&session, vec![EventKind::AddPlayer]));
        assert!(text.contains("1. Ana"));
        assert!(text.contains("2. Bo"));
    }

    #[test]
    fn test_end_screen_without_mr_white() {
        let mut view = ViewModel::build(&GameSession::new(), vec![EventKind::ResetGame]);
        view.phase = Phase::End;
        view.summary = Some(EndSummary {
            winner: Winner::Undercover,
            words: WordPair::new("Coffee", "Tea"),
            undercover: Some("Bo".into()),
            mr_white: None,
        });

        let text = render_text(&view);
        assert!(text.contains("Undercover wins!"));
        assert!(text.contains("Civilian: Coffee"));
        assert!(text.contains("Undercover: Tea"));
        assert!(text.contains("The undercover player was: Bo"));
        assert!(text.contains("No Mr. White this game"));
    }

    #[test]
    fn test_play_screen_lists_living() {
        let mut view = ViewModel::build(&GameSession::new(), vec![EventKind::BeginVoting]);
        view.phase = Phase::Play;
        view.round = 2;
        view.living = vec!["Cy".into(), "Ana".into()];

        let text = render_text(&view);
        assert!(text.contains("Round 2"));
        assert!(text.contains("1. Cy\n2. Ana"));
    }
}
