//! Line commands for terminal shells.
//!
//! ```text
//! add <name>            remove <number>       start
//! reveal                hide                  vote
//! eliminate <name|#>    again                 show / help / quit
//! ```
//!
//! Numbers are 1-based, as printed by [`render_text`](super::render_text).

use thiserror::Error;

use super::model::ViewModel;
use crate::core::GameEvent;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    Event(GameEvent),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("unknown command {0:?}; type `help` for a list")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("{0:?} is not a player number")]
    BadNumber(String),
}

pub const HELP: &str = "\
add <name>          add a player (setup)
remove <number>     remove a player (setup)
start               deal words and start
reveal / hide       show or hide your word
vote                start voting
eliminate <name|#>  eliminate a player
again               play again with the same players
show                redraw the screen
quit                leave";

/// Parse one input line against the screen currently shown.
pub fn parse_line(line: &str, view: &ViewModel) -> Result<ShellCommand, ShellError> {
    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let event = match command.to_ascii_lowercase().as_str() {
        "" | "show" => return Ok(ShellCommand::Show),
        "help" | "?" => return Ok(ShellCommand::Help),
        "quit" | "exit" => return Ok(ShellCommand::Quit),
        "add" => {
            if rest.is_empty() {
                return Err(ShellError::MissingArgument("add"));
            }
            GameEvent::AddPlayer { name: rest.to_string() }
        }
        "remove" | "rm" => GameEvent::RemovePlayer {
            index: parse_number(rest, "remove")?,
        },
        "start" => GameEvent::StartGame,
        "reveal" => GameEvent::RevealWord,
        "hide" => GameEvent::HideWord,
        "vote" => GameEvent::BeginVoting,
        "eliminate" | "kick" => {
            if rest.is_empty() {
                return Err(ShellError::MissingArgument("eliminate"));
            }
            let name = match rest.parse::<usize>() {
                Ok(n) if (1..=view.living.len()).contains(&n) => view.living[n - 1].clone(),
                _ => rest.to_string(),
            };
            GameEvent::Eliminate { name }
        }
        "again" | "reset" => GameEvent::ResetGame,
        other => return Err(ShellError::Unknown(other.to_string())),
    };

    Ok(ShellCommand::Event(event))
}

/// 1-based number to 0-based index.
fn parse_number(raw: &str, command: &'static str) -> Result<usize, ShellError> {
    if raw.is_empty() {
        return Err(ShellError::MissingArgument(command));
    }
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(ShellError::BadNumber(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameSession, Phase};

    fn view() -> ViewModel {
        let mut view = ViewModel::build(&GameSession::new(), vec![]);
        view.phase = Phase::Vote;
        view.living = vec!["Ana".into(), "Bo".into()];
        view
    }

    #[test]
    fn test_add_keeps_name_payload() {
        assert_eq!(
            parse_line("add  Mary Jane ", &view()),
            Ok(ShellCommand::Event(GameEvent::AddPlayer {
                name: "Mary Jane".into()
            }))
        );
        assert_eq!(
            parse_line("add", &view()),
            Err(ShellError::MissingArgument("add"))
        );
    }

    #[test]
    fn test_remove_is_one_based() {
        assert_eq!(
            parse_line("remove 2", &view()),
            Ok(ShellCommand::Event(GameEvent::RemovePlayer { index: 1 }))
        );
        assert!(matches!(parse_line("remove 0", &view()), Err(ShellError::BadNumber(_))));
        assert!(matches!(parse_line("remove x", &view()), Err(ShellError::BadNumber(_))));
    }

    #[test]
    fn test_eliminate_by_number_or_name() {
        assert_eq!(
            parse_line("eliminate 2", &view()),
            Ok(ShellCommand::Event(GameEvent::Eliminate { name: "Bo".into() }))
        );
        assert_eq!(
            parse_line("eliminate Ana", &view()),
            Ok(ShellCommand::Event(GameEvent::Eliminate { name: "Ana".into() }))
        );
        // Out of range numbers fall through as names.
        assert_eq!(
            parse_line("eliminate 7", &view()),
            Ok(ShellCommand::Event(GameEvent::Eliminate { name: "7".into() }))
        );
    }

    #[test]
    fn test_simple_commands() {
        let v = view();
        assert_eq!(parse_line("START", &v), Ok(ShellCommand::Event(GameEvent::StartGame)));
        assert_eq!(parse_line("reveal", &v), Ok(ShellCommand::Event(GameEvent::RevealWord)));
        assert_eq!(parse_line("hide", &v), Ok(ShellCommand::Event(GameEvent::HideWord)));
        assert_eq!(parse_line("vote", &v), Ok(ShellCommand::Event(GameEvent::BeginVoting)));
        assert_eq!(parse_line("again", &v), Ok(ShellCommand::Event(GameEvent::ResetGame)));
        assert_eq!(parse_line("", &v), Ok(ShellCommand::Show));
        assert_eq!(parse_line("help", &v), Ok(ShellCommand::Help));
        assert_eq!(parse_line("quit", &v), Ok(ShellCommand::Quit));
        assert_eq!(parse_line("dance", &v), Err(ShellError::Unknown("dance".into())));
    }
}
