//! The five phases of a table.

use serde::{Deserialize, Serialize};

/// Where the table is in the game loop.
///
/// `Setup -> Reveal -> Play <-> Vote -> End -> Setup`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Roster editing.
    #[default]
    Setup,
    /// Players privately view their words in turn order.
    Reveal,
    /// Players describe their words, alive players only.
    Play,
    /// The table eliminates one living player.
    Vote,
    /// A winner has been declared.
    End,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::Reveal => "reveal",
            Phase::Play => "play",
            Phase::Vote => "vote",
            Phase::End => "end",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_setup() {
        assert_eq!(Phase::default(), Phase::Setup);
    }

    #[test]
    fn test_phase_serde() {
        let json = serde_json::to_string(&Phase::Reveal).unwrap();
        assert_eq!(json, "\"reveal\"");
        let back: Phase = serde_json::from_str("\"vote\"").unwrap();
        assert_eq!(back, Phase::Vote);
        assert_eq!(Phase::End.to_string(), "end");
    }
}
