//! The word catalog.
//!
//! A catalog is validated once when built: it is never empty, no word is
//! blank, and no pair holds the same word twice. Draws can then index it
//! without further checks.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, GameRng};

/// The two words dealt in one game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    /// Shared by every civilian.
    pub civilian: String,
    /// Held by the undercover player alone.
    pub undercover: String,
}

impl WordPair {
    pub fn new(civilian: impl Into<String>, undercover: impl Into<String>) -> Self {
        Self {
            civilian: civilian.into(),
            undercover: undercover.into(),
        }
    }
}

const BUILTIN_PAIRS: &[(&str, &str)] = &[
    ("Coffee", "Tea"),
    ("Cat", "Dog"),
    ("Beach", "Pool"),
    ("Guitar", "Violin"),
    ("Pizza", "Burger"),
    ("Train", "Bus"),
    ("Winter", "Autumn"),
    ("Apple", "Pear"),
    ("Doctor", "Nurse"),
    ("Moon", "Sun"),
    ("Football", "Rugby"),
    ("Lion", "Tiger"),
    ("Chocolate", "Candy"),
    ("Rain", "Snow"),
    ("Book", "Magazine"),
    ("Piano", "Keyboard"),
    ("Castle", "Palace"),
    ("Wine", "Beer"),
    ("Mountain", "Hill"),
    ("Knife", "Sword"),
    ("Shower", "Bath"),
    ("Pirate", "Viking"),
    ("Cinema", "Theatre"),
    ("Butter", "Cheese"),
    ("Airplane", "Helicopter"),
    ("Spoon", "Fork"),
    ("River", "Lake"),
    ("Wedding", "Birthday"),
    ("Vampire", "Zombie"),
    ("Bicycle", "Scooter"),
    ("Honey", "Jam"),
    ("Painter", "Photographer"),
    ("Ocean", "Desert"),
    ("Rose", "Tulip"),
    ("Hotel", "Hostel"),
    ("Pencil", "Pen"),
];

/// Validated catalog of word pairs.
///
/// ## Example
///
/// ```
/// use undercover::words::{WordCatalog, WordPair};
///
/// let catalog = WordCatalog::new(vec![WordPair::new("Coffee", "Tea")]).unwrap();
/// assert_eq!(catalog.len(), 1);
///
/// assert!(WordCatalog::new(vec![WordPair::new("Tea", "Tea")]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCatalog {
    pairs: Vec<WordPair>,
}

impl WordCatalog {
    /// Build a catalog, rejecting empty catalogs, blank words, and pairs
    /// whose two words match (ignoring case and surrounding whitespace).
    pub fn new(pairs: Vec<WordPair>) -> Result<Self, GameError> {
        if pairs.is_empty() {
            return Err(GameError::InvalidCatalog("catalog has no word pairs".into()));
        }

        for pair in &pairs {
            let civilian = pair.civilian.trim();
            let undercover = pair.undercover.trim();
            if civilian.is_empty() || undercover.is_empty() {
                return Err(GameError::InvalidCatalog(format!(
                    "blank word in pair ({:?}, {:?})",
                    pair.civilian, pair.undercover
                )));
            }
            if civilian.eq_ignore_ascii_case(undercover) {
                return Err(GameError::InvalidCatalog(format!(
                    "pair uses {:?} for both roles",
                    pair.civilian
                )));
            }
        }

        Ok(Self { pairs })
    }

    /// The catalog shipped with the game.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            pairs: BUILTIN_PAIRS
                .iter()
                .map(|&(civilian, undercover)| WordPair::new(civilian, undercover))
                .collect(),
        }
    }

    /// Draw one pair uniformly at random.
    pub fn draw(&self, rng: &mut GameRng) -> &WordPair {
        &self.pairs[rng.gen_range_usize(0..self.pairs.len())]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordPair> {
        self.pairs.iter()
    }
}

impl Default for WordCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
