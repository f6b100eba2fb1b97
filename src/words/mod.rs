//! Word pairs and the catalog they are drawn from.
//!
//! ## Key Types
//!
//! - `WordPair`: the (civilian, undercover) words for one game
//! - `WordCatalog`: validated, non-empty list of pairs

pub mod catalog;

pub use catalog::{WordCatalog, WordPair};
