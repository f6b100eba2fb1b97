//! Game rules: the state machine behind every phase.
//!
//! `Setup -> Reveal -> Play <-> Vote -> End -> Setup`
//!
//! Each phase's transitions live in their own module and take the session
//! by `&mut`. They validate before they write, so a rejected event never
//! leaves a half-applied session behind.
//!
//! - `setup`: roster editing
//! - `start`: role and word dealing, turn-order rotation
//! - `reveal`: private word viewing in turn order
//! - `vote`: discussion gate, elimination, win conditions
//! - `summary`: play again

pub mod engine;
pub mod reveal;
pub mod setup;
pub mod start;
pub mod summary;
pub mod vote;

pub use engine::{RulesEngine, UndercoverRules, Winner};
pub use start::{deal_roles, Seating};
pub use vote::evaluate_winner;
