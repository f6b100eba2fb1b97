//! The game controller: one table, one store, one RNG.

mod controller;

pub use controller::GameController;
