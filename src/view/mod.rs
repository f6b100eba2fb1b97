//! Presentation contract.
//!
//! A shell renders a [`ViewModel`] and raises [`GameEvent`]s back to the
//! controller. Nothing in here mutates a session.
//!
//! [`GameEvent`]: crate::core::GameEvent

mod model;
pub mod shell;
pub mod text;

pub use model::{EndSummary, PlayerView, ViewModel};
pub use shell::{parse_line, ShellCommand, ShellError};
pub use text::render_text;
