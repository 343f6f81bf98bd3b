//! Terminal frontend using ratatui
//!
//! Renders the room, player status and message log, and maps key
//! presses onto game actions. Enabled by the `tui` feature.

pub mod app;
pub mod input;
pub mod widgets;

pub use app::{App, UiMode};
pub use input::{key_to_command, Command};
