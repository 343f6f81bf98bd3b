//! Rules engine trait and rejection errors.
//!
//! `crate::game::Game` implements `RulesEngine`. Frontends and tests can
//! drive a session generically through the trait: list legal actions,
//! apply one, check for the end.

pub mod engine;
pub mod error;

pub use engine::{GameResult, RulesEngine};
pub use error::{ActionError, RunBlocked};
