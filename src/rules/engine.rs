//! Rules engine trait.
//!
//! Frontends and agents drive a session through this trait:
//! - What actions are legal
//! - How an action changes the state
//! - Whether the session has ended

use crate::core::Action;
use crate::game::ActionOutcome;

use super::error::ActionError;

/// Result of a finished session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Every monster was cleared.
    Victory,
    /// Health reached zero.
    Defeat,
}

impl GameResult {
    #[must_use]
    pub fn is_victory(self) -> bool {
        matches!(self, GameResult::Victory)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Empty once the session is terminal
/// - `apply_action`: Deterministic; a rejected action must not mutate state
/// - `is_terminal`: `None` while the session continues
pub trait RulesEngine {
    /// Enumerate every action that would currently be accepted.
    fn legal_actions(&self) -> Vec<Action>;

    /// Apply an action.
    fn apply_action(&mut self, action: &Action) -> Result<ActionOutcome, ActionError>;

    /// Check if the session is over.
    fn is_terminal(&self) -> Option<GameResult>;

    /// Check whether a specific action is currently legal.
    fn is_legal(&self, action: &Action) -> bool {
        self.legal_actions().contains(action)
    }
}
