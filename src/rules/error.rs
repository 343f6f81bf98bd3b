//! Rejected actions.
//!
//! None of these are fatal. A rejected action leaves the state untouched
//! and the caller may retry with different input.

use thiserror::Error;

/// Why a flee was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunBlocked {
    /// The player fled into this room and has not completed a room since.
    #[error("you ran from the last room")]
    AlreadyRan,
    /// Cards have already been played in this room.
    #[error("{0} card(s) already played in this room")]
    CardsPlayed(u32),
}

/// Error returned by a mutating engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Card index outside the current room.
    #[error("Invalid card index.")]
    InvalidIndex { index: usize, room_size: usize },

    /// Flee precondition failed.
    #[error("You cannot run at this time! ({0})")]
    RunNotAllowed(RunBlocked),

    /// The session has ended; start a new game.
    #[error("The game is over.")]
    GameOver,
}
