//! Player actions and the history of accepted ones.
//!
//! Scoundrel has exactly two mutating commands:
//! - `Play`: resolve one card of the current room, optionally with the weapon
//! - `Run`: flee the room, sending its cards to the bottom of the dungeon
//!
//! Every accepted action is stored as an `ActionRecord`. Replaying a
//! history against a game built from the same seed reproduces the session.

use serde::{Deserialize, Serialize};

/// A player command.
///
/// ## Example
///
/// ```
/// use scoundrel::core::Action;
///
/// let attack = Action::play(2);
/// let punch = Action::play_barehanded(2);
/// assert_ne!(attack, punch);
/// assert!(Action::Run.is_run());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Resolve the card at `index` in the current room.
    ///
    /// `use_weapon` only matters for monsters.
    Play { index: usize, use_weapon: bool },
    /// Flee the current room.
    Run,
}

impl Action {
    /// Play a card, using the weapon if it applies.
    #[must_use]
    pub const fn play(index: usize) -> Self {
        Action::Play {
            index,
            use_weapon: true,
        }
    }

    /// Play a card, fighting barehanded if it is a monster.
    #[must_use]
    pub const fn play_barehanded(index: usize) -> Self {
        Action::Play {
            index,
            use_weapon: false,
        }
    }

    #[must_use]
    pub const fn is_run(&self) -> bool {
        matches!(self, Action::Run)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Play {
                index,
                use_weapon: true,
            } => write!(f, "Play({index})"),
            Action::Play {
                index,
                use_weapon: false,
            } => write!(f, "PlayBarehanded({index})"),
            Action::Run => f.write_str("Run"),
        }
    }
}

/// An accepted action with metadata.
///
/// Used for replay and debugging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Room number the action was taken in (first room is 1).
    pub room: u32,

    /// Position in the session's history.
    pub sequence: usize,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub const fn new(action: Action, room: u32, sequence: usize) -> Self {
        Self {
            action,
            room,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            Action::play(1),
            Action::Play {
                index: 1,
                use_weapon: true
            }
        );
        assert_eq!(
            Action::play_barehanded(3),
            Action::Play {
                index: 3,
                use_weapon: false
            }
        );
        assert!(!Action::play(0).is_run());
    }

    #[test]
    fn test_display() {
        assert_eq!(Action::play(2).to_string(), "Play(2)");
        assert_eq!(Action::play_barehanded(0).to_string(), "PlayBarehanded(0)");
        assert_eq!(Action::Run.to_string(), "Run");
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(Action::Run, 3, 7);
        assert_eq!(record.action, Action::Run);
        assert_eq!(record.room, 3);
        assert_eq!(record.sequence, 7);
    }
}
