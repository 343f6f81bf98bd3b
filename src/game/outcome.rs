//! What happened when an action was accepted.
//!
//! `Display` on these types produces the player-facing log messages.

use crate::cards::Card;

/// Effect of resolving a single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// A monster was fought. `weapon` is set only when the weapon was used.
    Fought {
        monster: Card,
        weapon: Option<Card>,
        damage: u32,
        defeated: bool,
    },
    /// A weapon was equipped, replacing `replaced` if there was one.
    Equipped { weapon: Card, replaced: Option<Card> },
    /// A potion restored `healed` health (possibly 0 at full health).
    Drank { potion: Card, healed: u32 },
    /// A second potion in the same room; no effect.
    WastedPotion { potion: Card },
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Fought {
                monster,
                weapon,
                damage,
                defeated,
            } => {
                match weapon {
                    Some(weapon) => write!(f, "You fought {monster} with your {weapon}. ")?,
                    None => write!(f, "You fought {monster} barehanded. ")?,
                }
                if *defeated {
                    write!(f, "You took {damage} damage and were defeated!")
                } else {
                    write!(f, "You took {damage} damage.")
                }
            }
            Resolution::Equipped { weapon, .. } => {
                write!(f, "You equipped {weapon} as your weapon.")
            }
            Resolution::Drank { potion, healed } => {
                write!(f, "You drank {potion} and healed {healed} health.")
            }
            Resolution::WastedPotion { potion } => write!(
                f,
                "You drank {potion}, but it had no effect since you already used a potion this room."
            ),
        }
    }
}

/// Result of an accepted `play_card`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The card that was played (now on the discard pile).
    pub card: Card,
    pub resolution: Resolution,
    /// The room was completed and a new one dealt.
    pub entered_new_room: bool,
    /// This play finished the dungeon.
    pub cleared_dungeon: bool,
}

impl std::fmt::Display for PlayOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.resolution)?;
        if self.entered_new_room {
            f.write_str(" You enter a new room.")?;
        }
        if self.cleared_dungeon {
            f.write_str(" You have cleared the dungeon!")?;
        }
        Ok(())
    }
}

/// Result of any accepted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Played(PlayOutcome),
    Ran,
}

impl std::fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionOutcome::Played(outcome) => write!(f, "{outcome}"),
            ActionOutcome::Ran => f.write_str("You ran away from the room!"),
        }
    }
}
