//! Card values: suit, rank and the category a suit maps to.
//!
//! A card's category is never stored. It is computed from the suit, so a
//! card cannot disagree with itself about what it is:
//!
//! | Suit     | Category |
//! |----------|----------|
//! | Clubs    | Monster  |
//! | Spades   | Monster  |
//! | Diamonds | Weapon   |
//! | Hearts   | Potion   |

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest card value (a two).
pub const MIN_VALUE: u8 = 2;

/// Highest card value (an ace).
pub const MAX_VALUE: u8 = 14;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Spades,
    Diamonds,
    Hearts,
}

impl Suit {
    /// All suits, in deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Diamonds, Suit::Hearts];

    /// The category every card of this suit belongs to.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Suit::Clubs | Suit::Spades => Category::Monster,
            Suit::Diamonds => Category::Weapon,
            Suit::Hearts => Category::Potion,
        }
    }

    /// Suit glyph used in card names.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
        };
        f.write_str(name)
    }
}

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Monster,
    Weapon,
    Potion,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Monster => "Monster",
            Category::Weapon => "Weapon",
            Category::Potion => "Potion",
        };
        f.write_str(name)
    }
}

/// Error building a card from raw parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// Value outside `2..=14`.
    #[error("Invalid card value {0}: expected 2..=14")]
    InvalidValue(u8),
}

/// An immutable playing card.
///
/// Identity is `(suit, value)`. Values run 2-14 with 11-14 being
/// Jack, Queen, King and Ace.
///
/// ## Example
///
/// ```
/// use scoundrel::cards::{Card, Category, Suit};
///
/// let ace = Card::new(Suit::Clubs, 14);
/// assert_eq!(ace.category(), Category::Monster);
/// assert_eq!(ace.name(), "A♣");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    value: u8,
}

impl Card {
    /// Create a card.
    ///
    /// Panics if `value` is outside `2..=14`. Use [`Card::try_new`] for
    /// values that come from outside the crate.
    #[must_use]
    pub fn new(suit: Suit, value: u8) -> Self {
        assert!(
            (MIN_VALUE..=MAX_VALUE).contains(&value),
            "Card value must be in 2..=14"
        );
        Self { suit, value }
    }

    /// Create a card, rejecting out-of-range values.
    pub fn try_new(suit: Suit, value: u8) -> Result<Self, CardError> {
        if (MIN_VALUE..=MAX_VALUE).contains(&value) {
            Ok(Self { suit, value })
        } else {
            Err(CardError::InvalidValue(value))
        }
    }

    /// The card's suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// The card's value (2-14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }

    /// Category derived from the suit.
    #[must_use]
    pub const fn category(self) -> Category {
        self.suit.category()
    }

    #[must_use]
    pub const fn is_monster(self) -> bool {
        matches!(self.category(), Category::Monster)
    }

    /// Rank label: digits for 2-10, then J, Q, K, A.
    #[must_use]
    pub fn rank(self) -> String {
        match self.value {
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            14 => "A".to_string(),
            v => v.to_string(),
        }
    }

    /// Display name, rank followed by the suit glyph (e.g. `10♦`, `Q♥`).
    #[must_use]
    pub fn name(self) -> String {
        format!("{}{}", self.rank(), self.suit.symbol())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}
