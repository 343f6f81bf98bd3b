//! Equipped weapon and its durability.
//!
//! A weapon remembers the last monster it killed. A fresh weapon can
//! take on anything; after a kill it only works against monsters of
//! strictly lower value than that kill. Fighting barehanded never touches
//! this record.

use serde::{Deserialize, Serialize};

use super::card::{Card, Category};

/// A Diamonds card in the weapon slot.
///
/// Weapons are only created by equipping a Diamonds card through the
/// engine; outside the crate they can be inspected but not built.
///
/// ```compile_fail
/// use scoundrel::{Card, Suit, Weapon};
///
/// let _ = Weapon::new(Card::new(Suit::Clubs, 5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    card: Card,
    last_defeated: Option<Card>,
}

impl Weapon {
    /// Equip a fresh weapon with no kills.
    #[must_use]
    pub(crate) fn new(card: Card) -> Self {
        debug_assert_eq!(card.category(), Category::Weapon);
        Self {
            card,
            last_defeated: None,
        }
    }

    #[must_use]
    pub const fn card(&self) -> Card {
        self.card
    }

    /// Damage absorbed per fight.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.card.value()
    }

    /// The last monster this weapon defeated, if any.
    #[must_use]
    pub const fn last_defeated(&self) -> Option<Card> {
        self.last_defeated
    }

    /// Check the durability rule against a monster.
    #[must_use]
    pub fn can_defeat(&self, monster: &Card) -> bool {
        match self.last_defeated {
            None => true,
            Some(last) => monster.value() < last.value(),
        }
    }

    /// Damage left over after the weapon absorbs its value.
    #[must_use]
    pub fn damage_against(&self, monster: &Card) -> u32 {
        u32::from(monster.value().saturating_sub(self.value()))
    }

    /// Record a weapon-assisted kill.
    ///
    /// Callers must have checked [`Weapon::can_defeat`] first, so the record
    /// only ever moves to a lower value.
    pub(crate) fn record_defeat(&mut self, monster: Card) {
        debug_assert!(self.can_defeat(&monster));
        self.last_defeated = Some(monster);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn test_first_use_defeats_anything() {
        let weapon = Weapon::new(Card::new(Suit::Diamonds, 5));

        assert!(weapon.can_defeat(&Card::new(Suit::Clubs, 3)));
        assert!(weapon.can_defeat(&Card::new(Suit::Spades, 10)));
        assert!(weapon.can_defeat(&Card::new(Suit::Clubs, 14)));
    }

    #[test]
    fn test_after_kill_only_strictly_lower() {
        let mut weapon = Weapon::new(Card::new(Suit::Diamonds, 8));
        weapon.record_defeat(Card::new(Suit::Clubs, 10));

        assert!(weapon.can_defeat(&Card::new(Suit::Spades, 9)));
        assert!(!weapon.can_defeat(&Card::new(Suit::Clubs, 10)));
        assert!(!weapon.can_defeat(&Card::new(Suit::Spades, 11)));
    }

    #[test]
    fn test_damage_against() {
        let weapon = Weapon::new(Card::new(Suit::Diamonds, 2));
        assert_eq!(weapon.damage_against(&Card::new(Suit::Clubs, 14)), 12);

        let big = Weapon::new(Card::new(Suit::Diamonds, 9));
        assert_eq!(big.damage_against(&Card::new(Suit::Spades, 4)), 0);
    }
}
