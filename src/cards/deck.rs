//! The fixed 44-card Scoundrel deck.

use super::card::{Card, Suit};

/// Number of cards in a Scoundrel deck.
pub const DECK_SIZE: usize = 44;

/// Build the deck in construction order (unshuffled).
///
/// - Clubs and Spades 2 through Ace (26 monsters)
/// - Diamonds 2-10 (9 weapons)
/// - Hearts 2-10 (9 potions)
///
/// Shuffling is the caller's job.
#[must_use]
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in [Suit::Clubs, Suit::Spades] {
        cards.extend((2..=14).map(|value| Card::new(suit, value)));
    }

    // Red face cards and aces are removed
    for suit in [Suit::Diamonds, Suit::Hearts] {
        cards.extend((2..=10).map(|value| Card::new(suit, value)));
    }

    cards
}
