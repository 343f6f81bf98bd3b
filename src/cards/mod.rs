//! Card model: suits, categories, the deck and the weapon slot.
//!
//! ## Key Types
//!
//! - `Card`: Immutable `(suit, value)` pair
//! - `Suit` / `Category`: Category is a pure function of suit
//! - `Weapon`: An equipped Diamonds card plus its last kill
//! - `build_deck`: The fixed 44-card composition

pub mod card;
pub mod deck;
pub mod weapon;

pub use card::{Card, CardError, Category, Suit, MAX_VALUE, MIN_VALUE};
pub use deck::{build_deck, DECK_SIZE};
pub use weapon::Weapon;
