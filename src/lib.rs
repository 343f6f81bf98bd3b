//! # scoundrel
//!
//! A single-player implementation of the dungeon-crawl solitaire card game
//! Scoundrel.
//!
//! ## Rules in brief
//!
//! - 44 cards: Clubs and Spades 2-A are monsters, Diamonds 2-10 weapons,
//!   Hearts 2-10 potions
//! - Rooms of four cards are dealt from the dungeon; resolve three to move
//!   on, the fourth carries into the next room
//! - Weapons soften blows, but after a kill a weapon only works on
//!   strictly weaker monsters
//! - One potion heals per room; health is capped at 20
//! - You may flee a room before touching it, but not twice in a row
//!
//! ## Modules
//!
//! - `cards`: Card model, deck composition, weapon durability
//! - `core`: Game state, actions, RNG
//! - `rules`: `RulesEngine` trait and rejection errors
//! - `game`: The session engine implementing the rules
//! - `python`: PyO3 bindings (feature `python`)
//! - `tui`: Terminal frontend (feature `tui`)
//!
//! ## Example
//!
//! ```
//! use scoundrel::{Game, RulesEngine};
//!
//! let mut game = Game::new(7);
//! while game.is_terminal().is_none() {
//!     let action = game.legal_actions()[0];
//!     game.apply_action(&action).unwrap();
//! }
//! assert!(game.state().is_game_over());
//! ```

pub mod cards;
pub mod core;
pub mod game;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export commonly used types
pub use crate::cards::{build_deck, Card, CardError, Category, Suit, Weapon, DECK_SIZE};
pub use crate::core::{Action, ActionRecord, GameRng, GameState, MAX_HEALTH, ROOM_SIZE};
pub use crate::game::{ActionOutcome, CombatPreview, Game, PlayOutcome, Resolution};
pub use crate::rules::{ActionError, GameResult, RulesEngine, RunBlocked};
