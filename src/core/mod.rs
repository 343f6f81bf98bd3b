//! Core engine types: state, actions, RNG.
//!
//! This module holds data and primitives only. Game rules live in
//! `crate::game` and drive these types.

pub mod action;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use rng::GameRng;
pub use state::{GameState, Room, CARDS_TO_CLEAR_ROOM, MAX_HEALTH, ROOM_SIZE};
