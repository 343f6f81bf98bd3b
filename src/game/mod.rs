//! Scoundrel rules: the session engine and card resolution.
//!
//! ## Room sequencing
//!
//! - A room is dealt at start and whenever one is completed
//! - At most one card (the first) carries over into the next room
//! - Three resolved cards complete a four-card room
//! - Fleeing sends the whole room to the back of the dungeon
//!
//! ## Victory and defeat
//!
//! Health reaching zero ends the session in defeat. Victory is checked
//! only after a deal that leaves the dungeon empty.

mod combat;
mod engine;
mod outcome;

pub use combat::CombatPreview;
pub use engine::Game;
pub use outcome::{ActionOutcome, PlayOutcome, Resolution};
