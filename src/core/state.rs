//! Game state: every card location plus the player's status.
//!
//! ## Zones
//!
//! - `dungeon`: face-down queue, dealt from the front, fled rooms go to the back
//! - `room`: up to four face-up cards the player chooses from
//! - `discard`: append-only, never drawn from
//!
//! Together the three zones always hold every card the session started
//! with. Nothing here applies game rules; the engine in `crate::game`
//! drives these primitives.
//!
//! ## Per-room flags
//!
//! `potion_used_this_room` and `cards_played_this_room` reset when a room
//! is dealt. `ran_last_room` survives deals and is cleared only when a
//! room is completed by play.

use im::Vector;
use serde::Serialize;
use smallvec::SmallVec;

use super::action::ActionRecord;
use crate::cards::{Card, Weapon};

/// Starting and maximum health.
pub const MAX_HEALTH: u32 = 20;

/// Cards in a full room.
pub const ROOM_SIZE: usize = 4;

/// Cards that must be resolved before the room is complete.
pub const CARDS_TO_CLEAR_ROOM: u32 = 3;

/// Face-up room cards, in deal order.
pub type Room = SmallVec<[Card; ROOM_SIZE]>;

/// Complete state of one Scoundrel session.
///
/// Uses `im` persistent vectors so cloning a state (for lookahead or for
/// checking that a rejected action changed nothing) is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) health: u32,
    pub(crate) weapon: Option<Weapon>,
    pub(crate) room: Room,
    pub(crate) dungeon: Vector<Card>,
    pub(crate) discard: Vector<Card>,
    pub(crate) ran_last_room: bool,
    pub(crate) potion_used_this_room: bool,
    pub(crate) cards_played_this_room: u32,
    pub(crate) game_over: bool,
    pub(crate) victory: bool,
    /// Rooms dealt so far, including rooms dealt after fleeing.
    pub(crate) room_number: u32,
    pub(crate) seed: Option<u64>,
    pub(crate) history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a state with every card in the dungeon and an empty room.
    #[must_use]
    pub(crate) fn new(dungeon: Vec<Card>, seed: Option<u64>) -> Self {
        Self {
            health: MAX_HEALTH,
            weapon: None,
            room: Room::new(),
            dungeon: dungeon.into_iter().collect(),
            discard: Vector::new(),
            ran_last_room: false,
            potion_used_this_room: false,
            cards_played_this_room: 0,
            game_over: false,
            victory: false,
            room_number: 0,
            seed,
            history: Vector::new(),
        }
    }

    // === Player ===

    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> u32 {
        MAX_HEALTH
    }

    /// The equipped weapon, if any.
    #[must_use]
    pub fn equipped_weapon(&self) -> Option<&Weapon> {
        self.weapon.as_ref()
    }

    // === Zones ===

    /// Cards in the current room, in order.
    #[must_use]
    pub fn current_room(&self) -> &[Card] {
        &self.room
    }

    /// The dungeon queue, front first.
    #[must_use]
    pub fn dungeon(&self) -> &Vector<Card> {
        &self.dungeon
    }

    /// Played cards, oldest first.
    #[must_use]
    pub fn discard(&self) -> &Vector<Card> {
        &self.discard
    }

    /// Cards across all three zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.dungeon.len() + self.room.len() + self.discard.len()
    }

    /// Monsters still in the dungeon or the room (the discard pile is not counted).
    #[must_use]
    pub fn remaining_monsters(&self) -> usize {
        self.dungeon
            .iter()
            .chain(self.room.iter())
            .filter(|card| card.is_monster())
            .count()
    }

    // === Flags ===

    #[must_use]
    pub fn ran_last_room(&self) -> bool {
        self.ran_last_room
    }

    #[must_use]
    pub fn potion_used_this_room(&self) -> bool {
        self.potion_used_this_room
    }

    #[must_use]
    pub fn cards_played_this_room(&self) -> u32 {
        self.cards_played_this_room
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// True only once the game is over and won.
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.victory
    }

    /// Fleeing is allowed only as the first action in a room, and not
    /// twice without completing a room in between.
    #[must_use]
    pub fn can_run(&self) -> bool {
        !self.game_over && !self.ran_last_room && self.cards_played_this_room == 0
    }

    /// Number of rooms dealt so far (first room is 1).
    #[must_use]
    pub fn room_number(&self) -> u32 {
        self.room_number
    }

    /// Seed the dungeon was shuffled with, if it was shuffled.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Zone primitives ===

    /// Keep only the first room card for the next room.
    pub(crate) fn carry_over(&mut self) -> Option<Card> {
        self.room.truncate(1);
        self.room.first().copied()
    }

    /// Deal from the front of the dungeon until the room is full or the
    /// dungeon runs out. Returns how many cards were dealt.
    pub(crate) fn fill_room(&mut self) -> usize {
        let wanted = ROOM_SIZE.saturating_sub(self.room.len());
        let count = wanted.min(self.dungeon.len());
        for _ in 0..count {
            if let Some(card) = self.dungeon.pop_front() {
                self.room.push(card);
            }
        }
        count
    }

    /// Move the whole room to the back of the dungeon, in room order.
    pub(crate) fn return_room_to_dungeon(&mut self) {
        self.dungeon.extend(self.room.drain(..));
    }

    /// Take a card out of the room and put it on the discard pile.
    pub(crate) fn discard_from_room(&mut self, index: usize) -> Option<Card> {
        if index >= self.room.len() {
            return None;
        }
        let card = self.room.remove(index);
        self.discard.push_back(card);
        Some(card)
    }

    pub(crate) fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn cards(n: u8) -> Vec<Card> {
        (2..2 + n).map(|v| Card::new(Suit::Clubs, v)).collect()
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(cards(8), Some(9));

        assert_eq!(state.health(), MAX_HEALTH);
        assert_eq!(state.max_health(), 20);
        assert!(state.equipped_weapon().is_none());
        assert!(state.current_room().is_empty());
        assert_eq!(state.dungeon().len(), 8);
        assert_eq!(state.total_cards(), 8);
        assert_eq!(state.seed(), Some(9));
        assert!(state.can_run());
    }

    #[test]
    fn test_fill_room_from_front() {
        let mut state = GameState::new(cards(6), None);

        assert_eq!(state.fill_room(), 4);
        assert_eq!(
            state.current_room(),
            &[
                Card::new(Suit::Clubs, 2),
                Card::new(Suit::Clubs, 3),
                Card::new(Suit::Clubs, 4),
                Card::new(Suit::Clubs, 5),
            ]
        );
        assert_eq!(state.dungeon().len(), 2);
    }

    #[test]
    fn test_fill_room_partial() {
        let mut state = GameState::new(cards(2), None);

        assert_eq!(state.fill_room(), 2);
        assert_eq!(state.current_room().len(), 2);
        assert!(state.dungeon().is_empty());
    }

    #[test]
    fn test_carry_over_keeps_first() {
        let mut state = GameState::new(cards(8), None);
        state.fill_room();

        let kept = state.carry_over();
        assert_eq!(kept, Some(Card::new(Suit::Clubs, 2)));
        assert_eq!(state.current_room(), &[Card::new(Suit::Clubs, 2)]);

        let mut empty = GameState::new(Vec::new(), None);
        assert_eq!(empty.carry_over(), None);
    }

    #[test]
    fn test_return_room_to_dungeon() {
        let mut state = GameState::new(cards(6), None);
        state.fill_room();
        state.return_room_to_dungeon();

        assert!(state.current_room().is_empty());
        assert_eq!(state.dungeon().len(), 6);
        assert_eq!(state.dungeon().back(), Some(&Card::new(Suit::Clubs, 5)));
        assert_eq!(state.dungeon().front(), Some(&Card::new(Suit::Clubs, 6)));
    }

    #[test]
    fn test_discard_from_room() {
        let mut state = GameState::new(cards(4), None);
        state.fill_room();

        assert_eq!(state.discard_from_room(1), Some(Card::new(Suit::Clubs, 3)));
        assert_eq!(state.discard_from_room(3), None);
        assert_eq!(state.current_room().len(), 3);
        assert_eq!(state.discard().len(), 1);
        assert_eq!(state.total_cards(), 4);
    }

    #[test]
    fn test_remaining_monsters_ignores_discard() {
        let mut dungeon = cards(3);
        dungeon.push(Card::new(Suit::Hearts, 5));
        dungeon.push(Card::new(Suit::Spades, 9));
        let mut state = GameState::new(dungeon, None);
        state.fill_room();

        assert_eq!(state.remaining_monsters(), 4);
        state.discard_from_room(0);
        assert_eq!(state.remaining_monsters(), 3);
    }

    #[test]
    fn test_can_run_flags() {
        let mut state = GameState::new(cards(4), None);
        state.cards_played_this_room = 1;
        assert!(!state.can_run());

        state.cards_played_this_room = 0;
        state.ran_last_room = true;
        assert!(!state.can_run());

        state.ran_last_room = false;
        state.game_over = true;
        assert!(!state.can_run());
    }
}
