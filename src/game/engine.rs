//! The Scoundrel session: room dealing, card play, fleeing, victory.

use tracing::{debug, info};

use crate::cards::{build_deck, Card, Category};
use crate::core::{Action, ActionRecord, GameRng, GameState, CARDS_TO_CLEAR_ROOM};
use crate::rules::{ActionError, GameResult, RulesEngine, RunBlocked};

use super::combat::{self, CombatPreview};
use super::outcome::{ActionOutcome, PlayOutcome};

/// One game session.
///
/// Owns the complete `GameState`. Every mutating call either applies fully
/// or is rejected with an `ActionError` and changes nothing.
///
/// ## Example
///
/// ```
/// use scoundrel::game::Game;
///
/// let mut game = Game::new(42);
/// assert_eq!(game.state().current_room().len(), 4);
/// assert_eq!(game.state().health(), 20);
///
/// game.run_from_room().unwrap();
/// assert!(game.run_from_room().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Start a session with the full deck shuffled by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let mut deck = build_deck();
        rng.shuffle(&mut deck);
        Self::start(GameState::new(deck, Some(seed)))
    }

    /// Start a session with a random seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy().seed())
    }

    /// Start a session from an explicit dungeon order, front first.
    ///
    /// The cards are not shuffled. Used to set up known scenarios.
    #[must_use]
    pub fn with_dungeon(cards: Vec<Card>) -> Self {
        Self::start(GameState::new(cards, None))
    }

    fn start(state: GameState) -> Self {
        let mut game = Self { state };
        debug!(seed = ?game.state.seed, cards = game.state.total_cards(), "new game");
        game.deal_room();
        game
    }

    /// Read-only view of the session.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    // === Commands ===

    /// Flee the current room.
    ///
    /// Allowed only before any card is played in the room, and not again
    /// until a room has been completed. The room's cards go to the back of
    /// the dungeon and a fresh room is dealt.
    pub fn run_from_room(&mut self) -> Result<(), ActionError> {
        self.ensure_running()?;

        if self.state.ran_last_room {
            debug!("run refused: already ran");
            return Err(ActionError::RunNotAllowed(RunBlocked::AlreadyRan));
        }
        if self.state.cards_played_this_room > 0 {
            let played = self.state.cards_played_this_room;
            debug!(played, "run refused: cards played");
            return Err(ActionError::RunNotAllowed(RunBlocked::CardsPlayed(played)));
        }

        self.record(Action::Run);
        let fled = self.state.room.len();
        self.state.return_room_to_dungeon();
        self.state.ran_last_room = true;
        debug!(room = self.state.room_number, fled, "ran from room");

        self.deal_room();
        Ok(())
    }

    /// Resolve the card at `index` in the current room.
    ///
    /// `use_weapon` asks to fight a monster with the equipped weapon; it
    /// is ignored for other cards and falls back to barehanded when the
    /// weapon cannot be used. The card always ends up on the discard pile.
    pub fn play_card(&mut self, index: usize, use_weapon: bool) -> Result<PlayOutcome, ActionError> {
        self.ensure_running()?;

        let room_size = self.state.room.len();
        let Some(&card) = self.state.room.get(index) else {
            debug!(index, room_size, "play refused: invalid index");
            return Err(ActionError::InvalidIndex { index, room_size });
        };

        self.record(Action::Play { index, use_weapon });

        let resolution = match card.category() {
            Category::Monster => combat::resolve_monster(&mut self.state, card, use_weapon),
            Category::Weapon => combat::equip_weapon(&mut self.state, card),
            Category::Potion => combat::drink_potion(&mut self.state, card),
        };

        self.state.discard_from_room(index);
        self.state.cards_played_this_room += 1;

        let entered_new_room = self.advance_room_if_complete();

        Ok(PlayOutcome {
            card,
            resolution,
            entered_new_room,
            cleared_dungeon: self.state.victory,
        })
    }

    // === Queries ===

    /// Damage preview for fighting the monster at `index`.
    ///
    /// `None` if the index is out of range or the card is not a monster.
    #[must_use]
    pub fn preview_fight(&self, index: usize) -> Option<CombatPreview> {
        let card = *self.state.room.get(index)?;
        card.is_monster().then(|| combat::preview(&self.state, card))
    }

    /// Monsters left in the dungeon and room.
    #[must_use]
    pub fn remaining_monster_count(&self) -> usize {
        self.state.remaining_monsters()
    }

    // === Room sequencing ===

    /// Deal the next room.
    ///
    /// Resets the per-room flags, carries over at most the first card of
    /// the old room, then fills from the dungeon. A deal that leaves the
    /// dungeon empty runs the victory check.
    pub(crate) fn deal_room(&mut self) {
        self.state.potion_used_this_room = false;
        self.state.cards_played_this_room = 0;

        let carried = self.state.carry_over();
        let dealt = self.state.fill_room();
        self.state.room_number += 1;

        debug!(
            room = self.state.room_number,
            carried = ?carried.map(|c| c.name()),
            dealt,
            dungeon = self.state.dungeon.len(),
            "dealt room"
        );

        if self.state.dungeon.is_empty() {
            self.check_victory();
        }
    }

    /// A room is complete once three of its cards are resolved and one is
    /// left, or when it has been emptied after the dungeon ran out.
    fn room_complete(&self) -> bool {
        let state = &self.state;
        let cleared = state.cards_played_this_room >= CARDS_TO_CLEAR_ROOM && state.room.len() == 1;
        cleared || state.room.is_empty()
    }

    /// Deal a new room if the current one is complete. Returns true when
    /// the player moved on to a new room (not when the deal ended the game).
    fn advance_room_if_complete(&mut self) -> bool {
        if self.state.game_over || !self.room_complete() {
            return false;
        }

        self.state.ran_last_room = false;
        self.deal_room();
        !self.state.victory
    }

    /// Win once no monster remains in the dungeon or room.
    pub(crate) fn check_victory(&mut self) {
        if self.state.remaining_monsters() == 0 {
            self.state.game_over = true;
            self.state.victory = true;
            info!(
                room = self.state.room_number,
                health = self.state.health,
                "dungeon cleared"
            );
        }
    }

    fn ensure_running(&self) -> Result<(), ActionError> {
        if self.state.game_over {
            debug!("action refused: game over");
            return Err(ActionError::GameOver);
        }
        Ok(())
    }

    fn record(&mut self, action: Action) {
        let sequence = self.state.history.len();
        let room = self.state.room_number;
        self.state.record_action(ActionRecord::new(action, room, sequence));
    }
}

impl RulesEngine for Game {
    /// One action per distinct outcome: monsters get a barehanded play and,
    /// when the weapon can defeat them, a weapon play; other cards get a
    /// single play.
    fn legal_actions(&self) -> Vec<Action> {
        if self.state.game_over {
            return Vec::new();
        }

        let mut actions = Vec::new();
        if self.state.can_run() {
            actions.push(Action::Run);
        }

        for (index, card) in self.state.room.iter().enumerate() {
            if card.is_monster() {
                if self.state.weapon.is_some_and(|w| w.can_defeat(card)) {
                    actions.push(Action::play(index));
                }
                actions.push(Action::play_barehanded(index));
            } else {
                actions.push(Action::play(index));
            }
        }

        actions
    }

    fn apply_action(&mut self, action: &Action) -> Result<ActionOutcome, ActionError> {
        match *action {
            Action::Play { index, use_weapon } => {
                self.play_card(index, use_weapon).map(ActionOutcome::Played)
            }
            Action::Run => self.run_from_room().map(|()| ActionOutcome::Ran),
        }
    }

    fn is_terminal(&self) -> Option<GameResult> {
        if !self.state.game_over {
            return None;
        }
        Some(if self.state.victory {
            GameResult::Victory
        } else {
            GameResult::Defeat
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Suit, DECK_SIZE};

    fn club(v: u8) -> Card {
        Card::new(Suit::Clubs, v)
    }
    fn diamond(v: u8) -> Card {
        Card::new(Suit::Diamonds, v)
    }
    fn heart(v: u8) -> Card {
        Card::new(Suit::Hearts, v)
    }

    #[test]
    fn test_game_creation() {
        let game = Game::new(42);
        let state = game.state();

        assert_eq!(state.health(), 20);
        assert_eq!(state.current_room().len(), 4);
        assert_eq!(state.dungeon().len(), DECK_SIZE - 4);
        assert!(!state.ran_last_room());
        assert!(!state.potion_used_this_room());
        assert!(!state.is_game_over());
        assert_eq!(state.cards_played_this_room(), 0);
        assert_eq!(state.room_number(), 1);
        assert_eq!(state.seed(), Some(42));
    }

    #[test]
    fn test_same_seed_same_dungeon() {
        let a = Game::new(7);
        let b = Game::new(7);
        assert_eq!(a.state(), b.state());

        let c = Game::new(8);
        assert_ne!(a.state().dungeon(), c.state().dungeon());
    }

    #[test]
    fn test_deal_room_resets_flags_and_carries_first_card() {
        let mut game = Game::with_dungeon(vec![
            club(2),
            club(3),
            club(4),
            club(5),
            heart(6),
            heart(7),
            heart(8),
        ]);
        for _ in 0..3 {
            game.state.discard_from_room(1);
        }
        game.state.potion_used_this_room = true;
        game.state.cards_played_this_room = 3;

        game.deal_room();

        assert_eq!(
            game.state().current_room(),
            &[club(2), heart(6), heart(7), heart(8)]
        );
        assert!(!game.state().potion_used_this_room());
        assert_eq!(game.state().cards_played_this_room(), 0);
        assert_eq!(game.state().room_number(), 2);
        assert_eq!(game.state().total_cards(), 7);
    }

    #[test]
    fn test_partial_deal_runs_victory_check() {
        let mut game = Game::with_dungeon(vec![
            diamond(2),
            heart(3),
            heart(4),
            diamond(5),
            heart(6),
        ]);
        assert!(!game.state().is_game_over());

        for _ in 0..3 {
            game.state.discard_from_room(1);
        }
        game.deal_room();

        assert_eq!(game.state().current_room(), &[diamond(2), heart(6)]);
        assert!(game.state().dungeon().is_empty());
        assert!(game.state().is_game_over());
        assert!(game.state().is_victory());
    }

    #[test]
    fn test_victory_check_needs_no_monsters_anywhere() {
        let mut game = Game::with_dungeon(vec![heart(2), club(3), heart(4), heart(5), heart(6)]);
        game.state.room.clear();
        game.state.dungeon.clear();
        game.state.room.push(club(3));

        game.check_victory();
        assert!(!game.state().is_game_over());

        game.state.room.clear();
        game.check_victory();
        assert!(game.state().is_victory());
    }

    #[test]
    fn test_rejected_action_changes_nothing() {
        let mut game = Game::new(3);
        let before = game.state().clone();

        assert_eq!(
            game.play_card(4, true),
            Err(ActionError::InvalidIndex {
                index: 4,
                room_size: 4
            })
        );
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_legal_actions_fresh_room() {
        let game = Game::with_dungeon(vec![club(5), diamond(3), heart(4), club(9), club(2)]);
        let actions = game.legal_actions();

        assert_eq!(
            actions,
            vec![
                Action::Run,
                Action::play_barehanded(0),
                Action::play(1),
                Action::play(2),
                Action::play_barehanded(3),
            ]
        );
        assert!(game.is_legal(&Action::Run));
        assert!(!game.is_legal(&Action::play(0)));
    }

    #[test]
    fn test_legal_actions_with_weapon() {
        let mut game = Game::with_dungeon(vec![diamond(3), club(5), club(9), heart(4), club(2)]);
        game.play_card(0, true).unwrap();
        game.play_card(1, true).unwrap(); // 9 with weapon

        let actions = game.legal_actions();
        // club(5) is still defeatable (5 < 9)
        assert!(actions.contains(&Action::play(0)));
        assert!(actions.contains(&Action::play_barehanded(0)));
        assert!(!actions.contains(&Action::Run));
    }

    #[test]
    fn test_history_records_accepted_actions_only() {
        let mut game = Game::new(11);
        game.run_from_room().unwrap();
        assert!(game.run_from_room().is_err());
        game.play_card(0, false).unwrap();

        let history: Vec<_> = game.state().history().iter().copied().collect();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], ActionRecord::new(Action::Run, 1, 0));
        assert_eq!(history[1], ActionRecord::new(Action::play_barehanded(0), 2, 1));
    }

    #[test]
    fn test_history_sequence_matches_position() {
        let mut game = Game::new(21);
        game.run_from_room().unwrap();
        for _ in 0..3 {
            if game.state().is_game_over() {
                break;
            }
            game.play_card(0, false).unwrap();
        }

        for (position, record) in game.state().history().iter().enumerate() {
            assert_eq!(record.sequence, position);
        }
    }

    #[test]
    fn test_is_terminal() {
        let mut game = Game::with_dungeon(vec![club(14), club(13), heart(2), heart(3)]);
        assert_eq!(game.is_terminal(), None);

        game.play_card(0, true).unwrap();
        game.play_card(0, true).unwrap();

        assert_eq!(game.is_terminal(), Some(GameResult::Defeat));
        assert!(game.legal_actions().is_empty());
    }
}
