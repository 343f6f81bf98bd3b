//! Invariants that hold across arbitrary seeds and action choices.

use proptest::prelude::*;

use scoundrel::{Action, Game, GameState, RulesEngine, DECK_SIZE, MAX_HEALTH};

/// Play a session to the end, picking each action by `choices[i] % legal.len()`.
/// Returns every state seen, starting with the initial deal.
fn play_out(seed: u64, choices: &[usize]) -> Vec<GameState> {
    let mut game = Game::new(seed);
    let mut states = vec![game.state().clone()];

    for &choice in choices.iter().cycle() {
        if game.is_terminal().is_some() {
            break;
        }
        let legal = game.legal_actions();
        let action = legal[choice % legal.len()];
        game.apply_action(&action).unwrap();
        states.push(game.state().clone());
    }

    states
}

proptest! {
    #[test]
    fn prop_cards_are_conserved(seed in any::<u64>(), choices in prop::collection::vec(any::<usize>(), 1..32)) {
        for state in play_out(seed, &choices) {
            prop_assert_eq!(state.total_cards(), DECK_SIZE);
        }
    }

    #[test]
    fn prop_health_stays_in_bounds(seed in any::<u64>(), choices in prop::collection::vec(any::<usize>(), 1..32)) {
        for state in play_out(seed, &choices) {
            prop_assert!(state.health() <= MAX_HEALTH);
            prop_assert!(state.current_room().len() <= 4);
            if state.health() == 0 {
                prop_assert!(state.is_game_over());
                prop_assert!(!state.is_victory());
            }
        }
    }

    #[test]
    fn prop_session_always_terminates(seed in any::<u64>(), choices in prop::collection::vec(any::<usize>(), 1..32)) {
        let states = play_out(seed, &choices);
        let last = states.last().unwrap();
        prop_assert!(last.is_game_over());
        if last.is_victory() {
            prop_assert_eq!(last.remaining_monsters(), 0);
            prop_assert!(last.dungeon().is_empty());
        }
    }

    #[test]
    fn prop_weapon_kills_strictly_decrease(seed in any::<u64>(), choices in prop::collection::vec(any::<usize>(), 1..32)) {
        let states = play_out(seed, &choices);
        for pair in states.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            let (Some(old), Some(new)) = (before.equipped_weapon(), after.equipped_weapon()) else {
                continue;
            };
            if old.card() != new.card() {
                continue;
            }
            match (old.last_defeated(), new.last_defeated()) {
                (Some(prev), Some(next)) if prev != next => {
                    prop_assert!(next.value() < prev.value());
                }
                (Some(_), None) => prop_assert!(false, "kill record lost without re-equip"),
                _ => {}
            }
        }
    }

    #[test]
    fn prop_terminal_state_is_frozen(seed in any::<u64>(), choices in prop::collection::vec(any::<usize>(), 1..32)) {
        let final_state = play_out(seed, &choices).pop().unwrap();

        let mut game = Game::new(seed);
        for record in final_state.history().iter() {
            game.apply_action(&record.action).unwrap();
        }
        prop_assert!(game.legal_actions().is_empty());
        prop_assert!(game.apply_action(&Action::Run).is_err());
        prop_assert!(game.apply_action(&Action::play(0)).is_err());
        prop_assert_eq!(game.state(), &final_state);
    }

    #[test]
    fn prop_replay_is_deterministic(seed in any::<u64>(), choices in prop::collection::vec(any::<usize>(), 1..32)) {
        let first = play_out(seed, &choices);
        let second = play_out(seed, &choices);
        prop_assert_eq!(first, second);
    }
}
