//! Game session bindings for Python.

use pyo3::prelude::*;

use crate::core::MAX_HEALTH;
use crate::game::Game;

use super::py_cards::{PyCard, PyWeapon};

/// Python wrapper for a Scoundrel session.
///
/// "New game" on the Python side is simply constructing another `Game`.
#[pyclass(name = "Game")]
pub struct PyGame {
    game: Game,
}

#[pymethods]
impl PyGame {
    /// Start a session.
    ///
    /// # Arguments
    /// - seed: RNG seed for a reproducible shuffle; random when omitted
    #[new]
    #[pyo3(signature = (seed = None))]
    fn new(seed: Option<u64>) -> Self {
        let game = seed.map_or_else(Game::from_entropy, Game::new);
        Self { game }
    }

    /// Play the card at `index`.
    ///
    /// Returns `(message, success)`. On failure nothing changes.
    #[pyo3(signature = (index, use_weapon = true))]
    fn play_card(&mut self, index: i64, use_weapon: bool) -> (String, bool) {
        let Ok(index) = usize::try_from(index) else {
            return ("Invalid card index.".to_string(), false);
        };
        match self.game.play_card(index, use_weapon) {
            Ok(outcome) => (outcome.to_string(), true),
            Err(err) => (err.to_string(), false),
        }
    }

    /// Flee the current room. Returns False when not allowed.
    fn run_from_room(&mut self) -> bool {
        self.game.run_from_room().is_ok()
    }

    fn get_remaining_monster_count(&self) -> usize {
        self.game.remaining_monster_count()
    }

    #[getter]
    fn player_health(&self) -> u32 {
        self.game.state().health()
    }

    #[getter]
    fn max_health(&self) -> u32 {
        MAX_HEALTH
    }

    #[getter]
    fn equipped_weapon(&self) -> Option<PyWeapon> {
        self.game.state().equipped_weapon().copied().map(PyWeapon)
    }

    #[getter]
    fn current_room(&self) -> Vec<PyCard> {
        self.game.state().current_room().iter().copied().map(PyCard).collect()
    }

    #[getter]
    fn dungeon_size(&self) -> usize {
        self.game.state().dungeon().len()
    }

    #[getter]
    fn ran_last_room(&self) -> bool {
        self.game.state().ran_last_room()
    }

    #[getter]
    fn potion_used_this_room(&self) -> bool {
        self.game.state().potion_used_this_room()
    }

    #[getter]
    fn cards_played_this_room(&self) -> u32 {
        self.game.state().cards_played_this_room()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.game.state().is_game_over()
    }

    #[getter]
    fn victory(&self) -> bool {
        self.game.state().is_victory()
    }

    #[getter]
    fn room_number(&self) -> u32 {
        self.game.state().room_number()
    }

    #[getter]
    fn seed(&self) -> Option<u64> {
        self.game.state().seed()
    }

    /// Copy the session (the copy evolves independently).
    fn copy(&self) -> Self {
        Self {
            game: self.game.clone(),
        }
    }

    fn __repr__(&self) -> String {
        let state = self.game.state();
        let status = match (state.is_game_over(), state.is_victory()) {
            (false, _) => "ongoing",
            (true, true) => "victory",
            (true, false) => "defeat",
        };
        format!(
            "Game(room={}, health={}/{}, status={})",
            state.room_number(),
            state.health(),
            MAX_HEALTH,
            status
        )
    }
}
