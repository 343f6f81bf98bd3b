//! Python bindings for the Scoundrel engine.
//!
//! Mirrors the engine's command surface for Python frontends: invalid
//! requests come back as `False` results rather than exceptions.
//!
//! # Quick Start
//!
//! ```python
//! import scoundrel
//!
//! game = scoundrel.Game(seed=42)
//! print([card.name for card in game.current_room])
//!
//! message, ok = game.play_card(0, use_weapon=True)
//! if not game.run_from_room():
//!     print("cannot run")
//! ```

use pyo3::prelude::*;

mod py_cards;
mod py_game;

pub use py_cards::*;
pub use py_game::*;

/// scoundrel: the Scoundrel card game engine.
#[pymodule]
fn scoundrel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyWeapon>()?;
    m.add_class::<PyGame>()?;
    m.add_function(wrap_pyfunction!(py_build_deck, m)?)?;
    m.add("MAX_HEALTH", crate::core::MAX_HEALTH)?;
    Ok(())
}
