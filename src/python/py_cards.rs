//! Card and weapon bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{build_deck, Card, Suit, Weapon};

/// Python wrapper for Card.
#[pyclass(name = "Card", frozen)]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Create a card.
    ///
    /// # Arguments
    /// - suit: "Clubs", "Spades", "Diamonds", "Hearts" or the suit glyph
    /// - value: 2-14 (11=J, 12=Q, 13=K, 14=A)
    #[new]
    fn new(suit: &str, value: u8) -> PyResult<Self> {
        let suit = parse_suit(suit)?;
        Card::try_new(suit, value)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn suit(&self) -> String {
        self.0.suit().to_string()
    }

    #[getter]
    fn value(&self) -> u8 {
        self.0.value()
    }

    /// "Monster", "Weapon" or "Potion".
    #[getter]
    fn category(&self) -> String {
        self.0.category().to_string()
    }

    /// Display name, e.g. "10♦".
    #[getter]
    fn name(&self) -> String {
        self.0.name()
    }

    fn __str__(&self) -> String {
        self.0.name()
    }

    fn __repr__(&self) -> String {
        format!("Card({}, {})", self.0.suit(), self.0.value())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        ((self.0.suit() as u64) << 8) | u64::from(self.0.value())
    }
}

/// Python wrapper for the equipped weapon.
#[pyclass(name = "Weapon", frozen)]
#[derive(Clone, Debug)]
pub struct PyWeapon(pub Weapon);

#[pymethods]
impl PyWeapon {
    #[getter]
    fn card(&self) -> PyCard {
        PyCard(self.0.card())
    }

    #[getter]
    fn value(&self) -> u8 {
        self.0.value()
    }

    /// The last monster this weapon defeated, or None for a fresh weapon.
    #[getter]
    fn last_monster_defeated(&self) -> Option<PyCard> {
        self.0.last_defeated().map(PyCard)
    }

    fn can_defeat(&self, monster: &PyCard) -> bool {
        self.0.can_defeat(&monster.0)
    }

    fn __repr__(&self) -> String {
        match self.0.last_defeated() {
            Some(last) => format!("Weapon({}, last={})", self.0.card(), last),
            None => format!("Weapon({})", self.0.card()),
        }
    }
}

/// Build the 44-card deck in construction order.
#[pyfunction]
#[pyo3(name = "build_deck")]
pub fn py_build_deck() -> Vec<PyCard> {
    build_deck().into_iter().map(PyCard).collect()
}

fn parse_suit(name: &str) -> PyResult<Suit> {
    Suit::ALL
        .into_iter()
        .find(|suit| suit.to_string().eq_ignore_ascii_case(name) || name.starts_with(suit.symbol()))
        .ok_or_else(|| PyValueError::new_err(format!("Unknown suit: {name}")))
}
