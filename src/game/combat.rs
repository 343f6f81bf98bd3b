//! Card resolution: fighting monsters, equipping weapons, drinking potions.
//!
//! These functions apply one card's effect to the state. Moving the card
//! to the discard pile and room bookkeeping belong to the engine.

use tracing::{debug, info};

use crate::cards::{Card, Weapon};
use crate::core::{GameState, MAX_HEALTH};

use super::outcome::Resolution;

/// Damage the player would take from a monster, with and without the weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatPreview {
    pub monster: Card,
    /// The equipped weapon, usable or not.
    pub weapon: Option<Weapon>,
    /// `None` when there is no weapon or its durability rule blocks this monster.
    pub weapon_damage: Option<u32>,
    pub barehanded_damage: u32,
}

impl CombatPreview {
    /// A weapon is equipped but cannot be used against this monster.
    #[must_use]
    pub fn weapon_blocked(&self) -> bool {
        self.weapon.is_some() && self.weapon_damage.is_none()
    }
}

pub(crate) fn preview(state: &GameState, monster: Card) -> CombatPreview {
    let weapon = state.weapon;
    let weapon_damage = weapon
        .filter(|w| w.can_defeat(&monster))
        .map(|w| w.damage_against(&monster));
    CombatPreview {
        monster,
        weapon,
        weapon_damage,
        barehanded_damage: u32::from(monster.value()),
    }
}

/// Fight a monster.
///
/// The weapon is used only when requested, equipped, and allowed by its
/// durability rule; otherwise the full monster value is taken. Only a
/// weapon-assisted fight updates the weapon's last kill.
pub(crate) fn resolve_monster(state: &mut GameState, monster: Card, use_weapon: bool) -> Resolution {
    let usable = state
        .weapon
        .as_mut()
        .filter(|w| use_weapon && w.can_defeat(&monster));

    let (damage, weapon) = match usable {
        Some(weapon) => {
            let damage = weapon.damage_against(&monster);
            weapon.record_defeat(monster);
            (damage, Some(weapon.card()))
        }
        None => (u32::from(monster.value()), None),
    };

    state.health = state.health.saturating_sub(damage);
    let defeated = state.health == 0;
    if defeated {
        state.game_over = true;
        state.victory = false;
        info!(room = state.room_number, monster = %monster, "player defeated");
    }

    debug!(monster = %monster, with_weapon = weapon.is_some(), damage, health = state.health, "fought monster");

    Resolution::Fought {
        monster,
        weapon,
        damage,
        defeated,
    }
}

/// Equip a weapon, dropping the old one and its kill record.
pub(crate) fn equip_weapon(state: &mut GameState, card: Card) -> Resolution {
    let replaced = state.weapon.replace(Weapon::new(card)).map(|old| old.card());
    debug!(weapon = %card, replaced = ?replaced, "equipped weapon");
    Resolution::Equipped {
        weapon: card,
        replaced,
    }
}

/// Drink a potion. Only the first potion in a room heals.
pub(crate) fn drink_potion(state: &mut GameState, potion: Card) -> Resolution {
    if state.potion_used_this_room {
        debug!(potion = %potion, "potion wasted");
        return Resolution::WastedPotion { potion };
    }

    let before = state.health;
    state.health = (state.health + u32::from(potion.value())).min(MAX_HEALTH);
    state.potion_used_this_room = true;

    let healed = state.health - before;
    debug!(potion = %potion, healed, health = state.health, "drank potion");
    Resolution::Drank { potion, healed }
}
