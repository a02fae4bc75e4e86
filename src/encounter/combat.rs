//! Combat arithmetic.

use serde::{Deserialize, Serialize};

use crate::core::CardUid;

/// `max(0, power + bonus + modifier)`.
#[must_use]
pub fn effective_power(power: i32, bonus: i32, modifier: i32) -> i32 {
    (power + bonus + modifier).max(0)
}

/// Damage left after armour absorbs part of it.
#[must_use]
pub fn absorbed_damage(amount: i32, absorb: i32) -> i32 {
    (amount - absorb.max(0)).max(0)
}

/// Outcome of a committed fight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatReport {
    pub monster: CardUid,
    pub modifier: i32,
    pub effective_power: i32,
    /// Monster HP after the player's strike and any thorns.
    pub monster_remaining: i32,
    pub killed: bool,
    /// HP the player lost to the counterattack.
    pub damage_taken: i32,
    /// Loot released into the monster's cell.
    pub loot: Option<CardUid>,
}
