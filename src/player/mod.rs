//! Player stats and the fate deck.

mod fate;

pub use fate::FateDeck;

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, SessionConfig};

/// The adventurer.
///
/// HP is clamped to `0..=max_hp`. Power and agility are base values;
/// equipment and passive abilities are added by the session when a check is
/// made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub hp: i32,
    pub max_hp: i32,
    pub gold: i32,
    pub power: i32,
    pub agility: i32,
    pub fate: FateDeck,
}

impl Player {
    /// Create a player at full HP with the given stats.
    #[must_use]
    pub fn new(max_hp: i32, power: i32, agility: i32, fate: FateDeck) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            gold: 0,
            power,
            agility,
            fate,
        }
    }

    /// Create a player from session settings, with a shuffled fate deck.
    #[must_use]
    pub fn from_config(config: &SessionConfig, rng: &mut GameRng) -> Self {
        let mut fate = FateDeck::new(config.fate_deck.iter().copied());
        fate.shuffle(rng);
        let mut player = Self::new(config.max_hp, config.power, config.agility, fate);
        player.gold = config.gold;
        player
    }

    /// Lose HP, floored at zero. Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp - amount.max(0)).max(0);
        before - self.hp
    }

    /// Restore HP, capped at max. Returns the HP actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount.max(0)).min(self.max_hp);
        self.hp - before
    }

    /// Add gold.
    pub fn add_gold(&mut self, amount: i32) {
        self.gold += amount;
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}
