//! Card templates - static card data.
//!
//! `CardTemplate` holds the immutable properties of a card type, as stored
//! in the catalog. A "Goblin" has 3 HP and no slot - that is the template.
//!
//! Per-copy state (remaining HP, guarded loot) lives on
//! [`CardRecord`](super::CardRecord), created from a template at draw time.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::abilities::AbilityInstance;

/// Catalog key of a card template (e.g. `"goblin"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a card is. Drives which interaction a board occupant offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Monster,
    Potion,
    Trap,
    Treasure,
    Scroll,
    Event,
    Chest,
    Door,
}

impl CardKind {
    /// Cards a monster can pick up and guard when it appears next to them.
    #[must_use]
    pub const fn is_guardable_loot(self) -> bool {
        matches!(self, CardKind::Treasure | CardKind::Potion | CardKind::Scroll)
    }
}

/// Equip-slot category a card declares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipCategory {
    Weapon,
    Armour,
    Head,
    Backpack,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use dungeon_decks::cards::{CardKind, CardTemplate, EquipCategory};
///
/// let sword = CardTemplate::new("short_sword", CardKind::Treasure, "Short Sword", 2)
///     .with_slot(EquipCategory::Weapon);
///
/// assert_eq!(sword.slot, Some(EquipCategory::Weapon));
/// assert!(!sword.is_key);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    pub id: CardId,
    pub kind: CardKind,
    pub name: String,

    /// HP for monsters, power bonus for gear, gold for gold piles,
    /// restored HP for potions.
    pub value: i32,

    #[serde(default)]
    pub description: String,

    /// Equip-slot category, if the card can be equipped.
    #[serde(default)]
    pub slot: Option<EquipCategory>,

    /// Agility needed to crack (chest) or disarm (trap).
    #[serde(default)]
    pub lock_difficulty: i32,

    /// Damage dealt to the player on a failed check.
    #[serde(default)]
    pub trap_damage: i32,

    #[serde(default)]
    pub is_key: bool,

    #[serde(default)]
    pub is_boss: bool,

    /// Level a key or door belongs to.
    #[serde(default)]
    pub deck_level: Option<u32>,

    #[serde(default)]
    pub abilities: SmallVec<[AbilityInstance; 2]>,
}

impl CardTemplate {
    /// Create a template with no slot, lock or abilities.
    pub fn new(id: impl Into<String>, kind: CardKind, name: impl Into<String>, value: i32) -> Self {
        Self {
            id: CardId::new(id),
            kind,
            name: name.into(),
            value,
            description: String::new(),
            slot: None,
            lock_difficulty: 0,
            trap_damage: 0,
            is_key: false,
            is_boss: false,
            deck_level: None,
            abilities: SmallVec::new(),
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the equip-slot category (builder pattern).
    #[must_use]
    pub fn with_slot(mut self, slot: EquipCategory) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Set lock difficulty and failure damage (builder pattern).
    #[must_use]
    pub fn with_lock(mut self, difficulty: i32, trap_damage: i32) -> Self {
        self.lock_difficulty = difficulty;
        self.trap_damage = trap_damage;
        self
    }

    /// Mark as the key of a level (builder pattern).
    #[must_use]
    pub fn as_key(mut self, level: u32) -> Self {
        self.is_key = true;
        self.deck_level = Some(level);
        self
    }

    /// Mark as a boss (builder pattern).
    #[must_use]
    pub fn as_boss(mut self) -> Self {
        self.is_boss = true;
        self
    }

    /// Set the level this card belongs to (builder pattern).
    #[must_use]
    pub fn with_deck_level(mut self, level: u32) -> Self {
        self.deck_level = Some(level);
        self
    }

    /// Attach an ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: AbilityInstance) -> Self {
        self.abilities.push(ability);
        self
    }
}
