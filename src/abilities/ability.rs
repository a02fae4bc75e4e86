//! Ability definitions.
//!
//! An ability is data: *when* it fires ([`AbilityTrigger`]) and *what* it
//! does ([`AbilityEffect`]). Cards reference abilities by id through an
//! [`AbilityInstance`] carrying per-card parameters.

use serde::{Deserialize, Serialize};

use crate::cards::{ParamValue, Params};

/// Activation context of an ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AbilityTrigger {
    /// Card dropped onto the player portrait.
    DeliverToPlayer,
    /// Card dropped onto a trap on the board.
    DeliverToTrap,
    /// Card dropped onto an equipped weapon.
    DeliverToWeapon,
    /// Card dropped onto a monster on the board.
    DeliverToMonster,
    /// Card placed face-up on the board.
    OnReveal,
    /// Player explores while the card is on the board.
    OnExplore,
    /// Player is about to take damage while the card is equipped.
    OnDamage,
    /// Card is equipped.
    OnEquip,
    /// Card is discarded from the inventory.
    OnDiscard,
    /// A monster dies while the card is equipped.
    OnMonsterDeath,
    /// A monster is about to counterattack while the card is equipped.
    OnCounterAttack,
    /// Always on while equipped or on the board.
    Passive,
}

impl AbilityTrigger {
    /// Triggers that fire from a drag-and-drop delivery.
    #[must_use]
    pub const fn is_delivery(self) -> bool {
        matches!(
            self,
            AbilityTrigger::DeliverToPlayer
                | AbilityTrigger::DeliverToTrap
                | AbilityTrigger::DeliverToWeapon
                | AbilityTrigger::DeliverToMonster
        )
    }
}

/// What an ability does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AbilityEffect {
    /// Restore HP (capped at max).
    Heal,
    /// Deal damage. The target depends on the trigger.
    Damage,
    /// Merge fresh copies of a card into the deck.
    ShuffleIntoDeck,
    /// Reduce incoming damage.
    AbsorbDamage,
    /// Adjust effective agility.
    ModifyAgility,
    /// Add gold.
    GainGold,
    /// Disarm the target trap without a check.
    Disarm,
    /// Raise the target weapon's value.
    Sharpen,
}

/// Ability metadata, keyed by id in the [`AbilityCatalog`](super::AbilityCatalog).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityRecord {
    pub id: String,
    pub trigger: AbilityTrigger,
    pub effect: AbilityEffect,
    #[serde(default)]
    pub description: String,
}

impl AbilityRecord {
    /// Create an ability record.
    pub fn new(
        id: impl Into<String>,
        trigger: AbilityTrigger,
        effect: AbilityEffect,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            trigger,
            effect,
            description: description.into(),
        }
    }
}

/// An ability attached to a card, with its parameters.
///
/// ```
/// use dungeon_decks::abilities::AbilityInstance;
///
/// let heal = AbilityInstance::new("healing").with_param("amount", 4);
/// assert_eq!(heal.int("amount"), Some(4));
/// assert_eq!(heal.text("card"), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityInstance {
    pub ability_id: String,
    #[serde(default)]
    pub params: Params,
}

impl AbilityInstance {
    /// Create an instance with no parameters.
    pub fn new(ability_id: impl Into<String>) -> Self {
        Self {
            ability_id: ability_id.into(),
            params: Params::default(),
        }
    }

    /// Add a parameter (builder pattern).
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Get an integer parameter.
    #[must_use]
    pub fn int(&self, key: &str) -> Option<i64> {
        self.params.get(key).and_then(ParamValue::as_int)
    }

    /// Get a text parameter.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(ParamValue::as_text)
    }

    /// The `amount` parameter, or `default` when absent.
    #[must_use]
    pub fn amount_or(&self, default: i32) -> i32 {
        self.int("amount")
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or(default)
    }

    /// First integer parameter that does not fit in an `i32`.
    #[must_use]
    pub fn oversized_param(&self) -> Option<&str> {
        self.params
            .iter()
            .find(|(_, v)| v.as_int().is_some_and(|n| i32::try_from(n).is_err()))
            .map(|(k, _)| k.as_str())
    }
}
