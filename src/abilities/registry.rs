//! Ability catalog.
//!
//! Stores ability metadata by id and answers "which of this card's abilities
//! fire on trigger X". Card templates are checked against the catalog when a
//! session is built, so lookups during play cannot miss.

use rustc_hash::FxHashMap;

use super::ability::{AbilityEffect, AbilityInstance, AbilityRecord, AbilityTrigger};
use crate::cards::{CardRecord, CardTemplate};
use crate::core::CatalogError;

/// A card ability matched to a trigger: the metadata plus the card's params.
#[derive(Clone, Copy, Debug)]
pub struct Triggered<'a> {
    pub record: &'a AbilityRecord,
    pub instance: &'a AbilityInstance,
}

impl Triggered<'_> {
    /// The ability's effect.
    #[must_use]
    pub fn effect(&self) -> AbilityEffect {
        self.record.effect
    }
}

/// Registry of ability metadata.
#[derive(Clone, Debug, Default)]
pub struct AbilityCatalog {
    abilities: FxHashMap<String, AbilityRecord>,
}

impl AbilityCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an ability. A later registration with the same id replaces
    /// the earlier one.
    pub fn register(&mut self, ability: AbilityRecord) {
        self.abilities.insert(ability.id.clone(), ability);
    }

    /// Look up an ability by id.
    pub fn get(&self, id: &str) -> Result<&AbilityRecord, CatalogError> {
        self.abilities
            .get(id)
            .ok_or_else(|| CatalogError::UnknownAbility(id.to_string()))
    }

    /// Number of registered abilities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    /// Check that every ability a template references is registered and
    /// that its integer parameters fit the engine's arithmetic.
    pub fn validate(&self, template: &CardTemplate) -> Result<(), CatalogError> {
        for inst in &template.abilities {
            self.get(&inst.ability_id)?;
            if let Some(key) = inst.oversized_param() {
                return Err(CatalogError::ParamOutOfRange {
                    ability: inst.ability_id.clone(),
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Abilities of `card` that fire on `trigger`.
    ///
    /// Panics on an unregistered ability id: templates are validated before
    /// play, so a miss here means the catalog was swapped underneath a session.
    pub fn triggered<'a>(
        &'a self,
        card: &'a CardRecord,
        trigger: AbilityTrigger,
    ) -> impl Iterator<Item = Triggered<'a>> + 'a {
        card.data.abilities.iter().filter_map(move |instance| {
            let record = self
                .abilities
                .get(&instance.ability_id)
                .unwrap_or_else(|| panic!("unvalidated ability id: {}", instance.ability_id));
            (record.trigger == trigger).then_some(Triggered { record, instance })
        })
    }

    /// Whether `card` has any ability firing on `trigger`.
    #[must_use]
    pub fn has_trigger(&self, card: &CardRecord, trigger: AbilityTrigger) -> bool {
        self.triggered(card, trigger).next().is_some()
    }

    /// Sum of `amount` over abilities of `card` on `trigger` with `effect`.
    /// A missing amount counts as the card's value.
    #[must_use]
    pub fn total(&self, card: &CardRecord, trigger: AbilityTrigger, effect: AbilityEffect) -> i32 {
        self.triggered(card, trigger)
            .filter(|t| t.effect() == effect)
            .map(|t| t.instance.amount_or(card.value()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, CardTemplate};
    use crate::core::CardUid;

    fn catalog() -> AbilityCatalog {
        let mut catalog = AbilityCatalog::new();
        catalog.register(AbilityRecord::new(
            "healing",
            AbilityTrigger::DeliverToPlayer,
            AbilityEffect::Heal,
            "Drag onto player portrait to restore HP",
        ));
        catalog.register(AbilityRecord::new(
            "armour",
            AbilityTrigger::OnDamage,
            AbilityEffect::AbsorbDamage,
            "Absorbs damage before it reaches HP",
        ));
        catalog
    }

    fn potion() -> CardRecord {
        CardRecord::new(
            CardUid(0),
            CardTemplate::new("health_potion", CardKind::Potion, "Health Potion", 4)
                .with_ability(AbilityInstance::new("healing").with_param("amount", 4)),
        )
    }

    #[test]
    fn test_get_unknown() {
        let catalog = catalog();
        assert!(catalog.get("healing").is_ok());
        assert_eq!(
            catalog.get("teleport").unwrap_err(),
            CatalogError::UnknownAbility("teleport".into())
        );
    }

    #[test]
    fn test_triggered_filters_by_trigger() {
        let catalog = catalog();
        let card = potion();

        let fired: Vec<_> = catalog.triggered(&card, AbilityTrigger::DeliverToPlayer).collect();
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].effect(), AbilityEffect::Heal);
        assert_eq!(fired[0].instance.amount_or(0), 4);

        assert!(!catalog.has_trigger(&card, AbilityTrigger::OnReveal));
    }

    #[test]
    fn test_total() {
        let catalog = catalog();
        let shield = CardRecord::new(
            CardUid(1),
            CardTemplate::new("wooden_shield", CardKind::Treasure, "Wooden Shield", 1)
                .with_ability(AbilityInstance::new("armour").with_param("amount", 1))
                .with_ability(AbilityInstance::new("armour").with_param("amount", 2)),
        );
        assert_eq!(
            catalog.total(&shield, AbilityTrigger::OnDamage, AbilityEffect::AbsorbDamage),
            3
        );
    }

    #[test]
    fn test_total_defaults_to_card_value() {
        let catalog = catalog();
        let mail = CardRecord::new(
            CardUid(2),
            CardTemplate::new("chain_mail", CardKind::Treasure, "Chain Mail", 2)
                .with_ability(AbilityInstance::new("armour")),
        );
        assert_eq!(
            catalog.total(&mail, AbilityTrigger::OnDamage, AbilityEffect::AbsorbDamage),
            2
        );
    }

    #[test]
    fn test_validate() {
        let catalog = catalog();
        assert!(catalog.validate(&potion().data).is_ok());

        let bad = CardTemplate::new("odd", CardKind::Event, "Odd", 0)
            .with_ability(AbilityInstance::new("teleport"));
        assert_eq!(
            catalog.validate(&bad).unwrap_err(),
            CatalogError::UnknownAbility("teleport".into())
        );

        let huge = CardTemplate::new("elixir", CardKind::Potion, "Elixir", 1)
            .with_ability(AbilityInstance::new("healing").with_param("amount", 1_i64 << 40));
        assert_eq!(
            catalog.validate(&huge).unwrap_err(),
            CatalogError::ParamOutOfRange {
                ability: "healing".into(),
                key: "amount".into(),
            }
        );
    }
}
