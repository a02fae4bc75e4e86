//! The standard ability registry.

use crate::abilities::{AbilityCatalog, AbilityEffect, AbilityRecord, AbilityTrigger};

/// Every ability the standard cards reference.
#[must_use]
pub fn standard_abilities() -> AbilityCatalog {
    use AbilityEffect as E;
    use AbilityTrigger as T;

    let records = [
        ("healing", T::DeliverToPlayer, E::Heal, "Drag onto player portrait to restore HP"),
        ("gain_gold", T::DeliverToPlayer, E::GainGold, "Drag onto player portrait to bank the gold"),
        ("attack_from_shadows", T::OnReveal, E::Damage, "Deals damage to the player when revealed"),
        ("summonToDeck", T::OnExplore, E::ShuffleIntoDeck, "Shuffles minions into the dungeon deck when you explore"),
        ("armour", T::OnDamage, E::AbsorbDamage, "Absorbs damage before it reaches HP"),
        ("agility_drain", T::Passive, E::ModifyAgility, "-1 Agility"),
        ("equip_heal", T::OnEquip, E::Heal, "Heals when equipped"),
        ("discard_damage", T::OnDiscard, E::Damage, "Hurts when discarded"),
        ("vampiric", T::OnMonsterDeath, E::Heal, "Heals when a monster is slain"),
        ("thorns", T::OnCounterAttack, E::Damage, "Damages attacker before counterattack"),
        ("disarm_tool", T::DeliverToTrap, E::Disarm, "Drag onto a trap to disarm it"),
        ("apply_to_weapon", T::DeliverToWeapon, E::Sharpen, "Drag onto a weapon to apply"),
        ("throw_at_monster", T::DeliverToMonster, E::Damage, "Drag onto a monster to throw"),
    ];

    let mut catalog = AbilityCatalog::new();
    for (id, trigger, effect, description) in records {
        catalog.register(AbilityRecord::new(id, trigger, effect, description));
    }
    catalog
}
