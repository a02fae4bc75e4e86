//! The standard card catalog.

use crate::abilities::AbilityInstance;
use crate::cards::{CardCatalog, CardKind, CardTemplate, EquipCategory};
use crate::core::CatalogError;

fn monster(id: &str, name: &str, value: i32, description: &str) -> CardTemplate {
    CardTemplate::new(id, CardKind::Monster, name, value).with_description(description)
}

fn gear(id: &str, name: &str, value: i32, slot: EquipCategory, description: &str) -> CardTemplate {
    CardTemplate::new(id, CardKind::Treasure, name, value)
        .with_slot(slot)
        .with_description(description)
}

fn lock(id: &str, kind: CardKind, name: &str, difficulty: i32, damage: i32, description: &str) -> CardTemplate {
    let value = if kind == CardKind::Trap { damage } else { 0 };
    CardTemplate::new(id, kind, name, value)
        .with_lock(difficulty, damage)
        .with_description(description)
}

fn amount(ability: &str, amount: i64) -> AbilityInstance {
    AbilityInstance::new(ability).with_param("amount", amount)
}

/// All templates of the standard game.
#[must_use]
pub fn standard_cards() -> Vec<CardTemplate> {
    use CardKind::*;
    use EquipCategory::*;

    vec![
        // Monsters
        monster("goblin", "Goblin", 3, "A weak goblin"),
        monster("skeleton", "Skeleton", 5, "Rattling bones"),
        monster("dark_acolyte", "Dark Acolyte", 5, "A shadowy cultist. -1 Agility while on the board")
            .with_ability(amount("agility_drain", -1)),
        monster("stone_golem", "Stone Golem", 8, "Animated stone guardian"),
        monster("torturer", "Torturer", 7, "A cruel jailer"),
        monster("bone_dragon", "Bone Dragon", 12, "Undead wyrm of bone"),
        monster("crypt_lord", "Crypt Lord", 9, "Raises two skeletons every time you explore")
            .with_ability(
                AbilityInstance::new("summonToDeck")
                    .with_param("card", "skeleton")
                    .with_param("count", 2),
            ),
        // Bosses
        monster("goblin_chief", "Goblin Chief", 6, "Leader of the goblins"),
        monster("high_priest", "High Priest", 10, "Master of dark rituals"),
        monster("dungeon_lord", "Dungeon Lord", 15, "The master of this dungeon"),
        // Potions
        CardTemplate::new("health_potion", Potion, "Health Potion", 4)
            .with_slot(Backpack)
            .with_description("Restores 4 HP")
            .with_ability(amount("healing", 4)),
        // Traps
        lock("spike_trap", Trap, "Spike Trap", 2, 2, "Deals 2 damage"),
        lock("spike_trap_heavy", Trap, "Spike Trap", 3, 4, "Deals 4 damage"),
        lock("poison_gas", Trap, "Poison Gas", 3, 3, "Deals 3 damage"),
        // Gear
        gear("short_sword", "Short Sword", 2, Weapon, "+2 power"),
        gear("battle_axe", "Battle Axe", 4, Weapon, "+4 power"),
        gear("leather_armour", "Leather Armour", 1, Armour, "+1 power, pricks attackers for 1")
            .with_ability(amount("thorns", 1)),
        gear("chain_mail", "Chain Mail", 3, Armour, "+3 power, absorbs 1 damage")
            .with_ability(amount("armour", 1)),
        gear("wooden_shield", "Wooden Shield", 0, Armour, "Absorbs 1 damage")
            .with_ability(amount("armour", 1)),
        gear("iron_helm", "Iron Helm", 1, Head, "+1 power, heals 1 when put on")
            .with_ability(amount("equip_heal", 1)),
        gear("crown", "Crown", 2, Head, "+2 power, heals 1 per kill")
            .with_ability(amount("vampiric", 1)),
        // Tools
        gear("whetstone", "Whetstone", 0, Backpack, "Drag onto a weapon for +1 power")
            .with_ability(amount("apply_to_weapon", 1)),
        gear("disarm_kit", "Disarm Kit", 0, Backpack, "Drag onto a trap to disarm it")
            .with_ability(AbilityInstance::new("disarm_tool")),
        // Scrolls
        CardTemplate::new("fireball_scroll", Scroll, "Fireball Scroll", 6)
            .with_slot(Backpack)
            .with_description("Deals 6 damage to a monster")
            .with_ability(amount("throw_at_monster", 6)),
        // Gold
        CardTemplate::new("gold_pile_small", Treasure, "Small Gold Pile", 3)
            .with_description("3 gold")
            .with_ability(AbilityInstance::new("gain_gold")),
        CardTemplate::new("gold_pile_medium", Treasure, "Gold Pile", 6)
            .with_description("6 gold")
            .with_ability(AbilityInstance::new("gain_gold")),
        CardTemplate::new("gold_pile_large", Treasure, "Large Gold Pile", 10)
            .with_description("10 gold")
            .with_ability(AbilityInstance::new("gain_gold")),
        // Events
        CardTemplate::new("merchant", Event, "Merchant", 0).with_description("Trade goods"),
        CardTemplate::new("shrine", Event, "Shrine", 0).with_description("A mysterious shrine"),
        CardTemplate::new("attack_from_shadows", Event, "Attack from the Shadows", 2)
            .with_description("Deals 2 damage when revealed")
            .with_ability(amount("attack_from_shadows", 2)),
        // Chests
        lock("wooden_chest", Chest, "Wooden Chest", 2, 1, "A simple wooden chest"),
        lock("iron_chest", Chest, "Iron Chest", 4, 3, "A sturdy iron chest"),
        lock("iron_chest_heavy", Chest, "Iron Chest", 5, 4, "A sturdy iron chest"),
        // Keys
        gear("rusty_key", "Rusty Key", 1, Weapon, "Opens the hall door").as_key(1),
        gear("temple_key", "Temple Key", 2, Weapon, "Opens the temple gate").as_key(2),
        gear("master_key", "Master Key", 3, Weapon, "Opens the final door").as_key(3),
        // Doors
        CardTemplate::new("hall_door", Door, "Hall Door", 0)
            .with_description("A heavy wooden door")
            .with_deck_level(1),
        CardTemplate::new("temple_gate", Door, "Temple Gate", 0)
            .with_description("An ornate stone gate")
            .with_deck_level(2),
        CardTemplate::new("final_door", Door, "Final Door", 0)
            .with_description("The last barrier")
            .with_deck_level(3),
    ]
}

/// The standard catalog.
pub fn standard_catalog() -> Result<CardCatalog, CatalogError> {
    let mut catalog = CardCatalog::new();
    for card in standard_cards() {
        catalog.register(card)?;
    }
    Ok(catalog)
}
