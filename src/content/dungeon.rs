//! The standard three-level dungeon.

use crate::core::{DungeonConfig, LevelConfig};

/// Cards monsters and chests can be handed as fresh loot.
pub const LOOT_POOL: [&str; 14] = [
    "short_sword",
    "battle_axe",
    "wooden_shield",
    "leather_armour",
    "chain_mail",
    "iron_helm",
    "crown",
    "health_potion",
    "fireball_scroll",
    "whetstone",
    "disarm_kit",
    "gold_pile_small",
    "gold_pile_medium",
    "gold_pile_large",
];

/// Greeting Hall, Underground Temple, Torture Rooms.
#[must_use]
pub fn standard_dungeon() -> DungeonConfig {
    let greeting_hall = LevelConfig::new("Greeting Hall", "goblin_chief", "rusty_key", "hall_door")
        .with_flavor("The entrance is deceptively calm...")
        .with_entry("goblin", 4)
        .with_entry("skeleton", 2)
        .with_entry("health_potion", 3)
        .with_entry("spike_trap", 2)
        .with_entry("short_sword", 2)
        .with_entry("leather_armour", 2)
        .with_entry("iron_helm", 2)
        .with_entry("wooden_chest", 2)
        .with_entry("shrine", 1);

    let temple = LevelConfig::new("Underground Temple", "high_priest", "temple_key", "temple_gate")
        .with_flavor("Ancient carvings line the walls...")
        .with_entry("dark_acolyte", 3)
        .with_entry("stone_golem", 2)
        .with_entry("health_potion", 2)
        .with_entry("poison_gas", 2)
        .with_entry("battle_axe", 1)
        .with_entry("chain_mail", 1)
        .with_entry("fireball_scroll", 1)
        .with_entry("iron_chest", 2)
        .with_entry("attack_from_shadows", 1);

    let torture_rooms = LevelConfig::new("Torture Rooms", "dungeon_lord", "master_key", "final_door")
        .with_flavor("Screams echo from the darkness...")
        .with_entry("torturer", 3)
        .with_entry("bone_dragon", 1)
        .with_entry("crypt_lord", 1)
        .with_entry("health_potion", 2)
        .with_entry("spike_trap_heavy", 2)
        .with_entry("crown", 1)
        .with_entry("merchant", 1)
        .with_entry("iron_chest_heavy", 1);

    DungeonConfig::new("Dungeon Decks")
        .with_level(greeting_hall)
        .with_level(temple)
        .with_level(torture_rooms)
        .with_loot_pool(LOOT_POOL)
}
