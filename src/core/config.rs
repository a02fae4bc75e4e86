//! Session and dungeon configuration.
//!
//! Games configure the engine at startup by providing:
//! - `SessionConfig`: player starting stats, fate deck, grid size, draw size
//! - `DungeonConfig`: the ordered levels, each with its deck entries,
//!   boss, key and door
//!
//! Both are plain data and deserialize from any serde format.

use serde::{Deserialize, Serialize};

/// Default fate modifiers: +2, +1, 0, 0, -1, -2.
pub const DEFAULT_FATE_DECK: [i32; 6] = [2, 1, 0, 0, -1, -2];

/// Player and board settings for a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Starting and maximum hit points.
    pub max_hp: i32,

    /// Base combat power before equipment.
    pub power: i32,

    /// Base agility used for chest and trap checks.
    pub agility: i32,

    /// Starting gold.
    pub gold: i32,

    /// Fate modifiers, in initial order (the session shuffles them on start).
    pub fate_deck: Vec<i32>,

    /// Cards drawn per explore.
    pub draw_count: usize,

    /// Board columns.
    pub cols: usize,

    /// Board rows.
    pub rows: usize,

    /// How long a presentation layer should let an opened door settle
    /// before showing the board clear. The rules layer does not wait.
    pub door_settle_ms: u64,

    /// Draw a fresh batch automatically after a level transition.
    pub auto_explore_on_level: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_hp: 10,
            power: 1,
            agility: 1,
            gold: 0,
            fate_deck: DEFAULT_FATE_DECK.to_vec(),
            draw_count: 3,
            cols: 5,
            rows: 3,
            door_settle_ms: 600,
            auto_explore_on_level: true,
        }
    }
}

impl SessionConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set starting and maximum hit points.
    #[must_use]
    pub fn with_max_hp(mut self, hp: i32) -> Self {
        self.max_hp = hp;
        self
    }

    /// Set base power.
    #[must_use]
    pub fn with_power(mut self, power: i32) -> Self {
        self.power = power;
        self
    }

    /// Set base agility.
    #[must_use]
    pub fn with_agility(mut self, agility: i32) -> Self {
        self.agility = agility;
        self
    }

    /// Replace the fate deck.
    #[must_use]
    pub fn with_fate_deck(mut self, fate_deck: impl Into<Vec<i32>>) -> Self {
        self.fate_deck = fate_deck.into();
        self
    }

    /// Set cards drawn per explore.
    #[must_use]
    pub fn with_draw_count(mut self, count: usize) -> Self {
        self.draw_count = count;
        self
    }

    /// Set the board dimensions.
    #[must_use]
    pub fn with_grid(mut self, cols: usize, rows: usize) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    /// Enable or disable the automatic draw after a level transition.
    #[must_use]
    pub fn with_auto_explore_on_level(mut self, enabled: bool) -> Self {
        self.auto_explore_on_level = enabled;
        self
    }
}

/// A counted deck entry: `count` copies of card `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckEntry {
    pub id: String,
    pub count: usize,
}

impl DeckEntry {
    /// Create a deck entry.
    pub fn new(id: impl Into<String>, count: usize) -> Self {
        Self { id: id.into(), count }
    }
}

/// One dungeon level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Display name.
    pub name: String,

    /// Flavor text shown on entering the level.
    #[serde(default)]
    pub flavor_text: String,

    /// Counted entries shuffled into the level's deck.
    pub entries: Vec<DeckEntry>,

    /// Boss card id. Shuffled into the deck once, flagged as boss.
    pub boss: String,

    /// Key card id. Never in the deck; handed to the boss as loot.
    pub key: String,

    /// Door card id. Shuffled into the deck once.
    pub door: String,
}

impl LevelConfig {
    /// Create a level with no entries.
    pub fn new(
        name: impl Into<String>,
        boss: impl Into<String>,
        key: impl Into<String>,
        door: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            flavor_text: String::new(),
            entries: Vec::new(),
            boss: boss.into(),
            key: key.into(),
            door: door.into(),
        }
    }

    /// Set flavor text (builder pattern).
    #[must_use]
    pub fn with_flavor(mut self, text: impl Into<String>) -> Self {
        self.flavor_text = text.into();
        self
    }

    /// Add a counted entry (builder pattern).
    #[must_use]
    pub fn with_entry(mut self, id: impl Into<String>, count: usize) -> Self {
        self.entries.push(DeckEntry::new(id, count));
        self
    }

    /// Number of cards this level contributes to the deck
    /// (entries expanded by count, plus boss and door).
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum::<usize>() + 2
    }
}

/// The full dungeon: ordered levels plus the pool monsters draw
/// freshly generated loot from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonConfig {
    pub name: String,
    pub levels: Vec<LevelConfig>,
    pub loot_pool: Vec<String>,
}

impl DungeonConfig {
    /// Create an empty dungeon.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            levels: Vec::new(),
            loot_pool: Vec::new(),
        }
    }

    /// Append a level (builder pattern).
    #[must_use]
    pub fn with_level(mut self, level: LevelConfig) -> Self {
        self.levels.push(level);
        self
    }

    /// Replace the loot pool (builder pattern).
    #[must_use]
    pub fn with_loot_pool<I, S>(mut self, pool: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.loot_pool = pool.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.max_hp, 10);
        assert_eq!(config.power, 1);
        assert_eq!(config.agility, 1);
        assert_eq!(config.fate_deck, vec![2, 1, 0, 0, -1, -2]);
        assert_eq!(config.draw_count, 3);
        assert_eq!((config.cols, config.rows), (5, 3));
    }

    #[test]
    fn test_session_builder() {
        let config = SessionConfig::new()
            .with_max_hp(20)
            .with_power(3)
            .with_agility(2)
            .with_fate_deck([1])
            .with_draw_count(5)
            .with_grid(4, 4);

        assert_eq!(config.max_hp, 20);
        assert_eq!(config.power, 3);
        assert_eq!(config.agility, 2);
        assert_eq!(config.fate_deck, vec![1]);
        assert_eq!(config.draw_count, 5);
        assert_eq!((config.cols, config.rows), (4, 4));
    }

    #[test]
    fn test_partial_session_config_from_json() {
        let config: SessionConfig = serde_json::from_str(r#"{ "max_hp": 15 }"#).unwrap();
        assert_eq!(config.max_hp, 15);
        assert_eq!(config.power, 1);
        assert_eq!(config.fate_deck.len(), 6);
    }

    #[test]
    fn test_level_deck_size() {
        let level = LevelConfig::new("Hall", "boss", "key", "door")
            .with_entry("goblin", 4)
            .with_entry("potion", 3);
        assert_eq!(level.deck_size(), 9);
    }

    #[test]
    fn test_dungeon_serialization() {
        let dungeon = DungeonConfig::new("Test")
            .with_level(
                LevelConfig::new("Hall", "boss", "key", "door")
                    .with_flavor("Quiet.")
                    .with_entry("goblin", 2),
            )
            .with_loot_pool(["sword"]);

        let json = serde_json::to_string(&dungeon).unwrap();
        let back: DungeonConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(dungeon, back);
    }
}
