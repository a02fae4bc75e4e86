//! # dungeon-decks
//!
//! Rules engine for a single-player dungeon-crawl card game.
//!
//! The player explores a dungeon deck one batch at a time, placing cards on a
//! grid, then fights monsters, cracks chests and disarms traps using a small
//! deck of fate modifiers. Each level's boss guards the key to its door;
//! opening the door clears the board and merges the next level into the
//! deck. Opening the last door wins.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven Content**: Cards, abilities and levels are plain data,
//!    validated once when a session starts.
//!
//! 2. **One Lock**: A single [`Activity`] value serializes every interaction.
//!    Explore, engage, equip and deliver are refused while it is held.
//!
//! 3. **Single Ownership**: A card lives in exactly one place. Loot held by a
//!    monster or chest is owned by it, not placed on the board.
//!
//! 4. **Deterministic**: All randomness flows through a seeded [`GameRng`].
//!
//! ## Modules
//!
//! - `core`: Card uids, RNG, configuration, errors
//! - `cards`: Card templates, records and the catalog
//! - `abilities`: Ability records and trigger lookup
//! - `zones`: Deck, board and inventory
//! - `player`: Player stats and the fate deck
//! - `encounter`: Encounter state and check arithmetic
//! - `session`: The game session, its commands and notifications
//! - `content`: The standard cards and dungeon

pub mod abilities;
pub mod cards;
pub mod content;
pub mod core;
pub mod encounter;
pub mod player;
pub mod session;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    CardUid, CatalogError, ConfigError, DungeonConfig, GameRng, LevelConfig, Rejection,
    SessionConfig,
};

pub use crate::cards::{CardCatalog, CardId, CardKind, CardRecord, CardTemplate, EquipCategory};

pub use crate::abilities::{AbilityCatalog, AbilityEffect, AbilityInstance, AbilityRecord, AbilityTrigger};

pub use crate::zones::{Board, CellPos, Deck, Inventory};

pub use crate::player::{FateDeck, Player};

pub use crate::encounter::{
    Activity, CardRef, CombatReport, Encounter, EncounterKind, EncounterPhase, EncounterReport,
    Ending, LockReport,
};

pub use crate::session::{CommandRecord, GameSession, Notification, Observer};

pub use crate::content::standard_session;
