//! Core engine types: card identity, RNG, configuration, errors.

pub mod config;
pub mod entity;
pub mod error;
pub mod rng;

pub use config::{DeckEntry, DungeonConfig, LevelConfig, SessionConfig, DEFAULT_FATE_DECK};
pub use entity::{CardUid, UidAllocator};
pub use error::{CatalogError, ConfigError, Rejection};
pub use rng::GameRng;
