//! Standard game content: cards, abilities, the dungeon and its loot pool.

mod abilities;
mod cards;
mod dungeon;

pub use abilities::standard_abilities;
pub use cards::{standard_cards, standard_catalog};
pub use dungeon::{standard_dungeon, LOOT_POOL};

use crate::core::{ConfigError, GameRng, SessionConfig};
use crate::session::GameSession;

/// Start a standard game with the given settings and seed.
pub fn standard_session(config: SessionConfig, seed: u64) -> Result<GameSession, ConfigError> {
    GameSession::new(
        config,
        standard_dungeon(),
        standard_catalog()?,
        standard_abilities(),
        GameRng::new(seed),
    )
}
