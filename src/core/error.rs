//! Error types.
//!
//! Two kinds of failure exist:
//! - Configuration errors (`CatalogError`, `ConfigError`) are fatal and
//!   surface once, when a session is built from its static data.
//! - `Rejection` is the normal "command refused" result. A rejected command
//!   has not mutated anything.

use thiserror::Error;

use crate::zones::CellPos;

/// Lookup failures in the static catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown card id: {0}")]
    UnknownCard(String),

    #[error("Unknown ability id: {0}")]
    UnknownAbility(String),

    #[error("Card id registered twice: {0}")]
    DuplicateCard(String),

    #[error("Ability {ability}: parameter {key} does not fit in 32 bits")]
    ParamOutOfRange { ability: String, key: String },
}

/// Problems found while validating a session's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Dungeon has no levels")]
    NoLevels,

    #[error("Loot pool is empty")]
    EmptyLootPool,

    #[error("Fate deck is empty")]
    EmptyFateDeck,

    #[error("Board must have at least one cell")]
    EmptyGrid,

    #[error("Level {level}: {role} card {id} has the wrong type")]
    WrongRole {
        level: usize,
        role: &'static str,
        id: String,
    },
}

/// Why a command was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Another interaction is in progress")]
    Locked,

    #[error("The game is over")]
    Finished,

    #[error("A trap on the board must be dealt with first")]
    TrapOnBoard,

    #[error("The deck is empty")]
    DeckEmpty,

    #[error("No empty cell on the board")]
    BoardFull,

    #[error("No card at {0}")]
    EmptyCell(CellPos),

    #[error("That card cannot be used this way")]
    WrongCardType,

    #[error("No encounter to resolve")]
    NoEncounter,

    #[error("Item cannot be equipped in slot {0}")]
    CannotEquip(String),

    #[error("Card has no effect when delivered there")]
    NotDeliverable,

    #[error("Key does not match this door")]
    KeyMismatch,

    #[error("Unknown inventory slot: {0}")]
    UnknownSlot(String),

    #[error("Inventory slot {0} is empty")]
    EmptySlot(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_converts() {
        let err: ConfigError = CatalogError::UnknownCard("ghost".into()).into();
        assert_eq!(err.to_string(), "Unknown card id: ghost");
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            Rejection::EmptyCell(CellPos::new(1, 2)).to_string(),
            "No card at (1, 2)"
        );
        assert_eq!(
            Rejection::UnknownSlot("tail".into()).to_string(),
            "Unknown inventory slot: tail"
        );
    }
}
