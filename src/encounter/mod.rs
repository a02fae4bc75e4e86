//! Encounter state and check arithmetic.
//!
//! The session owns a single [`Activity`] value. It is the global
//! mutual-exclusion lock: anything other than `Idle` blocks every other
//! command that would start an interaction.
//!
//! Resolution of each encounter kind lives in the session, one function per
//! [`EncounterKind`]; this module holds the state types and the pure math
//! of combat and lock checks.

mod combat;
mod lockpick;

pub use combat::{absorbed_damage, effective_power, CombatReport};
pub use lockpick::{effective_agility, lock_check, LockReport};

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;
use crate::core::CardUid;
use crate::zones::CellPos;

/// The three modal interactions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterKind {
    Combat,
    Chest,
    Trap,
}

impl EncounterKind {
    /// Encounter offered by a board occupant of this kind.
    #[must_use]
    pub const fn for_card(kind: CardKind) -> Option<Self> {
        match kind {
            CardKind::Monster => Some(EncounterKind::Combat),
            CardKind::Chest => Some(EncounterKind::Chest),
            CardKind::Trap => Some(EncounterKind::Trap),
            _ => None,
        }
    }
}

/// An engaged encounter: what, where, with which card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub kind: EncounterKind,
    pub pos: CellPos,
    pub card: CardUid,
}

/// Steps an encounter passes through, reported to observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterPhase {
    Engaged,
    FateDraw,
    /// Combat damage exchange.
    Resolve,
    /// Chest or trap agility check.
    AgilityCheck,
    Outcome,
    Cancelled,
}

/// Where a movable card currently is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardRef {
    Board(CellPos),
    Slot(String),
}

impl CardRef {
    /// Reference a board cell.
    #[must_use]
    pub const fn board(col: usize, row: usize) -> Self {
        CardRef::Board(CellPos::new(col, row))
    }

    /// Reference an inventory slot.
    pub fn slot(name: impl Into<String>) -> Self {
        CardRef::Slot(name.into())
    }
}

/// Outcome of any committed encounter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterReport {
    Combat(CombatReport),
    Lock(LockReport),
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ending {
    Victory,
    Defeat,
}

/// What the player is doing right now.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Activity {
    #[default]
    Idle,
    /// Drawing and placing a batch of cards.
    Exploring,
    /// Holding a card mid-drag.
    Dragging(CardRef),
    /// Engaged in combat, chest cracking or trap disarming.
    Engaged(Encounter),
    /// Terminal: no further mutation is accepted.
    Finished(Ending),
}

impl Activity {
    /// Whether the interaction lock is held.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        !matches!(self, Activity::Idle)
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Activity::Finished(_))
    }

    /// The engaged encounter, if any.
    #[must_use]
    pub fn encounter(&self) -> Option<&Encounter> {
        match self {
            Activity::Engaged(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(EncounterKind::for_card(CardKind::Monster), Some(EncounterKind::Combat));
        assert_eq!(EncounterKind::for_card(CardKind::Chest), Some(EncounterKind::Chest));
        assert_eq!(EncounterKind::for_card(CardKind::Trap), Some(EncounterKind::Trap));
        assert_eq!(EncounterKind::for_card(CardKind::Door), None);
        assert_eq!(EncounterKind::for_card(CardKind::Potion), None);
    }

    #[test]
    fn test_lock() {
        assert!(!Activity::Idle.is_locked());
        assert!(Activity::Exploring.is_locked());
        assert!(Activity::Dragging(CardRef::board(0, 0)).is_locked());
        assert!(Activity::Finished(Ending::Defeat).is_locked());
        assert!(Activity::Finished(Ending::Victory).is_finished());

        let enc = Encounter {
            kind: EncounterKind::Trap,
            pos: CellPos::new(1, 1),
            card: CardUid(3),
        };
        assert_eq!(Activity::Engaged(enc).encounter(), Some(&enc));
        assert_eq!(Activity::Idle.encounter(), None);
    }
}
