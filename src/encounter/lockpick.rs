//! Chest and trap check arithmetic.

use serde::{Deserialize, Serialize};

use super::EncounterKind;
use crate::core::CardUid;

/// `max(0, agility + passive + modifier)`.
#[must_use]
pub fn effective_agility(agility: i32, passive: i32, modifier: i32) -> i32 {
    (agility + passive + modifier).max(0)
}

/// A check succeeds when effective agility meets or beats the difficulty.
#[must_use]
pub fn lock_check(effective_agility: i32, difficulty: i32) -> bool {
    effective_agility >= difficulty
}

/// Outcome of a committed crack or disarm.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockReport {
    pub kind: EncounterKind,
    pub card: CardUid,
    pub modifier: i32,
    pub effective_agility: i32,
    pub difficulty: i32,
    pub success: bool,
    pub damage_taken: i32,
    /// Chest loot revealed on success.
    pub loot: Option<CardUid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_agility() {
        assert_eq!(effective_agility(1, 0, 1), 2);
        assert_eq!(effective_agility(1, -1, -2), 0);
    }

    #[test]
    fn test_check_threshold() {
        assert!(lock_check(2, 2));
        assert!(!lock_check(2, 3));
        assert!(lock_check(0, 0));
    }
}
