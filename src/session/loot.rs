//! Loot guarding.
//!
//! When a monster is placed it claims loot: a loose item already on the
//! board (keys first), otherwise a fresh card from the loot pool. The
//! claimed item is moved off the board into the monster, and the monster
//! takes the item's cell.

use crate::core::GameRng;
use crate::zones::{Board, CellPos};

/// Cells holding guardable loot. Taken once at the start of a placement
/// batch so cards placed in the same batch are never claimed.
#[must_use]
pub fn loot_snapshot(board: &Board) -> Vec<CellPos> {
    board
        .occupants()
        .filter(|(_, c)| c.kind().is_guardable_loot())
        .map(|(pos, _)| pos)
        .collect()
}

/// Pick the cell a newly placed monster claims from `eligible`, skipping
/// cells already claimed this batch. Key cards are preferred; among equals
/// the earliest cell wins.
#[must_use]
pub fn find_claimable(board: &Board, eligible: &[CellPos], claimed: &[CellPos]) -> Option<CellPos> {
    let mut candidates = eligible.iter().copied().filter(|pos| {
        !claimed.contains(pos)
            && board
                .get_card_at(*pos)
                .is_some_and(|c| c.kind().is_guardable_loot())
    });

    let first = candidates.next()?;
    let is_key = |pos: &CellPos| board.get_card_at(*pos).is_some_and(|c| c.data.is_key);

    if is_key(&first) {
        return Some(first);
    }
    Some(candidates.find(is_key).unwrap_or(first))
}

/// Choose a random id from the loot pool.
pub fn pick_loot<'a>(pool: &'a [String], rng: &mut GameRng) -> Option<&'a str> {
    rng.choose(pool).map(String::as_str)
}
