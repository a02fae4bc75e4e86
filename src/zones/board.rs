//! The board grid.
//!
//! A fixed `cols x rows` matrix; each cell holds zero or one occupant.
//! Guarded and concealed loot is not on the grid: it is owned by its
//! guardian's [`CardRecord`] and only placed when the guardian resolves.

use serde::{Deserialize, Serialize};

use crate::cards::{CardKind, CardRecord};
use crate::core::CardUid;

/// A cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub col: usize,
    pub row: usize,
}

impl CellPos {
    /// Create a cell position.
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Grid of occupants, stored row-major.
#[derive(Clone, Debug)]
pub struct Board {
    cols: usize,
    rows: usize,
    cells: Vec<Option<CardRecord>>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![None; cols * rows],
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    fn index(&self, pos: CellPos) -> Option<usize> {
        (pos.col < self.cols && pos.row < self.rows).then(|| pos.row * self.cols + pos.col)
    }

    fn pos_of(&self, index: usize) -> CellPos {
        CellPos::new(index % self.cols, index / self.cols)
    }

    /// All unoccupied cells, row by row.
    #[must_use]
    pub fn get_empty_slots(&self) -> Vec<CellPos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| self.pos_of(i))
            .collect()
    }

    /// Place a card into an empty cell.
    ///
    /// Panics if the cell is out of bounds or occupied.
    pub fn place_card(&mut self, pos: CellPos, card: CardRecord) {
        let idx = self
            .index(pos)
            .unwrap_or_else(|| panic!("cell {} is off the board", pos));
        assert!(
            self.cells[idx].is_none(),
            "cell {} is already occupied",
            pos
        );
        self.cells[idx] = Some(card);
    }

    /// Remove and return the occupant of a cell.
    pub fn remove_card(&mut self, pos: CellPos) -> Option<CardRecord> {
        let idx = self.index(pos)?;
        self.cells[idx].take()
    }

    /// Borrow the occupant of a cell.
    #[must_use]
    pub fn get_card_at(&self, pos: CellPos) -> Option<&CardRecord> {
        self.index(pos).and_then(|i| self.cells[i].as_ref())
    }

    /// Mutably borrow the occupant of a cell.
    pub fn get_card_at_mut(&mut self, pos: CellPos) -> Option<&mut CardRecord> {
        let idx = self.index(pos)?;
        self.cells[idx].as_mut()
    }

    /// Find the cell of a placed card. Loot held by a guardian is not placed
    /// and yields `None`.
    #[must_use]
    pub fn find_card(&self, uid: CardUid) -> Option<CellPos> {
        self.cells
            .iter()
            .position(|c| c.as_ref().is_some_and(|c| c.uid == uid))
            .map(|i| self.pos_of(i))
    }

    /// Remove and return every occupant.
    pub fn get_all_cards(&mut self) -> Vec<CardRecord> {
        self.cells.iter_mut().filter_map(Option::take).collect()
    }

    /// Iterate over occupied cells.
    pub fn occupants(&self) -> impl Iterator<Item = (CellPos, &CardRecord)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.as_ref().map(|c| (self.pos_of(i), c)))
    }

    /// Whether any occupant has the given kind.
    #[must_use]
    pub fn contains_kind(&self, kind: CardKind) -> bool {
        self.occupants().any(|(_, c)| c.kind() == kind)
    }

    /// Cards on the board including the loot they hold.
    #[must_use]
    pub fn population(&self) -> usize {
        self.occupants().map(|(_, c)| c.population()).sum()
    }
}
