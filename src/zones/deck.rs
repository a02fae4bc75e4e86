//! The dungeon deck.
//!
//! An ordered pool of card copies. Cards are drawn from the front.
//! `merge_cards` reshuffles the *whole* remaining deck after appending, not
//! just the new cards: after a merge the entire order is unpredictable
//! again. This is intentional.

use tracing::trace;

use crate::cards::{CardCatalog, CardRecord};
use crate::core::{CatalogError, GameRng, LevelConfig, UidAllocator};

/// Ordered list of remaining card copies.
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vec<CardRecord>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck with exactly this order (no shuffle).
    #[must_use]
    pub fn from_cards(cards: Vec<CardRecord>) -> Self {
        Self { cards }
    }

    /// Build a level's deck: entries expanded by count, plus boss and door,
    /// shuffled.
    pub fn build(
        level: &LevelConfig,
        catalog: &CardCatalog,
        uids: &mut UidAllocator,
        rng: &mut GameRng,
    ) -> Result<Self, CatalogError> {
        let mut deck = Self::from_cards(Self::level_cards(level, catalog, uids)?);
        deck.shuffle(rng);
        Ok(deck)
    }

    /// A level's full card set in configuration order: every entry expanded
    /// by count, then the boss (flagged as boss), then the door.
    pub fn level_cards(
        level: &LevelConfig,
        catalog: &CardCatalog,
        uids: &mut UidAllocator,
    ) -> Result<Vec<CardRecord>, CatalogError> {
        let mut cards = Vec::with_capacity(level.deck_size());

        for entry in &level.entries {
            for _ in 0..entry.count {
                cards.push(catalog.instantiate(&entry.id, uids.alloc())?);
            }
        }

        let mut boss = catalog.instantiate(&level.boss, uids.alloc())?;
        boss.data.is_boss = true;
        cards.push(boss);

        cards.push(catalog.instantiate(&level.door, uids.alloc())?);
        Ok(cards)
    }

    /// Shuffle the remaining cards.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return up to `n` cards from the front.
    ///
    /// Returns fewer when the deck holds fewer; never fails.
    pub fn draw(&mut self, n: usize) -> Vec<CardRecord> {
        let n = n.min(self.cards.len());
        let drawn: Vec<_> = self.cards.drain(..n).collect();
        trace!(drawn = drawn.len(), remaining = self.cards.len(), "deck draw");
        drawn
    }

    /// Append cards, then reshuffle the entire deck.
    pub fn merge_cards(&mut self, cards: Vec<CardRecord>, rng: &mut GameRng) {
        self.cards.extend(cards);
        self.shuffle(rng);
    }

    /// Number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the remaining cards, front first.
    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.iter()
    }
}
