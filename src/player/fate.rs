//! The fate deck.
//!
//! A small pool of numeric modifiers. Every combat or lock check draws one
//! from the front and, when the check ends, shuffles exactly that card back
//! in. The deck's size is therefore the same before and after every
//! encounter.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::GameRng;

/// Modifier deck with at most one card out at a time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FateDeck {
    cards: SmallVec<[i32; 8]>,
    out: Option<i32>,
}

impl FateDeck {
    /// Create a fate deck in the given order.
    pub fn new(cards: impl IntoIterator<Item = i32>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            out: None,
        }
    }

    /// Draw the front card.
    ///
    /// Returns `None` if the deck is empty. Panics if a card is already out:
    /// it must be returned before the next draw.
    pub fn draw(&mut self) -> Option<i32> {
        assert!(self.out.is_none(), "fate card drawn twice without returning");
        if self.cards.is_empty() {
            return None;
        }
        let card = self.cards.remove(0);
        self.out = Some(card);
        Some(card)
    }

    /// Put the drawn card back and reshuffle the whole deck.
    pub fn shuffle_back(&mut self, rng: &mut GameRng) {
        if let Some(card) = self.out.take() {
            self.cards.push(card);
        }
        rng.shuffle(&mut self.cards);
    }

    /// Shuffle without returning anything.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Cards currently in the deck, front first.
    #[must_use]
    pub fn cards(&self) -> &[i32] {
        &self.cards
    }

    /// Total cards owned, including one that is drawn and not yet returned.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len() + usize::from(self.out.is_some())
    }

    /// The card currently drawn, if any.
    #[must_use]
    pub fn drawn(&self) -> Option<i32> {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_from_front() {
        let mut fate = FateDeck::new([2, 1, 0]);
        assert_eq!(fate.draw(), Some(2));
        assert_eq!(fate.cards(), &[1, 0]);
        assert_eq!(fate.drawn(), Some(2));
        assert_eq!(fate.size(), 3);
    }

    #[test]
    fn test_shuffle_back_restores_size() {
        let mut rng = GameRng::new(5);
        let mut fate = FateDeck::new([2, 1, 0, 0, -1, -2]);

        for _ in 0..20 {
            fate.draw();
            fate.shuffle_back(&mut rng);
            assert_eq!(fate.cards().len(), 6);
        }

        let mut sorted = fate.cards().to_vec();
        sorted.sort();
        assert_eq!(sorted, vec![-2, -1, 0, 0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "drawn twice")]
    fn test_double_draw_panics() {
        let mut fate = FateDeck::new([1, 2]);
        fate.draw();
        fate.draw();
    }

    #[test]
    fn test_empty_draw() {
        let mut fate = FateDeck::new(Vec::new());
        assert_eq!(fate.draw(), None);
        assert_eq!(fate.size(), 0);
    }
}
