//! Card records - runtime card copies.
//!
//! A `CardRecord` is one physical copy of a card during a session. It owns
//! its own copy of the template data, so mutating a drawn monster's HP never
//! touches the catalog or any other copy.
//!
//! ## Loot ownership
//!
//! A monster or chest may own exactly one loot card. The loot does not occupy
//! a board cell; it lives inside its guardian's `loot` field and is handed
//! back when the guardian is resolved. There is no back-pointer from loot to
//! guardian.

use serde::{Deserialize, Serialize};

use super::definition::{CardId, CardKind, CardTemplate};
use crate::core::CardUid;

/// A card copy in play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Unique id of this copy.
    pub uid: CardUid,

    /// Copy of the template, mutable for display-relevant fields
    /// (a damaged monster's remaining HP lives in `data.value`).
    pub data: CardTemplate,

    /// Guarded loot (monster) or concealed loot (chest).
    loot: Option<Box<CardRecord>>,
}

impl CardRecord {
    /// Create a card copy from a template.
    #[must_use]
    pub fn new(uid: CardUid, template: CardTemplate) -> Self {
        Self {
            uid,
            data: template,
            loot: None,
        }
    }

    /// Catalog id of this card.
    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.data.id
    }

    /// Card kind.
    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.data.kind
    }

    /// Current value (remaining HP for a monster).
    #[must_use]
    pub fn value(&self) -> i32 {
        self.data.value
    }

    /// Reduce value by `amount`, floored at zero. Returns the remainder.
    pub fn wound(&mut self, amount: i32) -> i32 {
        self.data.value = (self.data.value - amount.max(0)).max(0);
        self.data.value
    }

    /// Borrow the loot this card holds.
    #[must_use]
    pub fn loot(&self) -> Option<&CardRecord> {
        self.loot.as_deref()
    }

    /// Give this card a loot card to hold.
    ///
    /// Panics if it already holds one; a guardian owns at most one loot card.
    pub fn set_loot(&mut self, loot: CardRecord) {
        assert!(
            self.loot.is_none(),
            "{} {} already holds loot",
            self.data.id,
            self.uid
        );
        self.loot = Some(Box::new(loot));
    }

    /// Take the held loot, leaving none.
    pub fn take_loot(&mut self) -> Option<CardRecord> {
        self.loot.take().map(|b| *b)
    }

    /// Number of cards this record accounts for (itself plus its loot chain).
    #[must_use]
    pub fn population(&self) -> usize {
        1 + self.loot().map_or(0, CardRecord::population)
    }
}
