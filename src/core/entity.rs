//! Card identity.
//!
//! Every card copy that exists during a session (in the deck, on the board,
//! held as loot, or equipped) carries a unique [`CardUid`]. Two copies of the
//! same template share a [`CardId`](crate::cards::CardId) but never a uid, so
//! reverse lookups like `Board::find_card` are unambiguous.

use serde::{Deserialize, Serialize};

/// Unique identifier for one card copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardUid(pub u32);

impl CardUid {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardUid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out fresh uids, never reusing one within a session.
#[derive(Clone, Debug, Default)]
pub struct UidAllocator {
    next: u32,
}

impl UidAllocator {
    /// Create an allocator starting at uid 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next uid.
    pub fn alloc(&mut self) -> CardUid {
        let id = CardUid(self.next);
        self.next += 1;
        id
    }

    /// Number of uids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
