//! State-change notifications.
//!
//! The session reports every relevant mutation as a [`Notification`].
//! Rendering layers either subscribe an [`Observer`] (called synchronously
//! as each notification is emitted) or drain the buffered notifications
//! after each command with `GameSession::take_notifications`. Buffering
//! only happens while no observer is subscribed.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::CardUid;
use crate::encounter::{CardRef, Encounter, EncounterPhase};
use crate::zones::CellPos;

/// One state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    HpChanged { hp: i32, max_hp: i32 },
    GoldChanged { gold: i32 },
    /// Equipment or passive abilities changed the derived stats.
    StatsChanged { power_bonus: i32, agility: i32 },
    /// A cell's occupant was placed, removed, or changed value.
    CellChanged { pos: CellPos, card: Option<CardUid> },
    DeckSizeChanged { remaining: usize },
    EncounterChanged { encounter: Encounter, phase: EncounterPhase },
    FateDrawn { modifier: i32 },
    CardDiscarded { card: CardUid, id: CardId },
    DoorOpened { door: CardUid, settle_ms: u64 },
    BoardCleared { discarded: usize },
    LevelEntered { level: usize, name: String, flavor_text: String },
    GameOver,
    Victory,
}

/// Receiver of notifications.
pub trait Observer {
    fn notify(&mut self, event: &Notification);
}

impl<F> Observer for F
where
    F: FnMut(&Notification),
{
    fn notify(&mut self, event: &Notification) {
        self(event)
    }
}

/// Fans notifications out to observers, or buffers them when there are
/// none.
#[derive(Default)]
pub(crate) struct Notifier {
    observers: Vec<Box<dyn Observer>>,
    pending: Vec<Notification>,
}

impl Notifier {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    pub(crate) fn emit(&mut self, event: Notification) {
        if self.observers.is_empty() {
            self.pending.push(event);
            return;
        }
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }

    pub(crate) fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("observers", &self.observers.len())
            .field("pending", &self.pending.len())
            .finish()
    }
}

/// An accepted command, kept in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandRecord {
    Explore,
    Engage(CellPos),
    Commit(Encounter),
    Cancel(Encounter),
    BeginDrag(CardRef),
    CancelDrag,
    Equip { from: CardRef, slot: String },
    Unequip(String),
    DeliverToPlayer(CardRef),
    DeliverToCell { from: CardRef, target: CellPos },
    DeliverToWeapon { from: CardRef, slot: String },
    DeliverKeyToDoor { from: CardRef, door: CellPos },
    DismissEvent(CellPos),
}
