//! Card locations: the deck, the board grid, and the inventory.
//!
//! Every card copy in a session is in exactly one of these places, or held
//! as loot by a card that is.

pub mod board;
pub mod deck;
pub mod inventory;

pub use board::{Board, CellPos};
pub use deck::Deck;
pub use inventory::{default_slots, Inventory, SlotDef};
