//! Data-driven card abilities.
//!
//! - `AbilityRecord`: trigger + effect metadata, stored in `AbilityCatalog`
//! - `AbilityInstance`: an ability id attached to a card, with parameters
//! - `Triggered`: a card ability matched against a trigger
//!
//! The session decides when each trigger happens and applies the effect;
//! this module only describes and looks up abilities.

mod ability;
mod registry;

pub use ability::{AbilityEffect, AbilityInstance, AbilityRecord, AbilityTrigger};
pub use registry::{AbilityCatalog, Triggered};
