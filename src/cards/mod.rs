//! Card system: templates, runtime records, ability parameters, catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Catalog key of a template
//! - `CardTemplate`: Static card data
//! - `CardRecord`: One card copy in play, with its own mutable data and
//!   optional owned loot
//! - `CardCatalog`: Template lookup, copy-on-read

pub mod definition;
pub mod instance;
pub mod params;
pub mod registry;

pub use definition::{CardId, CardKind, CardTemplate, EquipCategory};
pub use instance::CardRecord;
pub use params::{ParamValue, Params};
pub use registry::CardCatalog;
