//! Card catalog for template lookup.
//!
//! The `CardCatalog` stores every card template of a game, keyed by id.
//! Templates are never handed out mutably: `instantiate` clones one into a
//! fresh [`CardRecord`] per draw.

use rustc_hash::FxHashMap;

use super::definition::{CardId, CardKind, CardTemplate};
use super::instance::CardRecord;
use crate::core::{CardUid, CatalogError};

/// Catalog of card templates.
///
/// ## Example
///
/// ```
/// use dungeon_decks::cards::{CardCatalog, CardKind, CardTemplate};
/// use dungeon_decks::core::CardUid;
///
/// let mut catalog = CardCatalog::new();
/// catalog
///     .register(CardTemplate::new("goblin", CardKind::Monster, "Goblin", 3))
///     .unwrap();
///
/// let mut goblin = catalog.instantiate("goblin", CardUid(0)).unwrap();
/// goblin.wound(2);
/// assert_eq!(catalog.get("goblin").unwrap().value, 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardTemplate>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card template.
    pub fn register(&mut self, card: CardTemplate) -> Result<(), CatalogError> {
        if self.cards.contains_key(&card.id) {
            return Err(CatalogError::DuplicateCard(card.id.0));
        }
        self.cards.insert(card.id.clone(), card);
        Ok(())
    }

    /// Get a template by id.
    pub fn get(&self, id: &str) -> Result<&CardTemplate, CatalogError> {
        self.cards
            .get(id)
            .ok_or_else(|| CatalogError::UnknownCard(id.to_string()))
    }

    /// Create an independent copy of a template with the given uid.
    pub fn instantiate(&self, id: &str, uid: CardUid) -> Result<CardRecord, CatalogError> {
        self.get(id).map(|t| CardRecord::new(uid, t.clone()))
    }

    /// Check whether an id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.cards.contains_key(id)
    }

    /// Check whether `id` is registered with the given kind.
    pub fn expect_kind(&self, id: &str, kind: CardKind) -> Result<bool, CatalogError> {
        self.get(id).map(|t| t.kind == kind)
    }

    /// Number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all templates.
    pub fn iter(&self) -> impl Iterator<Item = &CardTemplate> {
        self.cards.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CardCatalog {
        let mut catalog = CardCatalog::new();
        catalog
            .register(CardTemplate::new("goblin", CardKind::Monster, "Goblin", 3))
            .unwrap();
        catalog
            .register(CardTemplate::new("health_potion", CardKind::Potion, "Health Potion", 4))
            .unwrap();
        catalog
    }

    #[test]
    fn test_register_and_get() {
        let catalog = catalog();
        assert_eq!(catalog.get("goblin").unwrap().name, "Goblin");
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("health_potion"));
        assert!(!catalog.contains("dragon"));
    }

    #[test]
    fn test_unknown_id() {
        let catalog = catalog();
        assert_eq!(
            catalog.get("dragon").unwrap_err(),
            CatalogError::UnknownCard("dragon".into())
        );
        assert!(catalog.instantiate("dragon", CardUid(0)).is_err());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut catalog = catalog();
        let err = catalog
            .register(CardTemplate::new("goblin", CardKind::Monster, "Other Goblin", 9))
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCard("goblin".into()));
        assert_eq!(catalog.get("goblin").unwrap().value, 3);
    }

    #[test]
    fn test_instances_do_not_alias_template() {
        let catalog = catalog();
        let mut a = catalog.instantiate("goblin", CardUid(1)).unwrap();
        let b = catalog.instantiate("goblin", CardUid(2)).unwrap();

        a.wound(3);
        assert_eq!(a.value(), 0);
        assert_eq!(b.value(), 3);
        assert_eq!(catalog.get("goblin").unwrap().value, 3);
    }

    #[test]
    fn test_expect_kind() {
        let catalog = catalog();
        assert_eq!(catalog.expect_kind("goblin", CardKind::Monster), Ok(true));
        assert_eq!(catalog.expect_kind("goblin", CardKind::Door), Ok(false));
        assert!(catalog.expect_kind("dragon", CardKind::Door).is_err());
    }
}
