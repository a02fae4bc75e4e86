//! Player inventory.
//!
//! Named equip slots, each accepting one or more equip categories. Weapon,
//! head and armour slots accept their own category only; backpack slots are
//! general storage and accept every category. Items in backpack slots do not
//! count toward the power bonus and their abilities stay dormant.

use smallvec::{smallvec, SmallVec};

use crate::cards::{CardRecord, EquipCategory};

/// One slot definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotDef {
    pub name: String,
    pub accepted: SmallVec<[EquipCategory; 4]>,
    /// Storage slots hold items without wearing them.
    pub storage: bool,
}

impl SlotDef {
    /// A worn slot accepting one category.
    pub fn worn(name: impl Into<String>, category: EquipCategory) -> Self {
        Self {
            name: name.into(),
            accepted: smallvec![category],
            storage: false,
        }
    }

    /// A storage slot accepting every category.
    pub fn backpack(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accepted: smallvec![
                EquipCategory::Weapon,
                EquipCategory::Armour,
                EquipCategory::Head,
                EquipCategory::Backpack,
            ],
            storage: true,
        }
    }

    /// Whether this slot accepts a category.
    #[must_use]
    pub fn accepts(&self, category: EquipCategory) -> bool {
        self.accepted.contains(&category)
    }
}

/// The standard six slots: two weapons, head, armour, two backpack slots.
#[must_use]
pub fn default_slots() -> Vec<SlotDef> {
    vec![
        SlotDef::worn("weapon1", EquipCategory::Weapon),
        SlotDef::worn("weapon2", EquipCategory::Weapon),
        SlotDef::worn("head", EquipCategory::Head),
        SlotDef::worn("armour", EquipCategory::Armour),
        SlotDef::backpack("backpack1"),
        SlotDef::backpack("backpack2"),
    ]
}

/// Equip slots and their contents.
#[derive(Clone, Debug)]
pub struct Inventory {
    slots: Vec<SlotDef>,
    items: Vec<Option<CardRecord>>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_slots(default_slots())
    }
}

impl Inventory {
    /// Create an inventory with the standard slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an inventory with custom slots.
    #[must_use]
    pub fn with_slots(slots: Vec<SlotDef>) -> Self {
        let items = vec![None; slots.len()];
        Self { slots, items }
    }

    fn index(&self, slot: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.name == slot)
    }

    /// Slot definition by name.
    #[must_use]
    pub fn slot(&self, slot: &str) -> Option<&SlotDef> {
        self.index(slot).map(|i| &self.slots[i])
    }

    /// All slot definitions in order.
    pub fn slots(&self) -> impl Iterator<Item = &SlotDef> {
        self.slots.iter()
    }

    /// True iff the card declares a category and the slot accepts it.
    #[must_use]
    pub fn can_equip(&self, slot: &str, card: &CardRecord) -> bool {
        match (self.slot(slot), card.data.slot) {
            (Some(def), Some(category)) => def.accepts(category),
            _ => false,
        }
    }

    /// Put a card into a slot.
    ///
    /// On success returns the item previously in the slot, if any.
    /// If the slot does not accept the card, nothing changes and the card
    /// is handed back as the error.
    pub fn equip(&mut self, slot: &str, card: CardRecord) -> Result<Option<CardRecord>, CardRecord> {
        match self.index(slot) {
            Some(idx) if self.can_equip(slot, &card) => Ok(self.items[idx].replace(card)),
            _ => Err(card),
        }
    }

    /// Remove and return the item in a slot.
    pub fn unequip(&mut self, slot: &str) -> Option<CardRecord> {
        let idx = self.index(slot)?;
        self.items[idx].take()
    }

    /// Borrow the item in a slot.
    #[must_use]
    pub fn get_item(&self, slot: &str) -> Option<&CardRecord> {
        self.index(slot).and_then(|i| self.items[i].as_ref())
    }

    /// Mutably borrow the item in a slot.
    pub fn get_item_mut(&mut self, slot: &str) -> Option<&mut CardRecord> {
        let idx = self.index(slot)?;
        self.items[idx].as_mut()
    }

    /// Sum of item values in worn (non-storage) slots.
    #[must_use]
    pub fn power_bonus(&self) -> i32 {
        self.worn().map(|(_, c)| c.value()).sum()
    }

    /// Items in worn slots, with their slot names.
    pub fn worn(&self) -> impl Iterator<Item = (&str, &CardRecord)> {
        self.slots
            .iter()
            .zip(&self.items)
            .filter(|(def, _)| !def.storage)
            .filter_map(|(def, item)| item.as_ref().map(|c| (def.name.as_str(), c)))
    }

    /// Every held item, with its slot name.
    pub fn items(&self) -> impl Iterator<Item = (&str, &CardRecord)> {
        self.slots
            .iter()
            .zip(&self.items)
            .filter_map(|(def, item)| item.as_ref().map(|c| (def.name.as_str(), c)))
    }

    /// Slot holding the card with this uid.
    #[must_use]
    pub fn find(&self, uid: crate::core::CardUid) -> Option<&str> {
        self.items().find(|(_, c)| c.uid == uid).map(|(s, _)| s)
    }

    /// Number of held items.
    #[must_use]
    pub fn population(&self) -> usize {
        self.items.iter().flatten().count()
    }
}
