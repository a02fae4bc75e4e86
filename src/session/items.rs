//! Moving cards: dragging, equipping, deliveries and dismissing events.
//!
//! A card is addressed by [`CardRef`]: a board cell or an inventory slot.
//! Only loose items (treasure, potions, scrolls) can be picked up from the
//! board. Every move validates first and only then takes the card, so a
//! rejected move leaves the card where it was.

use tracing::debug;

use super::{CommandRecord, GameSession, Notification};
use crate::abilities::{AbilityEffect, AbilityTrigger};
use crate::cards::{CardKind, CardRecord, EquipCategory};
use crate::core::{CardUid, Rejection};
use crate::encounter::{Activity, CardRef};
use crate::zones::CellPos;

impl GameSession {
    /// Start dragging a card. Holds the lock until the card is dropped or
    /// the drag is cancelled.
    pub fn begin_drag(&mut self, card: CardRef) -> Result<(), Rejection> {
        self.ensure_idle()?;
        self.peek_movable(&card)?;
        self.record(CommandRecord::BeginDrag(card.clone()));
        self.activity = Activity::Dragging(card);
        Ok(())
    }

    /// Drop the dragged card back where it came from.
    pub fn cancel_drag(&mut self) -> Result<(), Rejection> {
        match self.activity {
            Activity::Dragging(_) => {
                self.activity = Activity::Idle;
                self.record(CommandRecord::CancelDrag);
                Ok(())
            }
            Activity::Finished(_) => Err(Rejection::Finished),
            _ => Err(Rejection::NoEncounter),
        }
    }

    /// Equip a card into `slot`. An item already in the slot is discarded.
    /// Returns the uid of the displaced item.
    ///
    /// On-equip and on-discard abilities fire only for worn slots; a
    /// backpack holds items dormant.
    pub fn equip(&mut self, from: CardRef, slot: &str) -> Result<Option<CardUid>, Rejection> {
        self.ensure_idle_for(&from)?;
        let worn = match self.inventory.slot(slot) {
            Some(def) => !def.storage,
            None => return Err(Rejection::UnknownSlot(slot.to_string())),
        };
        let card = self.peek_movable(&from)?;
        if from == CardRef::slot(slot) || !self.inventory.can_equip(slot, card) {
            return Err(Rejection::CannotEquip(slot.to_string()));
        }

        let card = self.take(&from)?;
        let effects = if worn {
            self.effects_of(&card, AbilityTrigger::OnEquip)
        } else {
            Vec::new()
        };
        let displaced = self
            .inventory
            .equip(slot, card)
            .map_err(|_| Rejection::CannotEquip(slot.to_string()))?;
        debug!(slot, "equipped");
        self.record(CommandRecord::Equip {
            from,
            slot: slot.to_string(),
        });

        for (effect, amount) in effects {
            self.apply_to_player(effect, amount);
        }
        let displaced = displaced.map(|old| {
            let uid = old.uid;
            self.discard_item(old, worn);
            uid
        });
        self.emit_stats();
        self.release();
        Ok(displaced)
    }

    /// Remove the item in `slot` and discard it. Returns the uid of the
    /// discarded item.
    pub fn unequip(&mut self, slot: &str) -> Result<CardUid, Rejection> {
        self.ensure_idle()?;
        let worn = match self.inventory.slot(slot) {
            Some(def) => !def.storage,
            None => return Err(Rejection::UnknownSlot(slot.to_string())),
        };
        let item = self
            .inventory
            .unequip(slot)
            .ok_or_else(|| Rejection::EmptySlot(slot.to_string()))?;
        self.record(CommandRecord::Unequip(slot.to_string()));
        self.emit_stats();

        let uid = item.uid;
        self.discard_item(item, worn);
        Ok(uid)
    }

    /// Use a card on the player portrait (potions, gold). The card is
    /// consumed.
    pub fn deliver_to_player(&mut self, from: CardRef) -> Result<(), Rejection> {
        self.ensure_idle_for(&from)?;
        let card = self.peek_movable(&from)?;
        let effects = self.effects_of(card, AbilityTrigger::DeliverToPlayer);
        if effects.is_empty() {
            return Err(Rejection::NotDeliverable);
        }

        let card = self.take(&from)?;
        self.record(CommandRecord::DeliverToPlayer(from));
        for (effect, amount) in effects {
            self.apply_to_player(effect, amount);
        }
        self.discard(card);
        self.release();
        Ok(())
    }

    /// Use a card on a board occupant: disarm a trap, damage a monster, or
    /// open a door with its key.
    pub fn deliver_to_cell(&mut self, from: CardRef, target: CellPos) -> Result<(), Rejection> {
        self.ensure_idle_for(&from)?;
        let target_kind = self
            .board
            .get_card_at(target)
            .ok_or(Rejection::EmptyCell(target))?
            .kind();

        match target_kind {
            CardKind::Door => self.deliver_key_to_door(from, target),
            CardKind::Trap => self.deliver_to_trap(from, target),
            CardKind::Monster => self.deliver_to_monster(from, target),
            _ => Err(Rejection::NotDeliverable),
        }
    }

    fn deliver_to_trap(&mut self, from: CardRef, target: CellPos) -> Result<(), Rejection> {
        let card = self.peek_movable(&from)?;
        let disarms = self
            .effects_of(card, AbilityTrigger::DeliverToTrap)
            .iter()
            .any(|(effect, _)| *effect == AbilityEffect::Disarm);
        if !disarms {
            return Err(Rejection::NotDeliverable);
        }

        let tool = self.take(&from)?;
        self.record(CommandRecord::DeliverToCell {
            from,
            target,
        });
        if let Some(trap) = self.board.remove_card(target) {
            debug!(trap = %trap.uid, tool = %tool.uid, "trap disarmed by tool");
            self.emit(Notification::CellChanged {
                pos: target,
                card: None,
            });
            self.discard(trap);
        }
        self.discard(tool);
        self.release();
        Ok(())
    }

    fn deliver_to_monster(&mut self, from: CardRef, target: CellPos) -> Result<(), Rejection> {
        let card = self.peek_movable(&from)?;
        let damage: i32 = self
            .effects_of(card, AbilityTrigger::DeliverToMonster)
            .iter()
            .filter(|(effect, _)| *effect == AbilityEffect::Damage)
            .map(|(_, amount)| amount)
            .sum();
        if !self.abilities.has_trigger(card, AbilityTrigger::DeliverToMonster) {
            return Err(Rejection::NotDeliverable);
        }

        let thrown = self.take(&from)?;
        self.record(CommandRecord::DeliverToCell {
            from,
            target,
        });
        let remaining = self.wound_occupant(target, damage);
        debug!(card = %thrown.uid, damage, remaining, "thrown at monster");
        self.discard(thrown);
        if remaining == 0 {
            self.slay_monster(target);
        }
        self.release();
        Ok(())
    }

    /// Use a card on the weapon in `slot` (whetstones). The card is
    /// consumed and the weapon's value grows.
    pub fn deliver_to_weapon(&mut self, from: CardRef, slot: &str) -> Result<(), Rejection> {
        self.ensure_idle_for(&from)?;
        if self.inventory.slot(slot).is_none() {
            return Err(Rejection::UnknownSlot(slot.to_string()));
        }
        let weapon = self
            .inventory
            .get_item(slot)
            .ok_or_else(|| Rejection::EmptySlot(slot.to_string()))?;
        if weapon.data.slot != Some(EquipCategory::Weapon) || weapon.data.is_key {
            return Err(Rejection::NotDeliverable);
        }

        let card = self.peek_movable(&from)?;
        let bonus: i32 = self
            .effects_of(card, AbilityTrigger::DeliverToWeapon)
            .iter()
            .filter(|(effect, _)| *effect == AbilityEffect::Sharpen)
            .map(|(_, amount)| amount)
            .sum();
        if bonus == 0 || from == CardRef::slot(slot) {
            return Err(Rejection::NotDeliverable);
        }

        let used = self.take(&from)?;
        self.record(CommandRecord::DeliverToWeapon {
            from,
            slot: slot.to_string(),
        });
        if let Some(weapon) = self.inventory.get_item_mut(slot) {
            weapon.data.value += bonus;
            debug!(weapon = %weapon.uid, bonus, value = weapon.data.value, "weapon sharpened");
        }
        self.discard(used);
        self.emit_stats();
        self.release();
        Ok(())
    }

    /// Clear an event card off the board.
    pub fn dismiss_event(&mut self, pos: CellPos) -> Result<(), Rejection> {
        self.ensure_idle()?;
        let card = self.board.get_card_at(pos).ok_or(Rejection::EmptyCell(pos))?;
        if card.kind() != CardKind::Event {
            return Err(Rejection::WrongCardType);
        }

        if let Some(event) = self.board.remove_card(pos) {
            self.record(CommandRecord::DismissEvent(pos));
            self.emit(Notification::CellChanged { pos, card: None });
            self.discard(event);
        }
        Ok(())
    }

    // === Card addressing ===

    /// Borrow the card at `from`.
    fn peek(&self, from: &CardRef) -> Result<&CardRecord, Rejection> {
        match from {
            CardRef::Board(pos) => self.board.get_card_at(*pos).ok_or(Rejection::EmptyCell(*pos)),
            CardRef::Slot(name) => {
                if self.inventory.slot(name).is_none() {
                    return Err(Rejection::UnknownSlot(name.clone()));
                }
                self.inventory
                    .get_item(name)
                    .ok_or_else(|| Rejection::EmptySlot(name.clone()))
            }
        }
    }

    /// Borrow the card at `from` if it can be picked up.
    pub(super) fn peek_movable(&self, from: &CardRef) -> Result<&CardRecord, Rejection> {
        let card = self.peek(from)?;
        match from {
            CardRef::Board(_) if !card.kind().is_guardable_loot() => Err(Rejection::WrongCardType),
            _ => Ok(card),
        }
    }

    /// Remove the card at `from` from its zone.
    pub(super) fn take(&mut self, from: &CardRef) -> Result<CardRecord, Rejection> {
        match from {
            CardRef::Board(pos) => {
                let card = self.board.remove_card(*pos).ok_or(Rejection::EmptyCell(*pos))?;
                self.emit(Notification::CellChanged {
                    pos: *pos,
                    card: None,
                });
                Ok(card)
            }
            CardRef::Slot(name) => {
                let card = self
                    .inventory
                    .unequip(name)
                    .ok_or_else(|| Rejection::EmptySlot(name.clone()))?;
                self.emit_stats();
                Ok(card)
            }
        }
    }
}
