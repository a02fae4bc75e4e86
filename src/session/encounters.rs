//! Engaging and resolving combat, chests and traps.
//!
//! Engaging takes the lock; committing or cancelling releases it. Each
//! encounter kind has its own resolver, picked by a single match in
//! [`GameSession::commit`].

use tracing::{debug, info};

use super::{CommandRecord, GameSession, Notification};
use crate::abilities::{AbilityEffect, AbilityTrigger};
use crate::core::{CardUid, Rejection};
use crate::encounter::{
    effective_agility, effective_power, lock_check, Activity, CombatReport, Encounter,
    EncounterKind, EncounterPhase, EncounterReport, LockReport,
};
use crate::zones::CellPos;

impl GameSession {
    /// Engage whatever encounter the card at `pos` offers.
    pub fn engage(&mut self, pos: CellPos) -> Result<Encounter, Rejection> {
        self.ensure_idle()?;
        let card = self.board.get_card_at(pos).ok_or(Rejection::EmptyCell(pos))?;
        let kind = EncounterKind::for_card(card.kind()).ok_or(Rejection::WrongCardType)?;

        let encounter = Encounter {
            kind,
            pos,
            card: card.uid,
        };
        debug!(?kind, %pos, card = %encounter.card, "engaged");
        self.activity = Activity::Engaged(encounter);
        self.record(CommandRecord::Engage(pos));
        self.emit_phase(encounter, EncounterPhase::Engaged);
        Ok(encounter)
    }

    /// Engage a monster for combat.
    pub fn engage_monster(&mut self, pos: CellPos) -> Result<Encounter, Rejection> {
        self.engage_kind(pos, EncounterKind::Combat)
    }

    /// Engage a chest to crack it.
    pub fn engage_chest(&mut self, pos: CellPos) -> Result<Encounter, Rejection> {
        self.engage_kind(pos, EncounterKind::Chest)
    }

    /// Engage a trap to disarm it.
    pub fn engage_trap(&mut self, pos: CellPos) -> Result<Encounter, Rejection> {
        self.engage_kind(pos, EncounterKind::Trap)
    }

    fn engage_kind(&mut self, pos: CellPos, kind: EncounterKind) -> Result<Encounter, Rejection> {
        self.ensure_idle()?;
        let card = self.board.get_card_at(pos).ok_or(Rejection::EmptyCell(pos))?;
        if EncounterKind::for_card(card.kind()) != Some(kind) {
            return Err(Rejection::WrongCardType);
        }
        self.engage(pos)
    }

    /// Leave the engaged encounter without resolving it.
    pub fn cancel_encounter(&mut self) -> Result<(), Rejection> {
        let encounter = self.current_encounter()?;
        self.activity = Activity::Idle;
        self.record(CommandRecord::Cancel(encounter));
        self.emit_phase(encounter, EncounterPhase::Cancelled);
        Ok(())
    }

    /// Resolve the engaged encounter, whatever its kind.
    pub fn commit(&mut self) -> Result<EncounterReport, Rejection> {
        let encounter = self.current_encounter()?;
        self.record(CommandRecord::Commit(encounter));
        let report = match encounter.kind {
            EncounterKind::Combat => EncounterReport::Combat(self.resolve_combat(encounter)),
            EncounterKind::Chest => EncounterReport::Lock(self.resolve_chest(encounter)),
            EncounterKind::Trap => EncounterReport::Lock(self.resolve_trap(encounter)),
        };
        self.emit_phase(encounter, EncounterPhase::Outcome);
        self.release();
        Ok(report)
    }

    /// Commit the engaged combat.
    pub fn commit_combat(&mut self) -> Result<CombatReport, Rejection> {
        self.expect_encounter(EncounterKind::Combat)?;
        match self.commit()? {
            EncounterReport::Combat(report) => Ok(report),
            EncounterReport::Lock(_) => unreachable!("combat resolved as a lock check"),
        }
    }

    /// Commit the engaged chest crack.
    pub fn commit_crack(&mut self) -> Result<LockReport, Rejection> {
        self.expect_encounter(EncounterKind::Chest)?;
        self.commit_lock()
    }

    /// Commit the engaged trap disarm.
    pub fn commit_disarm(&mut self) -> Result<LockReport, Rejection> {
        self.expect_encounter(EncounterKind::Trap)?;
        self.commit_lock()
    }

    fn commit_lock(&mut self) -> Result<LockReport, Rejection> {
        match self.commit()? {
            EncounterReport::Lock(report) => Ok(report),
            EncounterReport::Combat(_) => unreachable!("lock check resolved as combat"),
        }
    }

    fn current_encounter(&self) -> Result<Encounter, Rejection> {
        match self.activity {
            Activity::Engaged(encounter) => Ok(encounter),
            Activity::Finished(_) => Err(Rejection::Finished),
            _ => Err(Rejection::NoEncounter),
        }
    }

    fn expect_encounter(&self, kind: EncounterKind) -> Result<Encounter, Rejection> {
        let encounter = self.current_encounter()?;
        if encounter.kind == kind {
            Ok(encounter)
        } else {
            Err(Rejection::WrongCardType)
        }
    }

    fn emit_phase(&mut self, encounter: Encounter, phase: EncounterPhase) {
        self.emit(Notification::EncounterChanged { encounter, phase });
    }

    fn draw_fate(&mut self, encounter: Encounter) -> i32 {
        self.emit_phase(encounter, EncounterPhase::FateDraw);
        let modifier = self
            .player
            .fate
            .draw()
            .unwrap_or_else(|| panic!("fate deck is empty"));
        self.emit(Notification::FateDrawn { modifier });
        modifier
    }

    fn return_fate(&mut self) {
        self.player.fate.shuffle_back(&mut self.rng);
    }

    // === Resolvers ===

    fn resolve_combat(&mut self, encounter: Encounter) -> CombatReport {
        let modifier = self.draw_fate(encounter);
        let power = effective_power(self.player.power, self.power_bonus(), modifier);
        let thorns = self.worn_total(AbilityTrigger::OnCounterAttack, AbilityEffect::Damage);
        self.emit_phase(encounter, EncounterPhase::Resolve);

        let pos = encounter.pos;
        let mut remaining = self.wound_occupant(pos, power);
        if remaining > 0 && thorns > 0 {
            remaining = self.wound_occupant(pos, thorns);
        }

        let mut report = CombatReport {
            monster: encounter.card,
            modifier,
            effective_power: power,
            monster_remaining: remaining,
            killed: remaining == 0,
            damage_taken: 0,
            loot: None,
        };

        if report.killed {
            report.loot = self.slay_monster(pos);
        } else {
            report.damage_taken = self.damage_player(remaining);
        }

        self.return_fate();
        info!(
            monster = %report.monster,
            modifier,
            power,
            killed = report.killed,
            damage = report.damage_taken,
            "combat resolved"
        );
        report
    }

    fn resolve_chest(&mut self, encounter: Encounter) -> LockReport {
        let (mut report, damage) = self.lock_attempt(encounter);
        if let Some(mut chest) = self.board.remove_card(encounter.pos) {
            self.emit(Notification::CellChanged {
                pos: encounter.pos,
                card: None,
            });
            if report.success {
                if let Some(loot) = chest.take_loot() {
                    report.loot = Some(loot.uid);
                    self.place_occupant(encounter.pos, loot);
                }
            }
            self.discard(chest);
        }
        if !report.success {
            report.damage_taken = self.damage_player(damage);
        }
        self.return_fate();
        info!(chest = %report.card, success = report.success, "chest resolved");
        report
    }

    fn resolve_trap(&mut self, encounter: Encounter) -> LockReport {
        let (mut report, damage) = self.lock_attempt(encounter);
        if let Some(trap) = self.board.remove_card(encounter.pos) {
            self.emit(Notification::CellChanged {
                pos: encounter.pos,
                card: None,
            });
            self.discard(trap);
        }
        if !report.success {
            report.damage_taken = self.damage_player(damage);
        }
        self.return_fate();
        info!(trap = %report.card, success = report.success, "trap resolved");
        report
    }

    /// Draw fate and run the agility check against the engaged card.
    /// Returns the report and the damage a failure deals.
    fn lock_attempt(&mut self, encounter: Encounter) -> (LockReport, i32) {
        let modifier = self.draw_fate(encounter);
        let agility = effective_agility(self.player.agility, self.passive_agility(), modifier);
        self.emit_phase(encounter, EncounterPhase::AgilityCheck);

        let (difficulty, damage) = self
            .board
            .get_card_at(encounter.pos)
            .map_or((0, 0), |c| (c.data.lock_difficulty, c.data.trap_damage));

        let report = LockReport {
            kind: encounter.kind,
            card: encounter.card,
            modifier,
            effective_agility: agility,
            difficulty,
            success: lock_check(agility, difficulty),
            damage_taken: 0,
            loot: None,
        };
        (report, damage)
    }

    // === Shared with deliveries ===

    /// Wound the occupant of `pos`. Returns its remaining value.
    pub(super) fn wound_occupant(&mut self, pos: CellPos, amount: i32) -> i32 {
        let Some(card) = self.board.get_card_at_mut(pos) else {
            return 0;
        };
        let remaining = card.wound(amount);
        let uid = card.uid;
        self.emit(Notification::CellChanged {
            pos,
            card: Some(uid),
        });
        remaining
    }

    /// Remove a dead monster, release its loot into the vacated cell and
    /// fire monster-death abilities on worn items. Returns the released
    /// loot.
    pub(super) fn slay_monster(&mut self, pos: CellPos) -> Option<CardUid> {
        let agility_before = self.passive_agility();
        let mut monster = self.board.remove_card(pos)?;
        self.emit(Notification::CellChanged { pos, card: None });
        debug!(monster = %monster.uid, %pos, "monster slain");

        let loot = monster.take_loot();
        self.discard(monster);
        let released = loot.map(|loot| {
            let uid = loot.uid;
            self.place_occupant(pos, loot);
            uid
        });

        let effects: Vec<_> = self
            .inventory
            .worn()
            .flat_map(|(_, c)| self.effects_of(c, AbilityTrigger::OnMonsterDeath))
            .collect();
        for (effect, amount) in effects {
            self.apply_to_player(effect, amount);
        }

        if self.passive_agility() != agility_before {
            self.emit_stats();
        }
        released
    }
}
