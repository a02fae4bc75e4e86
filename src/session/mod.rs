//! The game session: the single owner of all mutable game state.
//!
//! Every command goes through [`GameSession`]. A command either succeeds and
//! emits [`Notification`]s, or returns a [`Rejection`] without mutating
//! anything.
//!
//! ## Interaction lock
//!
//! The session's [`Activity`] is the one mutual-exclusion point. Explore,
//! engage, equip, deliver and dismiss all require it to be `Idle` (or, for
//! card moves, `Dragging` the same card). Lock transitions happen on every
//! path out of a command, so the lock can never leak.
//!
//! ## Card population
//!
//! Every card the session instantiates is in exactly one place: the deck,
//! a board cell, an inventory slot, held as loot by a board card, or
//! discarded. [`GameSession::population`] plus [`GameSession::discarded`]
//! always equals [`GameSession::cards_created`].

mod encounters;
mod explore;
mod items;
mod loot;
mod notify;
mod progression;

pub use loot::{find_claimable, loot_snapshot, pick_loot};
pub use notify::{CommandRecord, Notification, Observer};

use im::Vector;
use tracing::{debug, info};

use crate::abilities::{AbilityCatalog, AbilityEffect, AbilityTrigger};
use crate::cards::{CardCatalog, CardKind, CardRecord};
use crate::core::{
    CatalogError, ConfigError, DungeonConfig, GameRng, LevelConfig, Rejection,
    SessionConfig, UidAllocator,
};
use crate::encounter::{absorbed_damage, Activity, CardRef, Ending};
use crate::player::Player;
use crate::zones::{Board, Deck, Inventory};

use notify::Notifier;

/// A running game.
#[derive(Debug)]
pub struct GameSession {
    config: SessionConfig,
    dungeon: DungeonConfig,
    cards: CardCatalog,
    abilities: AbilityCatalog,
    rng: GameRng,
    uids: UidAllocator,

    deck: Deck,
    board: Board,
    inventory: Inventory,
    player: Player,
    activity: Activity,

    /// Index of the current level.
    level: usize,
    /// Whether the current level's key has been handed to its boss.
    key_awarded: bool,
    discarded: usize,

    notifier: Notifier,
    history: Vector<CommandRecord>,
}

impl GameSession {
    /// Validate the configuration, build the first level's deck and run the
    /// opening explore.
    pub fn new(
        config: SessionConfig,
        dungeon: DungeonConfig,
        cards: CardCatalog,
        abilities: AbilityCatalog,
        mut rng: GameRng,
    ) -> Result<Self, ConfigError> {
        validate(&config, &dungeon, &cards, &abilities)?;

        let mut uids = UidAllocator::new();
        let deck = Deck::build(&dungeon.levels[0], &cards, &mut uids, &mut rng)?;
        let player = Player::from_config(&config, &mut rng);
        let board = Board::new(config.cols, config.rows);

        let mut session = Self {
            config,
            dungeon,
            cards,
            abilities,
            rng,
            uids,
            deck,
            board,
            inventory: Inventory::new(),
            player,
            activity: Activity::Idle,
            level: 0,
            key_awarded: false,
            discarded: 0,
            notifier: Notifier::default(),
            history: Vector::new(),
        };

        info!(
            dungeon = %session.dungeon.name,
            seed = session.rng.seed(),
            deck = session.deck.remaining(),
            "session started"
        );
        session.announce_level();
        session.explore_batch();
        Ok(session)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn dungeon(&self) -> &DungeonConfig {
        &self.dungeon
    }

    #[must_use]
    pub fn cards(&self) -> &CardCatalog {
        &self.cards
    }

    #[must_use]
    pub fn abilities(&self) -> &AbilityCatalog {
        &self.abilities
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    /// Whether the interaction lock is held.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.activity.is_locked()
    }

    /// How the game ended, if it has.
    #[must_use]
    pub fn ending(&self) -> Option<Ending> {
        match self.activity {
            Activity::Finished(ending) => Some(ending),
            _ => None,
        }
    }

    /// Whether any trap is on the board. Computed from the board, never
    /// cached.
    #[must_use]
    pub fn has_trap_on_board(&self) -> bool {
        self.board.contains_kind(CardKind::Trap)
    }

    /// Index of the current level.
    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    #[must_use]
    pub fn level_config(&self) -> &LevelConfig {
        &self.dungeon.levels[self.level]
    }

    /// Whether the current level's key is still waiting for its boss.
    #[must_use]
    pub fn key_pending(&self) -> bool {
        !self.key_awarded
    }

    /// Power from equipment in worn slots.
    #[must_use]
    pub fn power_bonus(&self) -> i32 {
        self.inventory.power_bonus()
    }

    /// Agility modifier from passive abilities on worn items and on the
    /// board.
    #[must_use]
    pub fn passive_agility(&self) -> i32 {
        let worn: i32 = self
            .inventory
            .worn()
            .map(|(_, c)| {
                self.abilities
                    .total(c, AbilityTrigger::Passive, AbilityEffect::ModifyAgility)
            })
            .sum();
        let board: i32 = self
            .board
            .occupants()
            .map(|(_, c)| {
                self.abilities
                    .total(c, AbilityTrigger::Passive, AbilityEffect::ModifyAgility)
            })
            .sum();
        worn + board
    }

    /// Cards currently in play: deck, board (with held loot) and inventory.
    #[must_use]
    pub fn population(&self) -> usize {
        self.deck.remaining() + self.board.population() + self.inventory.population()
    }

    /// Cards consumed or discarded so far.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Cards instantiated since the session started.
    #[must_use]
    pub fn cards_created(&self) -> usize {
        self.uids.allocated() as usize
    }

    /// Accepted commands, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    // === Observation ===

    /// Register an observer called synchronously on every notification.
    /// Once one is subscribed, notifications are no longer buffered.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.notifier.subscribe(Box::new(observer));
    }

    /// Drain notifications buffered since the last call while no observer
    /// was subscribed.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifier.take()
    }

    // === Scripted setup ===
    //
    // Direct access for tests and scenario scripts. These bypass the rules.

    /// Instantiate a catalog card with a fresh uid. The card is not placed
    /// anywhere; the caller must put it in a zone.
    pub fn spawn(&mut self, id: &str) -> Result<CardRecord, CatalogError> {
        let template = self.cards.get(id)?.clone();
        Ok(CardRecord::new(self.uids.alloc(), template))
    }

    pub fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }

    // === Shared internals ===

    fn emit(&mut self, event: Notification) {
        self.notifier.emit(event);
    }

    fn record(&mut self, command: CommandRecord) {
        debug!(?command, "command accepted");
        self.history.push_back(command);
    }

    /// Instantiate a card whose id passed validation at session start.
    fn spawn_known(&mut self, id: &str) -> CardRecord {
        self.spawn(id)
            .unwrap_or_else(|e| panic!("validated catalog lost a card: {e}"))
    }

    /// Require the lock to be free.
    fn ensure_idle(&self) -> Result<(), Rejection> {
        match self.activity {
            Activity::Idle => Ok(()),
            Activity::Finished(_) => Err(Rejection::Finished),
            _ => Err(Rejection::Locked),
        }
    }

    /// Require the lock to be free, or held by a drag of `card`.
    fn ensure_idle_for(&self, card: &CardRef) -> Result<(), Rejection> {
        match &self.activity {
            Activity::Dragging(held) if held == card => Ok(()),
            _ => self.ensure_idle(),
        }
    }

    /// Release the lock unless the game has ended.
    fn release(&mut self) {
        if !self.activity.is_finished() {
            self.activity = Activity::Idle;
        }
    }

    fn finish(&mut self, ending: Ending) {
        if self.activity.is_finished() {
            return;
        }
        info!(?ending, level = self.level, "game over");
        self.activity = Activity::Finished(ending);
        self.emit(match ending {
            Ending::Victory => Notification::Victory,
            Ending::Defeat => Notification::GameOver,
        });
    }

    fn emit_hp(&mut self) {
        let (hp, max_hp) = (self.player.hp, self.player.max_hp);
        self.emit(Notification::HpChanged { hp, max_hp });
    }

    fn emit_stats(&mut self) {
        let power_bonus = self.power_bonus();
        let agility = self.player.agility + self.passive_agility();
        self.emit(Notification::StatsChanged {
            power_bonus,
            agility,
        });
    }

    /// `(effect, amount)` of each ability on `card` firing on `trigger`.
    /// Amount defaults to the card's value.
    fn effects_of(&self, card: &CardRecord, trigger: AbilityTrigger) -> Vec<(AbilityEffect, i32)> {
        self.abilities
            .triggered(card, trigger)
            .map(|t| (t.effect(), t.instance.amount_or(card.value())))
            .collect()
    }

    /// Sum of `effect` amounts on worn items firing on `trigger`.
    fn worn_total(&self, trigger: AbilityTrigger, effect: AbilityEffect) -> i32 {
        self.inventory
            .worn()
            .map(|(_, c)| self.abilities.total(c, trigger, effect))
            .sum()
    }

    /// Apply a player-targeted effect. Returns false for effects that do not
    /// target the player.
    fn apply_to_player(&mut self, effect: AbilityEffect, amount: i32) -> bool {
        match effect {
            AbilityEffect::Heal => {
                self.heal_player(amount);
            }
            AbilityEffect::Damage => {
                self.damage_player(amount);
            }
            AbilityEffect::GainGold => {
                self.player.add_gold(amount);
                let gold = self.player.gold;
                self.emit(Notification::GoldChanged { gold });
            }
            _ => return false,
        }
        true
    }

    /// Damage the player after worn absorption. Ends the game at zero HP.
    /// Returns the HP actually lost.
    fn damage_player(&mut self, amount: i32) -> i32 {
        let absorb = self.worn_total(AbilityTrigger::OnDamage, AbilityEffect::AbsorbDamage);
        let lost = self.player.take_damage(absorbed_damage(amount, absorb));
        if lost > 0 {
            debug!(amount, absorb, lost, hp = self.player.hp, "player damaged");
            self.emit_hp();
        }
        if self.player.is_dead() {
            self.finish(Ending::Defeat);
        }
        lost
    }

    fn heal_player(&mut self, amount: i32) -> i32 {
        let restored = self.player.heal(amount);
        if restored > 0 {
            self.emit_hp();
        }
        restored
    }

    /// Remove a card (and anything it holds) from play.
    fn discard(&mut self, card: CardRecord) {
        self.discarded += card.population();
        debug!(card = %card.uid, id = %card.id(), "discarded");
        self.emit(Notification::CardDiscarded {
            card: card.uid,
            id: card.id().clone(),
        });
    }

    /// Discard an inventory item. Its discard abilities fire only if it
    /// was leaving a worn slot.
    fn discard_item(&mut self, card: CardRecord, worn: bool) {
        if worn {
            for (effect, amount) in self.effects_of(&card, AbilityTrigger::OnDiscard) {
                self.apply_to_player(effect, amount);
            }
        }
        self.discard(card);
    }
}

/// Check every id a session will ever look up, so lookups during play
/// cannot fail.
fn validate(
    config: &SessionConfig,
    dungeon: &DungeonConfig,
    cards: &CardCatalog,
    abilities: &AbilityCatalog,
) -> Result<(), ConfigError> {
    if dungeon.levels.is_empty() {
        return Err(ConfigError::NoLevels);
    }
    if dungeon.loot_pool.is_empty() {
        return Err(ConfigError::EmptyLootPool);
    }
    if config.fate_deck.is_empty() {
        return Err(ConfigError::EmptyFateDeck);
    }
    if config.cols == 0 || config.rows == 0 {
        return Err(ConfigError::EmptyGrid);
    }

    for template in cards.iter() {
        abilities.validate(template)?;
        for inst in &template.abilities {
            if let Some(summoned) = inst.text("card") {
                cards.get(summoned)?;
            }
        }
    }

    for (level, level_def) in dungeon.levels.iter().enumerate() {
        for entry in &level_def.entries {
            cards.get(&entry.id)?;
        }
        let wrong_role = |role, id: &str| ConfigError::WrongRole {
            level,
            role,
            id: id.to_string(),
        };
        if !cards.expect_kind(&level_def.boss, CardKind::Monster)? {
            return Err(wrong_role("boss", &level_def.boss));
        }
        if !cards.get(&level_def.key)?.is_key {
            return Err(wrong_role("key", &level_def.key));
        }
        if !cards.expect_kind(&level_def.door, CardKind::Door)? {
            return Err(wrong_role("door", &level_def.door));
        }
    }

    for id in &dungeon.loot_pool {
        cards.get(id)?;
    }
    Ok(())
}
