//! Inventory and delivery integration tests.
//!
//! These tests verify equipping, slot rules, discards, and every kind of
//! drag-and-drop delivery: to the player, to a weapon, to a trap and to a
//! monster.

use dungeon_decks::abilities::AbilityInstance;
use dungeon_decks::cards::{CardCatalog, CardKind, CardTemplate, EquipCategory};
use dungeon_decks::content::{standard_abilities, standard_cards, standard_dungeon, standard_session};
use dungeon_decks::core::{CardUid, GameRng, Rejection, SessionConfig};
use dungeon_decks::encounter::CardRef;
use dungeon_decks::session::GameSession;
use dungeon_decks::zones::CellPos;

fn quiet_session() -> GameSession {
    let config = SessionConfig::default().with_fate_deck(vec![0]);
    let mut session = standard_session(config, 99).unwrap();
    let _ = session.board_mut().get_all_cards();
    session.take_notifications();
    session
}

fn put(session: &mut GameSession, id: &str, col: usize, row: usize) -> CardUid {
    let card = session.spawn(id).unwrap();
    let uid = card.uid;
    session.board_mut().place_card(CellPos::new(col, row), card);
    uid
}

/// Test equipping from the board into matching slots.
#[test]
fn test_equip_from_board() {
    let mut session = quiet_session();
    let sword = put(&mut session, "short_sword", 0, 0);
    put(&mut session, "iron_helm", 1, 0);

    assert_eq!(session.equip(CardRef::board(0, 0), "weapon1"), Ok(None));
    assert_eq!(session.equip(CardRef::board(1, 0), "head"), Ok(None));

    assert_eq!(session.inventory().get_item("weapon1").unwrap().uid, sword);
    assert!(session.board().get_card_at(CellPos::new(0, 0)).is_none());
    assert_eq!(session.power_bonus(), 3);
}

/// Test that a slot refuses items of the wrong category, leaving them in place.
#[test]
fn test_equip_wrong_slot() {
    let mut session = quiet_session();
    let helm = put(&mut session, "iron_helm", 0, 0);

    assert_eq!(
        session.equip(CardRef::board(0, 0), "weapon1"),
        Err(Rejection::CannotEquip("weapon1".to_string()))
    );
    assert_eq!(
        session.equip(CardRef::board(0, 0), "tail"),
        Err(Rejection::UnknownSlot("tail".to_string()))
    );
    assert_eq!(session.board().get_card_at(CellPos::new(0, 0)).unwrap().uid, helm);
    assert_eq!(session.power_bonus(), 0);
}

/// Test that gold piles and board monsters cannot be equipped.
#[test]
fn test_equip_unequippable() {
    let mut session = quiet_session();
    put(&mut session, "gold_pile_small", 0, 0);
    put(&mut session, "goblin", 1, 0);

    assert_eq!(
        session.equip(CardRef::board(0, 0), "backpack1"),
        Err(Rejection::CannotEquip("backpack1".to_string()))
    );
    assert_eq!(
        session.equip(CardRef::board(1, 0), "weapon1"),
        Err(Rejection::WrongCardType)
    );
}

/// Test that an item displaced by equipping is discarded.
#[test]
fn test_equip_displaces() {
    let mut session = quiet_session();
    let sword = put(&mut session, "short_sword", 0, 0);
    put(&mut session, "battle_axe", 1, 0);
    session.equip(CardRef::board(0, 0), "weapon1").unwrap();
    let discarded = session.discarded();

    let displaced = session.equip(CardRef::board(1, 0), "weapon1").unwrap();

    assert_eq!(displaced, Some(sword));
    assert_eq!(session.discarded(), discarded + 1);
    assert_eq!(session.power_bonus(), 4);
    assert!(session.board().find_card(sword).is_none());
}

/// Test that backpack slots hold anything equippable but grant no power.
#[test]
fn test_backpack_storage() {
    let mut session = quiet_session();
    put(&mut session, "battle_axe", 0, 0);
    put(&mut session, "health_potion", 1, 0);

    session.equip(CardRef::board(0, 0), "backpack1").unwrap();
    session.equip(CardRef::board(1, 0), "backpack2").unwrap();

    assert_eq!(session.power_bonus(), 0);

    // Moving the axe from the backpack into a weapon slot activates it.
    session.equip(CardRef::slot("backpack1"), "weapon2").unwrap();
    assert_eq!(session.power_bonus(), 4);
    assert!(session.inventory().get_item("backpack1").is_none());
}

/// Test unequipping discards the item.
#[test]
fn test_unequip() {
    let mut session = quiet_session();
    let sword = put(&mut session, "short_sword", 0, 0);
    session.equip(CardRef::board(0, 0), "weapon1").unwrap();

    let discarded = session.discarded();
    let uid = session.unequip("weapon1").unwrap();

    assert_eq!(uid, sword);
    assert_eq!(session.discarded(), discarded + 1);
    assert_eq!(session.power_bonus(), 0);
    assert_eq!(
        session.unequip("weapon1"),
        Err(Rejection::EmptySlot("weapon1".to_string()))
    );
    assert_eq!(
        session.unequip("cape"),
        Err(Rejection::UnknownSlot("cape".to_string()))
    );
}

/// Test an on-equip heal.
#[test]
fn test_equip_heals() {
    let mut session = quiet_session();
    session.player_mut().hp = 5;
    put(&mut session, "iron_helm", 0, 0);

    session.equip(CardRef::board(0, 0), "head").unwrap();

    assert_eq!(session.player().hp, 6);
}

/// Test an on-discard ability using a custom catalog.
#[test]
fn test_discard_hurts() {
    let mut catalog = CardCatalog::new();
    for card in standard_cards() {
        catalog.register(card).unwrap();
    }
    catalog
        .register(
            CardTemplate::new("cursed_ring", CardKind::Treasure, "Cursed Ring", 1)
                .with_slot(EquipCategory::Head)
                .with_ability(AbilityInstance::new("discard_damage").with_param("amount", 3)),
        )
        .unwrap();

    let mut session = GameSession::new(
        SessionConfig::default(),
        standard_dungeon(),
        catalog,
        standard_abilities(),
        GameRng::new(5),
    )
    .unwrap();
    let _ = session.board_mut().get_all_cards();

    put(&mut session, "cursed_ring", 0, 0);
    session.equip(CardRef::board(0, 0), "head").unwrap();
    session.unequip("head").unwrap();

    assert_eq!(session.player().hp, 7);

    // A ring that was only carried in the backpack stays inert.
    put(&mut session, "cursed_ring", 1, 0);
    session.equip(CardRef::board(1, 0), "backpack1").unwrap();
    session.unequip("backpack1").unwrap();

    assert_eq!(session.player().hp, 7);
}

/// Test that stored items keep their equip abilities dormant until worn.
#[test]
fn test_backpack_abilities_dormant() {
    let mut session = quiet_session();
    session.player_mut().hp = 5;
    put(&mut session, "iron_helm", 0, 0);

    session.equip(CardRef::board(0, 0), "backpack1").unwrap();
    assert_eq!(session.player().hp, 5);

    session.equip(CardRef::slot("backpack1"), "head").unwrap();
    assert_eq!(session.player().hp, 6);
}

/// Test drinking a potion from the board and from the backpack.
#[test]
fn test_deliver_potion() {
    let mut session = quiet_session();
    session.player_mut().hp = 3;
    put(&mut session, "health_potion", 0, 0);
    put(&mut session, "health_potion", 1, 0);
    session.equip(CardRef::board(1, 0), "backpack1").unwrap();

    session.deliver_to_player(CardRef::board(0, 0)).unwrap();
    assert_eq!(session.player().hp, 7);
    assert!(session.board().get_card_at(CellPos::new(0, 0)).is_none());

    session.deliver_to_player(CardRef::slot("backpack1")).unwrap();
    assert_eq!(session.player().hp, 10);
    assert!(session.inventory().get_item("backpack1").is_none());
}

/// Test gold delivered to the player.
#[test]
fn test_deliver_gold() {
    let mut session = quiet_session();
    put(&mut session, "gold_pile_medium", 2, 2);

    session.deliver_to_player(CardRef::board(2, 2)).unwrap();

    assert_eq!(session.player().gold, 6);
}

/// Test that items without a player ability are refused.
#[test]
fn test_deliver_not_deliverable() {
    let mut session = quiet_session();
    let sword = put(&mut session, "short_sword", 0, 0);

    assert_eq!(
        session.deliver_to_player(CardRef::board(0, 0)),
        Err(Rejection::NotDeliverable)
    );
    assert_eq!(session.board().get_card_at(CellPos::new(0, 0)).unwrap().uid, sword);
}

/// Test sharpening an equipped weapon.
#[test]
fn test_deliver_to_weapon() {
    let mut session = quiet_session();
    put(&mut session, "short_sword", 0, 0);
    put(&mut session, "whetstone", 1, 0);
    session.equip(CardRef::board(0, 0), "weapon1").unwrap();

    assert_eq!(
        session.deliver_to_weapon(CardRef::board(1, 0), "weapon2"),
        Err(Rejection::EmptySlot("weapon2".to_string()))
    );
    session.deliver_to_weapon(CardRef::board(1, 0), "weapon1").unwrap();

    assert_eq!(session.inventory().get_item("weapon1").unwrap().value(), 3);
    assert_eq!(session.power_bonus(), 3);
    assert!(session.board().get_card_at(CellPos::new(1, 0)).is_none());
}

/// Test disarming a trap with a tool: no check, no damage.
#[test]
fn test_deliver_to_trap() {
    let mut session = quiet_session();
    put(&mut session, "disarm_kit", 0, 0);
    put(&mut session, "spike_trap_heavy", 3, 1);

    session.deliver_to_cell(CardRef::board(0, 0), CellPos::new(3, 1)).unwrap();

    assert!(!session.has_trap_on_board());
    assert!(session.board().get_card_at(CellPos::new(0, 0)).is_none());
    assert_eq!(session.player().hp, 10);
}

/// Test throwing a scroll at monsters.
#[test]
fn test_deliver_to_monster() {
    let mut session = quiet_session();
    put(&mut session, "fireball_scroll", 0, 0);
    put(&mut session, "fireball_scroll", 0, 1);
    put(&mut session, "bone_dragon", 2, 0);
    let mut goblin = session.spawn("goblin").unwrap();
    let crown = session.spawn("crown").unwrap();
    let crown_uid = crown.uid;
    goblin.set_loot(crown);
    session.board_mut().place_card(CellPos::new(2, 1), goblin);

    session.deliver_to_cell(CardRef::board(0, 0), CellPos::new(2, 0)).unwrap();
    assert_eq!(session.board().get_card_at(CellPos::new(2, 0)).unwrap().value(), 6);

    session.deliver_to_cell(CardRef::board(0, 1), CellPos::new(2, 1)).unwrap();
    assert_eq!(session.board().get_card_at(CellPos::new(2, 1)).unwrap().uid, crown_uid);
    assert_eq!(session.player().hp, 10);
}

/// Test that a drag completes through the matching delivery.
#[test]
fn test_drag_then_deliver() {
    let mut session = quiet_session();
    session.player_mut().hp = 4;
    put(&mut session, "health_potion", 0, 0);
    put(&mut session, "short_sword", 1, 0);

    session.begin_drag(CardRef::board(0, 0)).unwrap();
    assert_eq!(
        session.equip(CardRef::board(1, 0), "weapon1"),
        Err(Rejection::Locked)
    );

    session.deliver_to_player(CardRef::board(0, 0)).unwrap();
    assert!(!session.is_locked());
    assert_eq!(session.player().hp, 8);
}
