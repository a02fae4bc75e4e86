//! Level progression integration tests.
//!
//! These tests verify key delivery, door opening, board clearing, the
//! merge of the next level into the deck, and victory on the last door.

use dungeon_decks::content::standard_session;
use dungeon_decks::core::{CardUid, Rejection, SessionConfig};
use dungeon_decks::encounter::{CardRef, Ending};
use dungeon_decks::session::{GameSession, Notification};
use dungeon_decks::zones::CellPos;

const KEY: CellPos = CellPos::new(0, 0);
const DOOR: CellPos = CellPos::new(4, 2);

fn session(auto_explore: bool) -> GameSession {
    let config = SessionConfig::default()
        .with_fate_deck(vec![0])
        .with_auto_explore_on_level(auto_explore);
    let mut session = standard_session(config, 2024).unwrap();
    let _ = session.board_mut().get_all_cards();
    session.take_notifications();
    session
}

fn put(session: &mut GameSession, id: &str, pos: CellPos) -> CardUid {
    let card = session.spawn(id).unwrap();
    let uid = card.uid;
    session.board_mut().place_card(pos, card);
    uid
}

fn open_door(session: &mut GameSession, key: &str, door: &str) {
    put(session, key, KEY);
    put(session, door, DOOR);
    session.deliver_key_to_door(CardRef::Board(KEY), DOOR).unwrap();
}

/// Test that opening the first door clears the board and merges level two.
#[test]
fn test_open_first_door() {
    let mut session = session(false);
    put(&mut session, "goblin", CellPos::new(2, 1));
    put(&mut session, "health_potion", CellPos::new(3, 1));
    let deck_before = session.deck().remaining();

    open_door(&mut session, "rusty_key", "hall_door");

    assert_eq!(session.level(), 1);
    assert_eq!(session.level_config().name, "Underground Temple");
    assert_eq!(session.board().occupants().count(), 0);
    assert_eq!(session.deck().remaining(), deck_before + 17);
    assert!(session.key_pending());
    assert!(!session.is_locked());

    let notes = session.take_notifications();
    assert!(notes
        .iter()
        .any(|n| matches!(n, Notification::DoorOpened { settle_ms: 600, .. })));
    assert!(notes
        .iter()
        .any(|n| matches!(n, Notification::BoardCleared { discarded: 2 })));
    assert!(notes.iter().any(|n| matches!(
        n,
        Notification::LevelEntered { level: 1, .. }
    )));
}

/// Test that the next level's first batch is drawn automatically.
#[test]
fn test_auto_explore_after_door() {
    let mut session = session(true);
    let deck_before = session.deck().remaining();

    open_door(&mut session, "rusty_key", "hall_door");

    assert_eq!(session.board().occupants().count(), 3);
    assert_eq!(session.deck().remaining(), deck_before + 17 - 3);
}

/// Test opening the door with a key carried in the inventory.
#[test]
fn test_key_from_inventory() {
    let mut session = session(false);
    put(&mut session, "rusty_key", KEY);
    session.equip(CardRef::Board(KEY), "weapon2").unwrap();
    assert_eq!(session.power_bonus(), 1);
    put(&mut session, "hall_door", DOOR);

    session.deliver_to_cell(CardRef::slot("weapon2"), DOOR).unwrap();

    assert_eq!(session.level(), 1);
    assert!(session.inventory().get_item("weapon2").is_none());
    assert_eq!(session.power_bonus(), 0);
}

/// Test that a key for another level does not open the door.
#[test]
fn test_key_mismatch() {
    let mut session = session(false);
    let key = put(&mut session, "temple_key", KEY);
    put(&mut session, "hall_door", DOOR);

    assert_eq!(
        session.deliver_key_to_door(CardRef::Board(KEY), DOOR),
        Err(Rejection::KeyMismatch)
    );
    assert_eq!(session.level(), 0);
    assert_eq!(session.board().get_card_at(KEY).unwrap().uid, key);
}

/// Test door delivery refusals.
#[test]
fn test_door_rejections() {
    let mut session = session(false);
    put(&mut session, "short_sword", KEY);
    put(&mut session, "hall_door", DOOR);
    put(&mut session, "rusty_key", CellPos::new(1, 0));

    assert_eq!(
        session.deliver_key_to_door(CardRef::Board(KEY), DOOR),
        Err(Rejection::NotDeliverable)
    );
    assert_eq!(
        session.deliver_key_to_door(CardRef::board(1, 0), KEY),
        Err(Rejection::WrongCardType)
    );
    assert_eq!(
        session.deliver_key_to_door(CardRef::board(1, 0), CellPos::new(3, 0)),
        Err(Rejection::EmptyCell(CellPos::new(3, 0)))
    );
}

/// Test that opening the last door wins and ends the game.
#[test]
fn test_victory() {
    let mut session = session(false);

    open_door(&mut session, "rusty_key", "hall_door");
    open_door(&mut session, "temple_key", "temple_gate");
    assert_eq!(session.level(), 2);
    assert_eq!(session.ending(), None);

    open_door(&mut session, "master_key", "final_door");

    assert_eq!(session.ending(), Some(Ending::Victory));
    assert_eq!(session.level(), 2);
    assert!(session
        .take_notifications()
        .contains(&Notification::Victory));

    put(&mut session, "health_potion", CellPos::new(1, 1));
    put(&mut session, "master_key", KEY);
    put(&mut session, "final_door", DOOR);
    let finished = Err(Rejection::Finished);
    assert_eq!(session.explore().map(|_| ()), finished);
    assert_eq!(session.equip(CardRef::board(1, 1), "backpack1").map(|_| ()), finished);
    assert_eq!(session.unequip("weapon1").map(|_| ()), finished);
    assert_eq!(session.deliver_to_player(CardRef::board(1, 1)), finished);
    assert_eq!(session.begin_drag(CardRef::board(1, 1)), finished);
    assert_eq!(session.deliver_key_to_door(CardRef::Board(KEY), DOOR), finished);
    assert_eq!(session.ending(), Some(Ending::Victory));
}

/// Test that the boss of a new level receives that level's key.
#[test]
fn test_next_boss_gets_next_key() {
    let mut session = session(false);
    open_door(&mut session, "rusty_key", "hall_door");

    let mut boss = session.spawn("high_priest").unwrap();
    boss.data.is_boss = true;
    *session.deck_mut() = dungeon_decks::zones::Deck::from_cards(vec![boss]);
    session.explore().unwrap();

    let (_, boss) = session
        .board()
        .occupants()
        .find(|(_, c)| c.data.is_boss)
        .unwrap();
    assert_eq!(boss.loot().unwrap().id().as_str(), "temple_key");
}
