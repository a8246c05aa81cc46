//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{BetId, Season, Week, WeekRange};
use crate::engine::{ScoringRule, SnapThreshold};

fn create_test_db() -> BetDatabase {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    let mut db = BetDatabase { conn };
    db.initialize_schema().unwrap();
    db
}

fn new_bet(creator: &str, start: u16, end: u16) -> NewBet {
    NewBet {
        creator: creator.to_string(),
        player_a: " CeeDee Lamb ".to_string(),
        player_b: "Amon-Ra St. Brown".to_string(),
        description: "loser buys wings".to_string(),
        scoring: ScoringRule::Half,
        min_snap: SnapThreshold::new(30.0).unwrap(),
        season: Season::new(2024),
        weeks: WeekRange::new(start, end).unwrap(),
        participants: vec!["111".to_string(), "222".to_string(), "111".to_string()],
    }
}

#[test]
fn test_database_creation() {
    let _db = create_test_db();
    // Should not panic - database creation successful
}

#[test]
fn test_schema_initialization_is_idempotent() {
    let mut db = create_test_db();
    assert!(db.initialize_schema().is_ok());
}

#[test]
fn test_adds_missing_participants_column() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute(
        "CREATE TABLE bets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            creator TEXT NOT NULL,
            player_a TEXT NOT NULL,
            player_b TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            scoring TEXT NOT NULL,
            min_snap_pct REAL NOT NULL,
            season INTEGER NOT NULL,
            start_week INTEGER NOT NULL DEFAULT 1,
            end_week INTEGER NOT NULL DEFAULT 18,
            is_active INTEGER NOT NULL DEFAULT 1,
            created_at INTEGER NOT NULL
        )",
        [],
    )
    .unwrap();

    let mut db = BetDatabase { conn };
    db.initialize_schema().unwrap();

    let bet = db.insert_bet(&new_bet("1", 1, 18)).unwrap();
    assert_eq!(bet.participants, vec!["111", "222"]);
}

#[test]
fn test_insert_and_get_bet() {
    let mut db = create_test_db();

    let inserted = db.insert_bet(&new_bet("creator-1", 2, 10)).unwrap();
    assert_eq!(inserted.player_a, "CeeDee Lamb");
    assert!(inserted.is_active);

    let fetched = db.get_bet(inserted.id).unwrap().unwrap();
    assert_eq!(fetched, inserted);
    assert_eq!(fetched.scoring, ScoringRule::Half);
    assert_eq!(fetched.weeks, WeekRange::new(2, 10).unwrap());
    assert_eq!(fetched.participants, vec!["111", "222"]);
}

#[test]
fn test_get_missing_bet() {
    let db = create_test_db();
    assert!(db.get_bet(BetId::new(404)).unwrap().is_none());
}

#[test]
fn test_update_bet_fields() {
    let mut db = create_test_db();
    let bet = db.insert_bet(&new_bet("creator-1", 1, 18)).unwrap();

    let update = BetUpdate {
        player_b: Some("Puka Nacua".to_string()),
        scoring: Some(ScoringRule::Ppr),
        weeks: Some(WeekRange::new(4, 12).unwrap()),
        ..Default::default()
    };
    assert!(db.update_bet(bet.id, &update).unwrap());

    let updated = db.get_bet(bet.id).unwrap().unwrap();
    assert_eq!(updated.player_a, "CeeDee Lamb");
    assert_eq!(updated.player_b, "Puka Nacua");
    assert_eq!(updated.scoring, ScoringRule::Ppr);
    assert_eq!(updated.weeks.start(), Week::new(4));
    assert_eq!(updated.weeks.end(), Week::new(12));
    assert_eq!(updated.min_snap, bet.min_snap);
}

#[test]
fn test_update_clears_participants() {
    let mut db = create_test_db();
    let bet = db.insert_bet(&new_bet("creator-1", 1, 18)).unwrap();

    let update = BetUpdate {
        participants: Some(vec![]),
        ..Default::default()
    };
    db.update_bet(bet.id, &update).unwrap();

    assert!(db.get_bet(bet.id).unwrap().unwrap().participants.is_empty());
}

#[test]
fn test_update_missing_bet_returns_false() {
    let mut db = create_test_db();
    let update = BetUpdate {
        description: Some("nope".to_string()),
        ..Default::default()
    };
    assert!(!db.update_bet(BetId::new(99), &update).unwrap());
}

#[test]
fn test_close_completed_and_listing() {
    let mut db = create_test_db();
    let early = db.insert_bet(&new_bet("a", 1, 4)).unwrap();
    let late = db.insert_bet(&new_bet("b", 1, 18)).unwrap();
    let mut other_season = new_bet("a", 1, 2);
    other_season.season = Season::new(2023);
    db.insert_bet(&other_season).unwrap();

    let closed = db.close_completed(Season::new(2024), Week::new(4)).unwrap();
    assert_eq!(closed, 1);

    let active = db.active_bets(Season::new(2024)).unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, late.id);

    let all = db.all_bets(Season::new(2024)).unwrap();
    assert_eq!(all.len(), 2);
    assert!(!all.iter().find(|b| b.id == early.id).unwrap().is_active);

    // Closing is idempotent
    assert_eq!(db.close_completed(Season::new(2024), Week::new(4)).unwrap(), 0);
}

#[test]
fn test_bets_by_creator() {
    let mut db = create_test_db();
    db.insert_bet(&new_bet("alice", 1, 18)).unwrap();
    db.insert_bet(&new_bet("bob", 1, 18)).unwrap();
    db.insert_bet(&new_bet("alice", 3, 9)).unwrap();

    let mine = db.bets_by_creator("alice", Season::new(2024)).unwrap();
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|b| b.creator == "alice"));
    assert!(db.bets_by_creator("carol", Season::new(2024)).unwrap().is_empty());
}

#[test]
fn test_dedupe_participants() {
    assert_eq!(
        dedupe_participants(["3", " 1", "3", "", "2", "1"]),
        vec!["3", "1", "2"]
    );
    assert!(dedupe_participants(Vec::<String>::new()).is_empty());
}

#[test]
fn test_bet_update_is_empty() {
    assert!(BetUpdate::default().is_empty());
    assert!(!BetUpdate {
        min_snap: Some(SnapThreshold::none()),
        ..Default::default()
    }
    .is_empty());
}
