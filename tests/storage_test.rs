//! Integration tests for bet storage

use ffl_bets::{storage::*, BetId, ScoringRule, Season, SnapThreshold, Week, WeekRange};

fn create_test_db() -> BetDatabase {
    BetDatabase::new_in_memory().unwrap()
}

fn new_bet(creator: &str, weeks: WeekRange) -> NewBet {
    NewBet {
        creator: creator.to_string(),
        player_a: "Ja'Marr Chase".to_string(),
        player_b: "Justin Jefferson".to_string(),
        description: String::new(),
        scoring: ScoringRule::Standard,
        min_snap: SnapThreshold::default(),
        season: Season::new(2024),
        weeks,
        participants: vec![],
    }
}

#[test]
fn test_file_database_persists_bets() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("bets.sqlite");

    let id = {
        let mut db = BetDatabase::open(&path).unwrap();
        db.insert_bet(&new_bet("alice", WeekRange::full_season()))
            .unwrap()
            .id
    };

    let db = BetDatabase::open(&path).unwrap();
    let bet = db.get_bet(id).unwrap().unwrap();
    assert_eq!(bet.player_a, "Ja'Marr Chase");
    assert_eq!(bet.scoring, ScoringRule::Standard);
}

#[test]
fn test_bet_ids_increase() {
    let mut db = create_test_db();
    let first = db.insert_bet(&new_bet("a", WeekRange::full_season())).unwrap();
    let second = db.insert_bet(&new_bet("a", WeekRange::full_season())).unwrap();
    assert!(second.id.as_i64() > first.id.as_i64());
}

#[test]
fn test_season_lifecycle() {
    let mut db = create_test_db();
    let short = db
        .insert_bet(&new_bet("a", WeekRange::new(1, 6).unwrap()))
        .unwrap();
    let long = db.insert_bet(&new_bet("b", WeekRange::full_season())).unwrap();

    assert_eq!(db.close_completed(Season::new(2024), Week::new(5)).unwrap(), 0);
    assert_eq!(db.close_completed(Season::new(2024), Week::new(6)).unwrap(), 1);

    let active: Vec<BetId> = db
        .active_bets(Season::new(2024))
        .unwrap()
        .into_iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(active, vec![long.id]);

    assert_eq!(db.close_completed(Season::new(2024), Week::new(18)).unwrap(), 1);
    assert!(db.active_bets(Season::new(2024)).unwrap().is_empty());
    assert_eq!(db.all_bets(Season::new(2024)).unwrap().len(), 2);
    assert!(!db.get_bet(short.id).unwrap().unwrap().is_active);
}

#[test]
fn test_update_min_snap_and_description() {
    let mut db = create_test_db();
    let bet = db.insert_bet(&new_bet("a", WeekRange::full_season())).unwrap();

    let update = BetUpdate {
        min_snap: Some(SnapThreshold::new(50.0).unwrap()),
        description: Some("double or nothing".to_string()),
        ..Default::default()
    };
    assert!(db.update_bet(bet.id, &update).unwrap());

    let updated = db.get_bet(bet.id).unwrap().unwrap();
    assert_eq!(updated.min_snap.value(), 50.0);
    assert_eq!(updated.description, "double or nothing");
    assert_eq!(updated.created_at, bet.created_at);
}
