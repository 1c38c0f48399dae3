mod common;

use activerow::prelude::*;
use activerow_mem::MemExecutor;
use common::{Hero, hero};

#[test]
fn save_inserts_then_updates() {
    let db = Mapper::new(MemExecutor::new());

    let mut alice = hero("Alice", 80, None);
    assert!(db.save(&mut alice));
    let id = alice.id.expect("insert assigns id");
    assert_eq!(db.executor().table_len("heroes"), 1);

    alice.power_level = Some(95);
    assert!(db.save(&mut alice));
    // Second save is an update: same identity, no second row.
    assert_eq!(alice.id, Some(id));
    assert_eq!(db.executor().table_len("heroes"), 1);

    let stored: Hero = db
        .fetch_one(Query::new().filter("id", id))
        .expect("row exists");
    assert_eq!(stored.power_level, Some(95));
    assert_eq!(stored.name.as_deref(), Some("Alice"));
}

#[test]
fn fetch_many_hydrates_matching_rows() {
    let db = Mapper::new(MemExecutor::new());
    for (name, level, team) in [("Alice", 80, Some(1)), ("Bob", 60, Some(1)), ("Cara", 70, Some(2))] {
        let mut h = hero(name, level, team);
        assert!(db.save(&mut h));
    }

    let squad: Vec<Hero> = db.fetch_many(Query::new().filter("team_id", 1_i64));
    assert_eq!(squad.len(), 2);
    assert!(squad.iter().all(|h| h.team_id == Some(1)));
    assert!(squad.iter().all(|h| h.id.is_some()));

    let nobody: Vec<Hero> = db.fetch_many(Query::new().filter("team_id", 9_i64));
    assert!(nobody.is_empty());
}

#[test]
fn count_matches_fetch_many() {
    let db = Mapper::new(MemExecutor::new());
    for level in [10, 20, 30] {
        let mut h = hero("x", level, Some(4));
        assert!(db.save(&mut h));
    }
    assert_eq!(db.count::<Hero>(Query::new().filter("team_id", 4_i64)), 3);
    assert_eq!(db.count::<Hero>(Query::new().filter("team_id", 5_i64)), 0);
}

#[test]
fn delete_removes_row_and_orphans_instance() {
    let db = Mapper::new(MemExecutor::new());
    let mut alice = hero("Alice", 80, None);
    assert!(db.save(&mut alice));

    assert!(db.delete(&alice));
    assert_eq!(db.executor().table_len("heroes"), 0);

    // The instance keeps its id but is orphaned: deleting again and
    // updating both affect zero rows.
    assert!(alice.id.is_some());
    assert!(!db.delete(&alice));
    assert!(!db.update(&alice));
}

#[test]
fn delete_on_unsaved_record_is_false() {
    let db = Mapper::new(MemExecutor::new());
    assert!(!db.delete(&Hero::default()));
}

#[test]
fn partial_writes_never_null_a_column() {
    let db = Mapper::new(MemExecutor::new());
    let mut alice = hero("Alice", 80, Some(1));
    assert!(db.save(&mut alice));
    let id = alice.id.unwrap();

    // Nulling the property locally drops it from the write, so the stored
    // value survives the update.
    alice.power_level = None;
    alice.team_id = Some(2);
    assert!(db.save(&mut alice));

    let stored: Hero = db.fetch_one(Query::new().filter("id", id)).unwrap();
    assert_eq!(stored.power_level, Some(80));
    assert_eq!(stored.team_id, Some(2));
}
