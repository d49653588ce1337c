//! File-backed storage tests

use bracket_draw::{
    bracket::{generate, propagate, TournamentStatus},
    storage::*,
    TournamentId,
};
use tempfile::TempDir;

fn id(s: &str) -> TournamentId {
    s.parse().unwrap()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_open_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("tournaments.db");

    let _store = TournamentStore::open(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_tournament_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tournaments.db");
    let entries = names(&["Ana", "Ben", "Cleo"]);
    let snapshot = generate(&entries).unwrap();

    {
        let mut store = TournamentStore::open(&path).unwrap();
        store.save_tournament(&id("club-cup"), &entries, &snapshot).unwrap();
    }

    let store = TournamentStore::open(&path).unwrap();
    let loaded = store.get_tournament(&id("club-cup")).unwrap().unwrap();
    assert_eq!(loaded.names, entries);
    assert_eq!(loaded.snapshot, snapshot);
    assert_eq!(loaded.status(), TournamentStatus::Active);
}

#[test]
fn test_results_persist_across_sessions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tournaments.db");
    let entries = names(&["Ana", "Ben"]);
    let snapshot = generate(&entries).unwrap();

    let mut store = TournamentStore::open(&path).unwrap();
    store.save_tournament(&id("duel"), &entries, &snapshot).unwrap();

    let final_match = snapshot.final_match().unwrap();
    let decided = propagate(&snapshot, &final_match.id, final_match.p2.clone());
    assert!(store.update_snapshot(&id("duel"), &decided).unwrap());
    drop(store);

    let store = TournamentStore::open(&path).unwrap();
    let summaries = store.list_tournaments().unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].status, TournamentStatus::Finished);
    assert_eq!(
        summaries[0].champion,
        final_match.p2.as_ref().map(|p| p.name.clone())
    );
}

#[test]
fn test_delete_is_persistent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tournaments.db");
    let entries = names(&["Ana", "Ben"]);

    let mut store = TournamentStore::open(&path).unwrap();
    store
        .save_tournament(&id("gone"), &entries, &generate(&entries).unwrap())
        .unwrap();
    assert!(store.delete_tournament(&id("gone")).unwrap());
    drop(store);

    let store = TournamentStore::open(&path).unwrap();
    assert!(store.get_tournament(&id("gone")).unwrap().is_none());
}
