//! Integration tests for command handlers

use bracket_draw::{
    bracket::{Leg, MatchId, Slot, TournamentStatus},
    commands::{
        common::load_tournament,
        draw::{collect_names, handle_draw},
        results::{handle_score, handle_winner, ScoreParams, WinnerParams},
        show::{handle_delete, handle_list, handle_show},
    },
    storage::*,
    BracketError, TournamentId,
};
use std::io::Write;

fn id(s: &str) -> TournamentId {
    s.parse().unwrap()
}

fn score(store: &mut TournamentStore, match_id: &MatchId, slot: Slot, value: &str) {
    handle_score(
        store,
        ScoreParams {
            tournament_id: Some(id("open")),
            match_id: match_id.clone(),
            slot,
            leg: Leg::First,
            value: value.to_string(),
            as_json: true,
        },
    )
    .unwrap();
}

#[test]
fn test_names_file_feeds_draw() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Ana\n  Ben  \n\nCleo").unwrap();

    let entries = collect_names(None, Some(file.path()), std::io::empty()).unwrap();
    assert_eq!(entries, vec!["Ana", "Ben", "Cleo"]);

    let mut store = TournamentStore::new_in_memory().unwrap();
    handle_draw(&mut store, Some(id("open")), entries, false).unwrap();

    let t = load_tournament(&store, &id("open")).unwrap();
    assert_eq!(t.snapshot.participants().len(), 3);
    assert!(t.snapshot.third_place_match.is_some());
}

#[test]
fn test_two_player_final_by_score() {
    let mut store = TournamentStore::new_in_memory().unwrap();
    handle_draw(
        &mut store,
        Some(id("open")),
        vec!["Ana".to_string(), "Ben".to_string()],
        true,
    )
    .unwrap();

    let final_id = MatchId::new(0, 0);
    score(&mut store, &final_id, Slot::One, "4");
    score(&mut store, &final_id, Slot::Two, "4");

    // A level final stays undecided.
    let t = load_tournament(&store, &id("open")).unwrap();
    assert_eq!(t.status(), TournamentStatus::Active);

    score(&mut store, &final_id, Slot::Two, "5");
    let t = load_tournament(&store, &id("open")).unwrap();
    assert_eq!(t.status(), TournamentStatus::Finished);
    let final_match = t.snapshot.final_match().unwrap();
    assert_eq!(t.standings().champion, final_match.p2);
    assert_eq!(t.standings().runner_up, final_match.p1);

    handle_show(&store, Some(id("open")), false).unwrap();
    handle_list(&store, true).unwrap();
}

#[test]
fn test_second_leg_on_final_rejected() {
    let mut store = TournamentStore::new_in_memory().unwrap();
    handle_draw(
        &mut store,
        Some(id("open")),
        vec!["Ana".to_string(), "Ben".to_string()],
        false,
    )
    .unwrap();

    let result = handle_score(
        &mut store,
        ScoreParams {
            tournament_id: Some(id("open")),
            match_id: MatchId::new(0, 0),
            slot: Slot::One,
            leg: Leg::Second,
            value: "1".to_string(),
            as_json: false,
        },
    );
    assert!(matches!(result, Err(BracketError::SingleLegMatch { .. })));
}

#[test]
fn test_winner_must_be_in_match() {
    let mut store = TournamentStore::new_in_memory().unwrap();
    handle_draw(
        &mut store,
        Some(id("open")),
        vec!["Ana".to_string(), "Ben".to_string()],
        false,
    )
    .unwrap();

    let result = handle_winner(
        &mut store,
        WinnerParams {
            tournament_id: Some(id("open")),
            match_id: MatchId::new(0, 0),
            participant: Some("Zed".to_string()),
            as_json: false,
        },
    );
    assert!(matches!(
        result,
        Err(BracketError::ParticipantNotInMatch { .. })
    ));
}

#[test]
fn test_delete_then_show_fails() {
    let mut store = TournamentStore::new_in_memory().unwrap();
    handle_draw(
        &mut store,
        Some(id("open")),
        vec!["Ana".to_string(), "Ben".to_string()],
        false,
    )
    .unwrap();

    handle_delete(&mut store, Some(id("open"))).unwrap();
    assert!(matches!(
        handle_show(&store, Some(id("open")), false),
        Err(BracketError::TournamentNotFound { .. })
    ));
    assert!(store.list_tournaments().unwrap().is_empty());
}
