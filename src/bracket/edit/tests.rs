//! Unit tests for edit events

use super::*;
use crate::bracket::generate::generate_with_rng;
use crate::bracket::types::Match;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bracket(count: usize, seed: u64) -> BracketSnapshot {
    let names: Vec<String> = (1..=count).map(|i| format!("P{}", i)).collect();
    generate_with_rng(&names, &mut StdRng::seed_from_u64(seed)).unwrap()
}

fn get<'a>(snapshot: &'a BracketSnapshot, id: &str) -> &'a Match {
    snapshot.find_match(&MatchId::from(id)).unwrap()
}

fn score(
    snapshot: &BracketSnapshot,
    id: &str,
    slot: Slot,
    leg: Leg,
    raw: &str,
) -> Result<BracketSnapshot> {
    apply_score(snapshot, &MatchId::from(id), slot, leg, raw)
}

fn play(snapshot: &BracketSnapshot, id: &str, scores: [&str; 4]) -> BracketSnapshot {
    let mut state = score(snapshot, id, Slot::One, Leg::First, scores[0]).unwrap();
    state = score(&state, id, Slot::Two, Leg::First, scores[1]).unwrap();
    state = score(&state, id, Slot::One, Leg::Second, scores[2]).unwrap();
    score(&state, id, Slot::Two, Leg::Second, scores[3]).unwrap()
}

#[cfg(test)]
mod score_tests {
    use super::*;

    #[test]
    fn test_scores_stored_as_typed() {
        let start = bracket(4, 1);
        let after = score(&start, "r0-m0", Slot::Two, Leg::Second, "x").unwrap();
        assert_eq!(get(&after, "r0-m0").score2_2, Score::Invalid("x".to_string()));
    }

    #[test]
    fn test_partial_two_leg_scores_do_not_decide() {
        let start = bracket(4, 1);
        let after = score(&start, "r0-m0", Slot::One, Leg::First, "3").unwrap();
        let after = score(&after, "r0-m0", Slot::Two, Leg::First, "0").unwrap();
        assert!(get(&after, "r0-m0").winner.is_none());
        assert!(get(&after, "r1-m0").p1.is_none());
    }

    #[test]
    fn test_complete_aggregate_decides_and_propagates() {
        let start = bracket(4, 1);
        let home = get(&start, "r0-m0").p1.clone();

        let after = play(&start, "r0-m0", ["2", "1", "1", "1"]);
        assert_eq!(get(&after, "r0-m0").winner, home);
        assert_eq!(get(&after, "r1-m0").p1, home);
    }

    #[test]
    fn test_score_correction_swaps_winner_downstream() {
        let start = bracket(4, 1);
        let away = get(&start, "r0-m0").p2.clone();

        let decided = play(&start, "r0-m0", ["2", "1", "1", "1"]);
        let corrected = score(&decided, "r0-m0", Slot::Two, Leg::Second, "5").unwrap();
        assert_eq!(get(&corrected, "r0-m0").winner, away);
        assert_eq!(get(&corrected, "r1-m0").p1, away);
    }

    #[test]
    fn test_clearing_a_score_undecides() {
        let start = bracket(4, 1);
        let decided = play(&start, "r0-m0", ["2", "1", "1", "1"]);
        let cleared = score(&decided, "r0-m0", Slot::One, Leg::Second, "").unwrap();
        assert!(get(&cleared, "r0-m0").winner.is_none());
        assert!(get(&cleared, "r1-m0").p1.is_none());
    }

    #[test]
    fn test_final_is_single_leg() {
        let mut state = bracket(4, 2);
        state = play(&state, "r0-m0", ["1", "0", "1", "0"]);
        state = play(&state, "r0-m1", ["0", "1", "0", "1"]);

        match score(&state, "r1-m0", Slot::One, Leg::Second, "1").unwrap_err() {
            BracketError::SingleLegMatch { match_id } => assert_eq!(match_id, "r1-m0"),
            _ => panic!("Expected SingleLegMatch error"),
        }

        let after = score(&state, "r1-m0", Slot::One, Leg::First, "2").unwrap();
        let after = score(&after, "r1-m0", Slot::Two, Leg::First, "1").unwrap();
        let final_match = get(&after, "r1-m0");
        assert_eq!(final_match.winner, final_match.p1);
    }

    #[test]
    fn test_third_place_scores_decide_bronze() {
        let mut state = bracket(4, 3);
        state = play(&state, "r0-m0", ["1", "0", "1", "0"]);
        state = play(&state, "r0-m1", ["1", "0", "1", "0"]);

        let bronze_id = MatchId::third_place();
        let loser = get(&state, "r0-m1").p2.clone();
        assert_eq!(state.third_place_match.as_ref().unwrap().p2, loser);

        state = apply_score(&state, &bronze_id, Slot::One, Leg::First, "0").unwrap();
        state = apply_score(&state, &bronze_id, Slot::Two, Leg::First, "4").unwrap();
        assert_eq!(state.third_place_match.as_ref().unwrap().winner, loser);
    }

    #[test]
    fn test_walkover_rejects_scores() {
        let start = bracket(3, 4);
        let bye = start.rounds[0]
            .matches
            .iter()
            .find(|m| m.walkover)
            .unwrap()
            .id
            .clone();

        match apply_score(&start, &bye, Slot::One, Leg::First, "1").unwrap_err() {
            BracketError::WalkoverMatch { .. } => (),
            _ => panic!("Expected WalkoverMatch error"),
        }
    }

    #[test]
    fn test_unknown_match_is_no_op() {
        let start = bracket(4, 1);
        let after = score(&start, "r9-m9", Slot::One, Leg::First, "1").unwrap();
        assert_eq!(after, start);
    }
}

#[cfg(test)]
mod select_tests {
    use super::*;

    #[test]
    fn test_select_by_name_and_id() {
        let start = bracket(4, 5);
        let m = get(&start, "r0-m1");
        let (p1, p2) = (m.p1.clone().unwrap(), m.p2.clone().unwrap());

        let by_name = select_winner(&start, &m.id, Some(&p1.name.to_uppercase())).unwrap();
        assert_eq!(get(&by_name, "r0-m1").winner.as_ref(), Some(&p1));
        assert_eq!(get(&by_name, "r1-m0").p2.as_ref(), Some(&p1));

        let by_id = select_winner(&by_name, &m.id, Some(p2.id.as_str())).unwrap();
        assert_eq!(get(&by_id, "r1-m0").p2.as_ref(), Some(&p2));
    }

    #[test]
    fn test_select_none_clears() {
        let start = bracket(4, 5);
        let id = MatchId::from("r0-m0");
        let p1 = get(&start, "r0-m0").p1.clone().unwrap();
        let decided = select_winner(&start, &id, Some(p1.id.as_str())).unwrap();
        let cleared = select_winner(&decided, &id, None).unwrap();
        assert!(get(&cleared, "r0-m0").winner.is_none());
        assert!(get(&cleared, "r1-m0").p1.is_none());
    }

    #[test]
    fn test_select_outsider_fails() {
        let start = bracket(4, 5);
        let result = select_winner(&start, &MatchId::from("r0-m0"), Some("Nobody"));
        match result.unwrap_err() {
            BracketError::ParticipantNotInMatch { participant, match_id } => {
                assert_eq!(participant, "Nobody");
                assert_eq!(match_id, "r0-m0");
            }
            _ => panic!("Expected ParticipantNotInMatch error"),
        }
    }
}
