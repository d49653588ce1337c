//! Result propagation through the bracket.
//!
//! A changed result is pushed forward one round at a time. Any downstream
//! match whose participants change loses its own result, so the walk stops
//! at the first slot that already holds the right participant.

use crate::bracket::types::{
    same_participant, BracketSnapshot, MatchId, MatchLocation, Participant, Slot,
};
use tracing::{debug, warn};


/// Record `new_winner` for `match_id` and return the updated bracket.
///
/// The input snapshot is left untouched. Unknown match ids, and winners that
/// are not playing in the match, return an unchanged copy.
pub fn propagate(
    snapshot: &BracketSnapshot,
    match_id: &MatchId,
    new_winner: Option<Participant>,
) -> BracketSnapshot {
    let mut next = snapshot.clone();
    apply_winner(&mut next, match_id, new_winner);
    next
}

/// In-place form of [`propagate`]. Returns whether anything was applied.
pub(crate) fn apply_winner(
    bracket: &mut BracketSnapshot,
    match_id: &MatchId,
    new_winner: Option<Participant>,
) -> bool {
    let Some(location) = bracket.locate(match_id) else {
        warn!(%match_id, "ignoring result for unknown match");
        return false;
    };

    let (round, index) = match location {
        MatchLocation::ThirdPlace => {
            let Some(bronze) = bracket.third_place_match.as_mut() else {
                return false;
            };
            if !bronze.admits(new_winner.as_ref()) {
                warn!(%match_id, "ignoring winner who is not in the match");
                return false;
            }
            bronze.winner = new_winner;
            return true;
        }
        MatchLocation::Round { round, index } => (round, index),
    };

    let current = &mut bracket.rounds[round].matches[index];
    if !current.admits(new_winner.as_ref()) {
        warn!(%match_id, "ignoring winner who is not in the match");
        return false;
    }

    let previous = std::mem::replace(&mut current.winner, new_winner.clone());
    let winner_changed = !same_participant(previous.as_ref(), new_winner.as_ref());
    let loser = current.loser().cloned();

    debug!(
        %match_id,
        winner = new_winner.as_ref().map(|p| p.name.as_str()),
        changed = winner_changed,
        "winner set"
    );

    if bracket.semifinal_round() == Some(round) {
        feed_third_place(bracket, index, loser, winner_changed);
    }

    walk_forward(bracket, round, index, new_winner);
    true
}

/// Route a semifinal loser into the bronze match. Semifinal 0 feeds slot one,
/// semifinal 1 slot two. `reset` clears the bronze result.
fn feed_third_place(
    bracket: &mut BracketSnapshot,
    semifinal_index: usize,
    loser: Option<Participant>,
    reset: bool,
) {
    let Some(bronze) = bracket.third_place_match.as_mut() else {
        return;
    };

    let slot = if semifinal_index == 0 {
        Slot::One
    } else {
        Slot::Two
    };
    bronze.set_slot(slot, loser);

    if reset {
        debug!("third-place match reset");
        bronze.reset_result();
    }
}

fn walk_forward(
    bracket: &mut BracketSnapshot,
    mut round: usize,
    mut index: usize,
    mut carried: Option<Participant>,
) {
    loop {
        let current = &bracket.rounds[round].matches[index];
        let (Some(next_id), Some(slot)) = (current.next_match_id.clone(), current.next_match_slot)
        else {
            break;
        };

        let next_round = round + 1;
        let Some(next_index) = bracket
            .rounds
            .get(next_round)
            .and_then(|r| r.matches.iter().position(|m| m.id == next_id))
        else {
            break;
        };

        let downstream = &mut bracket.rounds[next_round].matches[next_index];
        if same_participant(downstream.slot(slot), carried.as_ref()) {
            break;
        }

        let had_winner = downstream.winner.is_some();
        downstream.set_slot(slot, carried.take());
        downstream.reset_result();
        debug!(match_id = %next_id, %slot, "downstream match reset");

        if bracket.semifinal_round() == Some(next_round) {
            feed_third_place(bracket, next_index, None, had_winner);
        }

        round = next_round;
        index = next_index;
    }
}
