//! Edit events: score entry and manual winner selection.
//!
//! Both turn a raw user edit into a new snapshot, running the winner rules
//! and the propagation walk as needed.

use crate::bracket::propagate::{apply_winner, propagate};
use crate::bracket::resolve::resolve_winner;
use crate::bracket::types::{same_participant, BracketSnapshot, Leg, MatchId, Score, Slot};
use crate::error::{BracketError, Result};
use tracing::{debug, warn};

#[cfg(test)]
mod tests;

/// Store a raw score for `(slot, leg)` of a match and re-decide it.
///
/// The winner is recomputed with the match's leg rule and propagated only
/// when it differs from the one on record. An unknown match id returns an
/// unchanged copy.
///
/// # Errors
///
/// - [`BracketError::SingleLegMatch`] for a second-leg score on the final or
///   the third-place match.
/// - [`BracketError::WalkoverMatch`] for a bye settled at draw time.
pub fn apply_score(
    snapshot: &BracketSnapshot,
    match_id: &MatchId,
    slot: Slot,
    leg: Leg,
    raw: &str,
) -> Result<BracketSnapshot> {
    let mut next = snapshot.clone();
    let single_leg = next.is_single_leg(match_id);

    let Some(m) = next.find_match_mut(match_id) else {
        warn!(%match_id, "ignoring score for unknown match");
        return Ok(next);
    };

    if m.walkover {
        return Err(BracketError::WalkoverMatch {
            match_id: match_id.to_string(),
        });
    }
    if single_leg && leg == Leg::Second {
        return Err(BracketError::SingleLegMatch {
            match_id: match_id.to_string(),
        });
    }

    *m.score_mut(slot, leg) = Score::parse(raw);
    let resolved = resolve_winner(m, single_leg);
    if same_participant(m.winner.as_ref(), resolved.as_ref()) {
        return Ok(next);
    }

    debug!(%match_id, %slot, %leg, "score changed the result");
    apply_winner(&mut next, match_id, resolved);
    Ok(next)
}

/// Pick (or clear, with `None`) the winner of a match by participant id or
/// name.
///
/// # Errors
///
/// [`BracketError::ParticipantNotInMatch`] when `participant` names neither
/// slot of the match.
pub fn select_winner(
    snapshot: &BracketSnapshot,
    match_id: &MatchId,
    participant: Option<&str>,
) -> Result<BracketSnapshot> {
    let Some(m) = snapshot.find_match(match_id) else {
        warn!(%match_id, "ignoring winner for unknown match");
        return Ok(snapshot.clone());
    };

    let winner = match participant {
        None => None,
        Some(key) => Some(m.find_participant(key).cloned().ok_or_else(|| {
            BracketError::ParticipantNotInMatch {
                participant: key.to_string(),
                match_id: match_id.to_string(),
            }
        })?),
    };

    Ok(propagate(snapshot, match_id, winner))
}
