//! Winner resolution from entered scores.

use crate::bracket::types::{Match, Participant};
use std::cmp::Ordering;


/// Decide a match from its scores.
///
/// Returns `None` while either slot is empty, while any score the rule needs
/// is missing or not a number, and on a level score. Single-leg matches use
/// the first-leg pair; two-leg matches compare aggregates over both legs and
/// require all four fields. A missing leg never counts as zero.
///
/// # Examples
///
/// ```rust
/// use bracket_draw::bracket::{resolve_winner, Match, MatchId, Participant, ParticipantId, Score};
///
/// let mut m = Match::new(MatchId::new(0, 0), 0, 0);
/// m.p1 = Some(Participant::new(ParticipantId::new("a"), "Ana"));
/// m.p2 = Some(Participant::new(ParticipantId::new("b"), "Ben"));
/// m.score1 = Score::Value(3);
/// m.score2 = Score::Value(3);
/// assert!(resolve_winner(&m, true).is_none());
/// ```
pub fn resolve_winner(m: &Match, single_leg: bool) -> Option<Participant> {
    let (p1, p2) = (m.p1.as_ref()?, m.p2.as_ref()?);

    let (total1, total2) = if single_leg {
        (u64::from(m.score1.value()?), u64::from(m.score2.value()?))
    } else {
        (
            u64::from(m.score1.value()?) + u64::from(m.score1_2.value()?),
            u64::from(m.score2.value()?) + u64::from(m.score2_2.value()?),
        )
    };

    match total1.cmp(&total2) {
        Ordering::Greater => Some(p1.clone()),
        Ordering::Less => Some(p2.clone()),
        Ordering::Equal => None,
    }
}
