//! Bracket generation: shuffle the entrants, size the tree, hand out byes
//! and settle them as walkovers.

use crate::bracket::types::{
    round_name, BracketSnapshot, Match, MatchId, Participant, ParticipantId, Round, Slot,
};
use crate::error::{BracketError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, info};


const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// Split a newline-delimited name list, trimming entries and dropping blanks.
pub fn parse_names(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Number of rounds needed for `participants` entrants: `ceil(log2(n))`.
pub fn rounds_for(participants: usize) -> usize {
    participants.next_power_of_two().trailing_zeros() as usize
}

/// Build a fresh bracket from `names` using the thread-local RNG.
///
/// # Errors
///
/// Returns [`BracketError::InsufficientParticipants`] when fewer than two
/// non-blank names remain after trimming.
///
/// # Examples
///
/// ```rust
/// use bracket_draw::bracket::generate;
///
/// let bracket = generate(&["Ana", "Ben", "Cleo"]).unwrap();
/// assert_eq!(bracket.rounds.len(), 2);
/// assert!(bracket.third_place_match.is_some());
/// ```
pub fn generate<S: AsRef<str>>(names: &[S]) -> Result<BracketSnapshot> {
    generate_with_rng(names, &mut rand::thread_rng())
}

/// Same as [`generate`], drawing randomness from `rng`.
pub fn generate_with_rng<S, R>(names: &[S], rng: &mut R) -> Result<BracketSnapshot>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut participants = build_participants(names, rng);
    let count = participants.len();
    if count < 2 {
        return Err(BracketError::InsufficientParticipants { count });
    }

    participants.shuffle(rng);

    let num_rounds = rounds_for(count);
    let total_slots = 1usize << num_rounds;
    let num_byes = total_slots - count;

    let mut rounds = build_skeleton(num_rounds);
    seed_first_round(&mut rounds, participants, num_byes, rng);

    let third_place_match = (num_rounds >= 2).then(Match::third_place);

    info!(
        participants = count,
        rounds = num_rounds,
        byes = num_byes,
        "generated bracket"
    );

    Ok(BracketSnapshot {
        rounds,
        third_place_match,
    })
}

fn build_participants<S, R>(names: &[S], rng: &mut R) -> Vec<Participant>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut issued = HashSet::new();
    names
        .iter()
        .map(|name| name.as_ref().trim())
        .filter(|name| !name.is_empty())
        .map(|name| {
            let id = loop {
                let candidate = random_token(rng);
                if issued.insert(candidate.clone()) {
                    break candidate;
                }
            };
            Participant::new(ParticipantId::new(id), name)
        })
        .collect()
}

fn random_token<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Empty rounds from the first round to the final, each match linked to the
/// match its winner advances into.
fn build_skeleton(num_rounds: usize) -> Vec<Round> {
    (0..num_rounds)
        .map(|round| {
            let match_count = 1usize << (num_rounds - round - 1);
            let matches = (0..match_count)
                .map(|index| {
                    let mut m = Match::new(MatchId::new(round, index), round as i32, index);
                    if round + 1 < num_rounds {
                        m.next_match_id = Some(MatchId::new(round + 1, index / 2));
                        m.next_match_slot = Some(Slot::for_index(index));
                    }
                    m
                })
                .collect();
            Round {
                name: round_name(round, num_rounds, match_count),
                matches,
            }
        })
        .collect()
}

/// Fill the first round. `num_byes` matches get a single entrant, spread at
/// random, and are settled as walkovers straight away.
fn seed_first_round<R: Rng + ?Sized>(
    rounds: &mut [Round],
    participants: Vec<Participant>,
    num_byes: usize,
    rng: &mut R,
) {
    let Some((first, rest)) = rounds.split_first_mut() else {
        return;
    };

    let mut byes: Vec<bool> = (0..first.matches.len()).map(|i| i < num_byes).collect();
    byes.shuffle(rng);

    let mut entrants = participants.into_iter();
    for (m, is_bye) in first.matches.iter_mut().zip(byes) {
        m.p1 = entrants.next();
        if !is_bye {
            m.p2 = entrants.next();
        }
    }

    for m in first.matches.iter_mut().filter(|m| m.p2.is_none()) {
        m.winner = m.p1.clone();
        m.walkover = true;
        debug!(match_id = %m.id, "bye settled as walkover");

        // A single slot is filled downstream, so nothing further resolves.
        if let (Some(next), Some(slot)) = (rest.first_mut(), m.next_match_slot) {
            if let Some(target) = next.matches.get_mut(m.match_index / 2) {
                target.set_slot(slot, m.p1.clone());
            }
        }
    }
}
