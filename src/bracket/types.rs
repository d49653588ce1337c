//! Bracket data model: participants, matches, rounds and the snapshot that
//! carries them between the generator, the propagation engine and the store.

use crate::error::BracketError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;


/// Id of the bronze match, which lives outside the round sequence.
pub const THIRD_PLACE_MATCH_ID: &str = "third-place";

/// Round index carried by the third-place match.
pub const THIRD_PLACE_ROUND_INDEX: i32 = -1;

/// Opaque participant identity, unique within one draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named entrant. Created once per draw and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Whether `key` names this participant, either by id or by
    /// case-insensitive name.
    pub fn matches_key(&self, key: &str) -> bool {
        let key = key.trim();
        self.id.as_str() == key || self.name.to_lowercase() == key.to_lowercase()
    }
}

/// Compare two optional participants by id. Two empty slots are the same.
pub fn same_participant(a: Option<&Participant>, b: Option<&Participant>) -> bool {
    a.map(|p| &p.id) == b.map(|p| &p.id)
}

/// Stable match key: `r{round}-m{index}` or `third-place`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    pub fn new(round: usize, index: usize) -> Self {
        Self(format!("r{}-m{}", round, index))
    }

    pub fn third_place() -> Self {
        Self(THIRD_PLACE_MATCH_ID.to_string())
    }

    pub fn is_third_place(&self) -> bool {
        self.0 == THIRD_PLACE_MATCH_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MatchId {
    fn from(s: &str) -> Self {
        Self(s.trim().to_string())
    }
}

impl From<String> for MatchId {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the two participant slots of a match.
///
/// Serialized as the numbers `1` and `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Slot {
    One,
    Two,
}

impl Slot {
    /// Slot fed by the match at `index` in the previous round: even
    /// indices feed slot one, odd indices slot two.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Slot::One
        } else {
            Slot::Two
        }
    }

    pub fn other(self) -> Self {
        match self {
            Slot::One => Slot::Two,
            Slot::Two => Slot::One,
        }
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::One => 1,
            Slot::Two => 2,
        }
    }
}

impl TryFrom<u8> for Slot {
    type Error = BracketError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Slot::One),
            2 => Ok(Slot::Two),
            _ => Err(BracketError::InvalidSlot {
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for Slot {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Slot::One),
            "2" => Ok(Slot::Two),
            other => Err(BracketError::InvalidSlot {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Home (first) or away (second) leg of a two-leg tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Leg {
    #[default]
    First,
    Second,
}

impl FromStr for Leg {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Leg::First),
            "2" => Ok(Leg::Second),
            other => Err(BracketError::InvalidLeg {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leg::First => write!(f, "1"),
            Leg::Second => write!(f, "2"),
        }
    }
}

/// A score field as typed by the user.
///
/// "Not entered yet" is distinct from zero, and text that is not a
/// non-negative integer is kept verbatim so it can be shown back. On the wire
/// the score is a string, `""` when empty. Numbers are written back in
/// canonical form, so `"007"` comes back as `"7"`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Score {
    #[default]
    Empty,
    Invalid(String),
    Value(u32),
}

impl Score {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Score::Empty;
        }
        match trimmed.parse::<u32>() {
            Ok(value) => Score::Value(value),
            Err(_) => Score::Invalid(raw.to_string()),
        }
    }

    /// The numeric value, if one was entered and parses.
    pub fn value(&self) -> Option<u32> {
        match self {
            Score::Value(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Score::Empty)
    }
}

impl From<String> for Score {
    fn from(raw: String) -> Self {
        Score::parse(&raw)
    }
}

impl From<Score> for String {
    fn from(score: Score) -> Self {
        score.to_string()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Empty => Ok(()),
            Score::Invalid(raw) => f.write_str(raw),
            Score::Value(v) => write!(f, "{}", v),
        }
    }
}

/// A single match in the bracket tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    #[serde(rename = "roundIndex")]
    pub round_index: i32,
    #[serde(rename = "matchIndex")]
    pub match_index: usize,
    pub p1: Option<Participant>,
    pub p2: Option<Participant>,
    #[serde(default)]
    pub score1: Score,
    #[serde(default)]
    pub score2: Score,
    /// Second-leg score of `p1`; unused on single-leg matches.
    #[serde(default)]
    pub score1_2: Score,
    /// Second-leg score of `p2`; unused on single-leg matches.
    #[serde(default)]
    pub score2_2: Score,
    pub winner: Option<Participant>,
    #[serde(rename = "nextMatchId")]
    pub next_match_id: Option<MatchId>,
    #[serde(rename = "nextMatchSlot")]
    pub next_match_slot: Option<Slot>,
    /// Set on first-round byes resolved at draw time.
    #[serde(default)]
    pub walkover: bool,
}

impl Match {
    /// An empty, undecided match with no downstream link.
    pub fn new(id: MatchId, round_index: i32, match_index: usize) -> Self {
        Self {
            id,
            round_index,
            match_index,
            p1: None,
            p2: None,
            score1: Score::Empty,
            score2: Score::Empty,
            score1_2: Score::Empty,
            score2_2: Score::Empty,
            winner: None,
            next_match_id: None,
            next_match_slot: None,
            walkover: false,
        }
    }

    pub fn third_place() -> Self {
        Self::new(MatchId::third_place(), THIRD_PLACE_ROUND_INDEX, 0)
    }

    pub fn slot(&self, slot: Slot) -> Option<&Participant> {
        match slot {
            Slot::One => self.p1.as_ref(),
            Slot::Two => self.p2.as_ref(),
        }
    }

    pub fn set_slot(&mut self, slot: Slot, participant: Option<Participant>) {
        match slot {
            Slot::One => self.p1 = participant,
            Slot::Two => self.p2 = participant,
        }
    }

    pub fn score(&self, slot: Slot, leg: Leg) -> &Score {
        match (slot, leg) {
            (Slot::One, Leg::First) => &self.score1,
            (Slot::Two, Leg::First) => &self.score2,
            (Slot::One, Leg::Second) => &self.score1_2,
            (Slot::Two, Leg::Second) => &self.score2_2,
        }
    }

    pub fn score_mut(&mut self, slot: Slot, leg: Leg) -> &mut Score {
        match (slot, leg) {
            (Slot::One, Leg::First) => &mut self.score1,
            (Slot::Two, Leg::First) => &mut self.score2,
            (Slot::One, Leg::Second) => &mut self.score1_2,
            (Slot::Two, Leg::Second) => &mut self.score2_2,
        }
    }

    /// Clear the decision: winner and all four score fields.
    pub fn reset_result(&mut self) {
        self.winner = None;
        self.score1 = Score::Empty;
        self.score2 = Score::Empty;
        self.score1_2 = Score::Empty;
        self.score2_2 = Score::Empty;
    }

    /// Slot holding the participant with `id`, if any.
    pub fn slot_of(&self, id: &ParticipantId) -> Option<Slot> {
        if self.p1.as_ref().is_some_and(|p| &p.id == id) {
            Some(Slot::One)
        } else if self.p2.as_ref().is_some_and(|p| &p.id == id) {
            Some(Slot::Two)
        } else {
            None
        }
    }

    /// Whether `winner` is an acceptable result: undecided, or one of the
    /// two participants.
    pub fn admits(&self, winner: Option<&Participant>) -> bool {
        winner.map_or(true, |w| self.slot_of(&w.id).is_some())
    }

    /// The other participant once a winner is decided.
    pub fn loser(&self) -> Option<&Participant> {
        let winner = self.winner.as_ref()?;
        let winner_slot = self.slot_of(&winner.id)?;
        self.slot(winner_slot.other())
    }

    /// Look a participant of this match up by id or name.
    pub fn find_participant(&self, key: &str) -> Option<&Participant> {
        [self.p1.as_ref(), self.p2.as_ref()]
            .into_iter()
            .flatten()
            .find(|p| p.matches_key(key))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub name: String,
    pub matches: Vec<Match>,
}

/// Display name of round `round` out of `num_rounds`.
pub fn round_name(round: usize, num_rounds: usize, match_count: usize) -> String {
    match num_rounds - round {
        1 => "Final".to_string(),
        2 => "Semi-Final".to_string(),
        3 => "Quarter-Final".to_string(),
        _ => format!("Round of {}", match_count * 2),
    }
}

/// Position of a match inside a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchLocation {
    Round { round: usize, index: usize },
    ThirdPlace,
}

/// Complete bracket state handed between the engine and its callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketSnapshot {
    pub rounds: Vec<Round>,
    #[serde(rename = "thirdPlaceMatch")]
    pub third_place_match: Option<Match>,
}

impl BracketSnapshot {
    pub fn locate(&self, id: &MatchId) -> Option<MatchLocation> {
        if id.is_third_place() {
            return self
                .third_place_match
                .as_ref()
                .map(|_| MatchLocation::ThirdPlace);
        }
        self.rounds.iter().enumerate().find_map(|(round, r)| {
            r.matches
                .iter()
                .position(|m| &m.id == id)
                .map(|index| MatchLocation::Round { round, index })
        })
    }

    pub fn find_match(&self, id: &MatchId) -> Option<&Match> {
        match self.locate(id)? {
            MatchLocation::Round { round, index } => self.rounds[round].matches.get(index),
            MatchLocation::ThirdPlace => self.third_place_match.as_ref(),
        }
    }

    pub fn find_match_mut(&mut self, id: &MatchId) -> Option<&mut Match> {
        match self.locate(id)? {
            MatchLocation::Round { round, index } => self.rounds[round].matches.get_mut(index),
            MatchLocation::ThirdPlace => self.third_place_match.as_mut(),
        }
    }

    pub fn final_match(&self) -> Option<&Match> {
        self.rounds.last()?.matches.first()
    }

    /// Index of the semifinal round, when the bracket has one.
    pub fn semifinal_round(&self) -> Option<usize> {
        self.rounds.len().checked_sub(2)
    }

    /// The final and the bronze match are played over a single leg; every
    /// other match is a two-leg tie.
    pub fn is_single_leg(&self, id: &MatchId) -> bool {
        match self.locate(id) {
            Some(MatchLocation::ThirdPlace) => true,
            Some(MatchLocation::Round { round, .. }) => round + 1 == self.rounds.len(),
            None => false,
        }
    }

    /// Every participant of the draw, in first-round order.
    pub fn participants(&self) -> Vec<&Participant> {
        self.rounds
            .first()
            .map(|r| {
                r.matches
                    .iter()
                    .flat_map(|m| [m.p1.as_ref(), m.p2.as_ref()])
                    .flatten()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All matches, round by round, followed by the third-place match.
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.rounds
            .iter()
            .flat_map(|r| r.matches.iter())
            .chain(self.third_place_match.iter())
    }
}
