//! Podium and tournament status derived from a snapshot.

use crate::bracket::types::{BracketSnapshot, Participant};
use serde::{Deserialize, Serialize};
use std::fmt;


/// Lifecycle of a tournament as seen from its bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentStatus {
    Setup,
    Active,
    Finished,
}

impl TournamentStatus {
    /// `Setup` before a draw, `Finished` once the final is decided.
    pub fn of(snapshot: &BracketSnapshot) -> Self {
        match snapshot.final_match() {
            None => TournamentStatus::Setup,
            Some(m) if m.winner.is_some() => TournamentStatus::Finished,
            Some(_) => TournamentStatus::Active,
        }
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TournamentStatus::Setup => write!(f, "setup"),
            TournamentStatus::Active => write!(f, "active"),
            TournamentStatus::Finished => write!(f, "finished"),
        }
    }
}

/// Medal positions decided so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub champion: Option<Participant>,
    #[serde(rename = "runnerUp")]
    pub runner_up: Option<Participant>,
    #[serde(rename = "thirdPlace")]
    pub third_place: Option<Participant>,
}

impl Standings {
    pub fn from_snapshot(snapshot: &BracketSnapshot) -> Self {
        let final_match = snapshot.final_match();
        Self {
            champion: final_match.and_then(|m| m.winner.clone()),
            runner_up: final_match.and_then(|m| m.loser().cloned()),
            third_place: snapshot
                .third_place_match
                .as_ref()
                .and_then(|m| m.winner.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.champion.is_none() && self.runner_up.is_none() && self.third_place.is_none()
    }
}
