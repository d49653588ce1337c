//! Data models for the storage layer

use crate::bracket::{BracketSnapshot, Standings, TournamentStatus};
use crate::cli::types::TournamentId;
use serde::{Deserialize, Serialize};

/// A tournament as persisted: the entry list it was drawn from and the
/// current bracket snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTournament {
    pub tournament_id: TournamentId,
    /// Names as entered, kept so the bracket can be redrawn.
    pub names: Vec<String>,
    pub snapshot: BracketSnapshot,
    pub created_at: u64,
    pub updated_at: u64,
}

impl StoredTournament {
    pub fn status(&self) -> TournamentStatus {
        TournamentStatus::of(&self.snapshot)
    }

    pub fn standings(&self) -> Standings {
        Standings::from_snapshot(&self.snapshot)
    }
}

/// One line of the tournament listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub tournament_id: TournamentId,
    pub participants: usize,
    pub status: TournamentStatus,
    pub champion: Option<String>,
    pub updated_at: u64,
}

impl From<&StoredTournament> for TournamentSummary {
    fn from(t: &StoredTournament) -> Self {
        Self {
            tournament_id: t.tournament_id.clone(),
            participants: t.snapshot.participants().len(),
            status: t.status(),
            champion: t.standings().champion.map(|p| p.name),
            updated_at: t.updated_at,
        }
    }
}
