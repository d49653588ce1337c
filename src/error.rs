//! Error types for the bracket engine, store and CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, BracketError>;

#[derive(Error, Debug)]
pub enum BracketError {
    #[error("At least 2 participants are required, got {count}")]
    InsufficientParticipants { count: usize },

    #[error("Match {match_id} is single-leg and has no second leg")]
    SingleLegMatch { match_id: String },

    #[error("Match {match_id} was decided by walkover and takes no scores")]
    WalkoverMatch { match_id: String },

    #[error("Participant {participant} is not playing in match {match_id}")]
    ParticipantNotInMatch {
        participant: String,
        match_id: String,
    },

    #[error("Invalid slot: {value} (expected 1 or 2)")]
    InvalidSlot { value: String },

    #[error("Invalid leg: {value} (expected 1 or 2)")]
    InvalidLeg { value: String },

    #[error("Tournament ID not provided and {env_var} environment variable not set")]
    MissingTournamentId { env_var: String },

    #[error("Match {match_id} does not exist in this bracket")]
    MatchNotFound { match_id: String },

    #[error("Tournament not found: {tournament_id}")]
    TournamentNotFound { tournament_id: String },

    #[error("Invalid tournament ID: {value:?}")]
    InvalidTournamentId { value: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl From<anyhow::Error> for BracketError {
    fn from(err: anyhow::Error) -> Self {
        BracketError::Storage {
            message: err.to_string(),
        }
    }
}
