//! Command implementations for the bracket-draw CLI

pub mod common;
pub mod draw;
pub mod results;
pub mod show;


use crate::{cli::types::TournamentId, BracketError, Result, TOURNAMENT_ID_ENV_VAR};

/// Resolve the tournament ID from the CLI option or the environment.
pub fn resolve_tournament_id(tournament_id: Option<TournamentId>) -> Result<TournamentId> {
    tournament_id
        .or_else(|| {
            std::env::var(TOURNAMENT_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<TournamentId>().ok())
        })
        .ok_or_else(|| BracketError::MissingTournamentId {
            env_var: TOURNAMENT_ID_ENV_VAR.to_string(),
        })
}
