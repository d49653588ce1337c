//! Score entry and manual winner commands

use tracing::info;

use super::{common::load_tournament, common::print_tournament, resolve_tournament_id};
use crate::{
    bracket::{apply_score, select_winner, BracketSnapshot, Leg, MatchId, Slot},
    cli::types::TournamentId,
    storage::TournamentStore,
    BracketError, Result,
};

/// Parameters for the score command
#[derive(Debug)]
pub struct ScoreParams {
    pub tournament_id: Option<TournamentId>,
    pub match_id: MatchId,
    pub slot: Slot,
    pub leg: Leg,
    pub value: String,
    pub as_json: bool,
}

/// Parameters for the winner command. `participant: None` clears the winner.
#[derive(Debug)]
pub struct WinnerParams {
    pub tournament_id: Option<TournamentId>,
    pub match_id: MatchId,
    pub participant: Option<String>,
    pub as_json: bool,
}

/// Handle the score command
pub fn handle_score(store: &mut TournamentStore, params: ScoreParams) -> Result<()> {
    let tournament_id = resolve_tournament_id(params.tournament_id)?;
    let tournament = load_tournament(store, &tournament_id)?;
    ensure_match(&tournament.snapshot, &params.match_id)?;

    let snapshot = apply_score(
        &tournament.snapshot,
        &params.match_id,
        params.slot,
        params.leg,
        &params.value,
    )?;
    store.update_snapshot(&tournament_id, &snapshot)?;
    info!(
        %tournament_id,
        match_id = %params.match_id,
        slot = %params.slot,
        leg = %params.leg,
        "score recorded"
    );

    let tournament = load_tournament(store, &tournament_id)?;
    print_tournament(&tournament, params.as_json)
}

/// Handle the winner command
pub fn handle_winner(store: &mut TournamentStore, params: WinnerParams) -> Result<()> {
    let tournament_id = resolve_tournament_id(params.tournament_id)?;
    let tournament = load_tournament(store, &tournament_id)?;
    ensure_match(&tournament.snapshot, &params.match_id)?;

    let snapshot = select_winner(
        &tournament.snapshot,
        &params.match_id,
        params.participant.as_deref(),
    )?;
    store.update_snapshot(&tournament_id, &snapshot)?;
    info!(%tournament_id, match_id = %params.match_id, "winner recorded");

    let tournament = load_tournament(store, &tournament_id)?;
    print_tournament(&tournament, params.as_json)
}

/// The engine ignores unknown ids; at the command line they are a typo worth
/// reporting.
fn ensure_match(snapshot: &BracketSnapshot, match_id: &MatchId) -> Result<()> {
    if snapshot.find_match(match_id).is_none() {
        return Err(BracketError::MatchNotFound {
            match_id: match_id.to_string(),
        });
    }
    Ok(())
}
