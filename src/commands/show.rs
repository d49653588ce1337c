//! Show, list and delete commands

use super::{common::load_tournament, common::print_tournament, resolve_tournament_id};
use crate::{cli::types::TournamentId, storage::TournamentStore, BracketError, Result};

/// Handle the show command
pub fn handle_show(
    store: &TournamentStore,
    tournament_id: Option<TournamentId>,
    as_json: bool,
) -> Result<()> {
    let tournament_id = resolve_tournament_id(tournament_id)?;
    let tournament = load_tournament(store, &tournament_id)?;
    print_tournament(&tournament, as_json)
}

/// Handle the list command
pub fn handle_list(store: &TournamentStore, as_json: bool) -> Result<()> {
    let summaries = store.list_tournaments()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No tournaments stored.");
        return Ok(());
    }

    for t in &summaries {
        let champion = t
            .champion
            .as_deref()
            .map(|name| format!("  champion: {}", name))
            .unwrap_or_default();
        println!(
            "{:<24} {:>3} players  {}{}",
            t.tournament_id.as_str(),
            t.participants,
            t.status,
            champion
        );
    }
    Ok(())
}

/// Handle the delete command
pub fn handle_delete(store: &mut TournamentStore, tournament_id: Option<TournamentId>) -> Result<()> {
    let tournament_id = resolve_tournament_id(tournament_id)?;
    if !store.delete_tournament(&tournament_id)? {
        return Err(BracketError::TournamentNotFound {
            tournament_id: tournament_id.to_string(),
        });
    }
    println!("✓ Deleted tournament {}", tournament_id);
    Ok(())
}
