//! Draw and redraw commands

use std::io::Read;
use std::path::Path;

use tracing::info;

use super::{common::load_tournament, common::print_tournament, resolve_tournament_id};
use crate::{
    bracket::{generate, parse_names},
    cli::types::TournamentId,
    storage::TournamentStore,
    Result,
};

/// Collect participant names from `-n` flags, a names file, or `input`
/// (stdin), in that order of preference. Blank entries are dropped.
pub fn collect_names<R: Read>(
    names: Option<Vec<String>>,
    names_file: Option<&Path>,
    mut input: R,
) -> Result<Vec<String>> {
    if let Some(names) = names {
        return Ok(names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(String::from)
            .collect());
    }

    let raw = match names_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            input.read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(parse_names(&raw))
}

/// Handle the draw command: build a fresh bracket and store it.
pub fn handle_draw(
    store: &mut TournamentStore,
    tournament_id: Option<TournamentId>,
    names: Vec<String>,
    as_json: bool,
) -> Result<()> {
    let tournament_id = resolve_tournament_id(tournament_id)?;

    let snapshot = generate(&names)?;
    store.save_tournament(&tournament_id, &names, &snapshot)?;
    info!(%tournament_id, participants = names.len(), "bracket drawn");

    let tournament = load_tournament(store, &tournament_id)?;
    print_tournament(&tournament, as_json)
}

/// Handle the redraw command: same names, new pairings, no results.
pub fn handle_redraw(
    store: &mut TournamentStore,
    tournament_id: Option<TournamentId>,
    as_json: bool,
) -> Result<()> {
    let tournament_id = resolve_tournament_id(tournament_id)?;
    let existing = load_tournament(store, &tournament_id)?;

    let snapshot = generate(&existing.names)?;
    store.save_tournament(&tournament_id, &existing.names, &snapshot)?;
    info!(%tournament_id, "bracket redrawn");

    let tournament = load_tournament(store, &tournament_id)?;
    print_tournament(&tournament, as_json)
}
