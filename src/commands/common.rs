//! Common helpers shared across commands: loading tournaments and rendering
//! a bracket as text.

use std::fmt::Write as _;

use crate::{
    bracket::{BracketSnapshot, Leg, Match, Participant, Slot, Standings},
    cli::types::TournamentId,
    storage::{StoredTournament, TournamentStore},
    BracketError, Result,
};

const TBD: &str = "TBD";

/// Load a stored tournament, failing when it does not exist.
pub fn load_tournament(
    store: &TournamentStore,
    tournament_id: &TournamentId,
) -> Result<StoredTournament> {
    store
        .get_tournament(tournament_id)?
        .ok_or_else(|| BracketError::TournamentNotFound {
            tournament_id: tournament_id.to_string(),
        })
}

/// Print a tournament either as its snapshot JSON or as a text listing.
pub fn print_tournament(tournament: &StoredTournament, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&tournament.snapshot)?);
    } else {
        print!("{}", render_tournament(tournament));
    }
    Ok(())
}

/// Text listing of every round, the bronze match and the podium.
pub fn render_tournament(tournament: &StoredTournament) -> String {
    let mut out = String::new();
    let total = tournament.snapshot.matches().count();
    let decided = tournament
        .snapshot
        .matches()
        .filter(|m| m.winner.is_some())
        .count();
    let _ = writeln!(
        out,
        "Tournament {} ({}, {}/{} matches decided)",
        tournament.tournament_id,
        tournament.status(),
        decided,
        total
    );
    out.push_str(&render_bracket(&tournament.snapshot));

    let standings = tournament.standings();
    if !standings.is_empty() {
        out.push('\n');
        out.push_str(&render_standings(&standings));
    }
    out
}

pub fn render_bracket(snapshot: &BracketSnapshot) -> String {
    let mut out = String::new();
    for round in &snapshot.rounds {
        let _ = writeln!(out, "\n{}", round.name);
        for m in &round.matches {
            let single_leg = snapshot.is_single_leg(&m.id);
            let _ = writeln!(out, "  {}", render_match(m, single_leg));
        }
    }
    if let Some(bronze) = &snapshot.third_place_match {
        let _ = writeln!(out, "\nThird Place");
        let _ = writeln!(out, "  {}", render_match(bronze, true));
    }
    out
}

/// One line per match: `id  p1 [scores] vs p2 [scores]  -> winner`.
pub fn render_match(m: &Match, single_leg: bool) -> String {
    if m.walkover {
        return format!("{:<12} {} (walkover)", m.id.as_str(), name_or_tbd(m.p1.as_ref()));
    }

    let mut line = format!(
        "{:<12} {}{} vs {}{}",
        m.id.as_str(),
        name_or_tbd(m.p1.as_ref()),
        render_scores(m, Slot::One, single_leg),
        name_or_tbd(m.p2.as_ref()),
        render_scores(m, Slot::Two, single_leg),
    );
    if let Some(winner) = &m.winner {
        let _ = write!(line, "  -> {}", winner.name);
    }
    line
}

fn render_scores(m: &Match, slot: Slot, single_leg: bool) -> String {
    let first = m.score(slot, Leg::First);
    if single_leg {
        return if first.is_empty() {
            String::new()
        } else {
            format!(" [{}]", first)
        };
    }

    let second = m.score(slot, Leg::Second);
    if first.is_empty() && second.is_empty() {
        return String::new();
    }
    match (first.value(), second.value()) {
        (Some(a), Some(b)) => format!(" [{}+{}={}]", a, b, u64::from(a) + u64::from(b)),
        _ => format!(" [{}|{}]", first, second),
    }
}

pub fn render_standings(standings: &Standings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Champion:    {}", name_or_tbd(standings.champion.as_ref()));
    let _ = writeln!(out, "Runner-up:   {}", name_or_tbd(standings.runner_up.as_ref()));
    let _ = writeln!(out, "Third place: {}", name_or_tbd(standings.third_place.as_ref()));
    out
}

fn name_or_tbd(participant: Option<&Participant>) -> &str {
    participant.map_or(TBD, |p| p.name.as_str())
}
