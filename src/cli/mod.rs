//! CLI argument definitions and parsing.

pub mod types;

use crate::bracket::{Leg, MatchId, Slot};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::TournamentId;

/// Tournament selection shared between commands
#[derive(Debug, Args)]
pub struct TournamentArg {
    /// Tournament ID (or set `BRACKET_DRAW_TOURNAMENT_ID` env var).
    #[clap(long, short)]
    pub tournament: Option<TournamentId>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Draw a new bracket and store it under the tournament ID.
    ///
    /// Names come from `-n` flags, from `--names-file`, or one per line on
    /// stdin. Blank lines are ignored; at least two names are required.
    Draw {
        #[clap(flatten)]
        target: TournamentArg,

        /// Participant name (repeatable): `-n Ana -n Ben`.
        #[clap(long = "name", short = 'n')]
        names: Option<Vec<String>>,

        /// File with one participant name per line.
        #[clap(long, conflicts_with = "names")]
        names_file: Option<PathBuf>,

        /// Print the new bracket as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Redraw with the same names, discarding every result.
    Redraw {
        #[clap(flatten)]
        target: TournamentArg,

        /// Print the new bracket as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Enter a score and re-decide the match.
    Score {
        #[clap(flatten)]
        target: TournamentArg,

        /// Match ID, e.g. `r0-m3`, `r2-m0` or `third-place`.
        #[clap(long = "match", short = 'm')]
        match_id: MatchId,

        /// Participant slot: 1 or 2.
        #[clap(long)]
        slot: Slot,

        /// Leg: 1 (home) or 2 (away). The final and third-place match have one leg.
        #[clap(long, default_value_t = Leg::First)]
        leg: Leg,

        /// Score as typed; pass "" to clear it.
        #[clap(allow_hyphen_values = true)]
        value: String,

        /// Print the updated bracket as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Pick the winner of a match by hand, or clear it.
    Winner {
        #[clap(flatten)]
        target: TournamentArg,

        /// Match ID, e.g. `r0-m3`, `r2-m0` or `third-place`.
        #[clap(long = "match", short = 'm')]
        match_id: MatchId,

        /// Winner by participant ID or name.
        #[clap(long, short, required_unless_present = "clear")]
        participant: Option<String>,

        /// Clear the winner instead.
        #[clap(long, conflicts_with = "participant")]
        clear: bool,

        /// Print the updated bracket as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// Show a stored bracket with its standings.
    Show {
        #[clap(flatten)]
        target: TournamentArg,

        /// Output the snapshot as JSON instead of text.
        #[clap(long)]
        json: bool,
    },

    /// List stored tournaments.
    List {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Delete a stored tournament.
    Delete {
        #[clap(flatten)]
        target: TournamentArg,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "bracket-draw",
    about = "Single-elimination bracket draw and live results tracker"
)]
pub struct BracketDraw {
    /// Log engine decisions to stderr (same as `RUST_LOG=debug`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
