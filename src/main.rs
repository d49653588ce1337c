//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use bracket_draw::{
    cli::{BracketDraw, Commands},
    commands::{
        draw::{collect_names, handle_draw, handle_redraw},
        results::{handle_score, handle_winner, ScoreParams, WinnerParams},
        show::{handle_delete, handle_list, handle_show},
    },
    storage::TournamentStore,
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = BracketDraw::parse();
    init_logging(app.verbose);

    let mut store = TournamentStore::new().context("failed to open tournament database")?;

    match app.command {
        Commands::Draw {
            target,
            names,
            names_file,
            json,
        } => {
            let names = collect_names(names, names_file.as_deref(), std::io::stdin().lock())?;
            handle_draw(&mut store, target.tournament, names, json)?
        }

        Commands::Redraw { target, json } => handle_redraw(&mut store, target.tournament, json)?,

        Commands::Score {
            target,
            match_id,
            slot,
            leg,
            value,
            json,
        } => handle_score(
            &mut store,
            ScoreParams {
                tournament_id: target.tournament,
                match_id,
                slot,
                leg,
                value,
                as_json: json,
            },
        )?,

        Commands::Winner {
            target,
            match_id,
            participant,
            clear,
            json,
        } => handle_winner(
            &mut store,
            WinnerParams {
                tournament_id: target.tournament,
                match_id,
                participant: if clear { None } else { participant },
                as_json: json,
            },
        )?,

        Commands::Show { target, json } => handle_show(&store, target.tournament, json)?,

        Commands::List { json } => handle_list(&store, json)?,

        Commands::Delete { target } => handle_delete(&mut store, target.tournament)?,
    }

    Ok(())
}

/// Logs go to stderr so `--json` output stays clean. `RUST_LOG` wins over
/// `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
