//! Bracket engine
//!
//! - `types`: Data model shared by every stage
//! - `generate`: Draw a balanced bracket with byes and a bronze match
//! - `resolve`: Decide a match from its scores
//! - `propagate`: Push a result forward and invalidate stale matches
//! - `edit`: Score-entry and manual-winner events
//! - `standings`: Podium and tournament status

pub mod edit;
pub mod generate;
pub mod propagate;
pub mod resolve;
pub mod standings;
pub mod types;

pub use edit::{apply_score, select_winner};
pub use generate::{generate, generate_with_rng, parse_names};
pub use propagate::propagate;
pub use resolve::resolve_winner;
pub use standings::{Standings, TournamentStatus};
pub use types::*;
