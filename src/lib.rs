//! Single-elimination bracket draw and live results tracker
//!
//! Draws a randomized knockout bracket from a list of names, tracks scores as
//! they come in and moves winners forward. Results entered late or changed
//! after the fact invalidate everything downstream that depended on them.
//!
//! ## Features
//!
//! - **Random Draw**: Shuffled pairings padded with byes up to a power of two
//! - **Two-Leg Ties**: Aggregate scoring for early rounds, single leg for the final
//! - **Third-Place Match**: Fed by the losing semifinalists
//! - **Consistent Edits**: Changing a result re-validates every later round
//! - **Database Storage**: Tournaments persisted locally in SQLite
//!
//! ## Quick Start
//!
//! ```rust
//! use bracket_draw::bracket::{generate, propagate, Standings};
//!
//! # fn example() -> bracket_draw::Result<()> {
//! let snapshot = generate(&["Ana", "Ben"])?;
//! let final_match = snapshot.final_match().unwrap();
//! let ana = final_match.p1.clone();
//!
//! let decided = propagate(&snapshot, &final_match.id, ana.clone());
//! assert_eq!(Standings::from_snapshot(&decided).champion, ana);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Set the tournament ID to avoid passing it in every command:
//! ```bash
//! export BRACKET_DRAW_TOURNAMENT_ID=club-cup
//! ```

pub mod bracket;
pub mod cli;
pub mod commands;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use bracket::{BracketSnapshot, Match, MatchId, Participant, ParticipantId, Score};
pub use cli::types::TournamentId;
pub use error::{BracketError, Result};

pub const TOURNAMENT_ID_ENV_VAR: &str = "BRACKET_DRAW_TOURNAMENT_ID";
pub const DATABASE_PATH_ENV_VAR: &str = "BRACKET_DRAW_DB";
