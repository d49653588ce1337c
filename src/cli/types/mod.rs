//! Type-safe wrappers for CLI arguments.

pub mod ids;

pub use ids::TournamentId;
