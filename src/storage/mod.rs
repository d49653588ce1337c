//! Storage layer for tournament snapshots
//!
//! Each tournament is one row keyed by its id, holding the entry list and the
//! bracket snapshot as JSON:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Save, load, list and delete operations

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and store struct for easy access
pub use models::*;
pub use schema::TournamentStore;
