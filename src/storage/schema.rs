//! Database schema and connection management

use crate::error::BracketError;
use crate::DATABASE_PATH_ENV_VAR;
use anyhow::Result;
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Database connection manager for tournament snapshots
pub struct TournamentStore {
    pub(crate) conn: Connection,
}

impl TournamentStore {
    /// Open the default database and ensure tables exist
    pub fn new() -> Result<Self> {
        let db_path = Self::database_path()?;
        Self::open(&db_path)
    }

    /// Open (or create) a database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        debug!(path = %path.display(), "opening tournament store");
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Throwaway in-memory database
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Get the path to the database file.
    ///
    /// `BRACKET_DRAW_DB` overrides the default location under the user's
    /// data directory.
    pub fn database_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(DATABASE_PATH_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        let data_dir = data_dir().ok_or_else(|| BracketError::Storage {
            message: "Could not determine data directory".to_string(),
        })?;
        Ok(data_dir.join("bracket-draw").join("tournaments.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS tournaments (
                tournament_id TEXT PRIMARY KEY,
                names TEXT NOT NULL,
                snapshot TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_tournaments_updated
             ON tournaments(updated_at)",
            [],
        )?;

        Ok(())
    }
}
