//! Tournament query operations

use super::{models::*, schema::TournamentStore};
use crate::bracket::BracketSnapshot;
use crate::cli::types::TournamentId;
use anyhow::Result;
use rusqlite::{params, types::Type, Row};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

impl TournamentStore {
    /// Insert or replace a tournament's entry list and snapshot.
    /// `created_at` survives a replace (e.g. a redraw).
    pub fn save_tournament(
        &mut self,
        tournament_id: &TournamentId,
        names: &[String],
        snapshot: &BracketSnapshot,
    ) -> Result<()> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let names_json = serde_json::to_string(names)?;
        let snapshot_json = serde_json::to_string(snapshot)?;

        self.conn.execute(
            "INSERT OR REPLACE INTO tournaments
             (tournament_id, names, snapshot, created_at, updated_at)
             VALUES (?, ?, ?,
                     COALESCE((SELECT created_at FROM tournaments
                              WHERE tournament_id = ?), ?), ?)",
            params![
                tournament_id.as_str(),
                names_json,
                snapshot_json,
                tournament_id.as_str(),
                now,
                now
            ],
        )?;

        debug!(%tournament_id, "tournament saved");
        Ok(())
    }

    /// Replace only the snapshot of an existing tournament.
    /// Returns false when no such tournament is stored.
    pub fn update_snapshot(
        &mut self,
        tournament_id: &TournamentId,
        snapshot: &BracketSnapshot,
    ) -> Result<bool> {
        let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let snapshot_json = serde_json::to_string(snapshot)?;

        let rows_affected = self.conn.execute(
            "UPDATE tournaments SET snapshot = ?, updated_at = ?
             WHERE tournament_id = ?",
            params![snapshot_json, now, tournament_id.as_str()],
        )?;

        Ok(rows_affected > 0)
    }

    /// Load a tournament by id
    pub fn get_tournament(&self, tournament_id: &TournamentId) -> Result<Option<StoredTournament>> {
        let mut stmt = self.conn.prepare(
            "SELECT tournament_id, names, snapshot, created_at, updated_at
             FROM tournaments
             WHERE tournament_id = ?",
        )?;

        let result = stmt.query_row(params![tournament_id.as_str()], Self::row_to_tournament);

        match result {
            Ok(tournament) => Ok(Some(tournament)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Summaries of every stored tournament, most recently updated first
    pub fn list_tournaments(&self) -> Result<Vec<TournamentSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT tournament_id, names, snapshot, created_at, updated_at
             FROM tournaments
             ORDER BY updated_at DESC, tournament_id ASC",
        )?;

        let rows = stmt.query_map([], Self::row_to_tournament)?;

        let mut summaries = Vec::new();
        for row in rows {
            summaries.push(TournamentSummary::from(&row?));
        }
        Ok(summaries)
    }

    /// Remove a tournament. Returns false if it did not exist.
    pub fn delete_tournament(&mut self, tournament_id: &TournamentId) -> Result<bool> {
        let rows_affected = self.conn.execute(
            "DELETE FROM tournaments WHERE tournament_id = ?",
            params![tournament_id.as_str()],
        )?;
        Ok(rows_affected > 0)
    }

    /// Clear all stored tournaments
    pub fn clear_all_data(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM tournaments", [])?;
        Ok(())
    }

    /// Helper to convert database row to StoredTournament
    pub(crate) fn row_to_tournament(row: &Row) -> rusqlite::Result<StoredTournament> {
        let id: String = row.get(0)?;
        let names_json: String = row.get(1)?;
        let snapshot_json: String = row.get(2)?;

        let tournament_id = TournamentId::new(id)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;
        let names = serde_json::from_str(&names_json)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?;
        let snapshot = serde_json::from_str(&snapshot_json)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

        Ok(StoredTournament {
            tournament_id,
            names,
            snapshot,
            created_at: row.get(3)?,
            updated_at: row.get(4)?,
        })
    }
}
