//! Identifier types for stored tournaments.

use crate::error::{BracketError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;


/// Caller-assigned key a tournament is stored under.
///
/// Letters, digits, `-`, `_` and `.` only, so the id is safe to pass around
/// in shells and file names.
///
/// # Examples
///
/// ```rust
/// use bracket_draw::TournamentId;
///
/// let id: TournamentId = "spring-cup".parse().unwrap();
/// assert_eq!(id.as_str(), "spring-cup");
/// assert!("spring cup".parse::<TournamentId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TournamentId(String);

impl TournamentId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if valid {
            Ok(Self(id))
        } else {
            Err(BracketError::InvalidTournamentId { value: id })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TournamentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TournamentId {
    type Error = BracketError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<TournamentId> for String {
    fn from(id: TournamentId) -> Self {
        id.0
    }
}

impl FromStr for TournamentId {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.trim())
    }
}
