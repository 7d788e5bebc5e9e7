//! SQLite storage layer for the bowling series tracker.
//!
//! Persists whole [`Series`] documents using `rusqlite`: one row per
//! series, with the nested games stored as a JSON column in the same
//! serde shape the remote document store uses. Reads re-validate the
//! domain invariants, so a row that was tampered with surfaces as an
//! error instead of a silently wrong score.
//!
//! # Thread Safety
//!
//! [`Database`] wraps a `rusqlite::Connection`, which is `Send` but not
//! `Sync`. Use one instance per thread or serialize access externally.
//!
//! # Schema
//!
//! Timestamps are stored as TEXT in ISO 8601 format (for example
//! `2025-03-01T19:00:00Z`) so lexicographic ordering matches
//! chronological ordering.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, params};
use thiserror::Error;
use tp_core::{Game, Series, SeriesId, SeriesTag};

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// Failed to parse a stored series timestamp.
    #[error("invalid timestamp for series {series_id}: {timestamp}")]
    TimestampParse {
        series_id: String,
        timestamp: String,
        #[source]
        source: chrono::ParseError,
    },
    /// A stored row no longer satisfies the domain invariants.
    #[error("invalid stored document for series {series_id}: {message}")]
    InvalidDocument { series_id: String, message: String },
}

/// Database connection wrapper.
///
/// See the [module documentation](self) for thread safety considerations.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens a database at the given path, creating it if necessary.
    ///
    /// The schema is automatically initialized on first open.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing. The database is destroyed when the connection
    /// closes.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initializes the database schema.
    ///
    /// Idempotent, safe to call on an already-initialized database.
    fn init(&self) -> Result<(), DbError> {
        self.conn.execute_batch(
            "
            -- Series table: one document per row
            -- created_at: ISO 8601 (e.g. '2025-03-01T19:00:00Z')
            -- games: JSON array of games, same shape as the remote store
            CREATE TABLE IF NOT EXISTS series (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                tag TEXT NOT NULL,
                created_at TEXT NOT NULL,
                games TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_series_created ON series(created_at);
            ",
        )?;
        Ok(())
    }

    /// Inserts or replaces a series by ID.
    pub fn save_series(&self, series: &Series) -> Result<(), DbError> {
        let games = serde_json::to_string(&series.games).map_err(|err| {
            DbError::InvalidDocument {
                series_id: series.id.to_string(),
                message: err.to_string(),
            }
        })?;
        self.conn.execute(
            "
            INSERT OR REPLACE INTO series (id, name, tag, created_at, games)
            VALUES (?, ?, ?, ?, ?)
            ",
            params![
                series.id.as_str(),
                series.name,
                series.tag.as_str(),
                series
                    .created_at
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
                games,
            ],
        )?;
        tracing::debug!(series_id = %series.id, "saved series");
        Ok(())
    }

    /// Lists all series ordered by creation time then ID.
    pub fn fetch_all(&self) -> Result<Vec<Series>, DbError> {
        let mut stmt = self.conn.prepare(
            "
            SELECT id, name, tag, created_at, games
            FROM series
            ORDER BY created_at ASC, id ASC
            ",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(SeriesRow {
                id: row.get(0)?,
                name: row.get(1)?,
                tag: row.get(2)?,
                created_at: row.get(3)?,
                games: row.get(4)?,
            })
        })?;

        let mut series = Vec::new();
        for row in rows {
            series.push(row?.into_series()?);
        }
        Ok(series)
    }

    /// Deletes a series by ID. Returns whether a row was removed.
    pub fn delete_series(&self, id: &SeriesId) -> Result<bool, DbError> {
        let removed = self
            .conn
            .execute("DELETE FROM series WHERE id = ?", params![id.as_str()])?;
        tracing::debug!(series_id = %id, removed, "deleted series");
        Ok(removed > 0)
    }

    /// Number of stored series.
    pub fn count_series(&self) -> Result<u64, DbError> {
        let count: u64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM series", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Raw row shape before domain validation.
struct SeriesRow {
    id: String,
    name: String,
    tag: String,
    created_at: String,
    games: String,
}

impl SeriesRow {
    fn into_series(self) -> Result<Series, DbError> {
        let invalid = |message: String| DbError::InvalidDocument {
            series_id: self.id.clone(),
            message,
        };

        let tag: SeriesTag = self.tag.parse().map_err(|err| invalid(format!("{err}")))?;
        let games: Vec<Game> =
            serde_json::from_str(&self.games).map_err(|err| invalid(err.to_string()))?;
        let created_at: DateTime<Utc> =
            self.created_at
                .parse()
                .map_err(|source| DbError::TimestampParse {
                    series_id: self.id.clone(),
                    timestamp: self.created_at.clone(),
                    source,
                })?;
        let id = SeriesId::new(self.id.clone()).map_err(|err| invalid(format!("{err}")))?;

        Ok(Series {
            id,
            name: self.name,
            tag,
            created_at,
            games,
        })
    }
}
