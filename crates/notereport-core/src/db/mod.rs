//! SQLite database module for notereport

mod entities;
mod filters;
mod import;
mod notes;
mod repository;
mod schema;

use crate::error::{NoteReportError, Result};
use crate::map_db_err;
use rusqlite::Connection;
use serde::Serialize;
use std::path::Path;

pub use schema::{create_schema, SchemaCreateResult, CURRENT_SCHEMA_VERSION};

/// Report type under which notes report filters are stored
pub const REPORT_TYPE_NOTES: i64 = 13;

/// Row counts per table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatabaseCounts {
    pub libraries: i64,
    pub documents: i64,
    pub episodes: i64,
    pub transcripts: i64,
    pub collections: i64,
    pub quotes: i64,
    pub clips: i64,
    pub snapshots: i64,
    pub notes: i64,
    pub filter_configs: i64,
}

/// SQLite database holding research entities, notes and filter configurations
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `path`.
    ///
    /// When `create` is false a missing file is an error rather than
    /// silently producing an empty database.
    pub fn open(path: &Path, create: bool) -> Result<Self> {
        if !create && !path.exists() {
            return Err(NoteReportError::DatabaseNotFound {
                path: path.to_path_buf(),
            });
        }

        let conn = Connection::open(path).map_err(|e| {
            NoteReportError::Database(format!(
                "failed to open database at {}: {}",
                path.display(),
                e
            ))
        })?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| map_db_err!("enable WAL mode", e))?;

        tracing::debug!(path = %path.display(), create, "open_database");
        Self::from_connection(conn)
    }

    /// Fresh database that lives only as long as the handle
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| map_db_err!("open database", e))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        match create_schema(&conn).map_err(|e| map_db_err!("create database schema", e))? {
            SchemaCreateResult::TooNew(version) => Err(NoteReportError::Database(format!(
                "database schema version {} is newer than supported version {}",
                version, CURRENT_SCHEMA_VERSION
            ))),
            result => {
                tracing::trace!(?result, "schema_ready");
                Ok(Database { conn })
            }
        }
    }

    pub fn get_schema_version(&self) -> Result<i32> {
        self.conn
            .query_row(
                "SELECT value FROM meta WHERE key = 'schema_version'",
                [],
                |r| {
                    let s: String = r.get(0)?;
                    Ok(s.parse().unwrap_or(0))
                },
            )
            .map_err(|e| map_db_err!("get schema version", e))
    }

    pub fn counts(&self) -> Result<DatabaseCounts> {
        Ok(DatabaseCounts {
            libraries: self.count_rows("libraries")?,
            documents: self.count_rows("documents")?,
            episodes: self.count_rows("episodes")?,
            transcripts: self.count_rows("transcripts")?,
            collections: self.count_rows("collections")?,
            quotes: self.count_rows("quotes")?,
            clips: self.count_rows("clips")?,
            snapshots: self.count_rows("snapshots")?,
            notes: self.count_rows("notes")?,
            filter_configs: self.count_rows("filter_configs")?,
        })
    }

    fn count_rows(&self, table: &str) -> Result<i64> {
        self.conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))
            .map_err(|e| map_db_err!(&format!("count {}", table), e))
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        let _ = self.conn.pragma_update(None, "wal_checkpoint", "TRUNCATE");
    }
}

#[cfg(test)]
pub(crate) mod fixtures;

#[cfg(test)]
mod tests;
