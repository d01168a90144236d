//! SQLite database schema for notereport

use rusqlite::{Connection, OptionalExtension, Result};

pub const CURRENT_SCHEMA_VERSION: i32 = 1;

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS libraries (
    num INTEGER PRIMARY KEY,
    id TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS documents (
    num INTEGER PRIMARY KEY,
    id TEXT NOT NULL,
    library_num INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS episodes (
    num INTEGER PRIMARY KEY,
    id TEXT NOT NULL,
    library_num INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS transcripts (
    num INTEGER PRIMARY KEY,
    id TEXT NOT NULL,
    episode_num INTEGER NOT NULL,
    text TEXT
);

CREATE TABLE IF NOT EXISTS collections (
    num INTEGER PRIMARY KEY,
    id TEXT NOT NULL,
    parent_num INTEGER
);

CREATE TABLE IF NOT EXISTS quotes (
    num INTEGER PRIMARY KEY,
    id TEXT NOT NULL,
    collection_num INTEGER NOT NULL,
    text TEXT
);

CREATE TABLE IF NOT EXISTS clips (
    num INTEGER PRIMARY KEY,
    id TEXT NOT NULL,
    collection_num INTEGER NOT NULL,
    text TEXT
);

CREATE TABLE IF NOT EXISTS snapshots (
    num INTEGER PRIMARY KEY,
    id TEXT NOT NULL,
    collection_num INTEGER NOT NULL
);

-- A note hangs off at most one entity
CREATE TABLE IF NOT EXISTS notes (
    num INTEGER PRIMARY KEY,
    id TEXT NOT NULL,
    author TEXT NOT NULL DEFAULT '',
    text TEXT NOT NULL DEFAULT '',
    library_num INTEGER,
    document_num INTEGER,
    episode_num INTEGER,
    transcript_num INTEGER,
    collection_num INTEGER,
    quote_num INTEGER,
    clip_num INTEGER,
    snapshot_num INTEGER,
    CHECK (
        (library_num IS NOT NULL) + (document_num IS NOT NULL)
        + (episode_num IS NOT NULL) + (transcript_num IS NOT NULL)
        + (collection_num IS NOT NULL) + (quote_num IS NOT NULL)
        + (clip_num IS NOT NULL) + (snapshot_num IS NOT NULL) <= 1
    )
);
CREATE INDEX IF NOT EXISTS idx_notes_id ON notes(id);

-- Saved filter selections, keyed like the rest of the report filters
CREATE TABLE IF NOT EXISTS filter_configs (
    report_type INTEGER NOT NULL,
    report_scope INTEGER NOT NULL,
    config_name TEXT NOT NULL,
    entries_json TEXT NOT NULL,
    PRIMARY KEY (report_type, report_scope, config_name)
);

CREATE TABLE IF NOT EXISTS meta (
    key TEXT PRIMARY KEY,
    value TEXT
);
"#;

/// Outcome of [`create_schema`]
#[derive(Debug, PartialEq, Eq)]
pub enum SchemaCreateResult {
    /// Fresh database, schema written
    Created,
    /// Existing database at the current version
    Current,
    /// Database written by a newer build
    TooNew(i32),
}

pub fn create_schema(conn: &Connection) -> Result<SchemaCreateResult> {
    let has_meta: bool = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'meta'",
            [],
            |r| r.get::<_, i64>(0),
        )
        .map(|n| n > 0)?;

    let current_version: Option<i32> = if has_meta {
        conn.query_row(
            "SELECT value FROM meta WHERE key = 'schema_version'",
            [],
            |r| r.get::<_, String>(0).map(|s| s.parse().unwrap_or(0)),
        )
        .optional()?
    } else {
        None
    };

    match current_version {
        Some(v) if v > CURRENT_SCHEMA_VERSION => Ok(SchemaCreateResult::TooNew(v)),
        Some(_) => {
            conn.execute_batch(SCHEMA_SQL)?;
            Ok(SchemaCreateResult::Current)
        }
        None => {
            conn.execute_batch(SCHEMA_SQL)?;
            conn.execute(
                "INSERT OR REPLACE INTO meta (key, value) VALUES ('schema_version', ?1)",
                [&CURRENT_SCHEMA_VERSION.to_string()],
            )?;
            Ok(SchemaCreateResult::Created)
        }
    }
}
