//! Entity loaders and insert helpers

use rusqlite::{params, OptionalExtension, Row};

use crate::error::{NoteReportError, Result};
use crate::map_db_err;
use crate::model::{Clip, Collection, Document, Episode, Library, Quote, Snapshot, Transcript};

impl super::Database {
    /// Load a single row by number, mapping "no rows" to a not-found error
    pub(super) fn load_one<T>(
        &self,
        kind: &str,
        sql: &str,
        num: i64,
        map: impl FnOnce(&Row) -> rusqlite::Result<T>,
    ) -> Result<T> {
        self.conn
            .query_row(sql, params![num], map)
            .optional()
            .map_err(|e| map_db_err!(&format!("load {}", kind), e))?
            .ok_or_else(|| NoteReportError::entity_not_found(kind, num))
    }

    pub(crate) fn get_library(&self, num: i64) -> Result<Library> {
        self.load_one(
            "library",
            "SELECT num, id FROM libraries WHERE num = ?1",
            num,
            |r| {
                Ok(Library {
                    num: r.get(0)?,
                    id: r.get(1)?,
                })
            },
        )
    }

    pub(crate) fn get_document(&self, num: i64) -> Result<Document> {
        self.load_one(
            "document",
            "SELECT num, id, library_num FROM documents WHERE num = ?1",
            num,
            |r| {
                Ok(Document {
                    num: r.get(0)?,
                    id: r.get(1)?,
                    library_num: r.get(2)?,
                })
            },
        )
    }

    pub(crate) fn get_episode(&self, num: i64) -> Result<Episode> {
        self.load_one(
            "episode",
            "SELECT num, id, library_num FROM episodes WHERE num = ?1",
            num,
            |r| {
                Ok(Episode {
                    num: r.get(0)?,
                    id: r.get(1)?,
                    library_num: r.get(2)?,
                })
            },
        )
    }

    /// Transcript text can be large; `skip_text` leaves it out of the query
    pub(crate) fn get_transcript(&self, num: i64, skip_text: bool) -> Result<Transcript> {
        let sql = if skip_text {
            "SELECT num, id, episode_num, NULL FROM transcripts WHERE num = ?1"
        } else {
            "SELECT num, id, episode_num, text FROM transcripts WHERE num = ?1"
        };
        self.load_one("transcript", sql, num, |r| {
            Ok(Transcript {
                num: r.get(0)?,
                id: r.get(1)?,
                episode_num: r.get(2)?,
                text: r.get(3)?,
            })
        })
    }

    pub(crate) fn get_collection(&self, num: i64) -> Result<Collection> {
        self.load_one(
            "collection",
            "SELECT num, id, parent_num FROM collections WHERE num = ?1",
            num,
            |r| {
                Ok(Collection {
                    num: r.get(0)?,
                    id: r.get(1)?,
                    parent_num: r.get(2)?,
                })
            },
        )
    }

    pub(crate) fn get_quote(&self, num: i64, skip_text: bool) -> Result<Quote> {
        let sql = if skip_text {
            "SELECT num, id, collection_num, NULL FROM quotes WHERE num = ?1"
        } else {
            "SELECT num, id, collection_num, text FROM quotes WHERE num = ?1"
        };
        self.load_one("quote", sql, num, |r| {
            Ok(Quote {
                num: r.get(0)?,
                id: r.get(1)?,
                collection_num: r.get(2)?,
                text: r.get(3)?,
            })
        })
    }

    pub(crate) fn get_clip(&self, num: i64, skip_text: bool) -> Result<Clip> {
        let sql = if skip_text {
            "SELECT num, id, collection_num, NULL FROM clips WHERE num = ?1"
        } else {
            "SELECT num, id, collection_num, text FROM clips WHERE num = ?1"
        };
        self.load_one("clip", sql, num, |r| {
            Ok(Clip {
                num: r.get(0)?,
                id: r.get(1)?,
                collection_num: r.get(2)?,
                text: r.get(3)?,
            })
        })
    }

    pub(crate) fn get_snapshot(&self, num: i64) -> Result<Snapshot> {
        self.load_one(
            "snapshot",
            "SELECT num, id, collection_num FROM snapshots WHERE num = ?1",
            num,
            |r| {
                Ok(Snapshot {
                    num: r.get(0)?,
                    id: r.get(1)?,
                    collection_num: r.get(2)?,
                })
            },
        )
    }

    pub fn insert_library(&self, library: &Library) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO libraries (num, id) VALUES (?1, ?2)",
                params![library.num, library.id],
            )
            .map_err(|e| map_db_err!("insert library", e))?;
        Ok(())
    }

    pub fn insert_document(&self, document: &Document) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO documents (num, id, library_num) VALUES (?1, ?2, ?3)",
                params![document.num, document.id, document.library_num],
            )
            .map_err(|e| map_db_err!("insert document", e))?;
        Ok(())
    }

    pub fn insert_episode(&self, episode: &Episode) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO episodes (num, id, library_num) VALUES (?1, ?2, ?3)",
                params![episode.num, episode.id, episode.library_num],
            )
            .map_err(|e| map_db_err!("insert episode", e))?;
        Ok(())
    }

    pub fn insert_transcript(&self, transcript: &Transcript) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO transcripts (num, id, episode_num, text) VALUES (?1, ?2, ?3, ?4)",
                params![
                    transcript.num,
                    transcript.id,
                    transcript.episode_num,
                    transcript.text
                ],
            )
            .map_err(|e| map_db_err!("insert transcript", e))?;
        Ok(())
    }

    pub fn insert_collection(&self, collection: &Collection) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO collections (num, id, parent_num) VALUES (?1, ?2, ?3)",
                params![collection.num, collection.id, collection.parent_num],
            )
            .map_err(|e| map_db_err!("insert collection", e))?;
        Ok(())
    }

    pub fn insert_quote(&self, quote: &Quote) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO quotes (num, id, collection_num, text) VALUES (?1, ?2, ?3, ?4)",
                params![quote.num, quote.id, quote.collection_num, quote.text],
            )
            .map_err(|e| map_db_err!("insert quote", e))?;
        Ok(())
    }

    pub fn insert_clip(&self, clip: &Clip) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO clips (num, id, collection_num, text) VALUES (?1, ?2, ?3, ?4)",
                params![clip.num, clip.id, clip.collection_num, clip.text],
            )
            .map_err(|e| map_db_err!("insert clip", e))?;
        Ok(())
    }

    pub fn insert_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO snapshots (num, id, collection_num) VALUES (?1, ?2, ?3)",
                params![snapshot.num, snapshot.id, snapshot.collection_num],
            )
            .map_err(|e| map_db_err!("insert snapshot", e))?;
        Ok(())
    }
}
