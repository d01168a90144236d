//! Note queries

use rusqlite::{params, params_from_iter, types::Value};

use crate::error::Result;
use crate::map_db_err;
use crate::model::{Note, NoteParent, NoteRecord, ParentKind};

const NOTE_COLUMNS: &str = "num, id, author, text, library_num, document_num, episode_num, \
     transcript_num, collection_num, quote_num, clip_num, snapshot_num";

/// Escape LIKE wildcards so search text matches literally
fn like_pattern(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len() + 2);
    escaped.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

impl super::Database {
    pub(crate) fn query_notes(
        &self,
        kind: ParentKind,
        search: Option<&str>,
    ) -> Result<Vec<NoteRecord>> {
        let mut sql = format!(
            "SELECT num, id FROM notes WHERE {} > 0",
            kind.note_column()
        );
        let mut values: Vec<Value> = Vec::new();

        if let Some(text) = search.filter(|s| !s.is_empty()) {
            sql.push_str(" AND text LIKE ?1 ESCAPE '\\'");
            values.push(Value::Text(like_pattern(text)));
        }
        sql.push_str(" ORDER BY id COLLATE NOCASE, num");

        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| map_db_err!("prepare note listing", e))?;

        let rows = stmt
            .query_map(params_from_iter(values), |row| {
                Ok(NoteRecord {
                    num: row.get(0)?,
                    id: row.get(1)?,
                    parent_kind: Some(kind),
                })
            })
            .map_err(|e| map_db_err!("list notes", e))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(|e| map_db_err!("read note row", e))?);
        }

        tracing::trace!(kind = %kind, count = records.len(), "query_notes");
        Ok(records)
    }

    pub(crate) fn get_note(&self, num: i64) -> Result<Note> {
        let sql = format!("SELECT {} FROM notes WHERE num = ?1", NOTE_COLUMNS);
        let (note_num, id, author, text, columns) = self.load_one("note", &sql, num, |r| {
            let mut columns = [None; 8];
            for (i, col) in columns.iter_mut().enumerate() {
                *col = r.get::<_, Option<i64>>(4 + i)?;
            }
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
                columns,
            ))
        })?;

        Ok(Note {
            num: note_num,
            id,
            author,
            text,
            parent: NoteParent::from_columns(note_num, columns)?,
        })
    }

    pub fn insert_note(&self, note: &Note) -> Result<()> {
        let c = note.parent.columns();
        self.conn
            .execute(
                &format!(
                    "INSERT OR REPLACE INTO notes ({}) \
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                    NOTE_COLUMNS
                ),
                params![
                    note.num, note.id, note.author, note.text, c[0], c[1], c[2], c[3], c[4],
                    c[5], c[6], c[7]
                ],
            )
            .map_err(|e| map_db_err!("insert note", e))?;
        Ok(())
    }
}
