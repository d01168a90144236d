//! Boundary traits between report logic and storage
//!
//! [`crate::db::Database`] implements both traits; tests may substitute
//! their own implementations.

use std::collections::HashSet;

use crate::error::{NoteReportError, Result};
use crate::model::{
    Clip, Collection, Document, Episode, Library, Note, NoteRecord, ParentKind, Quote,
    ReportScope, Snapshot, Transcript,
};
use crate::report::FilterEntry;

/// Separator between collection names in a node path
pub const NODE_PATH_SEPARATOR: &str = " > ";

/// Read access to notes and the entities they hang off
pub trait NoteRepository {
    /// Notes attached to `kind`, optionally restricted to those whose text
    /// contains `search`. Ordered by display id.
    fn list_notes(&self, kind: ParentKind, search: Option<&str>) -> Result<Vec<NoteRecord>>;

    fn load_note(&self, num: i64) -> Result<Note>;
    fn load_library(&self, num: i64) -> Result<Library>;
    fn load_document(&self, num: i64) -> Result<Document>;
    fn load_episode(&self, num: i64) -> Result<Episode>;
    fn load_transcript(&self, num: i64, skip_text: bool) -> Result<Transcript>;
    fn load_collection(&self, num: i64) -> Result<Collection>;
    fn load_quote(&self, num: i64, skip_text: bool) -> Result<Quote>;
    fn load_clip(&self, num: i64, skip_text: bool) -> Result<Clip>;
    fn load_snapshot(&self, num: i64) -> Result<Snapshot>;

    /// Display ids from the outermost collection down to `num`
    fn collection_node_path(&self, num: i64) -> Result<Vec<String>> {
        let mut path = Vec::new();
        let mut seen = HashSet::new();
        let mut current = Some(num);

        while let Some(collection_num) = current {
            if !seen.insert(collection_num) {
                return Err(NoteReportError::CollectionCycle { num });
            }
            let collection = self.load_collection(collection_num)?;
            path.push(collection.id);
            current = collection.parent_num.filter(|n| *n > 0);
        }

        path.reverse();
        Ok(path)
    }

    /// Node path joined for display ("Outer > Inner")
    fn collection_node_string(&self, num: i64) -> Result<String> {
        Ok(self.collection_node_path(num)?.join(NODE_PATH_SEPARATOR))
    }
}

/// Persistence for named filter selections
pub trait FilterConfigStore {
    /// Saved configuration names for `scope`, sorted
    fn filter_config_names(&self, scope: ReportScope) -> Result<Vec<String>>;

    fn load_filter_config(
        &self,
        scope: ReportScope,
        name: &str,
    ) -> Result<Option<Vec<FilterEntry>>>;

    /// Insert or replace
    fn save_filter_config(
        &self,
        scope: ReportScope,
        name: &str,
        entries: &[FilterEntry],
    ) -> Result<()>;

    /// Returns whether a configuration was removed
    fn delete_filter_config(&self, scope: ReportScope, name: &str) -> Result<bool>;
}
