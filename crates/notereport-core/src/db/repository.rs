//! Trait implementations backed by SQLite

use super::Database;
use crate::error::Result;
use crate::model::{
    Clip, Collection, Document, Episode, Library, Note, NoteRecord, ParentKind, Quote,
    ReportScope, Snapshot, Transcript,
};
use crate::report::FilterEntry;
use crate::repository::{FilterConfigStore, NoteRepository};

impl NoteRepository for Database {
    fn list_notes(&self, kind: ParentKind, search: Option<&str>) -> Result<Vec<NoteRecord>> {
        self.query_notes(kind, search)
    }

    fn load_note(&self, num: i64) -> Result<Note> {
        self.get_note(num)
    }

    fn load_library(&self, num: i64) -> Result<Library> {
        self.get_library(num)
    }

    fn load_document(&self, num: i64) -> Result<Document> {
        self.get_document(num)
    }

    fn load_episode(&self, num: i64) -> Result<Episode> {
        self.get_episode(num)
    }

    fn load_transcript(&self, num: i64, skip_text: bool) -> Result<Transcript> {
        self.get_transcript(num, skip_text)
    }

    fn load_collection(&self, num: i64) -> Result<Collection> {
        self.get_collection(num)
    }

    fn load_quote(&self, num: i64, skip_text: bool) -> Result<Quote> {
        self.get_quote(num, skip_text)
    }

    fn load_clip(&self, num: i64, skip_text: bool) -> Result<Clip> {
        self.get_clip(num, skip_text)
    }

    fn load_snapshot(&self, num: i64) -> Result<Snapshot> {
        self.get_snapshot(num)
    }
}

impl FilterConfigStore for Database {
    fn filter_config_names(&self, scope: ReportScope) -> Result<Vec<String>> {
        self.config_names(scope)
    }

    fn load_filter_config(
        &self,
        scope: ReportScope,
        name: &str,
    ) -> Result<Option<Vec<FilterEntry>>> {
        self.read_config(scope, name)
    }

    fn save_filter_config(
        &self,
        scope: ReportScope,
        name: &str,
        entries: &[FilterEntry],
    ) -> Result<()> {
        self.write_config(scope, name, entries)
    }

    fn delete_filter_config(&self, scope: ReportScope, name: &str) -> Result<bool> {
        self.remove_config(scope, name)
    }
}
