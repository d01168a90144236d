//! Notes report: collection, filtering, parent resolution and rendering
//!
//! [`NotesReport`] ties the pieces together for one report instance. It is
//! owned by the caller and borrows the repository it reads from.

mod collector;
mod filter;
mod renderer;
mod resolver;
pub mod sink;

use std::time::Instant;

use serde::Serialize;

use crate::config::ReportSettings;
use crate::error::{NoteReportError, Result};
use crate::model::ReportScope;
use crate::repository::{FilterConfigStore, NoteRepository};
use crate::trace_time;

pub use collector::collect_notes;
pub use filter::{DialogOutcome, FilterDialog, FilterEntry, FilterState, SelectionDialog};
pub use renderer::{Block, ReportHeader, ReportRenderer, ResolvedNote};
pub use resolver::{resolve_parent, ResolvedParent};
pub use sink::{PlainTextSink, RecordingSink, StyledSink, TextStyle};

pub const DEFAULT_TITLE: &str = "Notes Report";

/// What a report shows. Fixed for the life of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportConfig {
    pub title: String,
    pub scope: ReportScope,
    pub search_text: Option<String>,
}

impl ReportConfig {
    pub fn new(scope: ReportScope) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            scope,
            search_text: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Empty search text counts as no search
    pub fn with_search(mut self, search: Option<String>) -> Self {
        self.search_text = search.filter(|s| !s.is_empty());
        self
    }
}

/// One notes report instance
pub struct NotesReport<'a, R: NoteRepository + ?Sized> {
    repo: &'a R,
    config: ReportConfig,
    settings: ReportSettings,
    filter: FilterState,
    blocks: Vec<Block>,
}

impl<'a, R: NoteRepository + ?Sized> NotesReport<'a, R> {
    pub fn new(repo: &'a R, config: ReportConfig, settings: ReportSettings) -> Self {
        Self {
            repo,
            config,
            settings,
            filter: FilterState::new(),
            blocks: Vec::new(),
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Blocks from the most recent render
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Collect, filter, resolve and render into `sink`, replacing its
    /// previous contents.
    ///
    /// On the first pass (empty filter list) every note is rendered and the
    /// filter list is populated from them. The list then stays fixed for
    /// the life of the report.
    pub fn display(&mut self, sink: &mut dyn StyledSink) -> Result<()> {
        let start = Instant::now();
        let records = collect_notes(
            self.repo,
            self.config.scope,
            self.config.search_text.as_deref(),
        )?;

        let populate = self.filter.is_empty();
        let kept = self.filter.apply_filter(&records);

        let mut notes = Vec::with_capacity(kept.len());
        for num in kept {
            let note = self.repo.load_note(num)?;
            let parent = resolve_parent(self.repo, &note)?;
            notes.push(ResolvedNote { note, parent });
        }

        if populate {
            self.filter.populate_from_full_list(notes.iter().map(|n| {
                FilterEntry::new(n.note.num, &n.note.id, &n.parent.breadcrumb, true)
            }));
        }

        let header = ReportHeader {
            title: self.config.title.clone(),
            search_text: self.config.search_text.clone(),
            config_name: self.filter.config_name().map(str::to_string),
        };
        let renderer = ReportRenderer::new(&self.settings.style);
        self.blocks = renderer.blocks(&header, &notes);

        sink.clear();
        renderer.write(&self.blocks, sink);

        tracing::debug!(
            scope = %self.config.scope,
            collected = records.len(),
            rendered = notes.len(),
            populated = populate,
            "display_report"
        );
        trace_time!(start, "display_report");
        Ok(())
    }

    /// First display: render, then apply the default filter configuration
    /// if one is saved for this scope, re-rendering with it.
    /// Returns whether a default configuration was applied.
    pub fn open<S: FilterConfigStore + ?Sized>(
        &mut self,
        store: &S,
        sink: &mut dyn StyledSink,
    ) -> Result<bool> {
        self.display(sink)?;

        let name = self.settings.default_filter_config.clone();
        let names = store.filter_config_names(self.config.scope)?;
        if !names.iter().any(|n| *n == name) {
            tracing::debug!(name = %name, "no_default_filter_config");
            return Ok(false);
        }

        let loaded = self.filter.load_named(store, self.config.scope, &name)?;
        if loaded {
            self.display(sink)?;
        }
        Ok(loaded)
    }

    /// Replace the filter with a named configuration and re-render
    pub fn apply_named<S: FilterConfigStore + ?Sized>(
        &mut self,
        store: &S,
        name: &str,
        sink: &mut dyn StyledSink,
    ) -> Result<()> {
        if !self.filter.load_named(store, self.config.scope, name)? {
            return Err(NoteReportError::not_found("filter configuration", name));
        }
        self.display(sink)
    }

    /// Save the current filter selection under `name`
    pub fn save_filter<S: FilterConfigStore + ?Sized>(&mut self, store: &S, name: &str) -> Result<()> {
        self.filter.save_named(store, self.config.scope, name)
    }

    /// Show `dialog`; on apply commit its selection and re-render.
    /// Returns `false` when the dialog was cancelled, in which case neither
    /// the filter nor the sink is touched.
    pub fn filter(
        &mut self,
        dialog: &mut dyn FilterDialog,
        sink: &mut dyn StyledSink,
    ) -> Result<bool> {
        let outcome = dialog.show(
            self.filter.entries(),
            self.config.scope,
            self.filter.config_name(),
        )?;

        if !self.filter.apply_outcome(outcome) {
            tracing::debug!("filter_cancelled");
            return Ok(false);
        }
        self.display(sink)?;
        Ok(true)
    }
}
