//! Note filter selection
//!
//! A report keeps one [`FilterState`] for its whole lifetime. The state is
//! filled from the full note list on the first render, edited through a
//! [`FilterDialog`], and can be saved and restored by name.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::{NoteReportError, Result};
use crate::model::{NoteRecord, ReportScope};
use crate::repository::FilterConfigStore;

/// One selectable note in the filter list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterEntry {
    pub note_num: i64,
    pub note_id: String,
    /// Breadcrumb shown next to the note in the selection list
    pub parent_path: String,
    pub included: bool,
}

impl FilterEntry {
    pub fn new(note_num: i64, note_id: &str, parent_path: &str, included: bool) -> Self {
        Self {
            note_num,
            note_id: note_id.to_string(),
            parent_path: parent_path.to_string(),
            included,
        }
    }
}

/// Result of showing a filter dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Commit `entries`; `config_name` is the configuration they came from
    /// or were saved as, if any
    Apply {
        entries: Vec<FilterEntry>,
        config_name: Option<String>,
    },
    Cancel,
}

/// Lets a user edit the filter list. Blocks until confirmed or cancelled.
pub trait FilterDialog {
    fn show(
        &mut self,
        initial: &[FilterEntry],
        scope: ReportScope,
        config_name: Option<&str>,
    ) -> Result<DialogOutcome>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    entries: Vec<FilterEntry>,
    config_name: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// No selection yet; every note passes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FilterEntry] {
        &self.entries
    }

    pub fn config_name(&self) -> Option<&str> {
        self.config_name.as_deref()
    }

    /// Seed the list with every note included. Does nothing once the list
    /// has entries; returns whether it populated.
    pub fn populate_from_full_list(&mut self, notes: impl IntoIterator<Item = FilterEntry>) -> bool {
        if !self.entries.is_empty() {
            return false;
        }
        self.entries = notes
            .into_iter()
            .map(|entry| FilterEntry {
                included: true,
                ..entry
            })
            .collect();
        tracing::debug!(entries = self.entries.len(), "populate_filter_list");
        true
    }

    /// Note numbers currently marked included
    pub fn included_nums(&self) -> HashSet<i64> {
        self.entries
            .iter()
            .filter(|e| e.included)
            .map(|e| e.note_num)
            .collect()
    }

    /// Numbers of the notes in `full_list` that pass the filter, in
    /// `full_list` order. An empty state passes everything.
    pub fn apply_filter(&self, full_list: &[NoteRecord]) -> Vec<i64> {
        if self.is_empty() {
            return full_list.iter().map(|r| r.num).collect();
        }
        let included = self.included_nums();
        full_list
            .iter()
            .filter(|r| included.contains(&r.num))
            .map(|r| r.num)
            .collect()
    }

    /// Apply a saved configuration to the current list.
    ///
    /// Only the `included` flags are taken from the saved entries, matched by
    /// note number; notes the configuration does not mention keep their
    /// current flag. An empty list adopts the saved entries as they are.
    /// Returns `false` (state untouched) when no such configuration exists.
    pub fn load_named<S: FilterConfigStore + ?Sized>(
        &mut self,
        store: &S,
        scope: ReportScope,
        name: &str,
    ) -> Result<bool> {
        let Some(saved) = store.load_filter_config(scope, name)? else {
            return Ok(false);
        };
        tracing::debug!(scope = %scope, name, entries = saved.len(), "load_filter_config");

        if self.entries.is_empty() {
            self.entries = saved;
        } else {
            let flags: HashMap<i64, bool> =
                saved.iter().map(|e| (e.note_num, e.included)).collect();
            for entry in &mut self.entries {
                if let Some(included) = flags.get(&entry.note_num) {
                    entry.included = *included;
                }
            }
        }
        self.config_name = Some(name.to_string());
        Ok(true)
    }

    /// Persist the current selection under `name`
    pub fn save_named<S: FilterConfigStore + ?Sized>(
        &mut self,
        store: &S,
        scope: ReportScope,
        name: &str,
    ) -> Result<()> {
        if name.trim().is_empty() {
            bail_invalid!("filter configuration name", "(empty)");
        }
        store.save_filter_config(scope, name, &self.entries)?;
        self.config_name = Some(name.to_string());
        Ok(())
    }

    /// Commit a dialog result. Cancel leaves the state untouched.
    /// Returns whether anything was applied.
    pub fn apply_outcome(&mut self, outcome: DialogOutcome) -> bool {
        match outcome {
            DialogOutcome::Apply {
                entries,
                config_name,
            } => {
                self.entries = entries;
                self.config_name = config_name;
                true
            }
            DialogOutcome::Cancel => false,
        }
    }
}

/// Non-interactive dialog: applies include/exclude edits by note number and
/// optionally saves the result. With no edits and no save name it cancels.
pub struct SelectionDialog<'a, S: FilterConfigStore + ?Sized> {
    store: &'a S,
    only: Vec<i64>,
    exclude: Vec<i64>,
    save_as: Option<String>,
}

impl<'a, S: FilterConfigStore + ?Sized> SelectionDialog<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            only: Vec::new(),
            exclude: Vec::new(),
            save_as: None,
        }
    }

    /// Include exactly these notes
    pub fn only(mut self, nums: Vec<i64>) -> Self {
        self.only = nums;
        self
    }

    pub fn exclude(mut self, nums: Vec<i64>) -> Self {
        self.exclude = nums;
        self
    }

    pub fn save_as(mut self, name: Option<String>) -> Self {
        self.save_as = name;
        self
    }

    fn has_edits(&self) -> bool {
        !self.only.is_empty() || !self.exclude.is_empty() || self.save_as.is_some()
    }

    fn check_known(initial: &[FilterEntry], nums: &[i64]) -> Result<()> {
        let known: HashSet<i64> = initial.iter().map(|e| e.note_num).collect();
        match nums.iter().find(|n| !known.contains(n)) {
            Some(n) => Err(NoteReportError::not_found("note in report", n)),
            None => Ok(()),
        }
    }
}

impl<S: FilterConfigStore + ?Sized> FilterDialog for SelectionDialog<'_, S> {
    fn show(
        &mut self,
        initial: &[FilterEntry],
        scope: ReportScope,
        config_name: Option<&str>,
    ) -> Result<DialogOutcome> {
        if !self.has_edits() {
            return Ok(DialogOutcome::Cancel);
        }
        Self::check_known(initial, &self.only)?;
        Self::check_known(initial, &self.exclude)?;

        let only: HashSet<i64> = self.only.iter().copied().collect();
        let exclude: HashSet<i64> = self.exclude.iter().copied().collect();
        let entries: Vec<FilterEntry> = initial
            .iter()
            .map(|entry| {
                let mut included = entry.included;
                if !only.is_empty() {
                    included = only.contains(&entry.note_num);
                }
                if exclude.contains(&entry.note_num) {
                    included = false;
                }
                FilterEntry {
                    included,
                    ..entry.clone()
                }
            })
            .collect();

        let config_name = match &self.save_as {
            Some(name) if name.trim().is_empty() => {
                bail_invalid!("filter configuration name", "(empty)");
            }
            Some(name) => {
                self.store.save_filter_config(scope, name, &entries)?;
                Some(name.clone())
            }
            None => config_name.map(str::to_string),
        };

        Ok(DialogOutcome::Apply {
            entries,
            config_name,
        })
    }
}
