use super::ParentKind;
use crate::error::{NoteReportError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which notes a report covers: one entity kind, or all of them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportScope {
    #[default]
    Root,
    Library,
    Document,
    Episode,
    Transcript,
    Collection,
    Quote,
    Clip,
    Snapshot,
}

impl ReportScope {
    pub const VALID_SCOPES: &'static [&'static str] = &[
        "root",
        "library",
        "document",
        "episode",
        "transcript",
        "collection",
        "quote",
        "clip",
        "snapshot",
    ];

    pub fn from_kind(kind: ParentKind) -> Self {
        match kind {
            ParentKind::Library => ReportScope::Library,
            ParentKind::Document => ReportScope::Document,
            ParentKind::Episode => ReportScope::Episode,
            ParentKind::Transcript => ReportScope::Transcript,
            ParentKind::Collection => ReportScope::Collection,
            ParentKind::Quote => ReportScope::Quote,
            ParentKind::Clip => ReportScope::Clip,
            ParentKind::Snapshot => ReportScope::Snapshot,
        }
    }

    /// The entity kind this scope is restricted to; `None` for root
    pub fn kind(&self) -> Option<ParentKind> {
        match self {
            ReportScope::Root => None,
            ReportScope::Library => Some(ParentKind::Library),
            ReportScope::Document => Some(ParentKind::Document),
            ReportScope::Episode => Some(ParentKind::Episode),
            ReportScope::Transcript => Some(ParentKind::Transcript),
            ReportScope::Collection => Some(ParentKind::Collection),
            ReportScope::Quote => Some(ParentKind::Quote),
            ReportScope::Clip => Some(ParentKind::Clip),
            ReportScope::Snapshot => Some(ParentKind::Snapshot),
        }
    }

    /// Kinds queried for this scope, in collection order
    pub fn sub_scopes(&self) -> Vec<ParentKind> {
        match self.kind() {
            Some(kind) => vec![kind],
            None => ParentKind::ALL.to_vec(),
        }
    }

    /// Scope number under which filter configurations are stored.
    /// These values are shared with existing filter databases and must not change.
    pub fn filter_scope(&self) -> i64 {
        match self {
            ReportScope::Root => 1,
            ReportScope::Library => 2,
            ReportScope::Episode => 3,
            ReportScope::Transcript => 4,
            ReportScope::Collection => 5,
            ReportScope::Clip => 6,
            ReportScope::Snapshot => 7,
            ReportScope::Document => 8,
            ReportScope::Quote => 9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.as_str(),
            None => "root",
        }
    }
}

impl FromStr for ReportScope {
    type Err = NoteReportError;

    /// Accepts plain names ("transcript") as well as tree node names
    /// ("TranscriptNode").
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        let name = lower.strip_suffix("node").unwrap_or(lower.as_str());
        if name == "root" {
            return Ok(ReportScope::Root);
        }
        name.parse::<ParentKind>()
            .map(ReportScope::from_kind)
            .map_err(|_| NoteReportError::UnknownScope(s.to_string()))
    }
}

impl fmt::Display for ReportScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
