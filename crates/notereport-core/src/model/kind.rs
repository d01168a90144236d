use crate::error::{NoteReportError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of entity a note can be attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentKind {
    Library,
    Document,
    Episode,
    Transcript,
    Collection,
    Quote,
    Clip,
    Snapshot,
}

impl ParentKind {
    /// Every kind, in report order. Root-scope collection and parent lines
    /// both follow this order.
    pub const ALL: [ParentKind; 8] = [
        ParentKind::Library,
        ParentKind::Document,
        ParentKind::Episode,
        ParentKind::Transcript,
        ParentKind::Collection,
        ParentKind::Quote,
        ParentKind::Clip,
        ParentKind::Snapshot,
    ];

    /// All valid kind names
    pub const VALID_KINDS: &'static [&'static str] = &[
        "library",
        "document",
        "episode",
        "transcript",
        "collection",
        "quote",
        "clip",
        "snapshot",
    ];

    pub fn as_str(&self) -> &'static str {
        Self::VALID_KINDS[self.index()]
    }

    /// Position in [`ParentKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            ParentKind::Library => 0,
            ParentKind::Document => 1,
            ParentKind::Episode => 2,
            ParentKind::Transcript => 3,
            ParentKind::Collection => 4,
            ParentKind::Quote => 5,
            ParentKind::Clip => 6,
            ParentKind::Snapshot => 7,
        }
    }

    /// Label used on a report parent line ("Library: ...")
    pub fn label(&self) -> &'static str {
        match self {
            ParentKind::Library => "Library",
            ParentKind::Document => "Document",
            ParentKind::Episode => "Episode",
            ParentKind::Transcript => "Transcript",
            ParentKind::Collection => "Collection",
            ParentKind::Quote => "Quote",
            ParentKind::Clip => "Clip",
            ParentKind::Snapshot => "Snapshot",
        }
    }

    /// Leading word of a breadcrumb for a note attached to this kind
    pub fn breadcrumb_prefix(&self) -> &'static str {
        match self {
            ParentKind::Library => "Libraries",
            other => other.label(),
        }
    }

    /// Foreign key column on the `notes` table
    pub fn note_column(&self) -> &'static str {
        match self {
            ParentKind::Library => "library_num",
            ParentKind::Document => "document_num",
            ParentKind::Episode => "episode_num",
            ParentKind::Transcript => "transcript_num",
            ParentKind::Collection => "collection_num",
            ParentKind::Quote => "quote_num",
            ParentKind::Clip => "clip_num",
            ParentKind::Snapshot => "snapshot_num",
        }
    }
}

impl FromStr for ParentKind {
    type Err = NoteReportError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| {
                NoteReportError::invalid_value(
                    "parent kind",
                    format!("{} (expected: {})", s, Self::VALID_KINDS.join(", ")),
                )
            })
    }
}

impl fmt::Display for ParentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single entity a note hangs off, if any.
///
/// Stored as eight nullable foreign keys; at most one may be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "num", rename_all = "lowercase")]
pub enum NoteParent {
    Library(i64),
    Document(i64),
    Episode(i64),
    Transcript(i64),
    Collection(i64),
    Quote(i64),
    Clip(i64),
    Snapshot(i64),
    #[default]
    None,
}

impl NoteParent {
    pub fn new(kind: ParentKind, num: i64) -> Self {
        match kind {
            ParentKind::Library => NoteParent::Library(num),
            ParentKind::Document => NoteParent::Document(num),
            ParentKind::Episode => NoteParent::Episode(num),
            ParentKind::Transcript => NoteParent::Transcript(num),
            ParentKind::Collection => NoteParent::Collection(num),
            ParentKind::Quote => NoteParent::Quote(num),
            ParentKind::Clip => NoteParent::Clip(num),
            ParentKind::Snapshot => NoteParent::Snapshot(num),
        }
    }

    pub fn kind(&self) -> Option<ParentKind> {
        match self {
            NoteParent::Library(_) => Some(ParentKind::Library),
            NoteParent::Document(_) => Some(ParentKind::Document),
            NoteParent::Episode(_) => Some(ParentKind::Episode),
            NoteParent::Transcript(_) => Some(ParentKind::Transcript),
            NoteParent::Collection(_) => Some(ParentKind::Collection),
            NoteParent::Quote(_) => Some(ParentKind::Quote),
            NoteParent::Clip(_) => Some(ParentKind::Clip),
            NoteParent::Snapshot(_) => Some(ParentKind::Snapshot),
            NoteParent::None => None,
        }
    }

    pub fn num(&self) -> Option<i64> {
        match *self {
            NoteParent::Library(n)
            | NoteParent::Document(n)
            | NoteParent::Episode(n)
            | NoteParent::Transcript(n)
            | NoteParent::Collection(n)
            | NoteParent::Quote(n)
            | NoteParent::Clip(n)
            | NoteParent::Snapshot(n) => Some(n),
            NoteParent::None => None,
        }
    }

    /// Build from the eight foreign key columns, in [`ParentKind::ALL`] order.
    /// Zero and NULL both mean "not set".
    pub fn from_columns(note_num: i64, columns: [Option<i64>; 8]) -> Result<Self> {
        let set: Vec<(ParentKind, i64)> = ParentKind::ALL
            .iter()
            .zip(columns)
            .filter_map(|(kind, col)| col.filter(|n| *n > 0).map(|n| (*kind, n)))
            .collect();

        match set.as_slice() {
            [] => Ok(NoteParent::None),
            [(kind, num)] => Ok(NoteParent::new(*kind, *num)),
            many => Err(NoteReportError::AmbiguousParent {
                num: note_num,
                kinds: many
                    .iter()
                    .map(|(kind, _)| kind.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    /// The eight foreign key column values, in [`ParentKind::ALL`] order
    pub fn columns(&self) -> [Option<i64>; 8] {
        let mut columns = [None; 8];
        if let (Some(kind), Some(num)) = (self.kind(), self.num()) {
            columns[kind.index()] = Some(num);
        }
        columns
    }
}
