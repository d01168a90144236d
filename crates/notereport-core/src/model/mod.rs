//! Entity model for the research database
//!
//! Every entity carries a numeric key (`num`) and a display label (`id`).
//! Container entities point at their owner by number.

mod kind;
mod scope;

use serde::{Deserialize, Serialize};

pub use kind::{NoteParent, ParentKind};
pub use scope::ReportScope;

/// A free-text annotation attached to at most one other entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub num: i64,
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub parent: NoteParent,
}

/// Lightweight row returned by note listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub num: i64,
    pub id: String,
    pub parent_kind: Option<ParentKind>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub num: i64,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub num: i64,
    pub id: String,
    pub library_num: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub num: i64,
    pub id: String,
    pub library_num: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub num: i64,
    pub id: String,
    pub episode_num: i64,
    /// `None` when loaded with `skip_text`
    #[serde(default)]
    pub text: Option<String>,
}

/// Collections nest; `parent_num` is `None` for top-level collections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub num: i64,
    pub id: String,
    #[serde(default)]
    pub parent_num: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub num: i64,
    pub id: String,
    pub collection_num: i64,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    pub num: i64,
    pub id: String,
    pub collection_num: i64,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub num: i64,
    pub id: String,
    pub collection_num: i64,
}

/// A complete research database in import form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub libraries: Vec<Library>,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub episodes: Vec<Episode>,
    #[serde(default)]
    pub transcripts: Vec<Transcript>,
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub quotes: Vec<Quote>,
    #[serde(default)]
    pub clips: Vec<Clip>,
    #[serde(default)]
    pub snapshots: Vec<Snapshot>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Dataset {
    /// Parse a dataset from JSON or YAML, detected by content
    pub fn parse(content: &str) -> crate::error::Result<Self> {
        if content.trim_start().starts_with('{') {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(serde_yaml::from_str(content)?)
        }
    }
}
