//! Resolving the ownership chain above a note

use std::collections::BTreeMap;

use crate::error::Result;
use crate::model::{Note, NoteParent, ParentKind};
use crate::repository::{NoteRepository, NODE_PATH_SEPARATOR};

/// A note's ancestors and breadcrumb
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedParent {
    /// Kind of the note's direct parent; `None` for orphans
    pub kind: Option<ParentKind>,
    /// Display label per ancestor kind. Collections show their node path.
    pub ancestors: BTreeMap<ParentKind, String>,
    /// e.g. `Transcript Interviews > Session A > Session A Transcript`
    pub breadcrumb: String,
}

impl ResolvedParent {
    fn new(kind: ParentKind, chain: Vec<(ParentKind, String)>) -> Self {
        let path = chain
            .iter()
            .map(|(_, label)| label.as_str())
            .collect::<Vec<_>>()
            .join(NODE_PATH_SEPARATOR);
        Self {
            kind: Some(kind),
            breadcrumb: format!("{} {}", kind.breadcrumb_prefix(), path),
            ancestors: chain.into_iter().collect(),
        }
    }

    /// Ancestors in report order
    pub fn lines(&self) -> impl Iterator<Item = (ParentKind, &str)> {
        self.ancestors.iter().map(|(kind, label)| (*kind, label.as_str()))
    }
}

/// Load the records above `note`. Transcript, quote and clip text is
/// skipped. A missing ancestor is an error; a note without a parent is not.
pub fn resolve_parent<R: NoteRepository + ?Sized>(repo: &R, note: &Note) -> Result<ResolvedParent> {
    use ParentKind as K;

    let resolved = match note.parent {
        NoteParent::None => ResolvedParent::default(),
        NoteParent::Library(num) => {
            let library = repo.load_library(num)?;
            ResolvedParent::new(K::Library, vec![(K::Library, library.id)])
        }
        NoteParent::Document(num) => {
            let document = repo.load_document(num)?;
            let library = repo.load_library(document.library_num)?;
            ResolvedParent::new(
                K::Document,
                vec![(K::Library, library.id), (K::Document, document.id)],
            )
        }
        NoteParent::Episode(num) => {
            let episode = repo.load_episode(num)?;
            let library = repo.load_library(episode.library_num)?;
            ResolvedParent::new(
                K::Episode,
                vec![(K::Library, library.id), (K::Episode, episode.id)],
            )
        }
        NoteParent::Transcript(num) => {
            let transcript = repo.load_transcript(num, true)?;
            let episode = repo.load_episode(transcript.episode_num)?;
            let library = repo.load_library(episode.library_num)?;
            ResolvedParent::new(
                K::Transcript,
                vec![
                    (K::Library, library.id),
                    (K::Episode, episode.id),
                    (K::Transcript, transcript.id),
                ],
            )
        }
        NoteParent::Collection(num) => {
            let path = repo.collection_node_string(num)?;
            ResolvedParent::new(K::Collection, vec![(K::Collection, path)])
        }
        NoteParent::Quote(num) => {
            let quote = repo.load_quote(num, true)?;
            let path = repo.collection_node_string(quote.collection_num)?;
            ResolvedParent::new(K::Quote, vec![(K::Collection, path), (K::Quote, quote.id)])
        }
        NoteParent::Clip(num) => {
            let clip = repo.load_clip(num, true)?;
            let path = repo.collection_node_string(clip.collection_num)?;
            ResolvedParent::new(K::Clip, vec![(K::Collection, path), (K::Clip, clip.id)])
        }
        NoteParent::Snapshot(num) => {
            let snapshot = repo.load_snapshot(num)?;
            let path = repo.collection_node_string(snapshot.collection_num)?;
            ResolvedParent::new(
                K::Snapshot,
                vec![(K::Collection, path), (K::Snapshot, snapshot.id)],
            )
        }
    };

    tracing::trace!(note = note.num, kind = ?resolved.kind, breadcrumb = %resolved.breadcrumb, "resolve_parent");
    Ok(resolved)
}
