//! Shared test database

use super::Database;
use crate::model::{
    Clip, Collection, Dataset, Document, Episode, Library, Note, NoteParent, Quote, Snapshot,
    Transcript,
};

fn note(num: i64, id: &str, author: &str, text: &str, parent: NoteParent) -> Note {
    Note {
        num,
        id: id.to_string(),
        author: author.to_string(),
        text: text.to_string(),
        parent,
    }
}

/// One note per parent kind (nums 10..=17, in kind order) plus orphan 18
pub(crate) fn sample_dataset() -> Dataset {
    Dataset {
        libraries: vec![
            Library {
                num: 1,
                id: "Interviews".into(),
            },
            Library {
                num: 2,
                id: "Focus Groups".into(),
            },
        ],
        documents: vec![Document {
            num: 4,
            id: "Consent Form".into(),
            library_num: 1,
        }],
        episodes: vec![Episode {
            num: 3,
            id: "Session A".into(),
            library_num: 1,
        }],
        transcripts: vec![Transcript {
            num: 7,
            id: "Session A Transcript".into(),
            episode_num: 3,
            text: Some("Full transcript text".into()),
        }],
        collections: vec![
            Collection {
                num: 1,
                id: "Themes".into(),
                parent_num: None,
            },
            Collection {
                num: 2,
                id: "Trust".into(),
                parent_num: Some(1),
            },
        ],
        quotes: vec![Quote {
            num: 5,
            id: "Opening Quote".into(),
            collection_num: 2,
            text: Some("quoted words".into()),
        }],
        clips: vec![Clip {
            num: 6,
            id: "Clip 01".into(),
            collection_num: 2,
            text: Some("clip transcript".into()),
        }],
        snapshots: vec![Snapshot {
            num: 8,
            id: "Whiteboard".into(),
            collection_num: 1,
        }],
        notes: vec![
            note(10, "Library note", "kw", "About the library.\n\n", NoteParent::Library(1)),
            note(11, "Document note", "kw", "Signed copies only.", NoteParent::Document(4)),
            note(12, "Episode note", "ab", "Audio drops at 12:00.", NoteParent::Episode(3)),
            note(13, "Transcript note", "ab", "Mentions trust twice.", NoteParent::Transcript(7)),
            note(14, "Collection note", "kw", "Notes on the Trust theme.", NoteParent::Collection(2)),
            note(15, "Quote note", "cd", "Strong opener.", NoteParent::Quote(5)),
            note(16, "Clip note", "cd", "trust issues  \n", NoteParent::Clip(6)),
            note(17, "Snapshot note", "kw", "Photo of the board.", NoteParent::Snapshot(8)),
            note(18, "Orphan note", "zz", "No parent at all.", NoteParent::None),
        ],
    }
}

pub(crate) fn sample_database() -> Database {
    let db = Database::open_in_memory().unwrap();
    db.import(&sample_dataset()).unwrap();
    db
}
