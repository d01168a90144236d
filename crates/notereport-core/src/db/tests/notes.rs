use crate::db::fixtures::sample_database;
use crate::error::NoteReportError;
use crate::model::{NoteParent, ParentKind};
use crate::repository::NoteRepository;

#[test]
fn test_list_notes_by_kind() {
    let db = sample_database();

    let records = db.list_notes(ParentKind::Transcript, None).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].num, 13);
    assert_eq!(records[0].parent_kind, Some(ParentKind::Transcript));
}

#[test]
fn test_list_notes_search_is_case_insensitive() {
    let db = sample_database();

    let hits = db.list_notes(ParentKind::Collection, Some("TRUST")).unwrap();
    assert_eq!(hits.len(), 1);

    let misses = db.list_notes(ParentKind::Library, Some("trust")).unwrap();
    assert!(misses.is_empty());
}

#[test]
fn test_list_notes_search_wildcards_are_literal() {
    let db = sample_database();
    let hits = db.list_notes(ParentKind::Episode, Some("12_00")).unwrap();
    assert!(hits.is_empty());
}

#[test]
fn test_list_notes_orders_by_id() {
    let db = sample_database();
    db.insert_note(&crate::model::Note {
        num: 30,
        id: "a later note".into(),
        author: "kw".into(),
        text: String::new(),
        parent: NoteParent::Library(2),
    })
    .unwrap();

    let ids: Vec<String> = db
        .list_notes(ParentKind::Library, None)
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();

    assert_eq!(ids, vec!["a later note", "Library note"]);
}

#[test]
fn test_load_note_round_trips_parent() {
    let db = sample_database();

    let note = db.load_note(15).unwrap();
    assert_eq!(note.parent, NoteParent::Quote(5));
    assert_eq!(note.author, "cd");

    let orphan = db.load_note(18).unwrap();
    assert_eq!(orphan.parent, NoteParent::None);
}

#[test]
fn test_load_missing_entity_is_not_found() {
    let db = sample_database();
    let err = db.load_episode(404).unwrap_err();
    assert!(matches!(
        err,
        NoteReportError::EntityNotFound { ref kind, num: 404 } if kind == "episode"
    ));
}

#[test]
fn test_skip_text_leaves_text_out() {
    let db = sample_database();

    assert!(db.load_transcript(7, true).unwrap().text.is_none());
    assert_eq!(
        db.load_transcript(7, false).unwrap().text.as_deref(),
        Some("Full transcript text")
    );
    assert!(db.load_clip(6, true).unwrap().text.is_none());
    assert!(db.load_quote(5, true).unwrap().text.is_none());
}

#[test]
fn test_collection_node_path_walks_parents() {
    let db = sample_database();
    assert_eq!(db.collection_node_path(2).unwrap(), vec!["Themes", "Trust"]);
    assert_eq!(db.collection_node_string(2).unwrap(), "Themes > Trust");
    assert_eq!(db.collection_node_string(1).unwrap(), "Themes");
}

#[test]
fn test_collection_cycle_is_reported() {
    let db = sample_database();
    db.insert_collection(&crate::model::Collection {
        num: 1,
        id: "Themes".into(),
        parent_num: Some(2),
    })
    .unwrap();

    let err = db.collection_node_path(2).unwrap_err();
    assert!(matches!(err, NoteReportError::CollectionCycle { num: 2 }));
}
