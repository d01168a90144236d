use crate::db::fixtures::sample_database;
use crate::model::ReportScope;
use crate::report::FilterEntry;
use crate::repository::FilterConfigStore;

fn entries() -> Vec<FilterEntry> {
    vec![
        FilterEntry::new(10, "Library note", "Libraries Interviews", true),
        FilterEntry::new(12, "Episode note", "Episode Interviews > Session A", false),
    ]
}

#[test]
fn test_save_and_load_filter_config() {
    let db = sample_database();

    db.save_filter_config(ReportScope::Root, "Default", &entries())
        .unwrap();

    let loaded = db
        .load_filter_config(ReportScope::Root, "Default")
        .unwrap()
        .unwrap();
    assert_eq!(loaded, entries());
}

#[test]
fn test_filter_configs_are_per_scope() {
    let db = sample_database();
    db.save_filter_config(ReportScope::Root, "Default", &entries())
        .unwrap();

    assert!(db
        .load_filter_config(ReportScope::Episode, "Default")
        .unwrap()
        .is_none());
    assert!(db
        .filter_config_names(ReportScope::Episode)
        .unwrap()
        .is_empty());
}

#[test]
fn test_filter_config_names_sorted() {
    let db = sample_database();
    db.save_filter_config(ReportScope::Clip, "zeta", &entries())
        .unwrap();
    db.save_filter_config(ReportScope::Clip, "alpha", &entries())
        .unwrap();

    assert_eq!(
        db.filter_config_names(ReportScope::Clip).unwrap(),
        vec!["alpha", "zeta"]
    );
}

#[test]
fn test_save_replaces_existing_config() {
    let db = sample_database();
    db.save_filter_config(ReportScope::Root, "mine", &entries())
        .unwrap();
    db.save_filter_config(ReportScope::Root, "mine", &entries()[..1])
        .unwrap();

    let loaded = db
        .load_filter_config(ReportScope::Root, "mine")
        .unwrap()
        .unwrap();
    assert_eq!(loaded.len(), 1);
}

#[test]
fn test_delete_filter_config() {
    let db = sample_database();
    db.save_filter_config(ReportScope::Root, "mine", &entries())
        .unwrap();

    assert!(db.delete_filter_config(ReportScope::Root, "mine").unwrap());
    assert!(!db.delete_filter_config(ReportScope::Root, "mine").unwrap());
}
