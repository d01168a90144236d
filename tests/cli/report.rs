//! Tests for `notereport report`

use std::fs;

use crate::support::{note_nums, report_json, setup_db, with_db};
use predicates::prelude::*;

#[test]
fn test_root_report_lists_parented_notes_in_kind_order() {
    let (_dir, db) = setup_db();

    let report = report_json(&db, &[]);

    assert_eq!(note_nums(&report), vec![10, 12, 13, 14]);
    assert_eq!(report["title"], "Notes Report");
    assert_eq!(report["scope"], "root");
    assert!(report["config_name"].is_null());
}

#[test]
fn test_scoped_report() {
    let (_dir, db) = setup_db();

    let report = report_json(&db, &["--scope", "episode"]);
    assert_eq!(note_nums(&report), vec![12]);

    let report = report_json(&db, &["--scope", "quote"]);
    assert!(note_nums(&report).is_empty());
}

#[test]
fn test_search_filters_and_labels() {
    let (_dir, db) = setup_db();

    let report = report_json(&db, &["--search", "trust"]);

    assert_eq!(note_nums(&report), vec![13, 14]);
    assert_eq!(report["blocks"][1]["block"], "subtitle");
    assert_eq!(report["blocks"][1]["text"], "Search Text: trust");
}

#[test]
fn test_transcript_note_parent_lines() {
    let (_dir, db) = setup_db();

    let report = report_json(&db, &["--scope", "transcript"]);
    let parents: Vec<(String, String)> = report["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|b| b["block"] == "parent_line")
        .map(|b| {
            (
                b["kind"].as_str().unwrap().to_string(),
                b["value"].as_str().unwrap().to_string(),
            )
        })
        .collect();

    assert_eq!(
        parents,
        vec![
            ("library".to_string(), "Interviews".to_string()),
            ("episode".to_string(), "Session A".to_string()),
            ("transcript".to_string(), "Session A Transcript".to_string()),
        ]
    );
}

#[test]
fn test_human_report_layout() {
    let (_dir, db) = setup_db();

    with_db(&db)
        .args(["report", "--title", "Trust Notes", "--scope", "collection"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trust Notes"))
        .stdout(predicate::str::contains("==========="))
        .stdout(predicate::str::contains("Collection note"))
        .stdout(predicate::str::contains("Collection: Themes > Trust"))
        .stdout(predicate::str::contains("Note Taker: kw"))
        .stdout(predicate::str::contains("Notes on the Trust theme."));
}

#[test]
fn test_output_width_from_settings() {
    let (dir, db) = setup_db();
    let config = dir.path().join("narrow.toml");
    fs::write(&config, "[output]\nwidth = 20\n").unwrap();

    // "Notes Report" is 12 wide; centred in 20 columns it is indented by 4
    with_db(&db)
        .args(["--config", config.to_str().unwrap(), "report"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("    Notes Report\n"));
}

#[test]
fn test_missing_settings_file_is_an_error() {
    let (dir, db) = setup_db();
    let config = dir.path().join("nope.toml");

    with_db(&db)
        .args(["--config", config.to_str().unwrap(), "report"])
        .assert()
        .failure();
}

#[test]
fn test_exclude_and_only() {
    let (_dir, db) = setup_db();

    let report = report_json(&db, &["--exclude", "12", "--exclude", "14"]);
    assert_eq!(note_nums(&report), vec![10, 13]);

    let report = report_json(&db, &["--only", "14", "--only", "10"]);
    assert_eq!(note_nums(&report), vec![10, 14]);
}

#[test]
fn test_unknown_note_in_selection() {
    let (_dir, db) = setup_db();

    with_db(&db)
        .args(["report", "--exclude", "18"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("note in report"));
}

#[test]
fn test_saved_default_applies_on_open() {
    let (_dir, db) = setup_db();

    let saved = report_json(&db, &["--exclude", "12", "--save-as", "Default"]);
    assert_eq!(note_nums(&saved), vec![10, 13, 14]);
    assert_eq!(saved["config_name"], "Default");

    let reopened = report_json(&db, &[]);
    assert_eq!(note_nums(&reopened), vec![10, 13, 14]);
    assert_eq!(reopened["config_name"], "Default");

    let label = reopened["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["block"] == "config_label")
        .unwrap();
    assert_eq!(label["text"], "Filter Configuration: Default");

    let bypassed = report_json(&db, &["--no-default-filter"]);
    assert_eq!(note_nums(&bypassed), vec![10, 12, 13, 14]);
}

#[test]
fn test_default_config_is_per_scope() {
    let (_dir, db) = setup_db();

    report_json(&db, &["--exclude", "12", "--save-as", "Default"]);

    let episode = report_json(&db, &["--scope", "episode"]);
    assert_eq!(note_nums(&episode), vec![12]);
    assert!(episode["config_name"].is_null());
}

#[test]
fn test_named_filter_config() {
    let (_dir, db) = setup_db();

    report_json(&db, &["--only", "13", "--save-as", "Just transcript"]);

    let report = report_json(&db, &["--filter-config", "Just transcript"]);
    assert_eq!(note_nums(&report), vec![13]);
    assert_eq!(report["config_name"], "Just transcript");

    with_db(&db)
        .args(["report", "--filter-config", "Nope"])
        .assert()
        .code(3);
}

#[test]
fn test_custom_default_name_from_settings() {
    let (dir, db) = setup_db();
    let config = dir.path().join("settings.toml");
    fs::write(&config, "default_filter_config = \"Mine\"\n").unwrap();

    report_json(&db, &["--only", "10", "--save-as", "Mine"]);

    let output = with_db(&db)
        .args(["--config", config.to_str().unwrap(), "--format", "json", "report"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(note_nums(&report), vec![10]);
}

#[test]
fn test_blank_save_name_rejected() {
    let (_dir, db) = setup_db();

    with_db(&db)
        .args(["report", "--save-as", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("filter configuration name"));

    with_db(&db)
        .args(["filter", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No filter configurations"));
}
