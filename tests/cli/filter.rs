//! Tests for `notereport filter`

use crate::support::{report_json, setup_db, with_db};
use predicates::prelude::*;

#[test]
fn test_list_empty() {
    let (_dir, db) = setup_db();

    with_db(&db)
        .args(["filter", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No filter configurations"));
}

#[test]
fn test_list_show_delete() {
    let (_dir, db) = setup_db();
    report_json(&db, &["--exclude", "12", "--save-as", "Focus"]);

    with_db(&db)
        .args(["filter", "list"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Focus\n"));

    with_db(&db)
        .args(["filter", "show", "Focus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] 10 Library note (Libraries Interviews)"))
        .stdout(predicate::str::contains("[ ] 12 Episode note"));

    with_db(&db)
        .args(["filter", "delete", "Focus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted filter configuration 'Focus'"));

    with_db(&db)
        .args(["filter", "delete", "Focus"])
        .assert()
        .code(3);
}

#[test]
fn test_show_json() {
    let (_dir, db) = setup_db();
    report_json(&db, &["--only", "14", "--save-as", "One"]);

    let output = with_db(&db)
        .args(["--format", "json", "filter", "show", "One"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 4);
    let included: Vec<i64> = entries
        .iter()
        .filter(|e| e["included"] == true)
        .map(|e| e["note_num"].as_i64().unwrap())
        .collect();
    assert_eq!(included, vec![14]);
}

#[test]
fn test_configs_are_scoped() {
    let (_dir, db) = setup_db();
    report_json(&db, &["--scope", "episode", "--save-as", "Ep"]);

    with_db(&db)
        .args(["filter", "list", "--scope", "episode"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ep"));

    with_db(&db)
        .args(["filter", "show", "Ep"])
        .assert()
        .code(3);
}
