//! Tests for `notereport init`, `load` and `stats`

use std::fs;

use crate::support::{notereport, setup_db, with_db};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_init_creates_database() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("new.db");

    notereport()
        .args(["--db", db.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized database"));

    assert!(db.exists());
}

#[test]
fn test_init_is_idempotent() {
    let (_dir, db) = setup_db();

    with_db(&db).arg("init").assert().success();
    with_db(&db)
        .args(["--format", "json", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"notes\": 5"));
}

#[test]
fn test_load_requires_init() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("missing.db");
    let data = dir.path().join("data.json");
    fs::write(&data, "{}").unwrap();

    notereport()
        .args(["--db", db.to_str().unwrap(), "load", data.to_str().unwrap()])
        .assert()
        .code(3);
}

#[test]
fn test_load_yaml_dataset() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("yaml.db");
    let data = dir.path().join("data.yaml");
    fs::write(
        &data,
        "libraries:\n  - num: 1\n    id: Interviews\nnotes:\n  - num: 5\n    id: First\n    author: kw\n    text: hello\n    parent:\n      kind: library\n      num: 1\n",
    )
    .unwrap();

    notereport()
        .args(["--db", db.to_str().unwrap(), "init"])
        .assert()
        .success();
    notereport()
        .args(["--db", db.to_str().unwrap(), "load", data.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 notes)"));

    // Read back directly to check the parent column landed
    let conn = rusqlite::Connection::open(&db).unwrap();
    let library_num: i64 = conn
        .query_row("SELECT library_num FROM notes WHERE num = 5", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(library_num, 1);
}

#[test]
fn test_load_malformed_file_fails() {
    let (dir, db) = setup_db();
    let data = dir.path().join("bad.json");
    fs::write(&data, "{ not json").unwrap();

    with_db(&db)
        .args(["load", data.to_str().unwrap()])
        .assert()
        .code(1);
}

#[test]
fn test_stats_human() {
    let (_dir, db) = setup_db();

    with_db(&db)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"notes\s+5").unwrap())
        .stdout(predicate::str::is_match(r"collections\s+2").unwrap());
}
