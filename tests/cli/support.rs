use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use tempfile::{tempdir, TempDir};

/// Get a Command for notereport
pub fn notereport() -> Command {
    cargo_bin_cmd!("notereport")
}

/// Three notes under one library/episode/transcript chain, one under a
/// nested collection, and one orphan.
pub const SAMPLE_DATASET: &str = r#"{
  "libraries": [{"num": 1, "id": "Interviews"}],
  "episodes": [{"num": 3, "id": "Session A", "library_num": 1}],
  "transcripts": [{"num": 7, "id": "Session A Transcript", "episode_num": 3}],
  "collections": [
    {"num": 1, "id": "Themes"},
    {"num": 2, "id": "Trust", "parent_num": 1}
  ],
  "notes": [
    {"num": 10, "id": "Library note", "author": "kw", "text": "About the library.",
     "parent": {"kind": "library", "num": 1}},
    {"num": 12, "id": "Episode note", "author": "ab", "text": "Audio drops at 12:00.",
     "parent": {"kind": "episode", "num": 3}},
    {"num": 13, "id": "Transcript note", "author": "ab", "text": "Mentions trust twice.",
     "parent": {"kind": "transcript", "num": 7}},
    {"num": 14, "id": "Collection note", "author": "kw", "text": "Notes on the Trust theme.",
     "parent": {"kind": "collection", "num": 2}},
    {"num": 18, "id": "Orphan note", "author": "zz", "text": "No parent at all."}
  ]
}"#;

/// Create an initialized database loaded with [`SAMPLE_DATASET`]
pub fn setup_db() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let db = dir.path().join("research.db");
    let data = dir.path().join("data.json");
    fs::write(&data, SAMPLE_DATASET).unwrap();

    notereport()
        .args(["--db", db.to_str().unwrap(), "init"])
        .assert()
        .success();
    notereport()
        .args(["--db", db.to_str().unwrap(), "load", data.to_str().unwrap()])
        .assert()
        .success();

    (dir, db)
}

/// Command preconfigured with `--db` and an isolated config directory
pub fn with_db(db: &Path) -> Command {
    let mut cmd = notereport();
    let config_dir = db.parent().unwrap_or(db).join("config");
    cmd.env("NOTEREPORT_CONFIG_DIR", config_dir)
        .args(["--db", db.to_str().unwrap()]);
    cmd
}

/// Run a JSON report and return the parsed output
pub fn report_json(db: &Path, args: &[&str]) -> serde_json::Value {
    let output = with_db(db)
        .args(["--format", "json", "report"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "report failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

/// Note numbers of the note headers in a JSON report, in order
pub fn note_nums(report: &serde_json::Value) -> Vec<i64> {
    report["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|b| b["block"] == "note_header")
        .map(|b| b["num"].as_i64().unwrap())
        .collect()
}
