//! Tests for output module

use super::*;
use crate::types::{Group, Record};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn tweet(id: &str, timestamp: &str) -> Record {
    Record::new()
        .with_field("tweet_id", id)
        .with_field("timestamp", timestamp)
        .with_field("text", format!("tweet {id}"))
}

fn group(date: &str, ids: &[&str]) -> Group {
    Group::new(
        date,
        ids.iter()
            .map(|id| tweet(id, &format!("{date} 12:00:00 +0000")))
            .collect(),
    )
}

fn read_group(path: &std::path::Path) -> Group {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// ============================================================================
// Directory Reset Tests
// ============================================================================

#[test]
fn test_reset_creates_missing_dir() {
    let root = tempdir().unwrap();
    let out = root.path().join("out");

    reset_output_dir(&out).unwrap();
    assert!(out.is_dir());
    assert_eq!(count_output_files(&out).unwrap(), 0);
}

#[test]
fn test_reset_removes_existing_tree() {
    let root = tempdir().unwrap();
    let out = root.path().join("out");
    fs::create_dir_all(out.join("nested/deeper")).unwrap();
    fs::write(out.join("stale.json"), "{}").unwrap();
    fs::write(out.join("nested/deeper/file.txt"), "x").unwrap();

    reset_output_dir(&out).unwrap();

    assert!(out.is_dir());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[test]
fn test_reset_leaves_no_stale_sibling() {
    let root = tempdir().unwrap();
    let out = root.path().join("out");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("a.json"), "{}").unwrap();

    reset_output_dir(&out).unwrap();

    let names: Vec<String> = fs::read_dir(root.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["out".to_string()]);
}

#[test]
fn test_reset_clears_leftover_stale_sibling() {
    let root = tempdir().unwrap();
    let out = root.path().join("out");
    let leftover = root.path().join(".out.stale");
    fs::create_dir_all(&leftover).unwrap();
    fs::write(leftover.join("old.json"), "{}").unwrap();
    fs::create_dir_all(&out).unwrap();

    reset_output_dir(&out).unwrap();

    assert!(!leftover.exists());
    assert!(out.is_dir());
}

#[test]
fn test_reset_replaces_regular_file() {
    let root = tempdir().unwrap();
    let out = root.path().join("out");
    fs::write(&out, "not a dir").unwrap();

    reset_output_dir(&out).unwrap();
    assert!(out.is_dir());
    assert!(!root.path().join(".out.stale").exists());

    // A second run must not trip over anything the first one left behind
    reset_output_dir(&out).unwrap();
    assert!(out.is_dir());
    assert!(!root.path().join(".out.stale").exists());
}

#[test]
fn test_reset_clears_leftover_stale_file() {
    let root = tempdir().unwrap();
    let out = root.path().join("out");
    let leftover = root.path().join(".out.stale");
    fs::write(&leftover, "old").unwrap();

    reset_output_dir(&out).unwrap();

    assert!(!leftover.exists());
    assert!(out.is_dir());
}

#[test]
fn test_reset_is_repeatable() {
    let root = tempdir().unwrap();
    let out = root.path().join("out");

    reset_output_dir(&out).unwrap();
    reset_output_dir(&out).unwrap();
    assert!(out.is_dir());
}

// ============================================================================
// File Writing Tests
// ============================================================================

#[test]
fn test_write_group_file_round_trip() {
    let root = tempdir().unwrap();
    let path = root.path().join("2020-01-01.json");
    let original = group("2020-01-01", &["1", "2"]);

    write_group_file(&path, &original).unwrap();

    let parsed = read_group(&path);
    assert_eq!(parsed.date, original.date);
    assert_eq!(parsed.items, original.items);
}

#[test]
fn test_write_group_file_is_pretty_and_sorted() {
    let root = tempdir().unwrap();
    let path = root.path().join("2020-01-01.json");

    write_group_file(&path, &group("2020-01-01", &["9"])).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let expected = r#"{
  "date": "2020-01-01",
  "items": [
    {
      "text": "tweet 9",
      "timestamp": "2020-01-01 12:00:00 +0000",
      "tweet_id": "9"
    }
  ]
}
"#;
    assert_eq!(text, expected);
}

#[test]
fn test_write_group_file_overwrites() {
    let root = tempdir().unwrap();
    let path = root.path().join("2020-01-01.json");

    write_group_file(&path, &group("2020-01-01", &["1", "2"])).unwrap();
    write_group_file(&path, &group("2020-01-01", &["3"])).unwrap();

    let parsed = read_group(&path);
    assert_eq!(parsed.items.len(), 1);
    assert_eq!(parsed.items[0].get("tweet_id"), Some("3"));
}

#[test]
fn test_write_group_file_missing_dir_fails() {
    let root = tempdir().unwrap();
    let path = root.path().join("missing/2020-01-01.json");

    let err = write_group_file(&path, &group("2020-01-01", &["1"])).unwrap_err();
    assert!(err.to_string().contains("Failed to create"));
}

// ============================================================================
// GroupWriter Tests
// ============================================================================

#[test]
fn test_group_writer_distinct_dates() {
    let root = tempdir().unwrap();
    let out = root.path().join("out");

    let mut writer = GroupWriter::create(&out).unwrap();
    let first = writer.write(&group("2020-01-01", &["1", "2"])).unwrap();
    let second = writer.write(&group("2020-01-02", &["3"])).unwrap();

    assert_eq!(first, out.join("2020-01-01.json"));
    assert_eq!(second, out.join("2020-01-02.json"));

    let stats = writer.finish().unwrap();
    assert_eq!(
        stats,
        WriteStats {
            groups_written: 2,
            collisions: 0,
            files_present: 2,
        }
    );
}

#[test]
fn test_group_writer_collision_last_write_wins() {
    let root = tempdir().unwrap();
    let out = root.path().join("out");

    let mut writer = GroupWriter::create(&out).unwrap();
    writer.write(&group("2020-01-01", &["1"])).unwrap();
    writer.write(&group("2020-01-02", &["2"])).unwrap();
    writer.write(&group("2020-01-01", &["3"])).unwrap();
    assert_eq!(writer.collisions(), 1);

    let stats = writer.finish().unwrap();
    assert_eq!(stats.groups_written, 3);
    assert_eq!(stats.collisions, 1);
    assert!(stats.files_present < stats.groups_written);
    assert_eq!(stats.files_present, 2);

    let survivor = read_group(&out.join("2020-01-01.json"));
    assert_eq!(survivor.items.len(), 1);
    assert_eq!(survivor.items[0].get("tweet_id"), Some("3"));
}

#[test]
fn test_group_writer_resets_dir() {
    let root = tempdir().unwrap();
    let out = root.path().join("out");
    fs::create_dir_all(&out).unwrap();
    fs::write(out.join("stale.json"), "{}").unwrap();

    let writer = GroupWriter::create(&out).unwrap();
    assert_eq!(writer.dir(), out.as_path());
    assert!(!out.join("stale.json").exists());
    assert_eq!(writer.finish().unwrap().files_present, 0);
}

#[test]
fn test_count_output_files_ignores_subdirs() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("a.json"), "{}").unwrap();
    fs::write(root.path().join("b.json"), "{}").unwrap();
    fs::create_dir(root.path().join("sub")).unwrap();

    assert_eq!(count_output_files(root.path()).unwrap(), 2);
}
