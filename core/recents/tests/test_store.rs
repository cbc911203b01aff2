//! FILENAME: tests/test_store.rs
//! Integration tests for loading, resetting and recording into the config file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use recents::{ConfigDocument, RecentEntry, RecentsStore, MAX_RECENTS};
use tempfile::TempDir;

const DEFAULT_TEXT: &str = "{\n  \"recent\": []\n}";

/// Modification time, plus the inode on unix. Every save renames a new
/// file into place, so a rewrite changes the inode.
#[cfg(unix)]
fn file_identity(path: &Path) -> (SystemTime, u64) {
    use std::os::unix::fs::MetadataExt;
    let meta = fs::metadata(path).unwrap();
    (meta.modified().unwrap(), meta.ino())
}

#[cfg(not(unix))]
fn file_identity(path: &Path) -> (SystemTime, u64) {
    (fs::metadata(path).unwrap().modified().unwrap(), 0)
}

fn store_in(dir: &TempDir) -> (RecentsStore, PathBuf) {
    let path = dir.path().join(".tailscale_browser");
    (RecentsStore::new(&path), path)
}

// ============================================================================
// DEFAULTING & RECOVERY TESTS
// ============================================================================

#[test]
fn test_load_missing_creates_default() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_in(&dir);
    assert!(!path.exists());

    let first = store.load();
    assert_eq!(first, ConfigDocument::new());
    assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_TEXT);

    let created = file_identity(&path);

    let second = store.load();
    assert_eq!(second, first);
    assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_TEXT);
    assert_eq!(file_identity(&path), created, "second load must not rewrite the file");
}

#[test]
fn test_load_drops_malformed_entries_keeps_rest() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_in(&dir);
    fs::write(
        &path,
        r#"{"recent": [{"name": "NAS", "url": "http://nas", "pinned": true}, {"name": 7}], "zoom": 1.5}"#,
    )
    .unwrap();

    let doc = store.load();
    assert_eq!(doc.recent.len(), 1);
    assert_eq!(doc.recent[0].url, "http://nas");

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "recent": [{ "name": "NAS", "url": "http://nas", "pinned": true }],
            "zoom": 1.5
        })
    );
}

#[test]
fn test_load_non_list_recent_keeps_other_keys() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_in(&dir);
    fs::write(&path, r#"{"recent": "oops", "theme": "dark"}"#).unwrap();

    let doc = store.load();
    assert!(doc.recent.is_empty());

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({ "recent": [], "theme": "dark" }));
}

#[test]
fn test_load_not_json_resets() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_in(&dir);
    fs::write(&path, "not json").unwrap();

    let doc = store.load();
    assert!(doc.recent.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_TEXT);
}

#[test]
fn test_load_array_root_resets() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_in(&dir);
    fs::write(&path, "[1,2,3]").unwrap();

    let doc = store.load();
    assert_eq!(doc, ConfigDocument::new());
    assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_TEXT);
}

#[test]
fn test_load_missing_recent_key_leaves_file_alone() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_in(&dir);
    let original = r#"{"zoom": 1.5}"#;
    fs::write(&path, original).unwrap();

    let doc = store.load();
    assert!(doc.recent.is_empty());
    assert_eq!(doc.extra.get("zoom").and_then(|v| v.as_f64()), Some(1.5));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_load_existing_entries() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_in(&dir);
    fs::write(
        &path,
        r#"{"recent": [{"name": "NAS", "url": "http://100.64.0.7"}, {"name": "Pi", "url": "http://pi:8080"}]}"#,
    )
    .unwrap();

    let doc = store.load();
    assert_eq!(
        doc.recent,
        vec![
            RecentEntry::new("NAS", "http://100.64.0.7"),
            RecentEntry::new("Pi", "http://pi:8080"),
        ]
    );
}

// ============================================================================
// RECORD TESTS
// ============================================================================

#[test]
fn test_record_writes_pretty_json() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_in(&dir);
    let mut doc = store.load();

    let changed = store
        .record(&mut doc, RecentEntry::new("Router", "http://192.168.1.1"))
        .unwrap();
    assert!(changed);

    let expected = "{\n  \"recent\": [\n    {\n      \"name\": \"Router\",\n      \"url\": \"http://192.168.1.1\"\n    }\n  ]\n}";
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    assert_eq!(store.load(), doc);
}

#[test]
fn test_record_caps_at_ten_most_recent() {
    let dir = TempDir::new().unwrap();
    let (store, _path) = store_in(&dir);
    let mut doc = store.load();

    for i in 0..15 {
        let entry = RecentEntry::new(format!("host{}", i), format!("http://100.64.0.{}", i));
        assert!(store.record(&mut doc, entry).unwrap());
    }

    assert_eq!(doc.recent.len(), MAX_RECENTS);
    let names: Vec<&str> = doc.recent.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["host14", "host13", "host12", "host11", "host10", "host9", "host8", "host7", "host6", "host5"]
    );
    assert_eq!(store.load().recent, doc.recent);
}

#[test]
fn test_record_duplicate_url_is_ignored() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_in(&dir);
    let mut doc = store.load();
    store.record(&mut doc, RecentEntry::new("A", "http://a")).unwrap();
    store.record(&mut doc, RecentEntry::new("B", "http://b")).unwrap();
    let before = doc.clone();
    let text_before = fs::read_to_string(&path).unwrap();

    let changed = store.record(&mut doc, RecentEntry::new("A again", "http://a")).unwrap();

    assert!(!changed);
    assert_eq!(doc, before);
    assert_eq!(fs::read_to_string(&path).unwrap(), text_before);
}

#[test]
fn test_record_without_name_is_not_persisted() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_in(&dir);
    let mut doc = store.load();

    let changed = store.record(&mut doc, RecentEntry::new("", "http://10.0.0.1")).unwrap();

    assert!(!changed);
    assert!(doc.recent.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_TEXT);
}

#[test]
fn test_record_preserves_unknown_keys() {
    let dir = TempDir::new().unwrap();
    let (store, path) = store_in(&dir);
    fs::write(&path, r#"{"recent": [], "window": {"width": 900}}"#).unwrap();
    let mut doc = store.load();

    store.record(&mut doc, RecentEntry::new("NAS", "http://nas")).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["window"]["width"], 900);
    assert_eq!(value["recent"][0]["name"], "NAS");
}

#[test]
fn test_record_write_failure_keeps_memory_state() {
    let dir = TempDir::new().unwrap();
    let store = RecentsStore::new(dir.path().join("missing-dir").join(".tailscale_browser"));
    let mut doc = ConfigDocument::new();

    let result = store.record(&mut doc, RecentEntry::new("NAS", "http://nas"));

    assert!(result.is_err());
    assert_eq!(doc.recent.len(), 1);
}
