use std::fs;

use serde_json::Value;
use tempfile::tempdir;

mod common;

#[test]
fn test_tree_prints_full_outline() {
    let dir = tempdir().unwrap();
    let source = common::write_sample(dir.path());

    let output = common::dexview(dir.path())
        .args(["tree"])
        .arg(&source)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "a\n  B\n    foo\n    bar\n  C\n    baz\nx\n  Y\n    foo\n"
    );
}

#[test]
fn test_tree_filter_keeps_matching_branches() {
    let dir = tempdir().unwrap();
    let source = common::write_sample(dir.path());

    let output = common::dexview(dir.path())
        .args(["tree", "--filter", "FOO"])
        .arg(&source)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "a\n  B\n    foo\nx\n  Y\n    foo\n");
}

#[test]
fn test_tree_json_outline() {
    let dir = tempdir().unwrap();
    let source = common::write_sample(dir.path());

    let output = common::dexview(dir.path())
        .args(["tree", "--json", "--filter", "baz"])
        .arg(&source)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["name"], "a");
    assert_eq!(json[0]["kind"], "package");
    assert_eq!(json[0]["children"][0]["name"], "C");
    assert_eq!(json[0]["children"][0]["children"][0]["name"], "baz");
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[test]
fn test_tree_rejects_malformed_source() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("broken.json");
    fs::write(&source, "{\"classes\": [").unwrap();

    let output = common::dexview(dir.path())
        .args(["tree"])
        .arg(&source)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid symbol source"), "stderr: {}", stderr);
}
