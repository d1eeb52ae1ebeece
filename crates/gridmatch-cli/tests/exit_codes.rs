//! Exit codes of `gridmatch compare`

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn compare(expected: &Path, actual: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gridmatch"))
        .arg("compare")
        .arg(expected)
        .arg(actual)
        .output()
        .expect("failed to run gridmatch")
}

fn fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn equal_sheets_exit_0() {
    let dir = tempfile::tempdir().unwrap();
    let expected = fixture(&dir, "expected.csv", "Item,Qty\nWidget,4\n");
    let actual = fixture(&dir, "actual.csv", "Item,Qty\nWidget,4\n");

    let output = compare(&expected, &actual);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "OK");
}

#[test]
fn mismatch_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let expected = fixture(&dir, "expected.csv", "Item,Qty\nWidget,4\n");
    let actual = fixture(&dir, "actual.csv", "Item,Qty\nWidget,5\n");

    let output = compare(&expected, &actual);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "Cell at B2 has different NUMERIC values: expected: '4' actual '5'"
    );
}

#[test]
fn missing_file_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let expected = fixture(&dir, "expected.csv", "Item,Qty\n");
    let missing = dir.path().join("missing.csv");

    let output = compare(&expected, &missing);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read"), "stderr: {stderr}");
    assert!(stderr.contains("missing.csv"), "stderr: {stderr}");
}
