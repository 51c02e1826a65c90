//! Integration tests for the `convert-backslashes` and `fix-emphasis` subcommands

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_doc(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn read_doc(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[test]
fn test_convert_backslashes_walks_current_directory() {
    let temp_dir = tempdir().unwrap();
    write_doc(temp_dir.path(), "notes/a.md", "one\\\\two\n");
    write_doc(temp_dir.path(), "notes/b.md", "nothing here\n");
    write_doc(temp_dir.path(), "site/built.md", "keep\\\\this\n");
    write_doc(temp_dir.path(), "scripts/.venv/pkg.md", "keep\\\\this\n");
    write_doc(temp_dir.path(), ".hidden/c.md", "keep\\\\this\n");

    cargo_bin_cmd!("docstrict")
        .current_dir(temp_dir.path())
        .arg("convert-backslashes")
        .assert()
        .success()
        .stdout("Files modified: 1\n - notes/a.md\n");

    assert_eq!(read_doc(temp_dir.path(), "notes/a.md"), "one\ntwo\n");
    assert_eq!(read_doc(temp_dir.path(), "site/built.md"), "keep\\\\this\n");
    assert_eq!(read_doc(temp_dir.path(), "scripts/.venv/pkg.md"), "keep\\\\this\n");
    assert_eq!(read_doc(temp_dir.path(), ".hidden/c.md"), "keep\\\\this\n");
}

#[test]
fn test_convert_backslashes_skips_code() {
    let temp_dir = tempdir().unwrap();
    let content = "Path `C:\\\\tmp` stays\n```\nprintf(\"\\\\\");\n```\n";
    write_doc(temp_dir.path(), "a.md", content);

    cargo_bin_cmd!("docstrict")
        .current_dir(temp_dir.path())
        .arg("convert-backslashes")
        .assert()
        .success()
        .stdout("Files modified: 0\n");

    assert_eq!(read_doc(temp_dir.path(), "a.md"), content);
}

#[test]
fn test_fix_emphasis_on_explicit_path() {
    let temp_dir = tempdir().unwrap();
    write_doc(temp_dir.path(), "docs/a.md", "A ** strong ** word and `** code **`\n");
    write_doc(temp_dir.path(), "other/b.md", "** untouched **\n");

    cargo_bin_cmd!("docstrict")
        .current_dir(temp_dir.path())
        .args(["fix-emphasis", "docs"])
        .assert()
        .success()
        .stdout("Files modified: 1\n - docs/a.md\n");

    assert_eq!(
        read_doc(temp_dir.path(), "docs/a.md"),
        "A **strong** word and `** code **`\n"
    );
    assert_eq!(read_doc(temp_dir.path(), "other/b.md"), "** untouched **\n");
}

#[test]
fn test_fix_emphasis_dry_run() {
    let temp_dir = tempdir().unwrap();
    write_doc(temp_dir.path(), "a.md", "** x **\n");

    cargo_bin_cmd!("docstrict")
        .current_dir(temp_dir.path())
        .args(["fix-emphasis", "--dry-run"])
        .assert()
        .success()
        .stdout("Files that would be modified: 1\n - a.md\n");

    assert_eq!(read_doc(temp_dir.path(), "a.md"), "** x **\n");
}

#[test]
fn test_exclude_flag_replaces_configured_excludes() {
    let temp_dir = tempdir().unwrap();
    write_doc(temp_dir.path(), "site/a.md", "** x **\n");
    write_doc(temp_dir.path(), "drafts/b.md", "** y **\n");

    cargo_bin_cmd!("docstrict")
        .current_dir(temp_dir.path())
        .args(["fix-emphasis", "--exclude", "drafts"])
        .assert()
        .success()
        .stdout("Files modified: 1\n - site/a.md\n");
}
