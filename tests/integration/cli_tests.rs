//! CLI integration tests
//!
//! These tests verify that the CLI works correctly with various options.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/menudata.xml")
}

fn menutree() -> Command {
    Command::cargo_bin("menutree").expect("binary should build")
}

#[test]
fn cli_help() {
    menutree()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("menutree"))
        .stdout(predicate::str::contains("--action"))
        .stdout(predicate::str::contains("--style"));
}

#[test]
fn cli_version() {
    menutree()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("menutree"));
}

#[test]
fn default_action_is_strings() {
    menutree()
        .arg(fixture_path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("menustrings_menudata = ["))
        .stdout(predicate::str::contains("_('&File'),"));
}

#[test]
fn strings_name_override() {
    menutree()
        .arg(fixture_path())
        .args(["--name", "manager"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("menustrings_manager = ["));
}

#[test]
fn tree_action() {
    menutree()
        .arg(fixture_path())
        .args(["--action", "tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- File\n"))
        .stdout(predicate::str::contains("    - Common formats import\n"));
}

#[test]
fn commands_action() {
    menutree()
        .arg(fixture_path())
        .args(["--action", "commands"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "r.in.gdal | File > Import raster data > Common formats import",
        ));
}

#[test]
fn dump_action_terminal() {
    menutree()
        .arg(fixture_path())
        .args(["--action", "dump"])
        .assert()
        .success()
        .stdout(predicate::str::contains("handler: OnWorkspaceNew"))
        .stdout(predicate::str::contains("shortcut: Ctrl+N"));
}

#[test]
fn dump_action_json() {
    let output = menutree()
        .arg(fixture_path())
        .args(["--action", "dump", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let menubar = value["menubar"].as_array().unwrap();
    assert_eq!(menubar.len(), 2);
    assert_eq!(menubar[0]["label"], "&File");
}

#[test]
fn style_flag_decorates_labels() {
    menutree()
        .arg(fixture_path())
        .args(["--action", "tree", "--style", "labels-commands"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[r.in.gdal]"));
}

#[test]
fn config_file_sets_style() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("menutree.toml");
    std::fs::write(
        &config_path,
        "[appearance]\nmenu_style = \"labels-commands\"\n",
    )
    .unwrap();

    menutree()
        .arg(fixture_path())
        .args(["--action", "tree"])
        .args(["--config", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[r.mapcalc]"));
}

#[test]
fn output_flag_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("strings.txt");

    menutree()
        .arg(fixture_path())
        .args(["--output", out_path.to_str().unwrap()])
        .assert()
        .success();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert!(contents.starts_with("menustrings_menudata = ["));
    assert!(contents.ends_with("    '']\n"));
}

#[test]
fn missing_file_fails() {
    menutree()
        .arg("does-not-exist.xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn malformed_menu_fails() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.xml");
    std::fs::write(
        &bad,
        "<menudata><menubar><menu><label>File</label>\
         <items><divider/></items></menu></menubar></menudata>",
    )
    .unwrap();

    menutree().arg(bad).assert().failure();
}
