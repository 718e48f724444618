use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Lay out `<tmp>/asset/mdl/dev/scenes` with one versioned scene and
/// return the scene path
fn dev_fixture(tmp: &TempDir) -> PathBuf {
    let dev = tmp.path().join("asset/mdl/dev/scenes");
    fs::create_dir_all(&dev).unwrap();
    let scene = dev.join("env_asset_mdl_v0001.ma");
    fs::write(&scene, "scene bytes").unwrap();
    scene
}

fn pub_dir(scene: &Path) -> PathBuf {
    let dev_dir = scene.parent().unwrap();
    dev_dir
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("pub/scenes")
}

#[test]
fn test_help_output() {
    let mut cmd = Command::cargo_bin("pubsync").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Dev/pub version synchronization tool",
        ))
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("log"));
}

#[test]
fn test_version_output() {
    let mut cmd = Command::cargo_bin("pubsync").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_unknown_subcommand() {
    let mut cmd = Command::cargo_bin("pubsync").unwrap();
    cmd.arg("unknown")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_no_subcommand() {
    let mut cmd = Command::cargo_bin("pubsync").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_for_subcommands() {
    for subcommand in &["sync", "status", "info", "log"] {
        let mut cmd = Command::cargo_bin("pubsync").unwrap();
        cmd.args([subcommand, "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage"));
    }
}

#[test]
fn test_status_rejects_unconventional_paths() {
    let tmp = TempDir::new().unwrap();
    let stray = tmp.path().join("thing_v0001.ma");
    fs::write(&stray, "bytes").unwrap();

    let mut cmd = Command::cargo_bin("pubsync").unwrap();
    cmd.args(["status", stray.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid scene path"));
}

#[test]
fn test_status_reports_an_unsynced_scene() {
    let tmp = TempDir::new().unwrap();
    let scene = dev_fixture(&tmp);

    let mut cmd = Command::cargo_bin("pubsync").unwrap();
    cmd.args(["status", scene.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Need to sync"));
}

#[test]
fn test_sync_distributes_and_reports() {
    let tmp = TempDir::new().unwrap();
    let scene = dev_fixture(&tmp);
    let pub_scenes = pub_dir(&scene);

    let mut cmd = Command::cargo_bin("pubsync").unwrap();
    cmd.args([
        "--no-config",
        "--yes",
        "sync",
        scene.to_str().unwrap(),
        "--worker",
        "testbot",
        "--memo",
        "first publish",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Version: v0002"))
    .stdout(predicate::str::contains("✓ Success"));

    assert!(pub_scenes.join("env_asset_mdl_v0002.ma").is_file());
    assert!(pub_scenes.join("env_asset_mdl_v9999.ma").is_file());
    assert!(pub_scenes.join("log.txt").is_file());

    // A second sync finds the triple aligned and skips.
    let mut cmd = Command::cargo_bin("pubsync").unwrap();
    cmd.args(["--no-config", "--yes", "sync", scene.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already synchronized"));
}

#[test]
fn test_sync_dry_run_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let scene = dev_fixture(&tmp);
    let pub_scenes = pub_dir(&scene);

    let mut cmd = Command::cargo_bin("pubsync").unwrap();
    cmd.args(["--no-config", "--dry-run", "sync", scene.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Success"))
        .stderr(predicate::str::contains("[DRY RUN]"));

    assert!(!pub_scenes.exists());
}

#[test]
fn test_sync_refuses_a_missing_scene_file() {
    let tmp = TempDir::new().unwrap();
    let dev = tmp.path().join("asset/mdl/dev/scenes");
    fs::create_dir_all(&dev).unwrap();
    let never_saved = dev.join("env_asset_mdl_v0001.ma");

    let mut cmd = Command::cargo_bin("pubsync").unwrap();
    cmd.args(["--no-config", "--yes", "sync", never_saved.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("save the scene first"));
}

#[test]
fn test_info_prints_parsed_fields() {
    let tmp = TempDir::new().unwrap();
    let scene = dev_fixture(&tmp);

    let mut cmd = Command::cargo_bin("pubsync").unwrap();
    cmd.args(["info", scene.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stage:     mdl"))
        .stdout(predicate::str::contains("Wip:       dev"))
        .stdout(predicate::str::contains("Base:      env_asset_mdl"))
        .stdout(predicate::str::contains("Next:      v0002"))
        .stdout(predicate::str::contains("data/abc"));
}

#[test]
fn test_log_prints_appended_notes() {
    let tmp = TempDir::new().unwrap();
    let scene = dev_fixture(&tmp);

    let mut cmd = Command::cargo_bin("pubsync").unwrap();
    cmd.args([
        "--no-config",
        "--yes",
        "sync",
        scene.to_str().unwrap(),
        "--worker",
        "testbot",
        "--memo",
        "note for the log",
    ])
    .assert()
    .success();

    let mut cmd = Command::cargo_bin("pubsync").unwrap();
    cmd.args(["log", scene.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("user : testbot"))
        .stdout(predicate::str::contains("memo : note for the log"))
        .stdout(predicate::str::contains(
            "version : dev) v0002 = pub) v0002, v9999",
        ));
}

#[test]
fn test_log_without_notes_is_not_an_error() {
    let tmp = TempDir::new().unwrap();
    let scene = dev_fixture(&tmp);

    let mut cmd = Command::cargo_bin("pubsync").unwrap();
    cmd.args(["log", scene.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes yet"));
}

#[test]
fn test_verbose_flag() {
    let tmp = TempDir::new().unwrap();
    let scene = dev_fixture(&tmp);

    let mut cmd = Command::cargo_bin("pubsync").unwrap();
    cmd.args(["--verbose", "status", scene.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verbose mode enabled"));
}
