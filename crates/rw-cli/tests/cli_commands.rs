//! Integration tests for the rw-cli binary.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ROOMS: &str = r#"{
    "START": {
        "surroundings": "A dusty room.",
        "surroundingsWhenItemPickedUp": "An empty dusty room.",
        "item": "key",
        "descriptionWhenExamined": "Only dust remains.",
        "availableDirections": [
            { "name": "north", "targetRoomKey": "HALL" },
            { "name": "east", "targetRoomKey": "VAULT", "itemsThatCanBeUsed": ["key"] }
        ]
    },
    "HALL": {
        "surroundings": "A long hall lined with portraits.",
        "descriptionWhenExamined": "The portraits stare back.",
        "availableDirections": [
            { "name": "south", "targetRoomKey": "START" }
        ]
    },
    "VAULT": {
        "surroundings": "A vault full of gold.",
        "availableDirections": [
            { "name": "west", "targetRoomKey": "START" }
        ]
    }
}"#;

const ITEMS: &str = r#"{
    "key": {
        "name": "Rusty Key",
        "messageWhenUsed": "The vault door swings open.",
        "messageWhenNotUsed": "There is no lock for this here.",
        "soundWhenUsed": "unlock"
    }
}"#;

/// Create a temp directory with a small three-room adventure.
fn test_world() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("rooms.json"), ROOMS).unwrap();
    fs::write(dir.path().join("items.json"), ITEMS).unwrap();
    dir
}

fn path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn rw() -> Command {
    let mut cmd = Command::cargo_bin("rw").unwrap();
    cmd.env("NO_COLOR", "1").env("RUST_LOG", "off");
    cmd
}

fn play(dir: &TempDir) -> Command {
    let mut cmd = rw();
    cmd.arg("play")
        .arg("--rooms")
        .arg(path(dir, "rooms.json"))
        .arg("--items")
        .arg(path(dir, "items.json"));
    cmd
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_reports_playable_world() {
    let dir = test_world();
    rw().arg("check")
        .arg("--rooms")
        .arg(path(&dir, "rooms.json"))
        .arg("--items")
        .arg(path(&dir, "items.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"))
        .stdout(predicate::str::contains("3 rooms, 1 items"))
        .stdout(predicate::str::contains("DISPLAYING_DIRECTIONS"));
}

#[test]
fn check_accepts_gateway_envelope() {
    let dir = test_world();
    let envelope = serde_json::json!({ "statusCode": 200, "body": ROOMS }).to_string();
    fs::write(path(&dir, "wrapped.json"), envelope).unwrap();

    rw().arg("check")
        .arg("--rooms")
        .arg(path(&dir, "wrapped.json"))
        .arg("--items")
        .arg(path(&dir, "items.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("3 rooms"));
}

#[test]
fn check_fails_without_start_room() {
    let dir = test_world();
    fs::write(
        path(&dir, "rooms.json"),
        r#"{ "HALL": { "surroundings": "A hall." } }"#,
    )
    .unwrap();

    rw().arg("check")
        .arg("--rooms")
        .arg(path(&dir, "rooms.json"))
        .arg("--items")
        .arg(path(&dir, "items.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error fetching rooms"))
        .stderr(predicate::str::contains("START"));
}

#[test]
fn check_fails_on_malformed_items() {
    let dir = test_world();
    fs::write(path(&dir, "items.json"), "[1, 2, 3]").unwrap();

    rw().arg("check")
        .arg("--rooms")
        .arg(path(&dir, "rooms.json"))
        .arg("--items")
        .arg(path(&dir, "items.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error fetching items"));
}

#[test]
fn check_fails_on_missing_file() {
    let dir = test_world();
    rw().arg("check")
        .arg("--rooms")
        .arg(path(&dir, "nope.json"))
        .arg("--items")
        .arg(path(&dir, "items.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn check_warns_about_dangling_exits() {
    let dir = test_world();
    fs::write(
        path(&dir, "rooms.json"),
        r#"{ "START": { "surroundings": "A room.",
             "availableDirections": [{ "name": "up", "targetRoomKey": "ATTIC" }] } }"#,
    )
    .unwrap();

    rw().arg("check")
        .arg("--rooms")
        .arg(path(&dir, "rooms.json"))
        .arg("--items")
        .arg(path(&dir, "items.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Checks passed with 1 warning."))
        .stdout(predicate::str::contains("All checks passed").not())
        .stderr(predicate::str::contains("unknown room 'ATTIC'"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_shows_start_room() {
    let dir = test_world();
    play(&dir)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A dusty room."))
        .stdout(predicate::str::contains("east (locked)"));
}

#[test]
fn play_walkthrough_unlocks_vault() {
    let dir = test_world();
    play(&dir)
        .write_stdin("examine\ninventory\nuse rusty key\ngo east\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Rusty Key has been added to your inventory",
        ))
        .stdout(predicate::str::contains("An empty dusty room."))
        .stdout(predicate::str::contains("The vault door swings open."))
        .stdout(predicate::str::contains("A vault full of gold."));
}

#[test]
fn play_refuses_locked_exit() {
    let dir = test_world();
    play(&dir)
        .write_stdin("go east\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seems I can't go this way yet..."));
}

#[test]
fn play_reports_empty_inventory() {
    let dir = test_world();
    play(&dir)
        .write_stdin("inventory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I'm not carrying anything"));
}

#[test]
fn play_reports_invalid_commands_and_continues() {
    let dir = test_world();
    play(&dir)
        .write_stdin("dance\nclose\ngo up\nlook\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command 'dance'"))
        .stdout(predicate::str::contains("cannot close the inventory"))
        .stdout(predicate::str::contains("no direction named \"up\""));
}

#[test]
fn play_uses_config_texts() {
    let dir = test_world();
    fs::write(
        path(&dir, "config.json"),
        r#"{ "lockedMessage": "The door will not budge." }"#,
    )
    .unwrap();

    play(&dir)
        .arg("--config")
        .arg(path(&dir, "config.json"))
        .write_stdin("go east\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The door will not budge."));
}

#[test]
fn play_toggles_sound() {
    let dir = test_world();
    play(&dir)
        .write_stdin("sound\nsound\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sound is on."))
        .stdout(predicate::str::contains("Sound is off."));
}

#[test]
fn play_save_without_file_is_reported() {
    let dir = test_world();
    play(&dir)
        .write_stdin("save\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("no save file given"));
}

#[test]
fn play_save_then_load_restores_progress() {
    let dir = test_world();
    let save = path(&dir, "save.json");

    play(&dir)
        .arg("--save")
        .arg(&save)
        .write_stdin("examine\ngo north\nsave\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to"));

    play(&dir)
        .arg("--save")
        .arg(&save)
        .write_stdin("load\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A long hall lined with portraits."));
}

// ---------------------------------------------------------------------------
// inspect
// ---------------------------------------------------------------------------

#[test]
fn inspect_summarizes_save() {
    let dir = test_world();
    let save = path(&dir, "save.json");

    play(&dir)
        .arg("--save")
        .arg(&save)
        .write_stdin("examine\ngo north\ngo south\nsave\nquit\n")
        .assert()
        .success();

    rw().arg("inspect")
        .arg(&save)
        .assert()
        .success()
        .stdout(predicate::str::contains("state: DISPLAYING_DIRECTIONS"))
        .stdout(predicate::str::contains("room: START"))
        .stdout(predicate::str::contains("holding: Rusty Key"))
        .stdout(predicate::str::contains("last direction: south"));
}

#[test]
fn inspect_rejects_garbage() {
    let dir = test_world();
    fs::write(path(&dir, "save.json"), "not json").unwrap();

    rw().arg("inspect")
        .arg(path(&dir, "save.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid save file"));
}
