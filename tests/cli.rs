// End-to-end tests for the `todo` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use todostore::{Store, Todo};

struct Env {
    temp: TempDir,
    file: PathBuf,
    config: PathBuf,
}

impl Env {
    fn new() -> Self {
        Self::with_config("")
    }

    fn with_config(yaml: &str) -> Self {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("todos.json");
        let config = temp.path().join("config.yaml");
        fs::write(&config, yaml).unwrap();
        Self { temp, file, config }
    }

    fn todo(&self) -> Command {
        let mut cmd = Command::cargo_bin("todo").unwrap();
        cmd.env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .current_dir(self.temp.path())
            .arg("--file")
            .arg(&self.file)
            .arg("--config")
            .arg(&self.config);
        cmd
    }

    fn saved(&self) -> Vec<Todo> {
        Store::open(&self.file).list_all().to_vec()
    }
}

#[test]
fn test_add_reports_id_and_persists() {
    let env = Env::new();

    env.todo()
        .args(["add", "--title", "Buy milk", "--description", "2%"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo Created Successfully with Id 0"));

    let saved = env.saved();
    assert_eq!(saved, vec![Todo::new(0, "Buy milk", "2%")]);
}

#[test]
fn test_add_uses_placeholders() {
    let env = Env::new();
    env.todo().arg("add").assert().success();

    let saved = env.saved();
    assert_eq!(saved[0].title, "NO TITLE");
    assert_eq!(saved[0].description, "NO DESCRIPTION");
}

#[test]
fn test_add_uses_configured_placeholders() {
    let env = Env::with_config("default_title: Untitled\ndefault_description: nothing yet\n");
    env.todo().arg("add").assert().success();

    let saved = env.saved();
    assert_eq!(saved[0].title, "Untitled");
    assert_eq!(saved[0].description, "nothing yet");
}

#[test]
fn test_list_shows_all_in_order() {
    let env = Env::new();
    env.todo().args(["add", "-t", "Buy milk", "-d", "2%"]).assert().success();
    env.todo().args(["add", "-t", "Write report", "-d", ""]).assert().success();

    let output = env.todo().arg("list").assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();

    assert!(stdout.contains("You have 2 todos."));
    let first = stdout.find("Title: Buy milk").unwrap();
    let second = stdout.find("Title: Write report").unwrap();
    assert!(first < second);
    assert_eq!(stdout.matches("Status: Not completed").count(), 2);
}

#[test]
fn test_list_empty() {
    let env = Env::new();
    env.todo()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("You have 0 todos."));
}

#[test]
fn test_remove_and_not_found() {
    let env = Env::new();
    env.todo().args(["add", "-t", "a"]).assert().success();

    env.todo()
        .args(["remove", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo with id 0 removed successfully."));
    assert!(env.saved().is_empty());

    env.todo()
        .args(["remove", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo with id 0 Not Found."));
}

#[test]
fn test_remove_rejects_negative_id() {
    let env = Env::new();
    env.todo().args(["remove", "-1"]).assert().failure();
    env.todo().args(["toggle", "abc"]).assert().failure();
}

#[test]
fn test_toggle_and_search_by_status() {
    let env = Env::new();
    env.todo().args(["add", "-t", "done soon"]).assert().success();
    env.todo().args(["add", "-t", "later"]).assert().success();

    env.todo()
        .args(["search", "status", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You have no completed Todos."));

    env.todo()
        .args(["toggle", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo with id 0 toggled successfully."));

    env.todo()
        .args(["search", "status", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: done soon").and(predicate::str::contains("later").not()));

    env.todo()
        .args(["search", "status", "remaining"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: later").and(predicate::str::contains("done soon").not()));

    env.todo().args(["toggle", "1"]).assert().success();
    env.todo()
        .args(["search", "status", "remaining"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no todos left for you"));
}

#[test]
fn test_search_by_id() {
    let env = Env::new();
    env.todo().args(["add", "-t", "Buy milk", "-d", "2%"]).assert().success();

    env.todo()
        .args(["search", "id", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TODO ID 0").and(predicate::str::contains("Description: 2%")));

    env.todo()
        .args(["search", "id", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo with id 7 Not Found."));
}

#[test]
fn test_search_by_keyword() {
    let env = Env::new();
    env.todo().args(["add", "-t", "Write report"]).assert().success();
    env.todo().args(["add", "-t", "Write letter"]).assert().success();

    env.todo()
        .args(["search", "keyword", "Write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Write report").and(predicate::str::contains("Write letter").not()));

    env.todo()
        .args(["search", "keyword", "Write", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Write report").and(predicate::str::contains("Write letter")));

    env.todo()
        .args(["search", "keyword", "groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keyword groceries not matched with any todo."));
}

#[test]
fn test_corrupted_file_starts_empty() {
    let env = Env::new();
    fs::write(&env.file, "{{{ not json").unwrap();

    env.todo()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("You have 0 todos."));
}

#[test]
fn test_file_from_config() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("from-config.json");
    let config = temp.path().join("config.yaml");
    fs::write(&config, format!("file: {}\n", file.display())).unwrap();

    let mut cmd = Command::cargo_bin("todo").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .current_dir(temp.path())
        .arg("--config")
        .arg(&config)
        .args(["add", "-t", "configured"])
        .assert()
        .success();

    assert_eq!(Store::open(&file).len(), 1);
}

#[test]
fn test_missing_config_is_error() {
    let temp = TempDir::new().unwrap();
    Command::cargo_bin("todo")
        .unwrap()
        .env_remove("RUST_LOG")
        .current_dir(temp.path())
        .arg("--config")
        .arg(temp.path().join("absent.yaml"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_unsaved_change_warns_but_succeeds() {
    let env = Env::new();
    // A directory where the backing file should be makes every save fail
    fs::create_dir(&env.file).unwrap();

    env.todo()
        .args(["add", "-t", "lost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Todo Created Successfully"))
        .stderr(predicate::str::contains("Warning: change not saved"));
}
