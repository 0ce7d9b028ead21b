//! CLI end-to-end tests that invoke the compiled `i18n` binary.

use assert_cmd::Command;
use i18n_test_utils::TestFolder;
use predicates::prelude::*;

/// Get a Command for the i18n binary running in `dir`
fn i18n_cmd(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("i18n").expect("Failed to find i18n binary");
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG").env_remove("I18N_CONFIG");
    cmd
}

fn project_with_changes(extra: &str) -> TestFolder {
    TestFolder::new()
        .with_config("en", &["fr", "es"], extra)
        .with_language("en", r#"{"welcome": "Welcome", "inner": {"bye": "Bye"}}"#)
        .with_language("fr", r#"{"welcome": "Bonjour", "old": "Vieux"}"#)
        .with_language("es", r#"{"inner": {"bye": "adios"}}"#)
}

#[test]
fn test_help_mentions_commands() {
    let project = TestFolder::new();
    i18n_cmd(project.root())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("sync"));
}

#[test]
fn test_status_summary() {
    let project = project_with_changes("");
    i18n_cmd(project.root())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Required changes: + 2 - 1"));
}

#[test]
fn test_status_very_verbose_lists_languages() {
    let project = project_with_changes("");
    i18n_cmd(project.root())
        .args(["s", "--very-verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ welcome in [es]"))
        .stdout(predicate::str::contains("+ inner.bye in [fr]"))
        .stdout(predicate::str::contains("- old in [fr]"));
}

#[test]
fn test_status_fail_on_changes_exits_one() {
    let project = project_with_changes("");
    i18n_cmd(project.root())
        .args(["status", "--fail-on-changes"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("require changes"));
}

#[test]
fn test_status_json_is_parseable() {
    let project = project_with_changes("");
    let output = i18n_cmd(project.root())
        .args(["status", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["to_create"]["welcome"][0]["code"], "es");
    assert_eq!(value["to_delete"]["old"][0]["code"], "fr");
}

#[test]
fn test_status_does_not_write_files() {
    let project = project_with_changes("");
    let before = project.read_language("fr");

    i18n_cmd(project.root()).arg("status").assert().success();

    assert_eq!(project.read_language("fr"), before);
}

#[test]
fn test_sync_with_copy_source_provider() {
    let project = project_with_changes("[provider]\nkind = \"copy-source\"\n");

    i18n_cmd(project.root())
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created: 2"))
        .stdout(predicate::str::contains("Deleted: 1"));

    project.assert_token_paths("fr", &["welcome", "inner.bye"]);
    project.assert_token("fr", "welcome", "Bonjour");
    project.assert_token("fr", "inner.bye", "Bye");
    project.assert_token("es", "welcome", "Welcome");
    project.assert_token("es", "inner.bye", "adios");

    i18n_cmd(project.root())
        .args(["status", "--fail-on-changes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Required changes: + 0 - 0"));
}

#[test]
fn test_sync_limit_retrieve_flag() {
    let project = project_with_changes("[provider]\nkind = \"copy-source\"\n");

    i18n_cmd(project.root())
        .args(["sync", "--limit-retrieve", "1", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"skipped\""));

    // fr is listed first, so its inner.bye is the first creation path
    project.assert_token("fr", "inner.bye", "Bye");
    project.assert_no_token("es", "welcome");
}

#[test]
fn test_sync_without_provider_fails() {
    let project = project_with_changes("");
    i18n_cmd(project.root())
        .arg("sync")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No provider configured"));
}

#[test]
fn test_missing_config_fails() {
    let project = TestFolder::new();
    i18n_cmd(project.root())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No configuration found"));
}

#[test]
fn test_missing_language_file_fails() {
    let project = TestFolder::new()
        .with_config("en", &["fr"], "")
        .with_language("en", "{}");
    i18n_cmd(project.root())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("fr.json: invalid path"));
}

#[test]
fn test_completions_bash() {
    let project = TestFolder::new();
    i18n_cmd(project.root())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("i18n"));
}
