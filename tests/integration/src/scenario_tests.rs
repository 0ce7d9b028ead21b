//! End-to-end scenarios through the `i18n` binary

use assert_cmd::Command;
use i18n_test_utils::TestFolder;
use predicates::prelude::*;

fn i18n_cmd(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("i18n").expect("Failed to find i18n binary");
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("I18N_CONFIG");
    cmd
}

#[test]
fn test_status_then_sync_then_clean_status() {
    let project = TestFolder::new()
        .with_config("en", &["fr"], "[provider]\nkind = \"copy-source\"\n")
        .with_language("en", r#"{"greeting": {"hello": "Hello"}}"#)
        .with_language("fr", r#"{"greeting": {"hello": "Bonjour", "bye": "Au revoir"}}"#);

    i18n_cmd(project.root())
        .args(["status", "-v", "--fail-on-changes"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("- greeting.bye [1]"));

    i18n_cmd(project.root()).arg("sync").assert().success();

    project.assert_token_paths("fr", &["greeting.hello"]);
    i18n_cmd(project.root())
        .args(["status", "--fail-on-changes"])
        .assert()
        .success();
}

#[test]
fn test_config_flag_points_outside_cwd() {
    let project = TestFolder::new()
        .with_language("en", r#"{"a": "A"}"#)
        .with_language("fr", "{}");
    project.write_file(
        "config/i18n.toml",
        "folder = \"../locales\"\n\n[source_language]\ncode = \"en\"\nname = \"English\"\n\n\
         [[target_languages]]\ncode = \"fr\"\nname = \"French\"\n",
    );

    i18n_cmd(project.root())
        .args(["status", "--config", "config/i18n.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Required changes: + 1 - 0"));
}

#[cfg(unix)]
#[test]
fn test_sync_through_command_provider() {
    let project = TestFolder::new()
        .with_config(
            "en",
            &["fr"],
            "[provider]\nkind = \"command\"\ncommand = \"sh\"\nargs = [\"-c\", \"cat > /dev/null; printf '{\\\"fr\\\": \\\"%s\\\"}' \\\"$PREFIX\\\"\"]\n\n[provider.env]\nPREFIX = \"traduit\"\n",
        )
        .with_language("en", r#"{"title": "Title"}"#)
        .with_language("fr", "{}");

    i18n_cmd(project.root())
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("+ title in [fr]"));

    project.assert_token("fr", "title", "traduit");
}

#[cfg(unix)]
#[test]
fn test_failing_command_provider_reports_and_keeps_files() {
    let project = TestFolder::new()
        .with_config(
            "en",
            &["fr"],
            "[provider]\nkind = \"command\"\ncommand = \"sh\"\nargs = [\"-c\", \"echo boom >&2; exit 2\"]\n",
        )
        .with_language("en", r#"{"title": "Title"}"#)
        .with_language("fr", "{}");

    i18n_cmd(project.root())
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed: 1"))
        .stdout(predicate::str::contains("boom"));

    project.assert_token_paths("fr", &[]);
}

#[cfg(unix)]
#[test]
fn test_command_provider_runs_in_config_directory() {
    let project = TestFolder::new()
        .with_language("en", r#"{"a": "A"}"#)
        .with_language("fr", "{}");
    project.write_file(
        "config/translate.sh",
        "cat > /dev/null\necho '{\"fr\": \"from script\"}'\n",
    );
    project.write_file(
        "config/i18n.toml",
        "folder = \"../locales\"\n\n[source_language]\ncode = \"en\"\nname = \"English\"\n\n\
         [[target_languages]]\ncode = \"fr\"\nname = \"French\"\n\n\
         [provider]\nkind = \"command\"\ncommand = \"sh\"\nargs = [\"translate.sh\"]\n",
    );

    i18n_cmd(project.root())
        .args(["sync", "--config", "config/i18n.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed").not());

    project.assert_token("fr", "a", "from script");
}
