//! Cross-crate integration tests
//!
//! Configuration resolution, folder loading, provider construction and the
//! sync engine wired together the way the CLI wires them.

use i18n_core::{ConfigResolver, ResolvedConfig, SyncEngine, SyncReport, TranslationFolder};
use i18n_test_utils::TestFolder;

async fn load(config: &ResolvedConfig) -> TranslationFolder {
    TranslationFolder::load(
        config.folder.clone(),
        config.source_language.clone(),
        config.target_languages.clone(),
    )
    .await
    .unwrap()
}

async fn sync_project(project: &TestFolder) -> SyncReport {
    let config = ConfigResolver::discover(project.root()).resolve().unwrap();
    let settings = config.provider.as_ref().expect("provider configured");
    let engine = SyncEngine::new(i18n_providers::from_settings(settings, &config.config_dir)).with_options(config.sync);

    let mut folder = load(&config).await;
    engine.sync(&mut folder, &config.format).await.unwrap()
}

#[tokio::test]
async fn test_configured_project_converges() {
    let project = TestFolder::new()
        .with_config(
            "en",
            &["fr", "de"],
            "[provider]\nkind = \"copy-source\"\n\n[format]\nindent = \"  \"\ntrailing_newline = true\n",
        )
        .with_language(
            "en",
            r#"{"nav": {"home": "Home", "about": "About"}, "footer": "Footer"}"#,
        )
        .with_language("fr", r#"{"nav": {"home": "Accueil"}, "legacy": {"x": "X"}}"#)
        .with_language("de", "{}");

    let report = sync_project(&project).await;

    assert!(report.success());
    project.assert_token_paths("fr", &["footer", "nav.about", "nav.home"]);
    project.assert_token_paths("de", &["footer", "nav.about", "nav.home"]);
    project.assert_token("fr", "nav.home", "Accueil");
    project.assert_token("de", "nav.home", "Home");
    assert_eq!(
        project.read_language("fr"),
        "{\n  \"footer\": \"Footer\",\n  \"nav\": {\n    \"about\": \"About\",\n    \"home\": \"Accueil\"\n  }\n}\n"
    );

    // A second run has nothing left to do and leaves the files untouched
    let before = project.read_language("de");
    let second = sync_project(&project).await;
    assert!(second.is_noop());
    assert_eq!(project.read_language("de"), before);
}

#[tokio::test]
async fn test_limit_retrieve_from_config_needs_several_runs() {
    let project = TestFolder::new()
        .with_config(
            "en",
            &["fr"],
            "[provider]\nkind = \"copy-source\"\n\n[sync]\nlimit_retrieve = 1\n",
        )
        .with_language("en", r#"{"a": "A", "b": "B", "c": "C"}"#)
        .with_language("fr", "{}");

    let mut runs = 0;
    loop {
        let report = sync_project(&project).await;
        runs += 1;
        if report.skipped.is_empty() {
            break;
        }
        assert!(runs < 5, "sync did not converge");
    }

    assert_eq!(runs, 3);
    project.assert_token_paths("fr", &["a", "b", "c"]);
}

#[tokio::test]
async fn test_local_override_switches_format() {
    let project = TestFolder::new()
        .with_config("en", &[], "[provider]\nkind = \"copy-source\"\n")
        .with_language("en", r#"{"b": "B", "a": "A"}"#);
    project.write_file("i18n.local.toml", "[format]\nindent = \" \"\n");

    sync_project(&project).await;

    assert_eq!(project.read_language("en"), "{\n \"a\": \"A\",\n \"b\": \"B\"\n}");
}

#[tokio::test]
async fn test_unchanged_when_load_fails() {
    let project = TestFolder::new()
        .with_config("en", &["fr"], "[provider]\nkind = \"copy-source\"\n")
        .with_language("en", r#"{"a": "A"}"#)
        .with_language("fr", r#"{"a": 1}"#);
    let config = ConfigResolver::discover(project.root()).resolve().unwrap();

    let result = TranslationFolder::load(
        config.folder.clone(),
        config.source_language.clone(),
        config.target_languages.clone(),
    )
    .await;

    assert!(matches!(result, Err(i18n_core::Error::FileFormat { .. })));
    assert_eq!(project.read_language("fr"), r#"{"a": 1}"#);
}
