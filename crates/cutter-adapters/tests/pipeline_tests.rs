//! End-to-end runs of the orchestrator with real adapters.

use std::{fs, path::Path};

use chrono::NaiveDate;
use serde_json::json;
use tempfile::TempDir;

use cutter_adapters::{
    DefaultsPrompter, FileConfigLoader, FixedClock, JsonDeclarationReader, MemoryFilesystem,
    SimpleGenerator, VcsCloner,
};
use cutter_core::prelude::*;

fn local_template() -> TempDir {
    let repo = TempDir::new().unwrap();
    fs::write(
        repo.path().join("cookiecutter.json"),
        r#"{"project_slug": "demo", "license": ["MIT", "BSD", "GPL"], "_secret": ["a", "b"]}"#,
    )
    .unwrap();
    let root = repo.path().join("{{cookiecutter.project_slug}}");
    fs::create_dir_all(&root).unwrap();
    fs::write(
        root.join("README.md"),
        "{{ cookiecutter.project_slug }} / {{ cookiecutter.license }} / {{ current_year }}",
    )
    .unwrap();
    repo
}

fn service(home: &Path, output: &MemoryFilesystem) -> GenerateService {
    let now = NaiveDate::from_ymd_opt(2026, 10, 16)
        .unwrap()
        .and_hms_opt(9, 5, 3)
        .unwrap();
    GenerateService::new(
        Box::new(FileConfigLoader::with_home(home)),
        Box::new(VcsCloner::new()),
        Box::new(JsonDeclarationReader::new()),
        Box::new(DefaultsPrompter::new()),
        Box::new(SimpleGenerator::new("/out", Box::new(output.clone()))),
        Box::new(FixedClock(now)),
    )
}

#[test]
fn local_template_renders_with_all_tiers() {
    let repo = local_template();
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join(".cookiecutterrc"),
        "default_context:\n  license: BSD\n",
    )
    .unwrap();
    let output = MemoryFilesystem::new();

    let mut extra = serde_json::Map::new();
    extra.insert("project_slug".into(), json!("acme"));
    let request = GenerateRequest::new(repo.path().display().to_string())
        .no_input(true)
        .extra_context(extra);

    let outcome = service(home.path(), &output).run(request).unwrap();

    assert!(!outcome.source.is_remote());
    assert_eq!(outcome.project_dir, Path::new("/out/acme"));
    assert_eq!(
        output.read_file(Path::new("/out/acme/README.md")).as_deref(),
        Some("acme / BSD / 2026")
    );

    let settings = outcome.context.settings().unwrap();
    assert_eq!(settings["license"], json!("BSD"));
    assert_eq!(settings["_secret"], json!(["a", "b"]));
    assert_eq!(
        outcome.context.get("current_date"),
        Some(&json!("Fri Oct 16 09:05:03 2026"))
    );
}

#[test]
fn dependent_defaults_name_the_project_directory() {
    let repo = TempDir::new().unwrap();
    fs::write(
        repo.path().join("cookiecutter.json"),
        r#"{"project_name": "Acme", "repo_name": "{{ cookiecutter.project_name }}"}"#,
    )
    .unwrap();
    let root = repo.path().join("{{cookiecutter.repo_name}}");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("NAME"), "{{ cookiecutter.repo_name }}").unwrap();
    let home = TempDir::new().unwrap();
    let output = MemoryFilesystem::new();

    let outcome = service(home.path(), &output)
        .run(GenerateRequest::new(repo.path().display().to_string()).no_input(true))
        .unwrap();

    assert_eq!(outcome.context.settings().unwrap()["repo_name"], json!("Acme"));
    assert_eq!(outcome.project_dir, Path::new("/out/Acme"));
    assert_eq!(
        output.read_file(Path::new("/out/Acme/NAME")).as_deref(),
        Some("Acme")
    );
}

#[test]
fn missing_declaration_is_reported() {
    let repo = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    let output = MemoryFilesystem::new();

    let err = service(home.path(), &output)
        .run(GenerateRequest::new(repo.path().display().to_string()).no_input(true))
        .unwrap_err();

    assert_eq!(err.stage(), Stage::Declaration);
    assert!(output.list_files().is_empty());
}

#[test]
fn unknown_remote_host_is_rejected_before_cloning() {
    let home = TempDir::new().unwrap();
    let output = MemoryFilesystem::new();

    let err = service(home.path(), &output)
        .run(GenerateRequest::new("https://example.com/templates/web").no_input(true))
        .unwrap_err();

    assert!(err.to_string().contains("Unknown repository type"));
}
