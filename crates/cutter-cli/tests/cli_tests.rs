//! Integration tests for the `cutter` binary.

use std::{fs, path::Path};

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with an isolated, possibly missing, configuration file.
fn cutter(config: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("cutter");
    cmd.env("COOKIECUTTER_CONFIG", config).env("NO_COLOR", "1");
    cmd
}

fn template_repo() -> TempDir {
    let repo = TempDir::new().unwrap();
    fs::write(
        repo.path().join("cookiecutter.json"),
        r#"{"project_slug": "demo", "license": ["MIT", "BSD"]}"#,
    )
    .unwrap();
    let root = repo.path().join("{{cookiecutter.project_slug}}");
    fs::create_dir_all(&root).unwrap();
    fs::write(
        root.join("README.md"),
        "Hello {{ cookiecutter.project_slug }} ({{ cookiecutter.license }})",
    )
    .unwrap();
    repo
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    cutter(&home.path().join("rc"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("expand"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    let home = TempDir::new().unwrap();
    cutter(&home.path().join("rc"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn expand_builtin_abbreviation() {
    let home = TempDir::new().unwrap();
    cutter(&home.path().join("rc"))
        .args(["expand", "gh:audreyr/cookiecutter-pypackage"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://github.com/audreyr/cookiecutter-pypackage.git",
        ))
        .stdout(predicate::str::contains("remote repository"));
}

#[test]
fn expand_user_abbreviation_as_json() {
    let home = TempDir::new().unwrap();
    let rc = home.path().join("rc");
    fs::write(&rc, "abbreviations:\n  corp: https://git.corp.example/{0}.git\n").unwrap();

    cutter(&rc)
        .args(["expand", "corp:tools/service", "--output-format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"expanded\": \"https://git.corp.example/tools/service.git\"",
        ))
        .stdout(predicate::str::contains("\"kind\": \"remote\""));
}

#[test]
fn new_renders_local_template_without_prompting() {
    let repo = template_repo();
    let out = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    cutter(&home.path().join("rc"))
        .arg("new")
        .arg(repo.path())
        .args(["project_slug=acme", "--no-input", "--output-dir"])
        .arg(out.path())
        .assert()
        .success();

    let readme = fs::read_to_string(out.path().join("acme/README.md")).unwrap();
    assert_eq!(readme, "Hello acme (MIT)");
}

#[test]
fn new_applies_user_defaults() {
    let repo = template_repo();
    let out = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    let rc = home.path().join("rc");
    fs::write(&rc, "default_context:\n  license: BSD\n").unwrap();

    cutter(&rc)
        .arg("new")
        .arg(repo.path())
        .args(["--no-input", "-o"])
        .arg(out.path())
        .assert()
        .success();

    let readme = fs::read_to_string(out.path().join("demo/README.md")).unwrap();
    assert_eq!(readme, "Hello demo (BSD)");
}

#[test]
fn new_refuses_existing_project() {
    let repo = template_repo();
    let out = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    fs::create_dir(out.path().join("demo")).unwrap();

    cutter(&home.path().join("rc"))
        .arg("new")
        .arg(repo.path())
        .args(["--no-input", "-o"])
        .arg(out.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn malformed_extra_context_is_rejected() {
    let repo = template_repo();
    let home = TempDir::new().unwrap();

    cutter(&home.path().join("rc"))
        .arg("new")
        .arg(repo.path())
        .args(["no-equals-sign", "--no-input"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn missing_declaration_names_the_stage() {
    let empty = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();

    cutter(&home.path().join("rc"))
        .arg("new")
        .arg(empty.path())
        .arg("--no-input")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("template declaration"))
        .stderr(predicate::str::contains("cookiecutter.json"));
}

#[test]
fn config_path_follows_environment() {
    let home = TempDir::new().unwrap();
    let rc = home.path().join("custom-rc");

    cutter(&rc)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom-rc"));
}

#[test]
fn config_show_renders_toml() {
    let home = TempDir::new().unwrap();
    let rc = home.path().join("rc");
    fs::write(&rc, "default_context:\n  full_name: Ada\n").unwrap();

    cutter(&rc)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[default_context]"))
        .stdout(predicate::str::contains("full_name = \"Ada\""));
}

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    cutter(&home.path().join("rc"))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cutter"));
}
