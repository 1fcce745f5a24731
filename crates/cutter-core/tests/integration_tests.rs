//! Integration tests for cutter-core, driven through the public API with
//! in-test port implementations.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Value, json};

use cutter_core::prelude::*;
use cutter_core::application::CloneRequest;
use cutter_core::domain::ContextMap;

#[derive(Clone, Default)]
struct Recorder {
    clones: Arc<Mutex<Vec<CloneRequest>>>,
    declarations: Arc<Mutex<Vec<PathBuf>>>,
    generated: Arc<Mutex<Vec<Context>>>,
}

struct StaticConfig(UserConfig);

impl ConfigLoader for StaticConfig {
    fn load(&self, _path: &Path) -> CutterResult<UserConfig> {
        Ok(self.0.clone())
    }

    fn default_path(&self) -> PathBuf {
        PathBuf::from("/home/me/.cookiecutterrc")
    }
}

struct RecordingCloner(Recorder);

impl RepositoryCloner for RecordingCloner {
    fn clone_repo(&self, request: &CloneRequest) -> CutterResult<PathBuf> {
        self.0.clones.lock().unwrap().push(request.clone());
        let name = request.url.rsplit('/').next().unwrap_or_default();
        Ok(request.clone_to_dir.join(name.trim_end_matches(".git")))
    }
}

struct StaticDeclaration(Recorder, ContextMap);

impl DeclarationReader for StaticDeclaration {
    fn read_defaults(&self, context_file: &Path) -> CutterResult<ContextMap> {
        self.0
            .declarations
            .lock()
            .unwrap()
            .push(context_file.to_path_buf());
        Ok(self.1.clone())
    }
}

struct AcceptDefaults;

impl Prompter for AcceptDefaults {
    fn prompt_for_config(&self, context: &Context, _no_input: bool) -> CutterResult<ContextMap> {
        Ok(context.settings().cloned().unwrap_or_default())
    }
}

struct RecordingGenerator(Recorder);

impl Generator for RecordingGenerator {
    fn generate_files(&self, _repo_dir: &Path, context: &Context) -> CutterResult<PathBuf> {
        self.0.generated.lock().unwrap().push(context.clone());
        Ok(PathBuf::from("/out/project"))
    }
}

struct Frozen(NaiveDateTime);

impl Clock for Frozen {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

fn service(config: UserConfig, declared: Value, recorder: &Recorder) -> GenerateService {
    let declared = match declared {
        Value::Object(map) => map,
        _ => ContextMap::new(),
    };
    GenerateService::new(
        Box::new(StaticConfig(config)),
        Box::new(RecordingCloner(recorder.clone())),
        Box::new(StaticDeclaration(recorder.clone(), declared)),
        Box::new(AcceptDefaults),
        Box::new(RecordingGenerator(recorder.clone())),
        Box::new(Frozen(
            NaiveDate::from_ymd_opt(2026, 1, 2)
                .unwrap()
                .and_hms_opt(3, 4, 5)
                .unwrap(),
        )),
    )
}

#[test]
fn remote_reference_flows_through_cloner() {
    let recorder = Recorder::default();
    let svc = service(
        UserConfig::new("/cache"),
        json!({"project_name": "x"}),
        &recorder,
    );

    let outcome = svc
        .run(GenerateRequest::new("gh:foo/bar").no_input(true))
        .unwrap();

    let clones = recorder.clones.lock().unwrap();
    assert_eq!(clones.len(), 1);
    assert_eq!(clones[0].url, "https://github.com/foo/bar.git");
    assert_eq!(outcome.repo_dir, PathBuf::from("/cache/bar"));
    assert_eq!(
        recorder.declarations.lock().unwrap()[0],
        PathBuf::from("/cache/bar/cookiecutter.json")
    );
}

#[test]
fn local_reference_skips_cloner() {
    let recorder = Recorder::default();
    let svc = service(UserConfig::new("/cache"), json!({}), &recorder);

    svc.run(GenerateRequest::new("/tmp/my-template")).unwrap();

    assert!(recorder.clones.lock().unwrap().is_empty());
    assert_eq!(
        recorder.declarations.lock().unwrap()[0],
        PathBuf::from("/tmp/my-template/cookiecutter.json")
    );
}

#[test]
fn generated_context_has_namespace_and_runtime_keys() {
    let recorder = Recorder::default();
    let svc = service(
        UserConfig::new("/cache").with_default("license", "BSD-3"),
        json!({"project_name": "x", "license": ["MIT", "BSD-3"]}),
        &recorder,
    );

    svc.run(GenerateRequest::new("/tmp/t")).unwrap();

    let generated = recorder.generated.lock().unwrap();
    let ctx = &generated[0];
    let keys: Vec<&str> = ctx.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        [
            "cookiecutter",
            "version",
            "repo_dir",
            "context_file",
            "current_year",
            "current_date",
            "current_date_iso",
        ]
    );
    assert_eq!(ctx.settings().unwrap()["license"], json!(["BSD-3", "MIT"]));
    assert_eq!(ctx.get("current_date"), Some(&json!("Fri Jan  2 03:04:05 2026")));
}
