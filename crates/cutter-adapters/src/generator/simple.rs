//! Placeholder-substitution generator.
//!
//! Supports `{{ name }}` and `{{ namespace.key }}` lookups against the final
//! context, in file contents as well as file and directory names. Unknown
//! placeholders are left untouched. Files that are not valid UTF-8 are
//! copied byte for byte.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use cutter_core::{
    application::{ApplicationError, ports::Generator},
    domain::Context,
    error::{CutterError, CutterResult},
};

use crate::filesystem::Filesystem;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Writes rendered projects below `output_dir`.
pub struct SimpleGenerator {
    output_dir: PathBuf,
    filesystem: Box<dyn Filesystem>,
}

impl SimpleGenerator {
    pub fn new(output_dir: impl Into<PathBuf>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            output_dir: output_dir.into(),
            filesystem,
        }
    }

    /// Write every entry of `template_dir` below `project_dir`.
    fn write_all(
        &self,
        template_dir: &Path,
        project_dir: &Path,
        context: &Context,
    ) -> CutterResult<usize> {
        self.filesystem.create_dir_all(project_dir)?;

        let mut files = 0;
        for entry in WalkDir::new(template_dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: e.path().unwrap_or(template_dir).to_path_buf(),
                reason: e.to_string(),
            })?;
            let relative = entry
                .path()
                .strip_prefix(template_dir)
                .map_err(|e| ApplicationError::RenderingFailed {
                    reason: e.to_string(),
                })?;
            let target = project_dir.join(render(&relative.to_string_lossy(), context));

            if entry.file_type().is_dir() {
                self.filesystem.create_dir_all(&target)?;
                continue;
            }

            let bytes =
                std::fs::read(entry.path()).map_err(|e| ApplicationError::FilesystemError {
                    path: entry.path().to_path_buf(),
                    reason: format!("Failed to read template file: {e}"),
                })?;
            let content = match String::from_utf8(bytes) {
                Ok(text) => render(&text, context).into_bytes(),
                Err(raw) => raw.into_bytes(),
            };

            self.filesystem.write_file(&target, &content)?;
            if is_executable(entry.path()) {
                self.filesystem.set_permissions(&target, true)?;
            }
            debug!(file = %target.display(), "Rendered");
            files += 1;
        }
        Ok(files)
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}

impl Generator for SimpleGenerator {
    #[instrument(skip_all, fields(repo_dir = %repo_dir.display()))]
    fn generate_files(&self, repo_dir: &Path, context: &Context) -> CutterResult<PathBuf> {
        let template_dir = find_template(repo_dir)?;
        let dir_name = template_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let project_name = render(&dir_name, context);
        if project_name.trim().is_empty() {
            return Err(ApplicationError::RenderingFailed {
                reason: format!("'{dir_name}' renders to an empty directory name"),
            }
            .into());
        }

        let project_dir = self.output_dir.join(project_name.trim());
        if self.filesystem.exists(&project_dir) {
            return Err(ApplicationError::ProjectExists { path: project_dir }.into());
        }

        match self.write_all(&template_dir, &project_dir, context) {
            Ok(files) => {
                info!(files, project = %project_dir.display(), "Project generated");
                Ok(project_dir)
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(&project_dir);
                Err(e)
            }
        }
    }
}

/// First directory in `repo_dir` (by name) that looks like a project
/// template: its name contains `cookiecutter`, `{{` and `}}`.
pub fn find_template(repo_dir: &Path) -> CutterResult<PathBuf> {
    let entries = std::fs::read_dir(repo_dir).map_err(|e| ApplicationError::FilesystemError {
        path: repo_dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| {
                    name.contains("cookiecutter") && name.contains(OPEN) && name.contains(CLOSE)
                })
        })
        .collect();
    candidates.sort();

    candidates.into_iter().next().ok_or_else(|| {
        CutterError::from(ApplicationError::TemplateNotFound {
            repo_dir: repo_dir.to_path_buf(),
        })
    })
}

/// Substitute every `{{ path }}` whose dotted path resolves in `context`.
pub fn render(text: &str, context: &Context) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + OPEN.len()..];
        let Some(end) = after.find(CLOSE) else {
            out.push_str(&rest[start..]);
            return out;
        };

        let expr = after[..end].trim();
        match lookup(context, expr) {
            Some(value) => out.push_str(&display(value)),
            None => out.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]),
        }
        rest = &after[end + CLOSE.len()..];
    }

    out.push_str(rest);
    out
}

fn lookup<'a>(context: &'a Context, expr: &str) -> Option<&'a Value> {
    let mut segments = expr.split('.');
    let mut value = context.get(segments.next()?)?;
    for segment in segments {
        value = value.as_object()?.get(segment)?;
    }
    Some(value)
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filesystem::MemoryFilesystem;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn context() -> Context {
        let values = json!({
            "cookiecutter": {"project_slug": "demo", "author": "Ada", "license": "MIT"},
            "current_year": "2026",
        });
        match values {
            Value::Object(map) => Context::new(map),
            _ => unreachable!(),
        }
    }

    fn template_repo() -> TempDir {
        let repo = TempDir::new().unwrap();
        let root = repo.path().join("{{cookiecutter.project_slug}}");
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(
            root.join("README.md"),
            "# {{ cookiecutter.project_slug }}\n(c) {{ current_year }} {{cookiecutter.author}}\n",
        )
        .unwrap();
        fs::write(root.join("src/{{cookiecutter.project_slug}}.txt"), "{{ unknown.key }}").unwrap();
        fs::write(root.join("logo.bin"), [0xff, 0xfe, b'{', b'{']).unwrap();
        fs::write(repo.path().join("cookiecutter.json"), "{}").unwrap();
        repo
    }

    #[test]
    fn render_substitutes_namespaced_and_top_level_keys() {
        let ctx = context();
        assert_eq!(
            render("{{ cookiecutter.author }} / {{current_year}}", &ctx),
            "Ada / 2026"
        );
    }

    #[test]
    fn render_keeps_unknown_and_unterminated_placeholders() {
        let ctx = context();
        assert_eq!(render("{{ nope }}", &ctx), "{{ nope }}");
        assert_eq!(render("{{ cookiecutter.missing }}", &ctx), "{{ cookiecutter.missing }}");
        assert_eq!(render("tail {{ open", &ctx), "tail {{ open");
    }

    #[test]
    fn find_template_requires_placeholder_directory() {
        let repo = TempDir::new().unwrap();
        fs::create_dir(repo.path().join("docs")).unwrap();
        assert!(find_template(repo.path()).is_err());

        fs::create_dir(repo.path().join("{{cookiecutter.name}}")).unwrap();
        assert_eq!(
            find_template(repo.path()).unwrap(),
            repo.path().join("{{cookiecutter.name}}")
        );
    }

    #[test]
    fn generates_project_into_memory() {
        let repo = template_repo();
        let fs = MemoryFilesystem::new();
        let generator = SimpleGenerator::new("/out", Box::new(fs.clone()));

        let project = generator.generate_files(repo.path(), &context()).unwrap();

        assert_eq!(project, PathBuf::from("/out/demo"));
        assert_eq!(
            fs.read_file(Path::new("/out/demo/README.md")).as_deref(),
            Some("# demo\n(c) 2026 Ada\n")
        );
        assert_eq!(
            fs.read_file(Path::new("/out/demo/src/demo.txt")).as_deref(),
            Some("{{ unknown.key }}")
        );
        assert_eq!(
            fs.read_bytes(Path::new("/out/demo/logo.bin")),
            Some(vec![0xff, 0xfe, b'{', b'{'])
        );
    }

    #[test]
    fn refuses_existing_project() {
        let repo = template_repo();
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/out/demo")).unwrap();
        let generator = SimpleGenerator::new("/out", Box::new(fs));

        let err = generator.generate_files(repo.path(), &context()).unwrap_err();
        assert!(matches!(
            err,
            CutterError::Application(ApplicationError::ProjectExists { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn preserves_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let repo = template_repo();
        let script = repo.path().join("{{cookiecutter.project_slug}}/run.sh");
        fs::write(&script, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let memory = MemoryFilesystem::new();
        SimpleGenerator::new("/out", Box::new(memory.clone()))
            .generate_files(repo.path(), &context())
            .unwrap();

        assert!(memory.is_executable(Path::new("/out/demo/run.sh")));
        assert!(!memory.is_executable(Path::new("/out/demo/README.md")));
    }

    /// Accepts directories, rejects every file write.
    struct ReadOnlyFiles(MemoryFilesystem);

    impl Filesystem for ReadOnlyFiles {
        fn create_dir_all(&self, path: &Path) -> CutterResult<()> {
            self.0.create_dir_all(path)
        }
        fn write_file(&self, path: &Path, _content: &[u8]) -> CutterResult<()> {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        }
        fn set_permissions(&self, path: &Path, executable: bool) -> CutterResult<()> {
            self.0.set_permissions(path, executable)
        }
        fn exists(&self, path: &Path) -> bool {
            self.0.exists(path)
        }
        fn remove_dir_all(&self, path: &Path) -> CutterResult<()> {
            self.0.remove_dir_all(path)
        }
    }

    #[test]
    fn failed_write_rolls_back_project_dir() {
        let repo = template_repo();
        let memory = MemoryFilesystem::new();
        let generator = SimpleGenerator::new("/out", Box::new(ReadOnlyFiles(memory.clone())));

        let err = generator.generate_files(repo.path(), &context()).unwrap_err();

        assert!(err.to_string().contains("read-only"));
        assert!(!memory.exists(Path::new("/out/demo")));
    }
}
