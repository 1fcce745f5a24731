//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the orchestrator needs from its collaborators.
//! The `cutter-adapters` crate provides implementations. Errors raised here
//! are propagated by `GenerateService` without modification.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::domain::{Context, ContextMap, UserConfig};
use crate::error::CutterResult;

/// Port for loading the user configuration.
///
/// Implemented by:
/// - `cutter_adapters::user_config::FileConfigLoader` (production)
#[cfg_attr(test, mockall::automock)]
pub trait ConfigLoader: Send + Sync {
    /// Load configuration from `path`. A missing file yields built-in
    /// defaults, not an error.
    fn load(&self, path: &Path) -> CutterResult<UserConfig>;

    /// Path used when the caller does not name one.
    fn default_path(&self) -> PathBuf;
}

/// Everything the cloner needs for one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneRequest {
    pub url: String,
    pub checkout: Option<String>,
    pub clone_to_dir: PathBuf,
    pub no_input: bool,
}

/// Port for fetching remote templates.
///
/// Implemented by:
/// - `cutter_adapters::vcs::VcsCloner` (git / hg executables)
#[cfg_attr(test, mockall::automock)]
pub trait RepositoryCloner: Send + Sync {
    /// Clone `request.url` below `request.clone_to_dir` and return the
    /// local repository directory.
    fn clone_repo(&self, request: &CloneRequest) -> CutterResult<PathBuf>;
}

/// Port for reading template-declared defaults.
///
/// Implemented by:
/// - `cutter_adapters::declaration::JsonDeclarationReader`
#[cfg_attr(test, mockall::automock)]
pub trait DeclarationReader: Send + Sync {
    /// Read the declaration file at `context_file`. Missing or malformed
    /// files are errors carrying the path.
    fn read_defaults(&self, context_file: &Path) -> CutterResult<ContextMap>;
}

/// Port for the interactive override step.
///
/// Implemented by:
/// - `cutter_adapters::prompt::TerminalPrompter` (dialoguer)
/// - `cutter_adapters::prompt::DefaultsPrompter` (never reads input)
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Produce the final namespaced settings from `context`.
    ///
    /// With `no_input` this must not touch any interactive channel and must
    /// return the same key set derived from the existing defaults.
    fn prompt_for_config(&self, context: &Context, no_input: bool) -> CutterResult<ContextMap>;
}

/// Port for project generation.
///
/// Implemented by:
/// - `cutter_adapters::generator::SimpleGenerator` (placeholder substitution)
#[cfg_attr(test, mockall::automock)]
pub trait Generator: Send + Sync {
    /// Render the template in `repo_dir` with `context`; returns the
    /// directory of the generated project.
    fn generate_files(&self, repo_dir: &Path, context: &Context) -> CutterResult<PathBuf>;
}

/// Port for the current local time.
///
/// Implemented by:
/// - `cutter_adapters::clock::SystemClock`
/// - `cutter_adapters::clock::FixedClock` (tests, reproducible output)
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
