//! Application layer errors.
//!
//! These errors are raised by collaborators behind the ports and propagated
//! unchanged by the orchestrator. Input validation errors are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::{ErrorCategory, Stage};

/// Errors that occur while a collaborator runs.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// User configuration could not be read or parsed.
    #[error("Invalid user configuration at {path}: {reason}")]
    ConfigurationInvalid { path: PathBuf, reason: String },

    /// The repository URL does not name a supported VCS.
    #[error("Unknown repository type for '{url}'")]
    UnknownRepoType { url: String },

    /// The VCS executable is not installed.
    #[error("'{vcs}' is not installed")]
    VcsNotInstalled { vcs: &'static str },

    /// Cloning or checking out failed.
    #[error("Failed to fetch '{url}': {reason}")]
    CloneFailed { url: String, reason: String },

    /// The user refused to replace a previously cloned template.
    #[error("Refused to replace existing clone at {path}")]
    RecloneDeclined { path: PathBuf },

    /// The template declaration file is missing or malformed.
    #[error("Invalid template declaration at {path}: {reason}")]
    DeclarationInvalid { path: PathBuf, reason: String },

    /// Reading a value from the terminal failed.
    #[error("Prompt for '{key}' failed: {reason}")]
    PromptFailed { key: String, reason: String },

    /// The repository contains no project template directory.
    #[error("No project template found in {repo_dir}")]
    TemplateNotFound { repo_dir: PathBuf },

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Template rendering failed.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared state lock was poisoned.
    #[error("Internal state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigurationInvalid { path, .. } => vec![
                format!("Check the syntax of {}", path.display()),
                "Pass --config <FILE> to use a different configuration".into(),
            ],
            Self::UnknownRepoType { url } => vec![
                format!("Could not tell whether '{}' is a git or hg repository", url),
                "Prefix the URL with git+ or hg+ to choose explicitly".into(),
            ],
            Self::VcsNotInstalled { vcs } => vec![
                format!("Install {} and make sure it is on your PATH", vcs),
            ],
            Self::CloneFailed { url, .. } => vec![
                format!("Check that {} is reachable", url),
                "Check that the --checkout reference exists".into(),
            ],
            Self::RecloneDeclined { path } => vec![
                format!("Remove {} manually, or answer yes to re-clone", path.display()),
            ],
            Self::DeclarationInvalid { path, .. } => vec![
                format!("Make sure {} exists and contains a JSON object", path.display()),
            ],
            Self::TemplateNotFound { .. } => vec![
                "The repository must contain a directory named like {{cookiecutter.project_slug}}"
                    .into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Remove it or choose a different output directory".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationInvalid { .. } | Self::DeclarationInvalid { .. } => {
                ErrorCategory::Configuration
            }
            Self::UnknownRepoType { .. }
            | Self::VcsNotInstalled { .. }
            | Self::CloneFailed { .. }
            | Self::RecloneDeclined { .. } => ErrorCategory::Resolution,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::PromptFailed { .. }
            | Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }

    /// Pipeline stage that raises this error.
    pub fn stage(&self) -> Stage {
        match self {
            Self::ConfigurationInvalid { .. } => Stage::Configuration,
            Self::UnknownRepoType { .. }
            | Self::VcsNotInstalled { .. }
            | Self::CloneFailed { .. }
            | Self::RecloneDeclined { .. } => Stage::Resolution,
            Self::DeclarationInvalid { .. } => Stage::Declaration,
            Self::PromptFailed { .. } => Stage::Prompt,
            Self::TemplateNotFound { .. }
            | Self::ProjectExists { .. }
            | Self::RenderingFailed { .. }
            | Self::FilesystemError { .. } => Stage::Rendering,
            Self::LockPoisoned => Stage::Internal,
        }
    }
}
