//! Unified error handling for Cutter Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with the failing pipeline stage and user-actionable suggestions.

use std::fmt;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Cutter Core operations.
#[derive(Debug, Error, Clone)]
pub enum CutterError {
    /// Errors from the domain layer (invalid input values).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors raised by a collaborator behind one of the ports.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl CutterError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Cutter".into(),
                "Please report this issue at: https://github.com/cosecruz/cutter/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// The pipeline stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Domain(_) => Stage::Input,
            Self::Application(e) => e.stage(),
            Self::Internal { .. } => Stage::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Resolution,
    NotFound,
    Configuration,
    Internal,
}

/// Pipeline stage in which a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Parsing caller-supplied values.
    Input,
    /// Loading the user configuration.
    Configuration,
    /// Fetching a remote template.
    Resolution,
    /// Reading the template declaration file.
    Declaration,
    /// Interactive prompting.
    Prompt,
    /// Generating the project tree.
    Rendering,
    Internal,
}

impl Stage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Configuration => "configuration",
            Self::Resolution => "template resolution",
            Self::Declaration => "template declaration",
            Self::Prompt => "prompt",
            Self::Rendering => "rendering",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convenient result type alias.
pub type CutterResult<T> = Result<T, CutterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn application_errors_keep_their_stage() {
        let err: CutterError = ApplicationError::CloneFailed {
            url: "https://example.com/x.git".into(),
            reason: "exit status 128".into(),
        }
        .into();

        assert_eq!(err.stage(), Stage::Resolution);
        assert_eq!(err.category(), ErrorCategory::Resolution);
    }

    #[test]
    fn configuration_error_mentions_path() {
        let err: CutterError = ApplicationError::ConfigurationInvalid {
            path: PathBuf::from("/home/me/.cookiecutterrc"),
            reason: "invalid type".into(),
        }
        .into();

        assert!(err.to_string().contains("/home/me/.cookiecutterrc"));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn domain_errors_are_input_stage() {
        let err: CutterError = DomainError::InvalidContextPair("novalue".into()).into();
        assert_eq!(err.stage(), Stage::Input);
        assert!(!err.suggestions().is_empty());
    }
}
