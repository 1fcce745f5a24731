use thiserror::Error;

/// Root domain error type.
///
/// Reference expansion and classification are total, so the domain only
/// rejects malformed caller input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid extra context '{0}': expected KEY=VALUE")]
    InvalidContextPair(String),

    #[error("Extra context key cannot be empty: '{0}'")]
    EmptyContextKey(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidContextPair(pair) => vec![
                format!("'{}' has no '=' separator", pair),
                "Pass overrides as key=value, e.g. project_name=demo".into(),
            ],
            Self::EmptyContextKey(_) => vec![
                "Every override needs a variable name before '='".into(),
            ],
        }
    }
}
