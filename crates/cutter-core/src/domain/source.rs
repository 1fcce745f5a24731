//! Template source classification.
//!
//! # Grammar
//!
//! After abbreviation expansion a reference is **remote** when it contains
//! one of the markers below *anywhere* in the string, checked in order:
//!
//! | Marker      | Variant                 |
//! |-------------|-------------------------|
//! | `git@`      | [`RemoteMarker::Ssh`]   |
//! | `https://`  | [`RemoteMarker::Https`] |
//!
//! Every other reference is a **local** path used as-is. The test is a plain
//! substring match, so a local path such as `/srv/git@host/tpl` is
//! classified remote.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// The substring that made a reference remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteMarker {
    Ssh,
    Https,
}

impl RemoteMarker {
    /// Markers in the order they are tested.
    pub const ALL: [RemoteMarker; 2] = [Self::Ssh, Self::Https];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ssh => "git@",
            Self::Https => "https://",
        }
    }

    /// First marker found in `reference`, if any.
    pub fn detect(reference: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|marker| reference.contains(marker.as_str()))
    }
}

impl fmt::Display for RemoteMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ssh => f.write_str("ssh"),
            Self::Https => f.write_str("https"),
        }
    }
}

/// Where a template lives once its reference has been expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TemplateSource {
    /// A directory on this machine; used in place, never copied.
    Local { path: PathBuf },
    /// A repository that must be cloned before use.
    Remote { url: String, marker: RemoteMarker },
}

impl TemplateSource {
    /// Classify an expanded reference. See the module docs for the grammar.
    pub fn classify(reference: &str) -> Self {
        match RemoteMarker::detect(reference) {
            Some(marker) => Self::Remote {
                url: reference.to_owned(),
                marker,
            },
            None => Self::Local {
                path: PathBuf::from(reference),
            },
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    pub fn local_path(&self) -> Option<&Path> {
        match self {
            Self::Local { path } => Some(path),
            Self::Remote { .. } => None,
        }
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local { path } => write!(f, "local directory {}", path.display()),
            Self::Remote { url, marker } => write!(f, "remote repository {url} ({marker})"),
        }
    }
}

/// Location of the declaration file inside a repository directory.
pub fn declaration_path(repo_dir: &Path) -> PathBuf {
    repo_dir.join(crate::DECLARATION_FILE)
}

/// Namespace key for the template settings: the declaration file's stem.
pub fn namespace_for(context_file: &Path) -> String {
    context_file
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .unwrap_or(crate::domain::context::NAMESPACE)
        .to_owned()
}
