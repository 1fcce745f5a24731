//! Repository cloning through the `git` and `hg` executables.
//!
//! | URL                                   | VCS       |
//! |---------------------------------------|-----------|
//! | `git+<url>` / `hg+<url>`              | explicit  |
//! | contains `git`                        | git       |
//! | contains `bitbucket`                  | Mercurial |
//! | anything else                         | rejected  |

use std::{
    fmt,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use console::Term;
use dialoguer::Confirm;
use tracing::{debug, info, instrument, warn};

use cutter_core::{
    application::{
        ApplicationError,
        ports::{CloneRequest, RepositoryCloner},
    },
    error::{CutterError, CutterResult},
};

/// Supported version control systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsKind {
    Git,
    Hg,
}

impl VcsKind {
    /// Executable name.
    pub const fn program(self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Hg => "hg",
        }
    }

    /// Subcommand that switches the working copy to a revision.
    const fn checkout_command(self) -> &'static str {
        match self {
            Self::Git => "checkout",
            Self::Hg => "update",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "git" => Some(Self::Git),
            "hg" => Some(Self::Hg),
            _ => None,
        }
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Determine the VCS for `url` and strip any explicit `vcs+` prefix.
pub fn identify_repo(url: &str) -> CutterResult<(VcsKind, String)> {
    if let Some((prefix, rest)) = url.split_once('+') {
        if let Some(kind) = VcsKind::from_prefix(prefix) {
            return Ok((kind, rest.to_owned()));
        }
    }

    if url.contains("git") {
        Ok((VcsKind::Git, url.to_owned()))
    } else if url.contains("bitbucket") {
        Ok((VcsKind::Hg, url.to_owned()))
    } else {
        Err(ApplicationError::UnknownRepoType {
            url: url.to_owned(),
        }
        .into())
    }
}

/// Directory name a clone of `url` lands in.
pub fn repo_name(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    let last = trimmed.rsplit(['/', ':']).next().unwrap_or(trimmed);
    last.strip_suffix(".git").unwrap_or(last).to_owned()
}

/// Clones with the system `git`/`hg` executables.
#[derive(Debug, Clone)]
pub struct VcsCloner {
    term: Term,
}

impl VcsCloner {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn ensure_installed(kind: VcsKind) -> CutterResult<()> {
        let found = Command::new(kind.program())
            .arg("--version")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false);

        if found {
            Ok(())
        } else {
            Err(ApplicationError::VcsNotInstalled {
                vcs: kind.program(),
            }
            .into())
        }
    }

    /// Clear a previous clone, asking first unless `no_input`.
    fn clear_previous(&self, url: &str, repo_dir: &Path, no_input: bool) -> CutterResult<()> {
        if !no_input {
            let replace = Confirm::new()
                .with_prompt(format!(
                    "You've cloned {} before. Delete and re-clone it?",
                    repo_dir.display()
                ))
                .default(true)
                .interact_on(&self.term)
                .map_err(|e| ApplicationError::PromptFailed {
                    key: "re-clone".into(),
                    reason: e.to_string(),
                })?;
            if !replace {
                return Err(ApplicationError::RecloneDeclined {
                    path: repo_dir.to_path_buf(),
                }
                .into());
            }
        }

        warn!(path = %repo_dir.display(), "Removing previous clone");
        std::fs::remove_dir_all(repo_dir).map_err(|e| {
            CutterError::from(ApplicationError::CloneFailed {
                url: url.to_owned(),
                reason: format!("cannot remove {}: {e}", repo_dir.display()),
            })
        })
    }
}

impl Default for VcsCloner {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryCloner for VcsCloner {
    #[instrument(skip_all, fields(url = %request.url))]
    fn clone_repo(&self, request: &CloneRequest) -> CutterResult<PathBuf> {
        let (kind, url) = identify_repo(&request.url)?;
        Self::ensure_installed(kind)?;

        std::fs::create_dir_all(&request.clone_to_dir).map_err(|e| {
            CutterError::from(ApplicationError::CloneFailed {
                url: url.clone(),
                reason: format!("cannot create {}: {e}", request.clone_to_dir.display()),
            })
        })?;

        let name = repo_name(&url);
        let repo_dir = request.clone_to_dir.join(&name);
        if repo_dir.exists() {
            self.clear_previous(&url, &repo_dir, request.no_input)?;
        }

        info!(vcs = %kind, dir = %repo_dir.display(), "Cloning");
        run(kind, &["clone", &url, &name], &request.clone_to_dir, &url)?;

        if let Some(reference) = &request.checkout {
            debug!(reference = %reference, "Checking out");
            run(kind, &[kind.checkout_command(), reference], &repo_dir, &url)?;
        }

        Ok(repo_dir)
    }
}

fn run(kind: VcsKind, args: &[&str], dir: &Path, url: &str) -> CutterResult<Output> {
    let failed = |reason: String| {
        CutterError::from(ApplicationError::CloneFailed {
            url: url.to_owned(),
            reason,
        })
    };

    let output = Command::new(kind.program())
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| failed(e.to_string()))?;

    if !output.status.success() {
        return Err(failed(format!(
            "{} {} exited with {}: {}",
            kind,
            args.first().copied().unwrap_or_default(),
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(output)
}
