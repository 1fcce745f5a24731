//! Implementation of the `cutter new` command.
//!
//! Responsibility: translate CLI arguments into a `GenerateRequest`, run the
//! core service, and display results. No business logic lives here.

use std::{io::IsTerminal, path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use tracing::{info, instrument};

use cutter_adapters::{
    VcsCloner, service_with_cloner,
    vcs::{identify_repo, repo_name},
};
use cutter_core::{
    application::{
        GenerateRequest,
        ports::{CloneRequest, RepositoryCloner},
    },
    domain::parse_context_pairs,
    error::CutterResult,
};

use crate::{
    cli::{GlobalArgs, NewArgs, OutputFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `cutter new` command.
#[instrument(skip_all, fields(template = %args.template))]
pub fn execute(args: NewArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let extra_context =
        parse_context_pairs(&args.extra_context).map_err(|e| CliError::InvalidInput {
            message: e.to_string(),
            source: Some(Box::new(e)),
        })?;

    let mut request = GenerateRequest::new(&args.template)
        .no_input(args.no_input)
        .extra_context(extra_context);
    if let Some(reference) = args.checkout {
        request = request.checkout(reference);
    }
    if let Some(path) = &global.config {
        request = request.config_file(path);
    }

    let show_progress = !global.quiet && std::io::stderr().is_terminal();
    let cloner = ProgressCloner::new(VcsCloner::new(), show_progress);
    let service = service_with_cloner(&args.output_dir, Box::new(cloner));

    output.header(&format!("Generating from '{}'", args.template))?;
    let outcome = service.run(request)?;
    info!(project = %outcome.project_dir.display(), "Generation completed");

    if output.format() == OutputFormat::Json {
        let report = json!({
            "template": outcome.expanded,
            "source": outcome.source,
            "repo_dir": outcome.repo_dir,
            "project_dir": outcome.project_dir,
        });
        output.data(&report.to_string())?;
        return Ok(());
    }

    output.success(&format!(
        "Project created at {}",
        outcome.project_dir.display()
    ))?;
    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", outcome.project_dir.display()))?;
    }
    Ok(())
}

/// Shows a spinner on stderr while the wrapped cloner runs.
pub struct ProgressCloner<C> {
    inner: C,
    enabled: bool,
}

impl<C: RepositoryCloner> ProgressCloner<C> {
    pub fn new(inner: C, enabled: bool) -> Self {
        Self { inner, enabled }
    }

    /// The cloner asks before replacing a previous clone; the spinner
    /// must not draw over that prompt.
    fn may_prompt(request: &CloneRequest) -> bool {
        !request.no_input
            && identify_repo(&request.url)
                .map(|(_, url)| request.clone_to_dir.join(repo_name(&url)).exists())
                .unwrap_or(false)
    }
}

impl<C: RepositoryCloner> RepositoryCloner for ProgressCloner<C> {
    fn clone_repo(&self, request: &CloneRequest) -> CutterResult<PathBuf> {
        if !self.enabled || Self::may_prompt(request) {
            return self.inner.clone_repo(request);
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Cloning {}", request.url));
        spinner.enable_steady_tick(Duration::from_millis(80));

        let result = self.inner.clone_repo(request);
        spinner.finish_and_clear();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Fixed(PathBuf);

    impl RepositoryCloner for Fixed {
        fn clone_repo(&self, _request: &CloneRequest) -> CutterResult<PathBuf> {
            Ok(self.0.clone())
        }
    }

    fn request(dir: &TempDir, no_input: bool) -> CloneRequest {
        CloneRequest {
            url: "https://github.com/org/tpl.git".into(),
            checkout: None,
            clone_to_dir: dir.path().to_path_buf(),
            no_input,
        }
    }

    #[test]
    fn delegates_to_inner_cloner() {
        let dir = TempDir::new().unwrap();
        let cloner = ProgressCloner::new(Fixed(PathBuf::from("/cache/tpl")), false);

        let repo = cloner.clone_repo(&request(&dir, true)).unwrap();
        assert_eq!(repo, PathBuf::from("/cache/tpl"));
    }

    #[test]
    fn existing_clone_may_prompt_only_when_interactive() {
        let dir = TempDir::new().unwrap();
        assert!(!ProgressCloner::<Fixed>::may_prompt(&request(&dir, false)));

        std::fs::create_dir(dir.path().join("tpl")).unwrap();
        assert!(ProgressCloner::<Fixed>::may_prompt(&request(&dir, false)));
        assert!(!ProgressCloner::<Fixed>::may_prompt(&request(&dir, true)));
    }
}
