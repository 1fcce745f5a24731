//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Load user configuration
//! 2. Expand the template reference and classify it
//! 3. Clone (remote) or use in place (local)
//! 4. Merge template defaults, user defaults and extra context
//! 5. Prompt, then add extra globals and runtime values
//! 6. Hand the finished context to the generator
//!
//! Every step blocks on its collaborator. Errors are propagated unchanged;
//! nothing is retried and nothing is cleaned up here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{
            CloneRequest, Clock, ConfigLoader, DeclarationReader, Generator, Prompter,
            RepositoryCloner,
        },
    },
    domain::{
        Context, ContextLayers, ContextMap, RuntimeValues, TemplateSource, Tier, UserConfig,
        declaration_path, expand_abbreviations, namespace_for,
    },
    error::CutterResult,
};

/// Caller input for one generation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateRequest {
    /// Template reference: alias, `prefix:rest`, URL or local path.
    pub template: String,
    /// Branch, tag or commit to check out after cloning.
    pub checkout: Option<String>,
    /// Never read from the terminal.
    pub no_input: bool,
    /// Overrides for the template's declared settings.
    pub extra_context: ContextMap,
    /// Additions to the top-level context.
    pub extra_globals: ContextMap,
    /// User configuration file; `None` uses the loader's default path.
    pub config_file: Option<PathBuf>,
}

impl GenerateRequest {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }

    pub fn checkout(mut self, checkout: impl Into<String>) -> Self {
        self.checkout = Some(checkout.into());
        self
    }

    pub fn no_input(mut self, no_input: bool) -> Self {
        self.no_input = no_input;
        self
    }

    pub fn extra_context(mut self, extra_context: ContextMap) -> Self {
        self.extra_context = extra_context;
        self
    }

    pub fn extra_globals(mut self, extra_globals: ContextMap) -> Self {
        self.extra_globals = extra_globals;
        self
    }

    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateOutcome {
    /// The reference after abbreviation expansion.
    pub expanded: String,
    pub source: TemplateSource,
    /// Template directory that was rendered.
    pub repo_dir: PathBuf,
    /// The context handed to the generator.
    pub context: Context,
    /// Directory of the generated project.
    pub project_dir: PathBuf,
}

/// Main generation service.
pub struct GenerateService {
    config_loader: Box<dyn ConfigLoader>,
    cloner: Box<dyn RepositoryCloner>,
    declarations: Box<dyn DeclarationReader>,
    prompter: Box<dyn Prompter>,
    generator: Box<dyn Generator>,
    clock: Box<dyn Clock>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(
        config_loader: Box<dyn ConfigLoader>,
        cloner: Box<dyn RepositoryCloner>,
        declarations: Box<dyn DeclarationReader>,
        prompter: Box<dyn Prompter>,
        generator: Box<dyn Generator>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            config_loader,
            cloner,
            declarations,
            prompter,
            generator,
            clock,
        }
    }

    /// Generate a project from `request.template`.
    #[instrument(
        skip_all,
        fields(template = %request.template, no_input = request.no_input)
    )]
    pub fn run(&self, request: GenerateRequest) -> CutterResult<GenerateOutcome> {
        let config = self.load_config(request.config_file.as_deref())?;

        let expanded = expand_abbreviations(&request.template, &config.abbreviations);
        if expanded != request.template {
            info!(expanded = %expanded, "Expanded template abbreviation");
        }

        let source = TemplateSource::classify(&expanded);
        debug!(source = %source, "Template source classified");

        let repo_dir = self.fetch(&source, &request, &config)?;
        let context = self.assemble_context(&repo_dir, &request, &config)?;

        info!(repo_dir = %repo_dir.display(), "Generating project");
        let project_dir = self.generator.generate_files(&repo_dir, &context)?;
        info!(project = %project_dir.display(), "Generation completed");

        Ok(GenerateOutcome {
            expanded,
            source,
            repo_dir,
            context,
            project_dir,
        })
    }

    /// Load the user configuration from `path` or the loader's default.
    pub fn load_config(&self, path: Option<&Path>) -> CutterResult<UserConfig> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.config_loader.default_path());
        debug!(path = %path.display(), "Loading user configuration");
        self.config_loader.load(&path)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Obtain a local directory for `source`.
    fn fetch(
        &self,
        source: &TemplateSource,
        request: &GenerateRequest,
        config: &UserConfig,
    ) -> CutterResult<PathBuf> {
        match source {
            TemplateSource::Remote { url, .. } => {
                let clone = CloneRequest {
                    url: url.clone(),
                    checkout: request.checkout.clone(),
                    clone_to_dir: config.cookiecutters_dir.clone(),
                    no_input: request.no_input,
                };
                info!(url = %url, checkout = ?clone.checkout, "Cloning template");
                self.cloner.clone_repo(&clone)
            }
            TemplateSource::Local { path } => Ok(path.clone()),
        }
    }

    /// Build the final context for `repo_dir`.
    fn assemble_context(
        &self,
        repo_dir: &Path,
        request: &GenerateRequest,
        config: &UserConfig,
    ) -> CutterResult<Context> {
        let context_file = declaration_path(repo_dir);
        debug!(context_file = %context_file.display(), "Reading template declaration");

        let declared = self.declarations.read_defaults(&context_file)?;
        let settings = ContextLayers::new()
            .with(Tier::TemplateDefaults, declared)
            .with(Tier::UserDefaults, config.default_context.clone())
            .with(Tier::ExtraContext, request.extra_context.clone())
            .merge();

        let namespace = namespace_for(&context_file);
        let draft = Context::namespaced(&namespace, settings);
        let answers = self.prompter.prompt_for_config(&draft, request.no_input)?;

        let runtime = RuntimeValues::capture(
            absolute(repo_dir)?,
            absolute(&context_file)?,
            self.clock.now(),
        );

        Ok(Context::assemble(
            &namespace,
            answers,
            request.extra_globals.clone(),
            &runtime,
        ))
    }
}

/// Absolute form of `path`; an empty path is the current directory.
fn absolute(path: &Path) -> CutterResult<PathBuf> {
    let resolved = if path.as_os_str().is_empty() {
        std::env::current_dir()
    } else {
        std::path::absolute(path)
    };
    resolved.map_err(|e| {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: format!("Failed to resolve absolute path: {}", e),
        }
        .into()
    })
}
