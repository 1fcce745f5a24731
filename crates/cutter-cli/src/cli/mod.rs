//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "cutter",
    bin_name = "cutter",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Create projects from cookiecutter templates",
    long_about = "Cutter renders a project from a template directory or a git/hg \
                  repository, merging template defaults, your configuration and \
                  command-line overrides.",
    after_help = "EXAMPLES:\n\
        \x20 cutter new gh:audreyr/cookiecutter-pypackage\n\
        \x20 cutter new ./my-template project_name=demo --no-input\n\
        \x20 cutter expand bb:pokoli/cookiecutter-trytonmodule\n\
        \x20 cutter completions bash > /usr/share/bash-completion/completions/cutter",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a project from a template.
    #[command(
        visible_alias = "n",
        about = "Generate a project from a template",
        after_help = "EXAMPLES:\n\
            \x20 cutter new gh:audreyr/cookiecutter-pypackage\n\
            \x20 cutter new https://github.com/org/template.git --checkout v2\n\
            \x20 cutter new ../template full_name='Ada Lovelace' --no-input -o build"
    )]
    New(NewArgs),

    /// Show how a template reference resolves.
    #[command(
        about = "Expand abbreviations and classify a template reference",
        after_help = "EXAMPLES:\n\
            \x20 cutter expand gh:org/template\n\
            \x20 cutter expand corp:tools/service --output-format json"
    )]
    Expand(ExpandArgs),

    /// Inspect the user configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 cutter config show\n\
            \x20 cutter config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 cutter completions bash > ~/.local/share/bash-completion/completions/cutter\n\
            \x20 cutter completions zsh  > ~/.zfunc/_cutter\n\
            \x20 cutter completions fish > ~/.config/fish/completions/cutter.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `cutter new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Template directory, repository URL or abbreviation (`gh:org/repo`).
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Overrides for template variables.
    #[arg(value_name = "KEY=VALUE", help = "Override template variables")]
    pub extra_context: Vec<String>,

    /// Branch, tag or commit to check out after cloning.
    #[arg(long = "checkout", value_name = "REF", help = "Revision to check out")]
    pub checkout: Option<String>,

    /// Use defaults instead of prompting.
    #[arg(long = "no-input", help = "Do not prompt; use defaults and overrides")]
    pub no_input: bool,

    /// Where the project directory is created.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Output directory"
    )]
    pub output_dir: PathBuf,
}

// ── expand ────────────────────────────────────────────────────────────────────

/// Arguments for `cutter expand`.
#[derive(Debug, Args)]
pub struct ExpandArgs {
    #[arg(value_name = "TEMPLATE")]
    pub template: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `cutter completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `cutter config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration.
    Show,
    /// Print the path of the configuration file in use.
    Path,
}
