//! Flags shared by every `cutter` subcommand.

use std::path::PathBuf;

use clap::Args;

/// Logging, output and user-configuration flags, flattened into
/// [`super::Cli`] and accepted before or after the subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more about template resolution (-v, -vv, -vvv)
    ///
    /// Without the flag only warnings and errors are logged. `-v` logs
    /// generation milestones, `-vv` each loaded config and rendered file,
    /// `-vvv` everything. `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print nothing but errors and requested data
    ///
    /// Status lines are dropped and logging is limited to errors. JSON
    /// reports from `--output-format json` are still written.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never colour the output
    ///
    /// Also enabled through the `NO_COLOR` environment variable.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Read the user configuration from FILE instead of ~/.cookiecutterrc
    ///
    /// The file supplies `cookiecutters_dir`, `default_context` and
    /// `abbreviations`. YAML unless the name ends in `.toml` or `.json`. A
    /// missing file means built-in defaults.
    #[arg(
        short,
        long,
        global = true,
        env = "COOKIECUTTER_CONFIG",
        value_name = "FILE"
    )]
    pub config: Option<PathBuf>,

    /// How results are printed
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

/// Rendering of command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped
    #[default]
    Auto,
    /// Coloured labels and status marks
    Human,
    /// `key: value` lines without colour
    Plain,
    /// One JSON document per command
    Json,
}
