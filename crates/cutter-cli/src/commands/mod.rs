//! Command handlers. Each translates parsed arguments into calls on the
//! core service or adapters and renders the result.

pub mod completions;
pub mod config;
pub mod expand;
pub mod new;

use std::path::PathBuf;

use cutter_adapters::FileConfigLoader;
use cutter_core::application::ConfigLoader;

use crate::cli::GlobalArgs;

/// The configuration file in effect: `--config` / `COOKIECUTTER_CONFIG`,
/// else the loader's default.
pub(crate) fn config_path(global: &GlobalArgs, loader: &FileConfigLoader) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(|| loader.default_path())
}
