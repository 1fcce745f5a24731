//! `cutter config`: inspect the user configuration.

use cutter_adapters::FileConfigLoader;
use cutter_core::{application::ConfigLoader, domain::UserConfig};

use crate::{
    cli::{ConfigCommands, GlobalArgs, OutputFormat},
    commands::config_path,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let loader = FileConfigLoader::new();
    let path = config_path(&global, &loader);

    match cmd {
        ConfigCommands::Show => {
            let config = loader.load(&path)?;
            let rendered = render(&config, output.format())?;
            if !path.is_file() && output.format() != OutputFormat::Json {
                output.print(&format!("# {} not found; showing defaults", path.display()))?;
            }
            output.data(rendered.trim_end())?;
        }

        ConfigCommands::Path => {
            output.data(&path.display().to_string())?;
        }
    }

    Ok(())
}

fn render(config: &UserConfig, format: OutputFormat) -> CliResult<String> {
    let rendered = if format == OutputFormat::Json {
        serde_json::to_string_pretty(config).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })?
    } else {
        toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })?
    };
    Ok(rendered)
}
