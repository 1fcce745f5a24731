//! User configuration loaded with the `config` crate.
//!
//! # Resolution order (highest priority first)
//!
//! 1. The configuration file, when it exists
//! 2. Built-in defaults (always present)
//!
//! The file format follows the extension: `.toml`, `.json`, anything else
//! (including the extension-less `~/.cookiecutterrc`) is read as YAML.
//!
//! ```yaml
//! cookiecutters_dir: ~/.cookiecutters
//! default_context:
//!   full_name: Ada Lovelace
//!   email: ada@example.com
//! abbreviations:
//!   corp: https://git.corp.example/{0}.git
//! ```

use std::path::{Path, PathBuf};

use ::config::{Config, File, FileFormat};
use tracing::{debug, instrument};

use cutter_core::{
    application::{ApplicationError, ports::ConfigLoader},
    domain::UserConfig,
    error::{CutterError, CutterResult},
};

/// Default configuration file name, relative to the home directory.
pub const USER_CONFIG_FILE: &str = ".cookiecutterrc";

/// Default clone cache directory name, relative to the home directory.
pub const CACHE_DIR: &str = ".cookiecutters";

/// Loads [`UserConfig`] from disk, falling back to defaults.
#[derive(Debug, Clone)]
pub struct FileConfigLoader {
    home: PathBuf,
}

impl FileConfigLoader {
    /// Loader rooted at the current user's home directory.
    pub fn new() -> Self {
        let home = directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        Self { home }
    }

    /// Loader rooted at an explicit home directory.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// Configuration used when no file exists.
    pub fn defaults(&self) -> UserConfig {
        UserConfig::new(self.home.join(CACHE_DIR))
    }

    /// Replace a leading `~` with the home directory.
    fn expand_home(&self, path: &Path) -> PathBuf {
        match path.strip_prefix("~") {
            Ok(rest) => self.home.join(rest),
            Err(_) => path.to_path_buf(),
        }
    }
}

impl Default for FileConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader for FileConfigLoader {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn load(&self, path: &Path) -> CutterResult<UserConfig> {
        if !path.is_file() {
            debug!("No user configuration file; using defaults");
            return Ok(self.defaults());
        }

        let defaults = self.defaults();
        let settings = Config::builder()
            .set_default(
                "cookiecutters_dir",
                defaults.cookiecutters_dir.display().to_string(),
            )
            .map_err(|e| config_error(path, e))?
            .add_source(File::from(path).format(format_for(path)))
            .build()
            .map_err(|e| config_error(path, e))?;

        let mut config: UserConfig = settings
            .try_deserialize()
            .map_err(|e| config_error(path, e))?;
        config.cookiecutters_dir = self.expand_home(&config.cookiecutters_dir);

        debug!(
            cookiecutters_dir = %config.cookiecutters_dir.display(),
            defaults = config.default_context.len(),
            abbreviations = config.abbreviations.len(),
            "User configuration loaded"
        );
        Ok(config)
    }

    fn default_path(&self) -> PathBuf {
        self.home.join(USER_CONFIG_FILE)
    }
}

fn format_for(path: &Path) -> FileFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => FileFormat::Toml,
        Some("json") => FileFormat::Json,
        _ => FileFormat::Yaml,
    }
}

fn config_error(path: &Path, e: ::config::ConfigError) -> CutterError {
    ApplicationError::ConfigurationInvalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}
