//! User configuration as seen by the orchestrator.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::context::ContextMap;

/// Read-only user configuration.
///
/// How it is loaded (file format, location, fallbacks) belongs to the
/// `ConfigLoader` adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// Where remote templates are cloned to.
    pub cookiecutters_dir: PathBuf,

    /// Overrides applied on top of every template's declared defaults.
    #[serde(default)]
    pub default_context: ContextMap,

    /// Extra or replacement reference abbreviations.
    #[serde(default)]
    pub abbreviations: BTreeMap<String, String>,
}

impl UserConfig {
    pub fn new(cookiecutters_dir: impl Into<PathBuf>) -> Self {
        Self {
            cookiecutters_dir: cookiecutters_dir.into(),
            default_context: ContextMap::new(),
            abbreviations: BTreeMap::new(),
        }
    }

    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.default_context.insert(key.into(), value.into());
        self
    }

    pub fn with_abbreviation(mut self, key: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.abbreviations.insert(key.into(), pattern.into());
        self
    }
}
