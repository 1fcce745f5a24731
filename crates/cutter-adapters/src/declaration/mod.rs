//! Template declaration reader (`cookiecutter.json`).

use std::{fs, path::Path};

use serde_json::Value;
use tracing::{debug, instrument};

use cutter_core::{
    application::{ApplicationError, ports::DeclarationReader},
    domain::ContextMap,
    error::{CutterError, CutterResult},
};

/// Reads the template's declared defaults from a JSON object file.
///
/// Key order in the file is preserved; prompts follow it.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDeclarationReader;

impl JsonDeclarationReader {
    pub fn new() -> Self {
        Self
    }
}

impl DeclarationReader for JsonDeclarationReader {
    #[instrument(skip_all, fields(path = %context_file.display()))]
    fn read_defaults(&self, context_file: &Path) -> CutterResult<ContextMap> {
        let raw = fs::read_to_string(context_file)
            .map_err(|e| invalid(context_file, format!("cannot read file: {e}")))?;

        let value: Value = serde_json::from_str(&raw)
            .map_err(|e| invalid(context_file, format!("JSON decoding error: {e}")))?;

        match value {
            Value::Object(defaults) => {
                debug!(keys = defaults.len(), "Template declaration read");
                Ok(defaults)
            }
            other => Err(invalid(
                context_file,
                format!("expected a JSON object, found {}", kind(&other)),
            )),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn invalid(path: &Path, reason: String) -> CutterError {
    ApplicationError::DeclarationInvalid {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}
