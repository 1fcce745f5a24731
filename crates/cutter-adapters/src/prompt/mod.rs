//! Prompt adapters.
//!
//! Both prompters receive a draft context holding a single namespace and
//! return the replacement settings map for it. Keys starting with `_` are
//! private and never asked about.
//!
//! Variables are resolved in declaration order. A public default may refer
//! to earlier answers (`"{{ cookiecutter.project_name }}"`); it is rendered
//! against the answers so far before it is offered or accepted.

mod defaults;
mod terminal;

use serde_json::Value;

use cutter_core::domain::{Context, ContextMap, NAMESPACE};

use crate::generator::render;

pub use defaults::DefaultsPrompter;
pub use terminal::TerminalPrompter;

/// Prefix marking a variable as private.
pub const PRIVATE_PREFIX: char = '_';

pub(crate) fn is_private(key: &str) -> bool {
    key.starts_with(PRIVATE_PREFIX)
}

/// Namespace and settings map of a draft context.
pub(crate) fn draft(context: &Context) -> (String, ContextMap) {
    if let Some(settings) = context.settings() {
        return (NAMESPACE.to_owned(), settings.clone());
    }
    context
        .iter()
        .find_map(|(namespace, value)| {
            value
                .as_object()
                .map(|settings| (namespace.clone(), settings.clone()))
        })
        .unwrap_or_else(|| (NAMESPACE.to_owned(), ContextMap::new()))
}

/// Render placeholders in a declared default against `answered`.
///
/// Strings are rendered, lists and objects element by element. Other values
/// are returned as they are.
pub(crate) fn render_default(value: &Value, answered: &Context) -> Value {
    match value {
        Value::String(text) => Value::String(render(text, answered)),
        Value::Array(options) => Value::Array(
            options
                .iter()
                .map(|option| render_default(option, answered))
                .collect(),
        ),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), render_default(field, answered)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// The value a variable takes when nobody answers: the first entry of a
/// choice list, anything else unchanged.
pub(crate) fn default_answer(value: &Value) -> Value {
    match value {
        Value::Array(choices) => choices.first().cloned().unwrap_or(Value::Array(Vec::new())),
        other => other.clone(),
    }
}

/// Text shown for a value in prompts.
pub(crate) fn label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
