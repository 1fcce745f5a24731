//! Interactive prompter built on dialoguer.

use console::{Term, style};
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use serde_json::Value;
use tracing::{debug, instrument};

use cutter_core::{
    application::{ApplicationError, ports::Prompter},
    domain::{Context, ContextMap},
    error::{CutterError, CutterResult},
};

use super::{DefaultsPrompter, draft, is_private, label, render_default};

/// Asks for every public variable on the terminal, in declaration order.
/// Each default is shown already rendered against the earlier answers.
///
/// With `no_input` it behaves exactly like [`DefaultsPrompter`].
#[derive(Debug, Clone)]
pub struct TerminalPrompter {
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn ask(&self, key: &str, value: &Value) -> CutterResult<Value> {
        let theme = prompt_theme();
        let failed = |e: dialoguer::Error| prompt_failed(key, e);

        match value {
            Value::Bool(default) => Confirm::with_theme(&theme)
                .with_prompt(key)
                .default(*default)
                .interact_on(&self.term)
                .map(Value::Bool)
                .map_err(failed),
            Value::Array(choices) if !choices.is_empty() => {
                let labels: Vec<String> = choices.iter().map(label).collect();
                let index = Select::with_theme(&theme)
                    .with_prompt(format!("Select {key}"))
                    .items(&labels)
                    .default(0)
                    .interact_on(&self.term)
                    .map_err(failed)?;
                Ok(choices[index].clone())
            }
            Value::String(_) | Value::Number(_) => {
                let default = label(value);
                let answer: String = Input::with_theme(&theme)
                    .with_prompt(key)
                    .default(default.clone())
                    .interact_text_on(&self.term)
                    .map_err(failed)?;
                // Unchanged answers keep the declared type.
                if answer == default {
                    Ok(value.clone())
                } else {
                    Ok(Value::String(answer))
                }
            }
            other => Ok(other.clone()),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    #[instrument(skip_all, fields(no_input = no_input))]
    fn prompt_for_config(&self, context: &Context, no_input: bool) -> CutterResult<ContextMap> {
        let (namespace, settings) = draft(context);
        if no_input {
            return Ok(DefaultsPrompter::answer(&namespace, &settings));
        }

        let mut answers = ContextMap::new();
        for (key, value) in &settings {
            let answer = if is_private(key) {
                value.clone()
            } else {
                let answered = Context::namespaced(&namespace, answers.clone());
                self.ask(key, &render_default(value, &answered))?
            };
            answers.insert(key.clone(), answer);
        }
        debug!(variables = answers.len(), "Prompting complete");
        Ok(answers)
    }
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style(String::new()),
        ..ColorfulTheme::default()
    }
}

fn prompt_failed(key: &str, e: dialoguer::Error) -> CutterError {
    ApplicationError::PromptFailed {
        key: key.to_owned(),
        reason: e.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_input_never_touches_the_terminal() {
        let mut settings = ContextMap::new();
        settings.insert("license".into(), json!(["Apache-2.0", "MIT"]));
        settings.insert("_hidden".into(), json!(["x", "y"]));
        let ctx = Context::namespaced("cookiecutter", settings);

        let answers = TerminalPrompter::new().prompt_for_config(&ctx, true).unwrap();

        assert_eq!(answers["license"], json!("Apache-2.0"));
        assert_eq!(answers["_hidden"], json!(["x", "y"]));
    }

    #[test]
    fn no_input_renders_dependent_defaults() {
        let mut settings = ContextMap::new();
        settings.insert("project_name".into(), json!("Acme"));
        settings.insert("repo_name".into(), json!("{{ cookiecutter.project_name }}"));
        let ctx = Context::namespaced("cookiecutter", settings);

        let answers = TerminalPrompter::new().prompt_for_config(&ctx, true).unwrap();

        assert_eq!(answers["repo_name"], json!("Acme"));
    }

    #[test]
    fn empty_draft_yields_empty_answers() {
        let answers = TerminalPrompter::new()
            .prompt_for_config(&Context::default(), true)
            .unwrap();
        assert!(answers.is_empty());
    }
}
