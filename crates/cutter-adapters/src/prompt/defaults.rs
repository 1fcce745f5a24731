//! Non-interactive prompter.

use tracing::debug;

use cutter_core::{
    application::ports::Prompter,
    domain::{Context, ContextMap},
    error::CutterResult,
};

use super::{default_answer, draft, is_private, render_default};

/// Answers every variable with its default, never reading input.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultsPrompter;

impl DefaultsPrompter {
    pub fn new() -> Self {
        Self
    }

    /// Resolve every variable in `settings` to its default answer, rendering
    /// each default against the answers before it.
    pub fn answer(namespace: &str, settings: &ContextMap) -> ContextMap {
        let mut answers = ContextMap::new();
        for (key, value) in settings {
            let answer = if is_private(key) {
                value.clone()
            } else {
                let answered = Context::namespaced(namespace, answers.clone());
                default_answer(&render_default(value, &answered))
            };
            answers.insert(key.clone(), answer);
        }
        answers
    }
}

impl Prompter for DefaultsPrompter {
    fn prompt_for_config(&self, context: &Context, _no_input: bool) -> CutterResult<ContextMap> {
        let (namespace, settings) = draft(context);
        debug!(variables = settings.len(), "Using defaults without prompting");
        Ok(Self::answer(&namespace, &settings))
    }
}
