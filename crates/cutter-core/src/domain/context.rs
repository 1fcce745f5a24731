//! Layered template context.
//!
//! A context is assembled from tiers. Each tier is a JSON object; tiers are
//! merged in [`Tier`] order and a later tier overwrites an earlier one on key
//! collision. The order in which tiers are *pushed* does not matter.
//!
//! ```text
//! TemplateDefaults < UserDefaults < ExtraContext     (namespaced settings)
//! Answers < ExtraGlobals < Runtime                   (top level)
//! ```
//!
//! Choice variables: when an override tier supplies a value that is already
//! one of the options of a declared list, the list is reordered so that value
//! becomes the first (default) option instead of being replaced.

use serde::Serialize;
use serde_json::Value;

use crate::domain::DomainError;
use crate::domain::runtime::RuntimeValues;

/// Insertion-ordered JSON object.
pub type ContextMap = serde_json::Map<String, Value>;

/// Key under which the template's own settings live.
pub const NAMESPACE: &str = "cookiecutter";

/// Precedence tier of a context layer, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Values declared in the template's `cookiecutter.json`.
    TemplateDefaults,
    /// `default_context` from the user configuration.
    UserDefaults,
    /// Per-call overrides from the caller.
    ExtraContext,
    /// Namespaced settings after prompting.
    Answers,
    /// Per-call additions to the top-level context.
    ExtraGlobals,
    /// Values computed at generation time. Always wins.
    Runtime,
}

impl Tier {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TemplateDefaults => "template defaults",
            Self::UserDefaults => "user defaults",
            Self::ExtraContext => "extra context",
            Self::Answers => "answers",
            Self::ExtraGlobals => "extra globals",
            Self::Runtime => "runtime",
        }
    }

    /// Whether this tier selects among declared choices instead of replacing them.
    pub const fn selects_choices(self) -> bool {
        matches!(self, Self::UserDefaults | Self::ExtraContext)
    }
}

/// Ordered list of context tiers with a single merge function.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextLayers {
    layers: Vec<(Tier, ContextMap)>,
}

impl ContextLayers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tier (builder style).
    pub fn with(mut self, tier: Tier, values: ContextMap) -> Self {
        self.push(tier, values);
        self
    }

    pub fn push(&mut self, tier: Tier, values: ContextMap) {
        self.layers.push((tier, values));
    }

    /// Merge all tiers, lowest precedence first.
    ///
    /// Tiers are sorted stably, so two layers of the same tier apply in push
    /// order. Keys keep the position of their first appearance.
    pub fn merge(&self) -> ContextMap {
        let mut ordered: Vec<&(Tier, ContextMap)> = self.layers.iter().collect();
        ordered.sort_by_key(|(tier, _)| *tier);

        let mut merged = ContextMap::new();
        for (tier, values) in ordered {
            for (key, value) in values {
                overlay(&mut merged, *tier, key, value);
            }
        }
        merged
    }
}

fn overlay(target: &mut ContextMap, tier: Tier, key: &str, value: &Value) {
    if tier.selects_choices() {
        if let Some(Value::Array(options)) = target.get_mut(key) {
            if let Some(position) = options.iter().position(|option| option == value) {
                let chosen = options.remove(position);
                options.insert(0, chosen);
                return;
            }
        }
    }
    target.insert(key.to_owned(), value.clone());
}

/// The finished, immutable context handed to the generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Context {
    values: ContextMap,
}

impl Context {
    pub fn new(values: ContextMap) -> Self {
        Self { values }
    }

    /// Context holding only `settings` under `namespace`.
    pub fn namespaced(namespace: &str, settings: ContextMap) -> Self {
        let mut values = ContextMap::new();
        values.insert(namespace.to_owned(), Value::Object(settings));
        Self { values }
    }

    /// Final assembly: answers under `namespace`, then extra globals, then
    /// runtime values.
    pub fn assemble(
        namespace: &str,
        answers: ContextMap,
        extra_globals: ContextMap,
        runtime: &RuntimeValues,
    ) -> Self {
        let mut namespaced = ContextMap::new();
        namespaced.insert(namespace.to_owned(), Value::Object(answers));

        let values = ContextLayers::new()
            .with(Tier::Answers, namespaced)
            .with(Tier::ExtraGlobals, extra_globals)
            .with(Tier::Runtime, runtime.to_map())
            .merge();
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The object stored under `namespace`, if it is one.
    pub fn namespace(&self, namespace: &str) -> Option<&ContextMap> {
        self.values.get(namespace).and_then(Value::as_object)
    }

    /// Shorthand for `namespace(NAMESPACE)`.
    pub fn settings(&self) -> Option<&ContextMap> {
        self.namespace(NAMESPACE)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

/// Parse a `KEY=VALUE` override. The value is always a string.
pub fn parse_context_pair(pair: &str) -> Result<(String, Value), DomainError> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| DomainError::InvalidContextPair(pair.to_owned()))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(DomainError::EmptyContextKey(pair.to_owned()));
    }

    Ok((key.to_owned(), Value::String(value.to_owned())))
}

/// Parse many `KEY=VALUE` overrides into one map; later pairs win.
pub fn parse_context_pairs<I, S>(pairs: I) -> Result<ContextMap, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|pair| parse_context_pair(pair.as_ref()))
        .collect()
}
