//! Template reference abbreviations.
//!
//! A reference such as `gh:audreyr/cookiecutter-pypackage` is expanded to a
//! full URL before the source is classified. The built-in table is a constant;
//! user abbreviations are overlaid on a fresh copy for every expansion.

use std::collections::BTreeMap;

/// Substitution slot inside an expansion pattern.
pub const SLOT: &str = "{0}";

/// Abbreviations available without any user configuration.
pub const BUILTIN_ABBREVIATIONS: &[(&str, &str)] = &[
    ("gh", "https://github.com/{0}.git"),
    ("bb", "https://bitbucket.org/{0}"),
];

/// Effective abbreviation table: built-ins overlaid by user entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbbreviationTable {
    entries: BTreeMap<String, String>,
}

impl AbbreviationTable {
    /// Table containing only the built-in abbreviations.
    pub fn builtin() -> Self {
        let entries = BUILTIN_ABBREVIATIONS
            .iter()
            .map(|(key, pattern)| ((*key).to_owned(), (*pattern).to_owned()))
            .collect();
        Self { entries }
    }

    /// Built-ins overlaid by `user`; user entries win on key collision.
    pub fn with_overrides<'a, I>(user: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut table = Self::builtin();
        for (key, pattern) in user {
            table.entries.insert(key.clone(), pattern.clone());
        }
        table
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Expand `reference` against this table.
    ///
    /// 1. An exact key match returns the pattern verbatim, slot included.
    /// 2. Otherwise the part before the first `:` is looked up and the slot is
    ///    filled with everything after it (empty when there is no colon).
    /// 3. Anything else is returned unchanged.
    pub fn expand(&self, reference: &str) -> String {
        if let Some(pattern) = self.get(reference) {
            return pattern.to_owned();
        }

        let (prefix, rest) = reference.split_once(':').unwrap_or((reference, ""));
        match self.get(prefix) {
            Some(pattern) => pattern.replace(SLOT, rest),
            None => reference.to_owned(),
        }
    }
}

impl Default for AbbreviationTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Expand `reference` using the built-ins overlaid by `user_abbreviations`.
pub fn expand_abbreviations(reference: &str, user_abbreviations: &BTreeMap<String, String>) -> String {
    AbbreviationTable::with_overrides(user_abbreviations).expand(reference)
}
