//! Values injected into every context at generation time.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde_json::Value;

use crate::domain::context::ContextMap;

/// `ctime(3)` layout, day of month space-padded.
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";
const ISO_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Runtime values captured once per generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeValues {
    version: String,
    repo_dir: PathBuf,
    context_file: PathBuf,
    now: NaiveDateTime,
}

impl RuntimeValues {
    /// Capture runtime values. `repo_dir` and `context_file` are expected to
    /// be absolute already.
    pub fn capture(
        repo_dir: impl Into<PathBuf>,
        context_file: impl Into<PathBuf>,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            version: crate::VERSION.to_owned(),
            repo_dir: repo_dir.into(),
            context_file: context_file.into(),
            now,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    pub fn context_file(&self) -> &Path {
        &self.context_file
    }

    pub fn current_year(&self) -> i32 {
        self.now.year()
    }

    pub fn current_date(&self) -> String {
        self.now.format(CTIME_FORMAT).to_string()
    }

    /// ISO 8601 with a space separator; microseconds only when non-zero.
    pub fn current_date_iso(&self) -> String {
        let base = self.now.format(ISO_FORMAT);
        match self.now.nanosecond() / 1_000 {
            0 => base.to_string(),
            // leap seconds carry an extra 1_000_000 micros
            micros => format!("{base}.{:06}", micros % 1_000_000),
        }
    }

    /// Runtime values as a context tier.
    pub fn to_map(&self) -> ContextMap {
        let mut map = ContextMap::new();
        map.insert("version".into(), Value::String(self.version.clone()));
        map.insert(
            "repo_dir".into(),
            Value::String(self.repo_dir.display().to_string()),
        );
        map.insert(
            "context_file".into(),
            Value::String(self.context_file.display().to_string()),
        );
        map.insert("current_year".into(), Value::from(self.current_year()));
        map.insert("current_date".into(), Value::String(self.current_date()));
        map.insert(
            "current_date_iso".into(),
            Value::String(self.current_date_iso()),
        );
        map
    }
}
