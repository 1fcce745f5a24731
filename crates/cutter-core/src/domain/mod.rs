//! Core domain layer for Cutter.
//!
//! This module contains pure logic with no I/O. Cloning, prompting, reading
//! files and generating output are handled via ports (traits) defined in the
//! application layer.
//!
//! - **abbreviation**: expand `gh:user/repo` style references
//! - **source**: classify an expanded reference as local or remote
//! - **context**: tiered context merge and the immutable [`Context`]
//! - **runtime**: values injected last (version, paths, dates)
//! - **config**: the user configuration shape
pub mod abbreviation;
pub mod config;
pub mod context;
pub mod error;
pub mod runtime;
pub mod source;

pub use abbreviation::{AbbreviationTable, BUILTIN_ABBREVIATIONS, expand_abbreviations};
pub use config::UserConfig;
pub use context::{
    Context, ContextLayers, ContextMap, NAMESPACE, Tier, parse_context_pair, parse_context_pairs,
};
pub use error::DomainError;
pub use runtime::RuntimeValues;
pub use source::{RemoteMarker, TemplateSource, declaration_path, namespace_for};
