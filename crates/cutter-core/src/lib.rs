//! Cutter Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Cutter
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            cutter-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Service            │
//! │            (GenerateService)            │
//! │   expand → fetch → merge → prompt →     │
//! │        inject → generate                │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ ConfigLoader, RepositoryCloner,         │
//! │ DeclarationReader, Prompter, Generator, │
//! │ Clock                                   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     cutter-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ abbreviations, TemplateSource, Context, │
//! │ ContextLayers, RuntimeValues            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cutter_core::application::{GenerateRequest, GenerateService};
//!
//! // Adapters come from `cutter-adapters` (or test doubles).
//! let service = GenerateService::new(config, cloner, reader, prompter, generator, clock);
//! service.run(GenerateRequest::new("gh:audreyr/cookiecutter-pypackage").no_input(true))?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateOutcome, GenerateRequest, GenerateService,
        ports::{
            Clock, ConfigLoader, DeclarationReader, Generator, Prompter, RepositoryCloner,
        },
    };
    pub use crate::domain::{
        Context, ContextLayers, RemoteMarker, RuntimeValues, TemplateSource, Tier, UserConfig,
        expand_abbreviations,
    };
    pub use crate::error::{CutterError, CutterResult, Stage};
}

/// Version string injected into every generated context.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the template declaration file inside a repository directory.
pub const DECLARATION_FILE: &str = "cookiecutter.json";
