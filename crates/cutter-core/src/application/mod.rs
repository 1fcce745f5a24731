//! Application layer for Cutter.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService)
//! - **Ports**: Interface definitions (traits) for the collaborators
//! - **Errors**: Errors raised behind the ports
//!
//! The application layer coordinates the domain layer but contains no
//! merge or expansion rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerateOutcome, GenerateRequest, GenerateService};

pub use ports::{
    CloneRequest, Clock, ConfigLoader, DeclarationReader, Generator, Prompter, RepositoryCloner,
};

pub use error::ApplicationError;
