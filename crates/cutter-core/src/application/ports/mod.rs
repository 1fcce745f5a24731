//! Application ports (traits) for external collaborators.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `cutter-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ConfigLoader`: user configuration
//!   - `RepositoryCloner`: VCS checkout of remote templates
//!   - `DeclarationReader`: template-declared defaults
//!   - `Prompter`: interactive overrides
//!   - `Generator`: project rendering
//!   - `Clock`: time source for runtime values
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (`GenerateService::run`, called from the CLI layer)

pub mod output;

pub use output::{
    CloneRequest, Clock, ConfigLoader, DeclarationReader, Generator, Prompter, RepositoryCloner,
};

#[cfg(test)]
pub use output::{
    MockClock, MockConfigLoader, MockDeclarationReader, MockGenerator, MockPrompter,
    MockRepositoryCloner,
};
