//! Infrastructure adapters for Cutter.
//!
//! This crate implements the ports defined in `cutter-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod clock;
pub mod declaration;
pub mod filesystem;
pub mod generator;
pub mod prompt;
pub mod user_config;
pub mod vcs;

use std::path::PathBuf;

use cutter_core::application::{GenerateService, RepositoryCloner};

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use declaration::JsonDeclarationReader;
pub use filesystem::{Filesystem, LocalFilesystem, MemoryFilesystem};
pub use generator::SimpleGenerator;
pub use prompt::{DefaultsPrompter, TerminalPrompter};
pub use user_config::FileConfigLoader;
pub use vcs::VcsCloner;

/// Wire the production adapters, writing projects below `output_dir`.
pub fn default_service(output_dir: impl Into<PathBuf>) -> GenerateService {
    service_with_cloner(output_dir, Box::new(VcsCloner::new()))
}

/// Production adapters with a caller-supplied cloner (e.g. one that reports
/// progress).
pub fn service_with_cloner(
    output_dir: impl Into<PathBuf>,
    cloner: Box<dyn RepositoryCloner>,
) -> GenerateService {
    GenerateService::new(
        Box::new(FileConfigLoader::new()),
        cloner,
        Box::new(JsonDeclarationReader::new()),
        Box::new(TerminalPrompter::new()),
        Box::new(SimpleGenerator::new(output_dir, Box::new(LocalFilesystem::new()))),
        Box::new(SystemClock),
    )
}
