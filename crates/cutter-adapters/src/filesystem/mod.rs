//! Filesystem adapters used by the generator.
//!
//! The generator never touches `std::fs` for output directly; it writes
//! through [`Filesystem`] so tests can capture a whole project in memory.

mod local;
mod memory;

use std::path::Path;

use cutter_core::error::CutterResult;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;

/// Write-side filesystem operations.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CutterResult<()>;

    /// Write raw bytes to a file. The parent directory must exist.
    fn write_file(&self, path: &Path, content: &[u8]) -> CutterResult<()>;

    /// Set the executable bit (no-op where unsupported).
    fn set_permissions(&self, path: &Path, executable: bool) -> CutterResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> CutterResult<()>;
}
