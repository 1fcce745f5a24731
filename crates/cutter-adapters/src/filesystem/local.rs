//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use cutter_core::{
    application::ApplicationError,
    error::{CutterError, CutterResult},
};

use super::Filesystem;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> CutterResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> CutterResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> CutterResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if executable {
                let mut perms = std::fs::metadata(path)
                    .map_err(|e| map_io_error(path, e, "read metadata"))?
                    .permissions();
                perms.set_mode(perms.mode() | 0o111);
                std::fs::set_permissions(path, perms)
                    .map_err(|e| map_io_error(path, e, "set permissions"))?;
            }
        }
        #[cfg(not(unix))]
        let _ = (path, executable);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> CutterResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> CutterError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}
