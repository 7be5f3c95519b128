//! Filesystem operations needed to install managed files.
//!
//! Paths are absolute; roots are resolved by the caller.

use std::path::Path;

use crate::domain::AppError;

/// Port for the two filesystem mutations an install performs.
pub trait InstallFilesystem {
    /// Create `path` and any missing ancestors. No-op if it is already a directory.
    ///
    /// Fails with [`AppError::DirectoryCreation`] if `path` exists but is not a
    /// directory or cannot be created.
    fn ensure_dir(&self, path: &Path) -> Result<(), AppError>;

    /// Copy the bytes of `source` to `destination`, replacing any existing file.
    ///
    /// Fails with [`AppError::MissingSource`] when `source` is not a readable
    /// regular file and with [`AppError::Write`] when `destination` cannot be
    /// written. The destination's parent must already exist.
    fn copy_file(&self, source: &Path, destination: &Path) -> Result<(), AppError>;
}
