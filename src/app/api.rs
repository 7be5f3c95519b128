//! API facade for the application.
//!
//! Resolves the source and target roots, builds the manifest, and runs the
//! install command against the local filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::LocalFilesystem;
use crate::app::commands::install;
use crate::domain::InstallManifest;

pub use crate::app::commands::install::InstallOutcome;
pub use crate::domain::AppError;

/// Install the managed files from the installer's directory into the current directory.
pub fn install() -> Result<InstallOutcome, AppError> {
    install_at(installer_dir()?, std::env::current_dir()?)
}

/// Install the managed files from `source_root` into `.github/` under `target_root`.
pub fn install_at(
    source_root: impl AsRef<Path>,
    target_root: impl AsRef<Path>,
) -> Result<InstallOutcome, AppError> {
    let manifest = InstallManifest::resolve(source_root.as_ref(), target_root.as_ref());
    install::execute(&LocalFilesystem::new(), &manifest)
}

/// Directory containing the running executable, with symlinks resolved.
pub fn installer_dir() -> Result<PathBuf, AppError> {
    let exe = fs::canonicalize(std::env::current_exe()?)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        AppError::InstallerLocation(format!("'{}' has no parent directory", exe.display()))
    })
}
