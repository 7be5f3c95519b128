//! Install command: copy every manifest entry into the target root.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::{AppError, CopyEntry, InstallManifest};
use crate::ports::InstallFilesystem;

/// Result of a completed install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    /// Destination paths written, in copy order.
    pub installed: Vec<PathBuf>,
}

/// Copy all manifest entries in order, stopping at the first failure.
///
/// Files copied before a failure are left in place.
pub fn execute(
    fs: &impl InstallFilesystem,
    manifest: &InstallManifest,
) -> Result<InstallOutcome, AppError> {
    let mut installed = Vec::with_capacity(manifest.len());

    for entry in manifest.entries() {
        copy_entry(fs, entry)?;
        installed.push(entry.destination().to_path_buf());
    }

    info!(files = installed.len(), "install complete");
    Ok(InstallOutcome { installed })
}

/// Ensure the destination's parent directory exists, then copy the entry.
pub fn copy_entry(fs: &impl InstallFilesystem, entry: &CopyEntry) -> Result<(), AppError> {
    if let Some(parent) = entry.destination().parent() {
        fs.ensure_dir(parent)?;
    }
    fs.copy_file(entry.source(), entry.destination())?;
    debug!(destination = %entry.destination().display(), "installed");
    Ok(())
}
