//! Install manifest: the fixed set of files copied into `.github/`.

use std::path::{Path, PathBuf};

use super::install_paths::{
    REQUIREMENTS_FILE, RESPONDER_SCRIPT_FILE, REVIEW_SCRIPT_FILE, WORKFLOW_FILE, scripts_dir,
    workflows_dir,
};

/// `.github/` subdirectory a managed file is installed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagedDir {
    Workflows,
    Scripts,
}

impl ManagedDir {
    /// Absolute directory under `target_root`.
    pub fn resolve(self, target_root: &Path) -> PathBuf {
        match self {
            ManagedDir::Workflows => workflows_dir(target_root),
            ManagedDir::Scripts => scripts_dir(target_root),
        }
    }
}

/// Static description of one installed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagedFile {
    /// File name, identical at the source and destination.
    pub file_name: &'static str,
    pub dir: ManagedDir,
}

/// Installed files, in copy order.
pub const MANAGED_FILES: [ManagedFile; 4] = [
    ManagedFile { file_name: WORKFLOW_FILE, dir: ManagedDir::Workflows },
    ManagedFile { file_name: REVIEW_SCRIPT_FILE, dir: ManagedDir::Scripts },
    ManagedFile { file_name: RESPONDER_SCRIPT_FILE, dir: ManagedDir::Scripts },
    ManagedFile { file_name: REQUIREMENTS_FILE, dir: ManagedDir::Scripts },
];

/// A resolved (source, destination) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyEntry {
    source: PathBuf,
    destination: PathBuf,
}

impl CopyEntry {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self { source: source.into(), destination: destination.into() }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// Immutable, ordered list of copy entries for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallManifest {
    entries: Vec<CopyEntry>,
}

impl InstallManifest {
    /// Resolve [`MANAGED_FILES`] against the given roots.
    ///
    /// Sources are read from `source_root` by file name; destinations land in
    /// `.github/workflows/` or `.github/scripts/` under `target_root`.
    pub fn resolve(source_root: &Path, target_root: &Path) -> Self {
        let entries = MANAGED_FILES
            .iter()
            .map(|file| {
                CopyEntry::new(
                    source_root.join(file.file_name),
                    file.dir.resolve(target_root).join(file.file_name),
                )
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[CopyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
