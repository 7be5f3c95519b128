use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for installer operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside a copy step.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A manifest source file is absent, unreadable, or not a regular file.
    #[error("Source file '{}' is missing or unreadable: {source}", .path.display())]
    MissingSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A destination directory tree could not be created.
    #[error("Failed to create directory '{}': {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A destination file could not be written.
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The installer's own directory could not be determined.
    #[error("Cannot resolve installer location: {0}")]
    InstallerLocation(String),
}

impl AppError {
    pub fn missing_source(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::MissingSource { path: path.into(), source }
    }

    pub fn directory_creation(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::DirectoryCreation { path: path.into(), source }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::Write { path: path.into(), source }
    }

    /// Provide an `io::ErrorKind` view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err)
            | AppError::MissingSource { source: err, .. }
            | AppError::DirectoryCreation { source: err, .. }
            | AppError::Write { source: err, .. } => err.kind(),
            AppError::InstallerLocation(_) => io::ErrorKind::NotFound,
        }
    }
}
