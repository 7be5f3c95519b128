//! Local filesystem adapter for the install port.
//!
//! `LocalFilesystem` performs real `std::fs` operations. Every file handle is
//! opened and dropped within a single `copy_file` call.

mod install_filesystem;

/// `std::fs`-backed implementation of [`crate::ports::InstallFilesystem`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}
