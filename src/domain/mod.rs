pub mod error;
pub mod install_paths;
pub mod manifest;

pub use error::AppError;
pub use manifest::{CopyEntry, InstallManifest, MANAGED_FILES, ManagedDir, ManagedFile};
