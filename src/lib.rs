//! ai-code-review-install: copy the AI code review workflow and scripts into `.github/`.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{InstallOutcome, install, install_at, installer_dir};
pub use app::commands::install::copy_entry;
pub use domain::{AppError, CopyEntry, InstallManifest, MANAGED_FILES, ManagedDir, ManagedFile};
pub use ports::InstallFilesystem;
