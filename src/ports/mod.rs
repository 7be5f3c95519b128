mod install_filesystem;

pub use install_filesystem::InstallFilesystem;
