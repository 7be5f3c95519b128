//! `InstallFilesystem` implementation for `LocalFilesystem`.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::InstallFilesystem;

use super::LocalFilesystem;

impl InstallFilesystem for LocalFilesystem {
    fn ensure_dir(&self, path: &Path) -> Result<(), AppError> {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => return Ok(()),
            Ok(_) => {
                return Err(AppError::directory_creation(
                    path,
                    io::Error::new(io::ErrorKind::AlreadyExists, "path exists and is not a directory"),
                ));
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(AppError::directory_creation(path, err)),
        }

        fs::create_dir_all(path).map_err(|err| AppError::directory_creation(path, err))?;
        debug!(path = %path.display(), "created directory");
        Ok(())
    }

    fn copy_file(&self, source: &Path, destination: &Path) -> Result<(), AppError> {
        let mut reader = File::open(source).map_err(|err| AppError::missing_source(source, err))?;
        let metadata = reader.metadata().map_err(|err| AppError::missing_source(source, err))?;
        if !metadata.is_file() {
            return Err(AppError::missing_source(
                source,
                io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }

        let mut writer =
            File::create(destination).map_err(|err| AppError::write(destination, err))?;
        let bytes =
            io::copy(&mut reader, &mut writer).map_err(|err| AppError::write(destination, err))?;

        debug!(
            source = %source.display(),
            destination = %destination.display(),
            bytes,
            "copied file"
        );
        Ok(())
    }
}
