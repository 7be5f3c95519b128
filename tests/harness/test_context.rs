//! Shared testing harness for installer integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Source file name, installed destination (relative to the work dir), and
/// default payload content.
pub(crate) const PAYLOADS: [(&str, &str, &str); 4] = [
    ("ai_code_review.yml", ".github/workflows/ai_code_review.yml", "A"),
    ("ai_code_review.py", ".github/scripts/ai_code_review.py", "B"),
    ("respond_to_comment.py", ".github/scripts/respond_to_comment.py", "C"),
    ("requirements.txt", ".github/scripts/requirements.txt", "D"),
];

const BIN_NAME: &str = "ai-code-review-install";

/// Isolated environment with a package directory (installer + payloads) and
/// an empty consumer work directory.
pub(crate) struct TestContext {
    root: TempDir,
    package_dir: PathBuf,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with no payloads.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let package_dir = root.path().join("package");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&package_dir).expect("Failed to create test package directory");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, package_dir, work_dir }
    }

    /// Create an environment whose package directory holds the default payloads.
    pub(crate) fn with_payloads() -> Self {
        let ctx = Self::new();
        for (name, _, content) in PAYLOADS {
            ctx.write_source(name, content.as_bytes());
        }
        ctx
    }

    /// Directory the installer reads its sources from.
    pub(crate) fn package_dir(&self) -> &Path {
        &self.package_dir
    }

    /// Directory the installer is run from.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub(crate) fn write_source(&self, name: &str, content: &[u8]) {
        fs::write(self.package_dir.join(name), content).expect("Failed to write source file");
    }

    pub(crate) fn remove_source(&self, name: &str) {
        fs::remove_file(self.package_dir.join(name)).expect("Failed to remove source file");
    }

    /// Absolute path of an installed file given its work-dir-relative path.
    pub(crate) fn installed(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    pub(crate) fn read_installed(&self, relative: &str) -> Vec<u8> {
        fs::read(self.installed(relative))
            .unwrap_or_else(|e| panic!("Failed to read installed {}: {}", relative, e))
    }

    /// Write a file under the work directory, creating parents.
    pub(crate) fn write_work_file(&self, relative: &str, content: &[u8]) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create work file parent");
        }
        fs::write(path, content).expect("Failed to write work file");
    }

    /// Assert every default payload is installed with its default content.
    pub(crate) fn assert_default_payloads_installed(&self) {
        for (_, relative, content) in PAYLOADS {
            let path = self.installed(relative);
            assert!(path.is_file(), "{} should be a regular file", path.display());
            assert_eq!(self.read_installed(relative), content.as_bytes(), "{} content", relative);
        }
    }

    /// Build a command for the installer binary, copied into the package directory
    /// so it resolves its sources from there, running in the work directory.
    pub(crate) fn cli(&self) -> Command {
        let installed_bin =
            self.package_dir.join(format!("{}{}", BIN_NAME, std::env::consts::EXE_SUFFIX));
        if !installed_bin.exists() {
            fs::copy(env!("CARGO_BIN_EXE_ai-code-review-install"), &installed_bin)
                .expect("Failed to copy installer binary into package directory");
        }
        let mut cmd = Command::new(installed_bin);
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }
}
