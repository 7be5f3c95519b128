use std::path::{Path, PathBuf};

/// The `.github/` directory name.
pub const GITHUB_DIR: &str = ".github";

/// Subdirectory of `.github/` holding workflow definitions.
pub const WORKFLOWS_DIR: &str = "workflows";

/// Subdirectory of `.github/` holding workflow helper scripts.
pub const SCRIPTS_DIR: &str = "scripts";

/// Workflow definition installed into `.github/workflows/`.
pub const WORKFLOW_FILE: &str = "ai_code_review.yml";

/// Review script installed into `.github/scripts/`.
pub const REVIEW_SCRIPT_FILE: &str = "ai_code_review.py";

/// Comment responder script installed into `.github/scripts/`.
pub const RESPONDER_SCRIPT_FILE: &str = "respond_to_comment.py";

/// Python dependency manifest installed into `.github/scripts/`.
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// `.github/`
pub fn github_dir(root: &Path) -> PathBuf {
    root.join(GITHUB_DIR)
}

/// `.github/workflows/`
pub fn workflows_dir(root: &Path) -> PathBuf {
    github_dir(root).join(WORKFLOWS_DIR)
}

/// `.github/scripts/`
pub fn scripts_dir(root: &Path) -> PathBuf {
    github_dir(root).join(SCRIPTS_DIR)
}
