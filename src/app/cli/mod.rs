//! CLI Adapter.

use clap::Parser;

use crate::domain::AppError;

/// Confirmation printed after a successful install.
pub const SUCCESS_MESSAGE: &str =
    "✅ AI Code Review and Comment Responder files have been installed successfully.";

#[derive(Parser)]
#[command(name = "ai-code-review-install")]
#[command(version)]
#[command(
    about = "Install the AI code review workflow and scripts into .github/",
    long_about = "Copies ai_code_review.yml into .github/workflows/ and ai_code_review.py, \
respond_to_comment.py and requirements.txt into .github/scripts/ of the current directory. \
Source files are read from the directory containing this executable."
)]
struct Cli {}

/// Entry point for the CLI.
pub fn run() {
    let _cli = Cli::parse();
    crate::app::logging::init();

    let result: Result<(), AppError> = crate::app::api::install().map(|outcome| {
        tracing::debug!(installed = ?outcome.installed, "installed files");
        println!("{}", SUCCESS_MESSAGE);
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
