fn main() {
    ai_code_review_install::app::cli::run();
}
