//! Status message functions for terminal output.

use std::sync::atomic::{AtomicBool, Ordering};

use console::style;

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress every status message (`--quiet`).
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a success message to stderr.
///
/// ```no_run
/// use packgen_cli::ui::success;
///
/// success("Wrote production configuration to webpack.json");
/// ```
pub fn success(message: &str) {
    if quiet() {
        return;
    }
    eprintln!("{} {}", style("✓").for_stderr().green().bold(), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    if quiet() {
        return;
    }
    eprintln!("{} {}", style("ℹ").for_stderr().blue().bold(), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    if quiet() {
        return;
    }
    eprintln!(
        "{} {}",
        style("⚠").for_stderr().yellow().bold(),
        style(message).for_stderr().yellow()
    );
}
