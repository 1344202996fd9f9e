//! Terminal status messages.
//!
//! Messages go to stderr so they never mix with generated output on stdout.

mod messages;

pub use messages::{info, set_quiet, success, warning};

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var_os("CI").is_some()
        || std::env::var_os("GITHUB_ACTIONS").is_some()
        || std::env::var_os("GITLAB_CI").is_some()
}

/// Configure color support for status messages.
///
/// Colors are disabled by `--no-color`, in CI, or when the logger's color
/// detection says the terminal cannot show them.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && !is_ci() && crate::logger::should_use_colors();
    console::set_colors_enabled_stderr(enabled);
}
