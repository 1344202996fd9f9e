//! Error handling for the packgen CLI.
//!
//! Library errors from `packgen-config` and `packgen-builder` convert into
//! [`CliError`] through `#[from]`; `main` turns the result into a `miette`
//! report.

use std::path::PathBuf;
use thiserror::Error;

use packgen_builder::BuildError;
use packgen_config::ConfigError;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration discovery or loading failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The configuration could not be assembled
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// No module rule applies to the requested file
    #[error("No rule matches '{0}'\n\nHint: Only F#, JavaScript, stylesheet, image and font files are handled")]
    NoMatchingRule(String),

    /// Refusing to overwrite an existing file
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Report a missing file as [`CliError::FileNotFound`] for `path`.
    ///
    /// ```rust,no_run
    /// # use std::path::Path;
    /// # use packgen_cli::error::{Result, ResultExt};
    /// # fn run() -> Result<()> {
    /// let path = Path::new("packgen.toml");
    /// std::fs::read_to_string(path).with_path(path)?;
    /// # Ok(())
    /// # }
    /// ```
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Prefix the error with a message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> miette::Report {
    match err {
        CliError::Config(ConfigError::NotFound(path)) => miette::miette!(
            help = "Create a packgen.toml or pass an existing file to --config",
            "Config file not found: {}",
            path.display()
        ),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        CliError::AlreadyExists(path) => miette::miette!(
            help = "Pass --force to overwrite it",
            "{} already exists",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}
