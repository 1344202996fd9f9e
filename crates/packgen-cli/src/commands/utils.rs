//! Shared helpers for command implementations.

use std::path::PathBuf;

use packgen_config::{Project, ProjectDiscovery};

use crate::cli::ProjectArgs;
use crate::error::{Result, ResultExt};

/// Directory to discover the project in: `--cwd` or the current directory.
pub(crate) fn project_root(args: &ProjectArgs) -> Result<PathBuf> {
    match &args.cwd {
        Some(cwd) => Ok(cwd.clone()),
        None => std::env::current_dir().context("Failed to read current directory"),
    }
}

/// Load options from `--config` or by discovery.
pub(crate) fn load_project(args: &ProjectArgs) -> Result<Project> {
    let root = project_root(args)?;
    let discovery = ProjectDiscovery::new(&root);

    let project = match &args.config {
        Some(path) => discovery.load_from(path)?,
        None => discovery.load()?,
    };

    match &project.source {
        Some(source) => tracing::debug!("Using configuration from {}", source.display()),
        None => tracing::debug!("No configuration file found, using defaults"),
    }

    Ok(project)
}
