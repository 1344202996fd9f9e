//! packgen CLI - webpack configuration for Fable client projects.
//!
//! This crate provides the `packgen` command-line interface on top of
//! `packgen-config` (project options) and `packgen-builder` (configuration
//! assembly).
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `generate` and `route`
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing, written to stderr
//! - [`ui`] - Status messages
//!
//! Standard output carries only the generated configuration (or the route
//! report), so it can be piped straight into other tools.

// Public modules
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, Result, ResultExt};
