//! Command implementations for the packgen CLI.
//!
//! - [`generate`] - Build and emit the bundler configuration
//! - [`route`] - Report the module rule a file is routed to
//! - [`init`] - Write the webpack.config.js that consumes `generate`
//!
//! Each command provides an `execute` function taking the parsed arguments;
//! the commands that build a configuration also take the raw process
//! arguments.

pub mod generate;
pub mod init;
pub mod route;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use generate::execute as generate_execute;
pub use init::execute as init_execute;
pub use route::execute as route_execute;
