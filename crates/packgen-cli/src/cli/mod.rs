//! Command-line interface definition for packgen.
//!
//! - `packgen generate` - Print the bundler configuration for a mode
//! - `packgen route` - Show which module rule a file is handled by
//! - `packgen init` - Write the webpack.config.js that runs `generate`

mod commands;

use clap::Parser;

pub use commands::{Command, GenerateArgs, InitArgs, ProjectArgs, RouteArgs};

/// packgen - webpack configuration for Fable client projects
#[derive(Parser, Debug)]
#[command(
    name = "packgen",
    version,
    about = "Generate webpack configuration for Fable client projects",
    long_about = "packgen turns a project's packgen.toml into a complete webpack configuration.\n\
                  Production builds get hashed filenames, extracted CSS and copied assets;\n\
                  development builds get hot module replacement and separate style entries."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
