use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available packgen subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the webpack configuration as JSON
    ///
    /// Loads packgen.toml (or the `packgen` field of package.json), applies
    /// PACKGEN_* environment overrides and builds the configuration for the
    /// requested mode.
    Generate(GenerateArgs),

    /// Show which module rule handles a file
    ///
    /// Rules are tried in order and the first match wins.
    Route(RouteArgs),

    /// Write a webpack.config.js that runs packgen
    ///
    /// The written config calls `packgen generate`, compiles the rule
    /// patterns and instantiates the plugins, so plain `webpack` and
    /// `webpack serve` pick up the generated configuration.
    Init(InitArgs),
}

/// Options shared by every command that loads a project
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Build mode
    ///
    /// Only "production" selects production settings; any other value, or
    /// none, builds for development.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Configuration file (packgen.toml, package.json or a .json file)
    ///
    /// Relative option paths are resolved against this file's directory.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project directory to search for configuration
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

/// Arguments for the generate command
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit compact JSON
    #[arg(long)]
    pub compact: bool,

    /// The bundler prints its stats as JSON; keep compiler output quiet
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the route command
#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Source file to look up, e.g. src/App.fs or fonts/icons.woff2?v=4
    #[arg(value_name = "FILE")]
    pub file: String,

    #[command(flatten)]
    pub project: ProjectArgs,
}

/// Arguments for the init command
#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Directory to write webpack.config.js into (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Overwrite an existing webpack.config.js
    #[arg(short, long)]
    pub force: bool,
}
