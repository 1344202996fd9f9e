//! packgen CLI - webpack configuration for Fable client projects.
//!
//! Parses command-line arguments, initializes logging and dispatches to the
//! selected command.

use clap::Parser;
use packgen_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    // Keep the raw arguments: the builder looks for bundler flags in them
    let argv: Vec<String> = std::env::args().collect();
    let args = cli::Cli::parse_from(&argv);

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);
    ui::set_quiet(args.quiet);

    let result = match args.command {
        cli::Command::Generate(generate_args) => commands::generate_execute(generate_args, &argv),
        cli::Command::Route(route_args) => commands::route_execute(route_args, &argv),
        cli::Command::Init(init_args) => commands::init_execute(init_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
