//! doxnav — navigation-index tooling for generated documentation sites

use clap::Parser;

use doxnav::cli::args::Cli;
use doxnav::cli::commands;
use doxnav::error::ExitCode;
use doxnav::observability::{LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(LogFormat::Human, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
