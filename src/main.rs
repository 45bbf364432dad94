mod application;
mod auth;
mod cli;
mod commands;
mod config;
mod env;
mod error;
mod logger;
mod output;
mod prompt;
mod tui;

use clap::Parser;
use error::ErrorFormatter;

fn main() {
    let cli = cli::Cli::parse();
    let verbose = cli.verbose;
    logger::init_cli_logger(verbose);

    if let Err(err) = commands::dispatch(cli) {
        eprintln!("{}", ErrorFormatter::new(verbose).format(&err));
        std::process::exit(1);
    }
}
