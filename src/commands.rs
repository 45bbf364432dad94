use crate::cli::{Cli, Command};
use crate::error::RichError;

pub mod import;

pub fn dispatch(cli: Cli) -> Result<(), RichError> {
    match cli.command {
        Command::Import(args) => import::run(args, cli.store),
    }
}
