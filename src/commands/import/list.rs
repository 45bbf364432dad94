use crate::application::{AccountSelector, ImportManager};
use crate::auth::AuthStore;
use crate::error::Result;
use crate::prompt::Prompter;
use clap::Parser;
use std::io::Write;

#[derive(Debug, Parser)]
pub struct Args {
    /// Print the imports as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run<S, P>(
    manager: &mut ImportManager<'_, S, P>,
    selector: &AccountSelector,
    args: Args,
    out: &mut dyn Write,
) -> Result<()>
where
    S: AuthStore + ?Sized,
    P: Prompter + ?Sized,
{
    let rows = manager.list(selector, args.json, out)?;
    tracing::debug!(count = rows.len(), "listed imports");
    Ok(())
}
