use crate::application::{AccountSelector, ImportManager, RemoveOutcome};
use crate::auth::AuthStore;
use crate::error::Result;
use crate::prompt::Prompter;
use clap::Parser;
use std::io::Write;

#[derive(Debug, Parser)]
pub struct Args {
    /// Local subject of the import (prompted if omitted)
    pub subject: Option<String>,

    /// Remove without confirmation
    #[arg(short, long)]
    pub force: bool,
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
    match manager.remove(selector, args.subject, args.force, out)? {
        RemoveOutcome::Removed(_) => {}
        RemoveOutcome::Declined => tracing::debug!("nothing removed"),
    }
    Ok(())
}
