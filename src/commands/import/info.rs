use crate::application::{AccountSelector, ImportManager};
use crate::auth::AuthStore;
use crate::error::Result;
use crate::output::OutputFormat;
use crate::prompt::Prompter;
use clap::Parser;
use std::io::Write;

#[derive(Debug, Parser)]
pub struct Args {
    /// Local subject of the import (prompted if omitted)
    pub subject: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
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
    manager.info(selector, args.subject, args.format, out)?;
    Ok(())
}
