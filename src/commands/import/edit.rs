use crate::application::{AccountSelector, ImportChanges, ImportManager};
use crate::auth::AuthStore;
use crate::error::Result;
use crate::prompt::Prompter;
use clap::Parser;
use std::io::Write;

#[derive(Debug, Parser)]
pub struct Args {
    /// Local subject of the import (prompted if omitted)
    pub subject: Option<String>,

    /// Allow message tracing (streams only)
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub allow_trace: Option<bool>,

    /// Share connection information with the exporting account
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub share: Option<bool>,

    /// New local subject
    #[arg(long, value_name = "SUBJECT")]
    pub local_subject: Option<String>,
}

impl Args {
    pub fn changes(&self) -> ImportChanges {
        ImportChanges {
            allow_trace: self.allow_trace,
            share: self.share,
            local_subject: self.local_subject.clone(),
        }
    }
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
    let changes = args.changes();
    manager.edit(selector, args.subject, changes, out)?;
    Ok(())
}

#[cfg(test)]
#[path = "edit_test.rs"]
mod tests;
