use crate::application::{AccountSelector, AddImport, ImportManager, NewImportKind};
use crate::auth::AuthStore;
use crate::error::Result;
use crate::prompt::Prompter;
use clap::Parser;
use std::io::Write;

#[derive(Debug, Parser)]
pub struct Args {
    /// Import a service instead of a stream
    #[arg(long)]
    pub service: bool,

    /// Exporting account (name in the same operator, or public key)
    #[arg(long, value_name = "ACCOUNT")]
    pub account: String,

    /// Remote subject to import
    #[arg(long)]
    pub subject: String,

    /// Import name (defaults to the remote subject)
    #[arg(long)]
    pub name: Option<String>,

    /// Local subject to map the import to (defaults to the remote subject)
    #[arg(long, value_name = "SUBJECT")]
    pub local_subject: Option<String>,

    /// Activation token for private exports
    #[arg(long)]
    pub token: Option<String>,

    /// Share connection information with the exporting account
    #[arg(long)]
    pub share: bool,

    /// Allow message tracing through the import (streams only)
    #[arg(long, conflicts_with = "service")]
    pub allow_trace: bool,
}

impl From<Args> for AddImport {
    fn from(args: Args) -> Self {
        let kind = if args.service {
            NewImportKind::Service
        } else {
            NewImportKind::Stream {
                allow_trace: args.allow_trace,
            }
        };

        AddImport {
            kind,
            name: args.name,
            account: args.account,
            subject: args.subject,
            local_subject: args.local_subject,
            token: args.token,
            share: args.share,
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
    manager.add(selector, args.into(), out)?;
    Ok(())
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
