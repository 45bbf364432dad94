//! authctl import コマンド
//!
//! アカウントのストリーム/サービスインポートを追加・一覧・表示・編集・削除する。

use crate::application::{AccountSelector, ImportManager};
use crate::auth::FileStore;
use crate::config::{Overrides, Settings};
use crate::error::{ErrorContext, RichError};
use crate::prompt::TerminalPrompter;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

pub mod add;
pub mod edit;
pub mod info;
pub mod list;
pub mod remove;

#[derive(Debug, Parser)]
pub struct Args {
    /// Operator owning the importing account (prompted if omitted)
    #[arg(long, global = true)]
    pub operator: Option<String>,

    /// Account whose imports are managed (prompted if omitted)
    #[arg(long, global = true, value_name = "ACCOUNT")]
    pub importer: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a stream or service import
    #[command(
        long_about = "Import a subject exported by another account. Stream imports are the default; use --service for service imports."
    )]
    Add(add::Args),

    /// List imports of the account
    #[command(
        visible_alias = "list",
        after_long_help = "OUTPUT FORMATS:\n  table  One row per import, sorted by remote subject (default)\n  json   Rows as a JSON array (--json)"
    )]
    Ls(list::Args),

    /// Show details of an import
    #[command(visible_alias = "show")]
    Info(info::Args),

    /// Change settings of an existing import
    #[command(
        long_about = "Change only the given settings of an import. Tracing can only be changed on stream imports."
    )]
    Edit(edit::Args),

    /// Remove an import
    #[command(visible_alias = "remove")]
    Rm(remove::Args),
}

impl Command {
    /// エラー表示用のサブジェクト
    fn subject(&self) -> Option<&str> {
        match self {
            Command::Add(args) => Some(&args.subject),
            Command::Ls(_) => None,
            Command::Info(args) => args.subject.as_deref(),
            Command::Edit(args) => args.subject.as_deref(),
            Command::Rm(args) => args.subject.as_deref(),
        }
    }
}

pub fn run(args: Args, store: Option<PathBuf>) -> Result<(), RichError> {
    let settings = Settings::load(Overrides {
        store,
        operator: args.operator,
        account: args.importer,
    })?;

    let mut context = ErrorContext::new().with_store_path(settings.store.clone());
    if let Some(account) = &settings.account {
        context = context.with_account(account.clone());
    }
    if let Some(subject) = args.command.subject() {
        context = context.with_subject(subject);
    }
    if let Some(operator) = &settings.operator {
        context = context.with_additional("operator", operator.clone());
    }

    execute(args.command, settings).map_err(|e| RichError::from(e).with_context(context))
}

fn execute(command: Command, settings: Settings) -> crate::error::Result<()> {
    let mut store = FileStore::open(&settings.store)?;
    tracing::debug!(path = %store.path().display(), "opened store");
    let mut prompter = TerminalPrompter;
    let selector = AccountSelector::new(settings.operator, settings.account);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut manager = ImportManager::new(&mut store, &mut prompter);

    match command {
        Command::Add(args) => add::run(&mut manager, &selector, args, &mut out)?,
        Command::Ls(args) => list::run(&mut manager, &selector, args, &mut out)?,
        Command::Info(args) => info::run(&mut manager, &selector, args, &mut out)?,
        Command::Edit(args) => edit::run(&mut manager, &selector, args, &mut out)?,
        Command::Rm(args) => remove::run(&mut manager, &selector, args, &mut out)?,
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "import_test.rs"]
mod tests;
