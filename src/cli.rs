use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::import;

#[derive(Debug, Parser)]
#[command(name = "authctl")]
#[command(about = "Authorization import manager", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the authorization store (defaults to ~/.authctl/store.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Show debug logs and detailed error information
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// アカウントのインポート管理
    #[command(about = "Manage stream and service imports of an account")]
    Import(import::Args),
}
