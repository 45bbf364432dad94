//! アプリケーション層
//!
//! インポート管理のユースケースを提供する。

mod account_select;
mod import_manager;
mod import_view;

pub use account_select::AccountSelector;
pub use import_manager::{AddImport, ImportChanges, ImportManager, NewImportKind, RemoveOutcome};
