//! 認可ストア
//!
//! オペレータ・アカウント・インポートのモデルと、その永続化を提供する。
//! JWT の署名や信頼チェーンの検証は扱わない。

mod file_store;
mod import;
mod imports;
#[cfg(test)]
pub mod memory;
mod store;
mod subject;

pub use file_store::{FileStore, StoreDocument};
pub use import::{Import, ImportBase, ImportEntry, ImportKind, ServiceImport, StreamImport};
pub use imports::{ImportList, Imports};
pub use store::{Account, AccountKey, AuthStore, Operator};
pub use subject::{is_account_key, validate_subject};
