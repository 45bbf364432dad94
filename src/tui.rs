//! TUI (Terminal User Interface) コンポーネント
//!
//! ratatui/crossterm を使用した選択ダイアログを提供する。

mod dialog;

pub use dialog::{single_select, SelectOutcome};
