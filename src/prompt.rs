//! 対話入力の抽象化
//!
//! 選択と確認を `Prompter` トレイトの背後に置き、
//! インポート操作の本体をターミナルなしでテストできるようにする。

use crate::error::{AuthctlError, Result};
use crate::tui::{single_select, SelectOutcome};
use std::io::{self, BufRead, IsTerminal, Write};

/// 対話入力
pub trait Prompter {
    /// 候補から 1 つ選ばせる
    fn select(&mut self, message: &str, options: &[String]) -> Result<String>;

    /// はい/いいえを確認する（空入力は `default`）
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// 本番用: TUI ダイアログと標準入力を使う
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, options: &[String]) -> Result<String> {
        if !io::stdin().is_terminal() {
            return Err(AuthctlError::Tui(format!(
                "{}: an interactive terminal is required",
                message
            )));
        }

        match single_select(message, options).map_err(|e| AuthctlError::Tui(e.to_string()))? {
            SelectOutcome::Selected(i) => options
                .get(i)
                .cloned()
                .ok_or_else(|| AuthctlError::Tui("selection out of range".to_string())),
            SelectOutcome::Cancelled => Err(AuthctlError::Cancelled),
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        confirm_with(&mut stdin.lock(), &mut stdout, message, default)
    }
}

/// 確認プロンプトを表示して 1 行読む
fn confirm_with(
    input: &mut impl BufRead,
    output: &mut impl Write,
    message: &str,
    default: bool,
) -> Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    write!(output, "{}? {}: ", message, hint)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(parse_answer(&line, default))
}

fn parse_answer(line: &str, default: bool) -> bool {
    let answer = line.trim();
    if answer.is_empty() {
        return default;
    }
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// テスト用: あらかじめ決めた応答を返す
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    selections: std::collections::VecDeque<String>,
    confirmations: std::collections::VecDeque<bool>,
    /// 表示された選択肢（呼び出し順）
    pub offered: Vec<Vec<String>>,
    /// 表示された確認メッセージ
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_answer(mut self, answer: impl Into<String>) -> Self {
        self.selections.push_back(answer.into());
        self
    }

    pub fn confirm_answer(mut self, answer: bool) -> Self {
        self.confirmations.push_back(answer);
        self
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn select(&mut self, _message: &str, options: &[String]) -> Result<String> {
        self.offered.push(options.to_vec());
        self.selections.pop_front().ok_or(AuthctlError::Cancelled)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        self.asked.push(message.to_string());
        Ok(self.confirmations.pop_front().unwrap_or(default))
    }
}
