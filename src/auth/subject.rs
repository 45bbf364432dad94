//! サブジェクト・アカウント公開鍵・アクティベーショントークンの検証

use crate::error::{AuthctlError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// 完全ワイルドカード（末尾トークンのみ）
const FULL_WILDCARD: &str = ">";
/// 単一トークンワイルドカード
const TOKEN_WILDCARD: &str = "*";

/// アカウント公開鍵の長さ（プレフィックス込み）
pub const ACCOUNT_KEY_LENGTH: usize = 56;

/// NATS サブジェクトを検証する
///
/// - 空でないこと、空白を含まないこと
/// - `.` 区切りの各トークンが空でないこと
/// - `*` はトークン全体としてのみ使用可
/// - `>` はトークン全体として、かつ最後のトークンとしてのみ使用可
pub fn validate_subject(subject: &str) -> Result<()> {
    if subject.is_empty() {
        return Err(AuthctlError::invalid_subject(subject, "subject cannot be empty"));
    }

    if subject.chars().any(char::is_whitespace) {
        return Err(AuthctlError::invalid_subject(
            subject,
            "subject cannot contain whitespace",
        ));
    }

    let tokens: Vec<&str> = subject.split('.').collect();
    let last = tokens.len() - 1;

    for (i, token) in tokens.iter().enumerate() {
        if token.is_empty() {
            return Err(AuthctlError::invalid_subject(
                subject,
                "subject cannot contain empty tokens",
            ));
        }

        if token.len() > 1 && (token.contains(FULL_WILDCARD) || token.contains(TOKEN_WILDCARD)) {
            return Err(AuthctlError::invalid_subject(
                subject,
                "wildcards must be whole tokens",
            ));
        }

        if *token == FULL_WILDCARD && i != last {
            return Err(AuthctlError::invalid_subject(
                subject,
                "'>' is only allowed as the last token",
            ));
        }
    }

    Ok(())
}

fn account_key_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^A[A-Z2-7]{55}$").expect("valid regex"))
}

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$").expect("valid regex")
    })
}

/// アカウント公開鍵の形式かどうか
pub fn is_account_key(value: &str) -> bool {
    value.len() == ACCOUNT_KEY_LENGTH && account_key_re().is_match(value)
}

/// アカウント公開鍵を検証する
pub fn validate_account_key(value: &str) -> Result<()> {
    if is_account_key(value) {
        Ok(())
    } else {
        Err(AuthctlError::InvalidAccount(value.to_string()))
    }
}

/// アクティベーショントークン（compact JWT 形式）を検証する
pub fn validate_token(token: &str) -> Result<()> {
    if token.is_empty() {
        return Err(AuthctlError::InvalidToken("token cannot be empty".to_string()));
    }
    if !token_re().is_match(token) {
        return Err(AuthctlError::InvalidToken(
            "expected three base64url segments separated by '.'".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "subject_test.rs"]
mod tests;

#[cfg(test)]
#[path = "subject_proptests.rs"]
mod proptests;
