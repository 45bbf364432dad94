//! 認可ストアの抽象化
//!
//! オペレータ → アカウント → インポートの階層を公開する。
//! 変更はすべてメモリ上でステージングされ、`commit()` が成功するまで
//! 永続化されない。

use super::imports::Imports;
use super::subject::is_account_key;
use crate::error::{AuthctlError, Result};
use serde::{Deserialize, Serialize};

/// アカウント
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    /// アカウント公開鍵
    pub subject: String,
    #[serde(default)]
    pub imports: Imports,
}

impl Account {
    pub fn new(name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            imports: Imports::default(),
        }
    }
}

/// オペレータ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub name: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl Operator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject: String::new(),
            accounts: Vec::new(),
        }
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.accounts.push(account);
        self
    }

    /// 名前でアカウントを探す
    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.name == name)
    }

    pub fn account_names(&self) -> Vec<String> {
        self.accounts.iter().map(|a| a.name.clone()).collect()
    }

    /// アカウント名または公開鍵を公開鍵に解決する
    ///
    /// 同じオペレータ配下のアカウント名に一致すればその公開鍵、
    /// 公開鍵の形式であればそのまま返す。
    pub fn resolve_account_subject(&self, name_or_key: &str) -> Result<String> {
        if let Some(account) = self.account(name_or_key) {
            return Ok(account.subject.clone());
        }
        if is_account_key(name_or_key) {
            return Ok(name_or_key.to_string());
        }
        Err(AuthctlError::InvalidAccount(name_or_key.to_string()))
    }
}

/// 操作対象アカウントの識別子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountKey {
    pub operator: String,
    pub account: String,
}

impl AccountKey {
    pub fn new(operator: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            account: account.into(),
        }
    }
}

/// 認可ストア
///
/// 実装は `operators` / `operators_mut` / `commit` を提供すればよい。
/// 検索系は既定実装を使う。
pub trait AuthStore {
    fn operators(&self) -> &[Operator];

    fn operators_mut(&mut self) -> &mut [Operator];

    /// ステージング中の変更を永続化する
    fn commit(&mut self) -> Result<()>;

    fn operator_names(&self) -> Vec<String> {
        self.operators().iter().map(|o| o.name.clone()).collect()
    }

    fn operator(&self, name: &str) -> Result<&Operator> {
        self.operators()
            .iter()
            .find(|o| o.name == name)
            .ok_or_else(|| AuthctlError::OperatorNotFound(name.to_string()))
    }

    fn account(&self, key: &AccountKey) -> Result<&Account> {
        self.operator(&key.operator)?
            .account(&key.account)
            .ok_or_else(|| AuthctlError::AccountNotFound(key.account.clone()))
    }

    fn account_mut(&mut self, key: &AccountKey) -> Result<&mut Account> {
        let operator = self
            .operators_mut()
            .iter_mut()
            .find(|o| o.name == key.operator)
            .ok_or_else(|| AuthctlError::OperatorNotFound(key.operator.clone()))?;

        operator
            .accounts
            .iter_mut()
            .find(|a| a.name == key.account)
            .ok_or_else(|| AuthctlError::AccountNotFound(key.account.clone()))
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
