//! インポート（アカウント間サブジェクト束縛）
//!
//! ストリームインポートとサービスインポートを `Import` 直和型で表す。
//! 共通属性は `ImportBase` に持ち、メッセージトレースの許可は
//! ストリームインポートだけが持つ能力として型で表現する。

use super::subject::{validate_account_key, validate_subject, validate_token};
use crate::error::{AuthctlError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// インポート種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    Stream,
    Service,
}

impl ImportKind {
    /// 表示名
    pub fn display_name(&self) -> &'static str {
        match self {
            ImportKind::Stream => "Stream",
            ImportKind::Service => "Service",
        }
    }
}

impl fmt::Display for ImportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// 両種別に共通するインポート属性
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportBase {
    name: String,
    /// エクスポート側のサブジェクト
    subject: String,
    /// エクスポート元アカウントの公開鍵
    account: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    local_subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default)]
    share: bool,
}

impl ImportBase {
    fn new(name: &str, account: &str, subject: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AuthctlError::InvalidName("name cannot be empty".to_string()));
        }
        validate_subject(subject)?;
        validate_account_key(account)?;

        Ok(Self {
            name: name.to_string(),
            subject: subject.to_string(),
            account: account.to_string(),
            local_subject: None,
            token: None,
            share: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn local_subject(&self) -> Option<&str> {
        self.local_subject.as_deref()
    }

    #[cfg(test)]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_share_connection_info(&self) -> bool {
        self.share
    }

    /// ローカルサブジェクト未設定時はリモートサブジェクトを返す
    pub fn effective_local_subject(&self) -> &str {
        self.local_subject.as_deref().unwrap_or(&self.subject)
    }

    pub fn set_local_subject(&mut self, subject: &str) -> Result<()> {
        validate_subject(subject)?;
        self.local_subject = Some(subject.to_string());
        Ok(())
    }

    pub fn set_token(&mut self, token: &str) -> Result<()> {
        validate_token(token)?;
        self.token = Some(token.to_string());
        Ok(())
    }

    pub fn set_share_connection_info(&mut self, share: bool) -> Result<()> {
        self.share = share;
        Ok(())
    }
}

/// ストリームインポート
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamImport {
    #[serde(flatten)]
    base: ImportBase,
    #[serde(default)]
    allow_trace: bool,
}

impl StreamImport {
    pub fn new(name: &str, account: &str, subject: &str) -> Result<Self> {
        Ok(Self {
            base: ImportBase::new(name, account, subject)?,
            allow_trace: false,
        })
    }

    pub fn allow_tracing(&self) -> bool {
        self.allow_trace
    }

    pub fn set_allow_tracing(&mut self, allow: bool) -> Result<()> {
        self.allow_trace = allow;
        Ok(())
    }
}

/// サービスインポート
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceImport {
    #[serde(flatten)]
    base: ImportBase,
}

impl ServiceImport {
    pub fn new(name: &str, account: &str, subject: &str) -> Result<Self> {
        Ok(Self {
            base: ImportBase::new(name, account, subject)?,
        })
    }
}

/// 種別ごとのインポートが共通属性へアクセスするためのトレイト
pub trait ImportEntry: Clone {
    const KIND: ImportKind;

    fn base(&self) -> &ImportBase;

    fn into_import(self) -> Import;
}

impl ImportEntry for StreamImport {
    const KIND: ImportKind = ImportKind::Stream;

    fn base(&self) -> &ImportBase {
        &self.base
    }

    fn into_import(self) -> Import {
        Import::Stream(self)
    }
}

impl ImportEntry for ServiceImport {
    const KIND: ImportKind = ImportKind::Service;

    fn base(&self) -> &ImportBase {
        &self.base
    }

    fn into_import(self) -> Import {
        Import::Service(self)
    }
}

/// インポート（直和型）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Import {
    Stream(StreamImport),
    Service(ServiceImport),
}

impl Import {
    pub fn kind(&self) -> ImportKind {
        match self {
            Import::Stream(_) => ImportKind::Stream,
            Import::Service(_) => ImportKind::Service,
        }
    }

    pub fn base(&self) -> &ImportBase {
        match self {
            Import::Stream(s) => &s.base,
            Import::Service(s) => &s.base,
        }
    }

    fn base_mut(&mut self) -> &mut ImportBase {
        match self {
            Import::Stream(s) => &mut s.base,
            Import::Service(s) => &mut s.base,
        }
    }

    pub fn name(&self) -> &str {
        self.base().name()
    }

    pub fn subject(&self) -> &str {
        self.base().subject()
    }

    pub fn account(&self) -> &str {
        self.base().account()
    }

    pub fn local_subject(&self) -> Option<&str> {
        self.base().local_subject()
    }

    pub fn effective_local_subject(&self) -> &str {
        self.base().effective_local_subject()
    }

    pub fn is_share_connection_info(&self) -> bool {
        self.base().is_share_connection_info()
    }

    /// トレース許可状態（サービスインポートは能力を持たないので None）
    pub fn allow_tracing(&self) -> Option<bool> {
        match self {
            Import::Stream(s) => Some(s.allow_tracing()),
            Import::Service(_) => None,
        }
    }

    pub fn set_local_subject(&mut self, subject: &str) -> Result<()> {
        self.base_mut().set_local_subject(subject)
    }

    pub fn set_token(&mut self, token: &str) -> Result<()> {
        self.base_mut().set_token(token)
    }

    pub fn set_share_connection_info(&mut self, share: bool) -> Result<()> {
        self.base_mut().set_share_connection_info(share)
    }

    /// トレース許可を設定する（サービスインポートではエラー）
    pub fn set_allow_tracing(&mut self, allow: bool) -> Result<()> {
        match self {
            Import::Stream(s) => s.set_allow_tracing(allow),
            Import::Service(_) => Err(AuthctlError::UnsupportedCapability(
                "service imports cannot allow tracing".to_string(),
            )),
        }
    }
}

impl From<StreamImport> for Import {
    fn from(value: StreamImport) -> Self {
        Import::Stream(value)
    }
}

impl From<ServiceImport> for Import {
    fn from(value: ServiceImport) -> Self {
        Import::Service(value)
    }
}

#[cfg(test)]
#[path = "import_test.rs"]
mod tests;
