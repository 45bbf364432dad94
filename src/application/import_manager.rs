//! インポート管理
//!
//! アカウントの解決、インポートコレクションの参照・変更、コミット、
//! 結果の描画までを 1 操作として行う。ストアと対話入力は注入される。

use super::account_select::{select_account, AccountSelector};
use super::import_view::{render_detail, render_rows_json, render_table, ImportDetail, ImportRow};
use crate::auth::{AccountKey, AuthStore, Import, ServiceImport, StreamImport};
use crate::error::{AuthctlError, Result};
use crate::output::OutputFormat;
use crate::prompt::Prompter;
use std::io::Write;

/// 作成するインポートの種別
///
/// トレース許可はストリームインポートにしか指定できない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewImportKind {
    Stream { allow_trace: bool },
    Service,
}

/// インポート作成要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddImport {
    pub kind: NewImportKind,
    /// 未指定時はリモートサブジェクト
    pub name: Option<String>,
    /// エクスポート元アカウント（名前または公開鍵）
    pub account: String,
    /// リモートサブジェクト
    pub subject: String,
    /// 未指定時はリモートサブジェクト
    pub local_subject: Option<String>,
    pub token: Option<String>,
    pub share: bool,
}

/// インポート編集要求（None の項目は変更しない）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportChanges {
    pub allow_trace: Option<bool>,
    pub share: Option<bool>,
    pub local_subject: Option<String>,
}

impl ImportChanges {
    pub fn is_empty(&self) -> bool {
        self.allow_trace.is_none() && self.share.is_none() && self.local_subject.is_none()
    }
}

/// 削除操作の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Import),
    /// 確認で拒否された（変更なし）
    Declined,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// インポート管理
pub struct ImportManager<'a, S: AuthStore + ?Sized, P: Prompter + ?Sized> {
    store: &'a mut S,
    prompter: &'a mut P,
}

impl<'a, S: AuthStore + ?Sized, P: Prompter + ?Sized> ImportManager<'a, S, P> {
    pub fn new(store: &'a mut S, prompter: &'a mut P) -> Self {
        Self { store, prompter }
    }

    fn resolve(&mut self, selector: &AccountSelector) -> Result<AccountKey> {
        select_account(&*self.store, &mut *self.prompter, selector)
    }

    /// ローカルサブジェクトでインポートを探す
    pub fn find(&self, key: &AccountKey, local_subject: &str) -> Result<Option<Import>> {
        Ok(self.store.account(key)?.imports.find(local_subject))
    }

    /// サブジェクト未指定なら既知のローカルサブジェクトから選ばせる
    fn select_subject(&mut self, key: &AccountKey, subject: Option<String>) -> Result<String> {
        if let Some(subject) = subject.filter(|s| !s.is_empty()) {
            return Ok(subject);
        }

        let known = self.store.account(key)?.imports.local_subjects();
        if known.is_empty() {
            return Err(AuthctlError::NoImports);
        }

        let selected = self.prompter.select("Select an Import", &known)?;
        if selected.is_empty() {
            return Err(AuthctlError::SubjectRequired);
        }
        Ok(selected)
    }

    fn commit(&mut self) -> Result<()> {
        self.store.commit()
    }

    fn show(&self, imp: &Import, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
        let rendered = render_detail(&ImportDetail::from(imp), format)?;
        writeln!(out, "{}", rendered.trim_end())?;
        Ok(())
    }

    /// インポートを作成してコミットする
    pub fn add(
        &mut self,
        selector: &AccountSelector,
        request: AddImport,
        out: &mut dyn Write,
    ) -> Result<Import> {
        let key = self.resolve(selector)?;
        let source = self
            .store
            .operator(&key.operator)?
            .resolve_account_subject(&request.account)?;

        let name = non_empty(&request.name).unwrap_or(&request.subject);
        let mut imp: Import = match request.kind {
            NewImportKind::Stream { .. } => {
                StreamImport::new(name, &source, &request.subject)?.into()
            }
            NewImportKind::Service => ServiceImport::new(name, &source, &request.subject)?.into(),
        };

        imp.set_local_subject(non_empty(&request.local_subject).unwrap_or(&request.subject))?;

        if let Some(token) = non_empty(&request.token) {
            imp.set_token(token)?;
        }

        imp.set_share_connection_info(request.share)?;

        if let NewImportKind::Stream { allow_trace: true } = request.kind {
            imp.set_allow_tracing(true)?;
        }

        self.store.account_mut(&key)?.imports.add(imp.clone())?;
        self.commit()?;

        tracing::info!(
            account = %key.account,
            kind = %imp.kind(),
            local_subject = %imp.effective_local_subject(),
            "added import"
        );

        self.show(&imp, OutputFormat::Table, out)?;
        Ok(imp)
    }

    /// 全インポートをリモートサブジェクト順に表示する
    pub fn list(
        &mut self,
        selector: &AccountSelector,
        json: bool,
        out: &mut dyn Write,
    ) -> Result<Vec<ImportRow>> {
        let key = self.resolve(selector)?;
        let account = self.store.account(&key)?;

        let rows: Vec<ImportRow> = account
            .imports
            .all_by_subject()
            .iter()
            .map(ImportRow::from)
            .collect();

        if json {
            writeln!(out, "{}", render_rows_json(&rows)?)?;
        } else if rows.is_empty() {
            writeln!(out, "No Imports defined")?;
        } else {
            writeln!(out, "{}", render_table(&account.name, &rows))?;
        }

        Ok(rows)
    }

    /// インポートの詳細を表示する
    pub fn info(
        &mut self,
        selector: &AccountSelector,
        subject: Option<String>,
        format: OutputFormat,
        out: &mut dyn Write,
    ) -> Result<Import> {
        let key = self.resolve(selector)?;
        let subject = self.select_subject(&key, subject)?;

        let imp = self
            .find(&key, &subject)?
            .ok_or(AuthctlError::UnknownImport)?;

        self.show(&imp, format, out)?;
        Ok(imp)
    }

    /// 指定された項目だけを変更してコミットする
    ///
    /// 変更はコピーに適用し、すべて成功した場合だけ置き換える。
    pub fn edit(
        &mut self,
        selector: &AccountSelector,
        subject: Option<String>,
        changes: ImportChanges,
        out: &mut dyn Write,
    ) -> Result<Import> {
        let key = self.resolve(selector)?;
        let subject = self.select_subject(&key, subject)?;

        let current = self
            .find(&key, &subject)?
            .ok_or_else(|| AuthctlError::ImportNotFound(subject.clone()))?;

        if changes.is_empty() {
            tracing::debug!(local_subject = %subject, "no changes requested");
            self.show(&current, OutputFormat::Table, out)?;
            return Ok(current);
        }

        let mut updated = current.clone();

        if let Some(allow) = changes.allow_trace {
            updated.set_allow_tracing(allow)?;
        }

        if let Some(share) = changes.share {
            updated.set_share_connection_info(share)?;
        }

        if let Some(local) = non_empty(&changes.local_subject) {
            updated.set_local_subject(local)?;
        }

        self.store
            .account_mut(&key)?
            .imports
            .replace(&subject, updated.clone())?;
        self.commit()?;

        tracing::info!(account = %key.account, local_subject = %subject, "edited import");

        self.show(&updated, OutputFormat::Table, out)?;
        Ok(updated)
    }

    /// インポートを削除してコミットする
    pub fn remove(
        &mut self,
        selector: &AccountSelector,
        subject: Option<String>,
        force: bool,
        out: &mut dyn Write,
    ) -> Result<RemoveOutcome> {
        let key = self.resolve(selector)?;
        let subject = self.select_subject(&key, subject)?;

        let imp = self
            .find(&key, &subject)?
            .ok_or_else(|| AuthctlError::ImportNotFound(subject.clone()))?;

        if !force {
            let message = format!("Really remove the {} Import", imp.effective_local_subject());
            if !self.prompter.confirm(&message, false)? {
                tracing::debug!(local_subject = %subject, "removal declined");
                return Ok(RemoveOutcome::Declined);
            }
        }

        self.store
            .account_mut(&key)?
            .imports
            .delete(imp.kind(), &subject)?;
        self.commit()?;

        tracing::info!(account = %key.account, local_subject = %subject, "removed import");

        writeln!(
            out,
            "Removed {} Import for local subject {:?} imported from Account {:?}",
            imp.kind(),
            imp.effective_local_subject(),
            imp.account()
        )?;

        Ok(RemoveOutcome::Removed(imp))
    }
}

#[cfg(test)]
#[path = "import_manager_test.rs"]
mod tests;
