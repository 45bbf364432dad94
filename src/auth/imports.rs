//! アカウントが持つインポートコレクション
//!
//! ストリーム用とサービス用の 2 つの順序付きリストを持つ。
//! ローカルサブジェクトは両リストを合わせた中で一意でなければならない。

use super::import::{Import, ImportEntry, ImportKind, ServiceImport, StreamImport};
use crate::error::{AuthctlError, Result};
use serde::{Deserialize, Serialize};

/// 種別ごとのインポートリスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportList<T> {
    items: Vec<T>,
}

impl<T> Default for ImportList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: ImportEntry> ImportList<T> {
    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, local_subject: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|i| i.base().local_subject() == Some(local_subject))
    }

    /// ローカルサブジェクトで削除する
    ///
    /// 削除した場合は true、該当なしは false。
    pub fn delete(&mut self, local_subject: &str) -> bool {
        match self.position(local_subject) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    fn push(&mut self, entry: T) {
        self.items.push(entry);
    }

    fn replace(&mut self, local_subject: &str, entry: T) -> bool {
        match self.position(local_subject) {
            Some(idx) => {
                self.items[idx] = entry;
                true
            }
            None => false,
        }
    }
}

/// アカウントのインポート全体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Imports {
    #[serde(default)]
    streams: ImportList<StreamImport>,
    #[serde(default)]
    services: ImportList<ServiceImport>,
}

impl Imports {
    pub fn streams(&self) -> &ImportList<StreamImport> {
        &self.streams
    }

    pub fn services(&self) -> &ImportList<ServiceImport> {
        &self.services
    }

    /// 両種別の合計件数
    pub fn len(&self) -> usize {
        self.streams.len() + self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty() && self.services.is_empty()
    }

    /// ローカルサブジェクトでインポートを探す
    ///
    /// ストリーム → サービスの順に走査し、完全一致した最初のものを返す。
    pub fn find(&self, local_subject: &str) -> Option<Import> {
        fn matching<T: ImportEntry>(list: &ImportList<T>, local_subject: &str) -> Option<Import> {
            list.list()
                .iter()
                .find(|i| i.base().local_subject() == Some(local_subject))
                .map(|i| i.clone().into_import())
        }

        matching(&self.streams, local_subject).or_else(|| matching(&self.services, local_subject))
    }

    /// 全インポートをリモートサブジェクト昇順で返す（安定ソート）
    pub fn all_by_subject(&self) -> Vec<Import> {
        let mut all: Vec<Import> = self
            .streams
            .list()
            .iter()
            .map(|i| i.clone().into_import())
            .chain(self.services.list().iter().map(|i| i.clone().into_import()))
            .collect();

        all.sort_by(|a, b| a.subject().cmp(b.subject()));
        all
    }

    /// 設定済みのローカルサブジェクト一覧（昇順）
    pub fn local_subjects(&self) -> Vec<String> {
        let mut known: Vec<String> = self
            .services
            .list()
            .iter()
            .filter_map(|i| i.base().local_subject())
            .chain(
                self.streams
                    .list()
                    .iter()
                    .filter_map(|i| i.base().local_subject()),
            )
            .map(str::to_string)
            .collect();

        known.sort();
        known
    }

    fn is_taken(&self, local_subject: &str) -> bool {
        self.find(local_subject).is_some()
    }

    /// 種別に応じたリストへ追加する
    pub fn add(&mut self, import: Import) -> Result<()> {
        if let Some(local) = import.local_subject() {
            if self.is_taken(local) {
                return Err(AuthctlError::DuplicateLocalSubject(local.to_string()));
            }
        }

        match import {
            Import::Stream(s) => self.streams.push(s),
            Import::Service(s) => self.services.push(s),
        }
        Ok(())
    }

    /// 種別とローカルサブジェクトを指定して削除する
    pub fn delete(&mut self, kind: ImportKind, local_subject: &str) -> Result<()> {
        let deleted = match kind {
            ImportKind::Stream => self.streams.delete(local_subject),
            ImportKind::Service => self.services.delete(local_subject),
        };

        if deleted {
            Ok(())
        } else {
            Err(AuthctlError::ImportNotFound(local_subject.to_string()))
        }
    }

    /// `local_subject` のインポートを `updated` で置き換える
    ///
    /// 種別の変更は不可。リネーム先が他のインポートと衝突する場合はエラー。
    pub fn replace(&mut self, local_subject: &str, updated: Import) -> Result<()> {
        if let Some(new_local) = updated.local_subject() {
            if new_local != local_subject && self.is_taken(new_local) {
                return Err(AuthctlError::DuplicateLocalSubject(new_local.to_string()));
            }
        }

        let replaced = match updated {
            Import::Stream(s) => self.streams.replace(local_subject, s),
            Import::Service(s) => self.services.replace(local_subject, s),
        };

        if replaced {
            Ok(())
        } else {
            Err(AuthctlError::ImportNotFound(local_subject.to_string()))
        }
    }
}

#[cfg(test)]
#[path = "imports_test.rs"]
mod tests;

#[cfg(test)]
#[path = "imports_proptests.rs"]
mod proptests;
