//! JSON ファイルに永続化する認可ストア
//!
//! 読み込んだ内容をメモリ上で保持し、`commit()` で同じディレクトリの
//! 一時ファイルに書き出してからアトミックに置換する。

use super::store::{AuthStore, Operator};
use crate::error::{AuthctlError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// ストアファイルのルート構造
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDocument {
    #[serde(default)]
    pub operators: Vec<Operator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// ファイルベースの認可ストア
pub struct FileStore {
    path: PathBuf,
    document: StoreDocument,
}

impl FileStore {
    /// ストアファイルを読み込む（存在しなければ空のストア）
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                AuthctlError::Store(format!("failed to parse {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "store file not found, starting empty");
                StoreDocument::default()
            }
            Err(e) => return Err(AuthctlError::Io(e)),
        };

        tracing::debug!(
            path = %path.display(),
            operators = document.operators.len(),
            "loaded authorization store"
        );

        Ok(Self { path, document })
    }

    /// 指定内容でストアを作成する（未保存）
    #[cfg(test)]
    pub fn with_document(path: impl Into<PathBuf>, document: StoreDocument) -> Self {
        Self {
            path: path.into(),
            document,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[cfg(test)]
    pub fn document(&self) -> &StoreDocument {
        &self.document
    }

    fn write_atomic(&self) -> std::io::Result<()> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs::create_dir_all(parent)?;

        let mut temp_file = NamedTempFile::new_in(parent)?;
        let content = serde_json::to_string_pretty(&self.document)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.write_all(b"\n")?;
        temp_file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl AuthStore for FileStore {
    fn operators(&self) -> &[Operator] {
        &self.document.operators
    }

    fn operators_mut(&mut self) -> &mut [Operator] {
        &mut self.document.operators
    }

    fn commit(&mut self) -> Result<()> {
        let previous = self.document.updated_at.replace(Utc::now());

        if let Err(e) = self.write_atomic() {
            self.document.updated_at = previous;
            return Err(AuthctlError::Commit(format!(
                "{}: {}",
                self.path.display(),
                e
            )));
        }

        tracing::debug!(path = %self.path.display(), "committed authorization store");
        Ok(())
    }
}

#[cfg(test)]
#[path = "file_store_test.rs"]
mod tests;
