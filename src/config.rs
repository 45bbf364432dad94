//! 実行時設定
//!
//! 各項目の優先順位: CLI 引数 > 環境変数 > config.toml > 既定値

use crate::env::{self, EnvVar};
use crate::error::{AuthctlError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 設定ファイル名
const CONFIG_FILE: &str = "config.toml";
/// 既定のストアファイル名
const STORE_FILE: &str = "store.json";
/// 設定ディレクトリ名（$HOME 配下）
const CONFIG_DIR: &str = ".authctl";

/// config.toml の内容
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub store: Option<PathBuf>,
    pub operator: Option<String>,
    pub account: Option<String>,
}

impl ConfigFile {
    /// ファイルが無ければ空の設定
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AuthctlError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content).map_err(|e| {
            AuthctlError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

/// CLI で明示された値
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub store: Option<PathBuf>,
    pub operator: Option<String>,
    pub account: Option<String>,
}

/// 解決済みの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub store: PathBuf,
    pub operator: Option<String>,
    pub account: Option<String>,
}

impl Settings {
    /// 設定ディレクトリの config.toml と環境変数から解決する
    ///
    /// 設定ディレクトリが決まらない場合は config.toml を空として扱う。
    pub fn load(overrides: Overrides) -> Result<Self> {
        let dir = config_dir();
        let file = match &dir {
            Some(dir) => ConfigFile::load_from(&dir.join(CONFIG_FILE))?,
            None => ConfigFile::default(),
        };
        let settings = Self::resolve(overrides, file, dir.as_deref())?;

        tracing::debug!(store = %settings.store.display(), "resolved settings");
        Ok(settings)
    }

    fn resolve(overrides: Overrides, file: ConfigFile, dir: Option<&Path>) -> Result<Self> {
        let explicit = overrides
            .store
            .or_else(|| EnvVar::get(env::STORE).map(PathBuf::from))
            .or(file.store);

        // 既定値は設定ディレクトリ配下なので、そこが決まらない時だけエラー
        let store = match explicit {
            Some(path) => path,
            None => dir.map(|d| d.join(STORE_FILE)).ok_or_else(|| {
                AuthctlError::Config(
                    "HOME environment variable not set; use --store or AUTHCTL_STORE".to_string(),
                )
            })?,
        };

        let operator = overrides
            .operator
            .or_else(|| EnvVar::get(env::OPERATOR))
            .or(file.operator);

        let account = overrides
            .account
            .or_else(|| EnvVar::get(env::ACCOUNT))
            .or(file.account);

        Ok(Self {
            store,
            operator,
            account,
        })
    }
}

/// 設定ディレクトリ（$AUTHCTL_HOME、なければ ~/.authctl）
pub fn config_dir() -> Option<PathBuf> {
    EnvVar::get(env::HOME)
        .map(PathBuf::from)
        .or_else(|| EnvVar::get("HOME").map(|home| PathBuf::from(home).join(CONFIG_DIR)))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
