/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }
}

/// ストアファイルのパス
pub const STORE: &str = "AUTHCTL_STORE";
/// 既定のオペレータ名
pub const OPERATOR: &str = "AUTHCTL_OPERATOR";
/// 既定のアカウント名
pub const ACCOUNT: &str = "AUTHCTL_ACCOUNT";
/// 設定ディレクトリ
pub const HOME: &str = "AUTHCTL_HOME";

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
