use thiserror::Error;

pub mod code;
pub mod formatter;
pub mod rich;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;
pub use rich::{ErrorContext, RichError};

/// authctl 統一エラー型
#[derive(Debug, Error)]
pub enum AuthctlError {
    #[error("no operators defined")]
    NoOperators,

    #[error("operator {0:?} not found")]
    OperatorNotFound(String),

    #[error("no accounts defined for operator {0:?}")]
    NoAccounts(String),

    #[error("account {0:?} not found")]
    AccountNotFound(String),

    #[error("import for local subject {0:?} not found")]
    ImportNotFound(String),

    #[error("unknown import")]
    UnknownImport,

    #[error("no imports defined")]
    NoImports,

    #[error("subject is required")]
    SubjectRequired,

    #[error("invalid subject {subject:?}: {reason}")]
    InvalidSubject { subject: String, reason: String },

    #[error("invalid account {0:?}: expected an account public key or a known account name")]
    InvalidAccount(String),

    #[error("invalid activation token: {0}")]
    InvalidToken(String),

    #[error("invalid import name: {0}")]
    InvalidName(String),

    #[error("{0}")]
    UnsupportedCapability(String),

    #[error("local subject {0:?} is already imported")]
    DuplicateLocalSubject(String),

    #[error("commit failed: {0}")]
    Commit(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("selection cancelled")]
    Cancelled,

    #[error("could not render output: {0}")]
    Serialize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AuthctlError>;

impl AuthctlError {
    /// サブジェクト検証エラーを作成
    pub fn invalid_subject(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        AuthctlError::InvalidSubject {
            subject: subject.into(),
            reason: reason.into(),
        }
    }

    /// 対応するエラーコード
    pub fn code(&self) -> ErrorCode {
        match self {
            AuthctlError::NoOperators | AuthctlError::OperatorNotFound(_) => ErrorCode::Acc001,
            AuthctlError::NoAccounts(_) | AuthctlError::AccountNotFound(_) => ErrorCode::Acc002,
            AuthctlError::ImportNotFound(_)
            | AuthctlError::UnknownImport
            | AuthctlError::NoImports => ErrorCode::Imp001,
            AuthctlError::DuplicateLocalSubject(_) => ErrorCode::Imp002,
            AuthctlError::UnsupportedCapability(_) => ErrorCode::Imp003,
            AuthctlError::SubjectRequired
            | AuthctlError::InvalidAccount(_)
            | AuthctlError::InvalidToken(_)
            | AuthctlError::InvalidName(_) => ErrorCode::Val001,
            AuthctlError::InvalidSubject { .. } => ErrorCode::Val002,
            AuthctlError::Store(_) | AuthctlError::Json(_) => ErrorCode::Sto001,
            AuthctlError::Commit(_) => ErrorCode::Sto002,
            AuthctlError::Config(_) => ErrorCode::Cfg001,
            AuthctlError::Tui(_) | AuthctlError::Cancelled => ErrorCode::Tui001,
            AuthctlError::Io(_) => ErrorCode::Io001,
            AuthctlError::Serialize(_) => ErrorCode::Int001,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_error_displays_message_verbatim() {
        let err = AuthctlError::UnsupportedCapability(
            "service imports cannot allow tracing".to_string(),
        );
        assert_eq!(err.to_string(), "service imports cannot allow tracing");
        assert_eq!(err.code(), ErrorCode::Imp003);
    }

    #[test]
    fn not_found_errors_quote_the_subject() {
        let err = AuthctlError::ImportNotFound("orders.>".to_string());
        assert_eq!(
            err.to_string(),
            "import for local subject \"orders.>\" not found"
        );
    }

    #[test]
    fn commit_error_is_prefixed() {
        let err = AuthctlError::Commit("disk full".to_string());
        assert_eq!(err.to_string(), "commit failed: disk full");
        assert_eq!(err.code(), ErrorCode::Sto002);
    }

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(matches!(err, AuthctlError::Io(_)));
        assert_eq!(err.code(), ErrorCode::Io001);
    }
}
