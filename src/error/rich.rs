use std::collections::BTreeMap;
use std::path::PathBuf;

use super::code::ErrorCode;
use super::AuthctlError;

/// Structured context for error display
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub store_path: Option<PathBuf>,
    pub account: Option<String>,
    pub subject: Option<String>,
    /// Additional key-value pairs for context (BTreeMap for deterministic ordering)
    pub additional: BTreeMap<String, String>,
}

impl ErrorContext {
    /// Creates a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store file path
    pub fn with_store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_path = Some(path.into());
        self
    }

    /// Sets the account the command worked on
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Sets the subject the command worked on
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Adds an additional key-value pair
    pub fn with_additional(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional.insert(key.into(), value.into());
        self
    }

    /// Returns true if the context has any data
    pub fn is_empty(&self) -> bool {
        self.store_path.is_none()
            && self.account.is_none()
            && self.subject.is_none()
            && self.additional.is_empty()
    }
}

/// Rich error with code, message, and context
pub struct RichError {
    code: ErrorCode,
    message: String,
    context: ErrorContext,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl std::fmt::Debug for RichError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RichError")
            .field("code", &self.code)
            .field("message", &self.message)
            .field("context", &self.context)
            .field("source", &self.source.as_ref().map(|e| e.to_string()))
            .finish()
    }
}

impl RichError {
    /// Creates a new RichError with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Sets the error context
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = context;
        self
    }

    /// Sets the source error
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the error code
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the error context
    pub fn context(&self) -> &ErrorContext {
        &self.context
    }
}

impl From<AuthctlError> for RichError {
    fn from(err: AuthctlError) -> Self {
        let code = err.code();
        let message = err.to_string();
        let rich = RichError::new(code, message);
        // Io/Json の下位エラーは source chain として残す
        match err {
            AuthctlError::Io(e) => rich.with_source(e),
            AuthctlError::Json(e) => rich.with_source(e),
            _ => rich,
        }
    }
}

impl std::fmt::Display for RichError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error[{}]: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for RichError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn rich_error_creation() {
        let error = RichError::new(ErrorCode::Imp001, "unknown import");
        assert_eq!(error.code(), ErrorCode::Imp001);
        assert_eq!(error.message(), "unknown import");
        assert!(error.context().is_empty());
    }

    #[test]
    fn rich_error_display() {
        let error = RichError::new(ErrorCode::Acc002, "account \"B\" not found");
        assert_eq!(format!("{}", error), "error[ACC002]: account \"B\" not found");
    }

    #[test]
    fn error_context_builder() {
        let context = ErrorContext::new()
            .with_store_path("/tmp/store.json")
            .with_account("B")
            .with_subject("orders.>")
            .with_additional("operator", "O");

        assert_eq!(context.store_path, Some(PathBuf::from("/tmp/store.json")));
        assert_eq!(context.account.as_deref(), Some("B"));
        assert_eq!(context.subject.as_deref(), Some("orders.>"));
        assert_eq!(context.additional.get("operator"), Some(&"O".to_string()));
        assert!(!context.is_empty());
    }

    #[test]
    fn from_authctl_error_keeps_code_and_message() {
        let rich = RichError::from(AuthctlError::SubjectRequired);
        assert_eq!(rich.code(), ErrorCode::Val001);
        assert_eq!(rich.message(), "subject is required");
        assert!(rich.source().is_none());
    }

    #[test]
    fn from_io_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let rich = RichError::from(AuthctlError::Io(io));
        assert_eq!(rich.code(), ErrorCode::Io001);
        assert!(rich.source().is_some());
    }
}
