/// Error codes with category prefix
///
/// Categories:
/// - ACC: Operator/account resolution
/// - IMP: Import lookup and capability errors
/// - VAL: Input validation errors
/// - STO: Authorization store read/commit errors
/// - CFG: Configuration errors
/// - TUI: Interactive input errors
/// - IO: File system operations
/// - INT: Unexpected internal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Account errors (ACC001-ACC099)
    /// Operator not found
    Acc001,
    /// Account not found
    Acc002,

    // Import errors (IMP001-IMP099)
    /// Import not found
    Imp001,
    /// Local subject already imported
    Imp002,
    /// Capability not supported by the import kind
    Imp003,

    // Validation errors (VAL001-VAL099)
    /// Invalid argument
    Val001,
    /// Invalid subject
    Val002,

    // Store errors (STO001-STO099)
    /// Store could not be read
    Sto001,
    /// Commit failed
    Sto002,

    // Config errors (CFG001-CFG099)
    /// Invalid config
    Cfg001,

    // TUI errors (TUI001-TUI099)
    /// Interactive input failed or was cancelled
    Tui001,

    // I/O errors (IO001-IO099)
    /// File system error
    Io001,

    // Internal errors (INT001-INT099)
    /// Unexpected internal error
    Int001,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 13] = [
        ErrorCode::Acc001,
        ErrorCode::Acc002,
        ErrorCode::Imp001,
        ErrorCode::Imp002,
        ErrorCode::Imp003,
        ErrorCode::Val001,
        ErrorCode::Val002,
        ErrorCode::Sto001,
        ErrorCode::Sto002,
        ErrorCode::Cfg001,
        ErrorCode::Tui001,
        ErrorCode::Io001,
        ErrorCode::Int001,
    ];

    /// Returns the error code string (e.g., "ACC001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Acc001 => "ACC001",
            ErrorCode::Acc002 => "ACC002",
            ErrorCode::Imp001 => "IMP001",
            ErrorCode::Imp002 => "IMP002",
            ErrorCode::Imp003 => "IMP003",
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Val002 => "VAL002",
            ErrorCode::Sto001 => "STO001",
            ErrorCode::Sto002 => "STO002",
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Tui001 => "TUI001",
            ErrorCode::Io001 => "IO001",
            ErrorCode::Int001 => "INT001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Acc001 => "The operator could not be resolved in the authorization store",
            ErrorCode::Acc002 => "The account could not be resolved for the selected operator",
            ErrorCode::Imp001 => "No import matches the given local subject",
            ErrorCode::Imp002 => "Another import already uses this local subject",
            ErrorCode::Imp003 => "The import kind does not support the requested setting",
            ErrorCode::Val001 => "An invalid argument was provided",
            ErrorCode::Val002 => "The subject is not a valid NATS subject",
            ErrorCode::Sto001 => "The authorization store could not be read",
            ErrorCode::Sto002 => "Staged changes could not be persisted",
            ErrorCode::Cfg001 => "The configuration file has an invalid format",
            ErrorCode::Tui001 => "Interactive input was not available or was cancelled",
            ErrorCode::Io001 => "A file system operation failed",
            ErrorCode::Int001 => "An unexpected internal error occurred",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Acc001 => "1. Check the --operator value\n2. Verify the store path with --store",
            ErrorCode::Acc002 => "1. Check the --importer value\n2. Verify the account exists for the operator",
            ErrorCode::Imp001 => "1. Use 'authctl import ls' to see local subjects\n2. Local subjects are matched exactly",
            ErrorCode::Imp002 => "1. Choose a different --local-subject\n2. Remove the existing import first",
            ErrorCode::Imp003 => "1. Message tracing is only available on stream imports",
            ErrorCode::Val001 => "1. Check the argument format\n2. Use 'authctl import --help' for usage information",
            ErrorCode::Val002 => "1. Use dot separated tokens such as 'orders.>'\n2. '*' and '>' must be whole tokens, '>' only last",
            ErrorCode::Sto001 => "1. Verify the store file is valid JSON\n2. Restore the store from a backup if corrupted",
            ErrorCode::Sto002 => "1. Check permissions of the store directory\n2. Free up disk space and retry",
            ErrorCode::Cfg001 => "1. Check the config.toml syntax\n2. Remove unknown keys",
            ErrorCode::Tui001 => "1. Run in an interactive terminal\n2. Pass the subject or account explicitly",
            ErrorCode::Io001 => "1. Verify the path is correct\n2. Check file permissions",
            ErrorCode::Int001 => "1. Try the operation again\n2. Report the issue with debug logs (--verbose)",
        }
    }
}
