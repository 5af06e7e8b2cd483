use std::path::PathBuf;

use pen_catalog_backend::BackendError;

/// Exit codes for a failed CLI run. A successful run exits with 0.
///
/// - 1: general error
/// - 2: invalid arguments / configuration
/// - 10+: service-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    GeneralError = 1,
    InvalidArguments = 2,
    ConnectionError = 10,
    BindError = 11,
}

/// Errors returned by CLI command handlers.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Store connection or query errors.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    /// IO errors (file not found, permission denied).
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// The listen address could not be bound.
    #[error("cannot listen on {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// The HTTP server stopped with an error.
    #[error("server error: {0}")]
    Server(std::io::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl CliError {
    /// Maps this error to the appropriate exit code.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Backend(BackendError::ConnectionError { .. }) => ExitCode::ConnectionError,
            Self::Backend(_) => ExitCode::GeneralError,
            Self::Config { .. } => ExitCode::InvalidArguments,
            Self::Bind { .. } => ExitCode::BindError,
            Self::Io { .. } | Self::Server(_) | Self::Other(_) => ExitCode::GeneralError,
        }
    }

    /// Serializes this error as a JSON value for `--format json` output.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Backend(e) => serde_json::json!({
                "error": "backend_error",
                "message": e.to_string(),
            }),
            Self::Io { path, source } => serde_json::json!({
                "error": "io_error",
                "path": path.display().to_string(),
                "message": source.to_string(),
            }),
            Self::Config { message } => serde_json::json!({
                "error": "config_error",
                "message": message,
            }),
            Self::Bind { addr, source } => serde_json::json!({
                "error": "bind_error",
                "addr": addr,
                "message": source.to_string(),
            }),
            other => serde_json::json!({
                "error": "error",
                "message": other.to_string(),
            }),
        }
    }
}
