use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pen_catalog_backend::BackendError;
use pen_catalog_core::types::ResourceKind;

/// Why a create or update could not be carried out.
///
/// Malformed input and storage failures share one type. The HTTP surface
/// reports every variant as 500 with `{code, message}`; there is no 4xx for
/// a bad body.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WriteError {
    /// The body is not valid JSON.
    MalformedBody { message: String },
    /// The body is JSON but not an object.
    NotAnObject,
    /// The object has no `name` key.
    MissingName,
    /// `name` is present but not a string.
    InvalidName { found: &'static str },
    /// The store refused or failed the write.
    Persistence(BackendError),
}

impl WriteError {
    /// Numeric code reported alongside the message. Always 0: none of these
    /// failures carry an application-level code.
    pub fn code(&self) -> i64 {
        0
    }
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBody { message } => write!(f, "malformed JSON body: {message}"),
            Self::NotAnObject => write!(f, "request body must be a JSON object"),
            Self::MissingName => write!(f, "request body has no \"name\" key"),
            Self::InvalidName { found } => {
                write!(f, "\"name\" must be of type string, {found} given")
            }
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for WriteError {}

/// Errors returned by catalog HTTP endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiError {
    /// The `{id}` path segment did not resolve to a record. Maps to 404.
    NotFound { kind: ResourceKind, id: String },
    /// Create or update failed. Maps to 500 with `{code, message}`.
    WriteFailed(WriteError),
    /// Any other failure (list, get, delete). Maps to 500.
    Internal { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{} {id} not found", kind.label()),
            Self::WriteFailed(err) => write!(f, "{err}"),
            Self::Internal { message } => write!(f, "internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns the HTTP status code for this error variant.
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::WriteFailed(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> serde_json::Value {
        match self {
            Self::NotFound { .. } => serde_json::json!({
                "code": StatusCode::NOT_FOUND.as_u16(),
                "message": self.to_string(),
            }),
            Self::WriteFailed(err) => serde_json::json!({
                "code": err.code(),
                "message": err.to_string(),
            }),
            Self::Internal { .. } => serde_json::json!({
                "error": "internal_error",
                "message": self.to_string(),
            }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Self::Internal { message } = &self {
            tracing::error!(%message, "unhandled catalog fault");
        }
        (status, axum::Json(self.body())).into_response()
    }
}

impl From<WriteError> for ApiError {
    fn from(err: WriteError) -> Self {
        Self::WriteFailed(err)
    }
}

impl From<BackendError> for ApiError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::RecordNotFound { resource, id } => match resource.parse() {
                Ok(kind) => Self::NotFound { kind, id },
                Err(_) => Self::Internal {
                    message: format!("{resource} '{id}' not found"),
                },
            },
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}
