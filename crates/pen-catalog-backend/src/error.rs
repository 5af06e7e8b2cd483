use std::fmt;

/// Errors that occur during record storage operations.
///
/// Uses `String` for external error details to maintain `Clone` + `Eq`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BackendError {
    /// No record with this id exists for the resource.
    RecordNotFound { resource: String, id: String },
    /// A non-null column was left unset.
    RequiredFieldMissing { field: String },
    /// The id sequence for a resource cannot advance any further.
    SequenceExhausted { resource: String },
    /// Connection or transport-level error.
    ConnectionError { message: String },
    /// Query execution error.
    QueryError { message: String },
    /// Internal or unexpected error.
    Internal { message: String },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecordNotFound { resource, id } => {
                write!(f, "{resource} '{id}' not found")
            }
            Self::RequiredFieldMissing { field } => {
                write!(f, "required field '{field}' is missing")
            }
            Self::SequenceExhausted { resource } => {
                write!(f, "id sequence for '{resource}' is exhausted")
            }
            Self::ConnectionError { message } => {
                write!(f, "backend connection error: {message}")
            }
            Self::QueryError { message } => {
                write!(f, "query execution error: {message}")
            }
            Self::Internal { message } => {
                write!(f, "internal backend error: {message}")
            }
        }
    }
}

impl std::error::Error for BackendError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_found_display() {
        let err = BackendError::RecordNotFound {
            resource: "brand".into(),
            id: "7".into(),
        };
        assert_eq!(err.to_string(), "brand '7' not found");
    }

    #[test]
    fn required_field_missing_display() {
        let err = BackendError::RequiredFieldMissing {
            field: "name".into(),
        };
        assert_eq!(err.to_string(), "required field 'name' is missing");
    }

    #[test]
    fn sequence_exhausted_display() {
        let err = BackendError::SequenceExhausted {
            resource: "color".into(),
        };
        assert!(err.to_string().contains("color"));
    }

    #[test]
    fn connection_error_display() {
        let err = BackendError::ConnectionError {
            message: "connection refused".into(),
        };
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn query_error_display() {
        let err = BackendError::QueryError {
            message: "parse error".into(),
        };
        assert!(err.to_string().contains("parse error"));
    }

    #[test]
    fn internal_error_display() {
        let err = BackendError::Internal {
            message: "unexpected null".into(),
        };
        assert!(err.to_string().contains("unexpected null"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BackendError>();
    }
}
