use std::fmt;

/// Errors that occur when constructing or parsing catalog types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoreError {
    /// Record identifier is not a positive integer.
    InvalidRecordId(String),
    /// Resource name does not match any known resource kind.
    UnknownResource(String),
    /// Read group name is not `<resource>:read` or `pen:read`.
    UnknownReadGroup(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRecordId(s) => {
                write!(f, "invalid record id '{s}': must be a positive integer")
            }
            Self::UnknownResource(s) => {
                write!(
                    f,
                    "unknown resource '{s}': expected one of brand, color, material, type"
                )
            }
            Self::UnknownReadGroup(s) => write!(f, "unknown read group '{s}'"),
        }
    }
}

impl std::error::Error for CoreError {}
