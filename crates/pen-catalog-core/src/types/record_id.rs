use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A store-assigned record identifier: a positive 64-bit integer.
///
/// Identifiers are allocated per resource kind, starting at 1, and never
/// reused after a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct RecordId(i64);

impl RecordId {
    /// The first identifier a fresh sequence hands out.
    pub const FIRST: RecordId = RecordId(1);

    /// Creates a `RecordId`, rejecting zero and negative values.
    pub fn new(value: i64) -> Result<Self, CoreError> {
        if value < 1 {
            return Err(CoreError::InvalidRecordId(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Parses a path segment such as `"42"`.
    ///
    /// Surrounding whitespace, signs and leading `+` are rejected so that only
    /// the canonical decimal form resolves.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidRecordId(s.to_string()));
        }
        let value = s
            .parse::<i64>()
            .map_err(|_| CoreError::InvalidRecordId(s.to_string()))?;
        Self::new(value).map_err(|_| CoreError::InvalidRecordId(s.to_string()))
    }

    /// Returns the raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }

    /// Returns the identifier following this one.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<RecordId> for i64 {
    fn from(id: RecordId) -> i64 {
        id.0
    }
}

impl TryFrom<i64> for RecordId {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ids() {
        for raw in ["1", "42", "9223372036854775807"] {
            assert!(RecordId::parse(raw).is_ok(), "expected valid: {raw}");
        }
    }

    #[test]
    fn invalid_ids() {
        for raw in ["", "0", "-1", "+1", " 1", "1.0", "abc", "9223372036854775808"] {
            assert!(RecordId::parse(raw).is_err(), "expected invalid: {raw:?}");
        }
    }

    #[test]
    fn new_rejects_non_positive() {
        assert!(RecordId::new(0).is_err());
        assert!(RecordId::new(-7).is_err());
        assert_eq!(RecordId::new(7).unwrap().get(), 7);
    }

    #[test]
    fn next_increments_and_saturates() {
        assert_eq!(RecordId::FIRST.next(), Some(RecordId::new(2).unwrap()));
        assert_eq!(RecordId::new(i64::MAX).unwrap().next(), None);
    }

    #[test]
    fn serializes_as_bare_number() {
        let id = RecordId::new(12).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "12");
        let back: RecordId = serde_json::from_str("12").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn serde_rejects_zero() {
        assert!(serde_json::from_str::<RecordId>("0").is_err());
    }
}
