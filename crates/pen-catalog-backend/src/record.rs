use std::fmt;

use pen_catalog_core::types::{RecordId, ResourceKind};

/// One reference record: a brand, color, material or type.
///
/// A record starts out transient (no id). The store assigns the id on the
/// first save; after that the id never changes. Only the name is mutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    kind: ResourceKind,
    id: Option<RecordId>,
    name: Option<String>,
}

impl Record {
    /// Creates an empty, not-yet-persisted record.
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            id: None,
            name: None,
        }
    }

    /// Creates a persisted record (used when loading from storage).
    pub fn with_id(kind: ResourceKind, id: RecordId, name: impl Into<String>) -> Self {
        Self {
            kind,
            id: Some(id),
            name: Some(name.into()),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// The store-assigned id, or `None` before the first save.
    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Overwrites the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Returns true once the store has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{}:{}", self.kind, id),
            None => write!(f, "{}:<new>", self.kind),
        }
    }
}
