use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::resource_kind::ResourceKind;

/// A field a read view may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordField {
    Id,
    Name,
}

impl RecordField {
    /// JSON key of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
        }
    }
}

/// A named field projection applied when a record is serialized.
///
/// `Resource(kind)` renders as `brand:read`, `color:read` and so on and owns
/// the record's own fields. `Pen` renders as `pen:read` and owns the fields
/// of the pen aggregate that references these records; none of those are
/// carried by a bare reference record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadGroup {
    Resource(ResourceKind),
    Pen,
}

impl ReadGroup {
    /// Fields this group contributes to a reference record's view.
    pub fn fields(self) -> &'static [RecordField] {
        match self {
            Self::Resource(_) => &[RecordField::Id, RecordField::Name],
            Self::Pen => &[],
        }
    }
}

impl fmt::Display for ReadGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resource(kind) => write!(f, "{}:read", kind.singular()),
            Self::Pen => f.write_str("pen:read"),
        }
    }
}

impl FromStr for ReadGroup {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let owner = s
            .strip_suffix(":read")
            .ok_or_else(|| CoreError::UnknownReadGroup(s.to_string()))?;
        if owner == "pen" {
            return Ok(Self::Pen);
        }
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.singular() == owner)
            .map(Self::Resource)
            .ok_or_else(|| CoreError::UnknownReadGroup(s.to_string()))
    }
}

/// The set of read groups requested for one serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadGroups(Vec<ReadGroup>);

impl ReadGroups {
    /// Creates a group set, dropping duplicates while keeping order.
    pub fn new(groups: impl IntoIterator<Item = ReadGroup>) -> Self {
        let mut unique = Vec::new();
        for group in groups {
            if !unique.contains(&group) {
                unique.push(group);
            }
        }
        Self(unique)
    }

    /// The groups every resource endpoint serializes with:
    /// `{resource}:read` plus the shared `pen:read`.
    pub fn for_resource(kind: ResourceKind) -> Self {
        Self::new([kind.read_group(), ReadGroup::Pen])
    }

    /// Returns true if the projection includes `field`.
    pub fn includes(&self, field: RecordField) -> bool {
        self.0.iter().any(|g| g.fields().contains(&field))
    }

    /// Iterates over the groups in request order.
    pub fn iter(&self) -> impl Iterator<Item = &ReadGroup> {
        self.0.iter()
    }

    /// Group names, e.g. `["brand:read", "pen:read"]`.
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}
