//! Read-view projection: which record fields reach the JSON body.

use pen_catalog_backend::record::Record;
use pen_catalog_core::types::{ReadGroups, RecordField, ResourceKind};
use serde::Serialize;

/// Project one record through `groups`.
///
/// Fields outside every requested group are omitted. A transient record
/// renders its id as `null`.
pub fn project(record: &Record, groups: &ReadGroups) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    if groups.includes(RecordField::Id) {
        obj.insert(
            RecordField::Id.key().to_string(),
            record
                .id()
                .map_or(serde_json::Value::Null, |id| serde_json::json!(id.get())),
        );
    }
    if groups.includes(RecordField::Name) {
        obj.insert(
            RecordField::Name.key().to_string(),
            record
                .name()
                .map_or(serde_json::Value::Null, |name| serde_json::json!(name)),
        );
    }
    serde_json::Value::Object(obj)
}

/// Project a collection and wrap it under the kind's plural name:
/// `{ "brands": [ ... ] }`.
pub fn collection(kind: ResourceKind, records: &[Record], groups: &ReadGroups) -> serde_json::Value {
    let items: Vec<serde_json::Value> = records.iter().map(|r| project(r, groups)).collect();
    let mut obj = serde_json::Map::new();
    obj.insert(kind.plural().to_string(), serde_json::Value::Array(items));
    serde_json::Value::Object(obj)
}

/// Body returned by a successful delete.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DeletedResponse {
    pub code: u16,
    pub message: String,
}

impl DeletedResponse {
    pub fn for_kind(kind: ResourceKind) -> Self {
        Self {
            code: 200,
            message: format!("{} deleted", kind.label()),
        }
    }
}
