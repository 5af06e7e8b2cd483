//! In-process `RecordStore` keeping every table in memory.
//!
//! Useful for tests and for running the API without a database. Data is
//! lost when the store is dropped.

use std::collections::{BTreeMap, HashMap};

use pen_catalog_core::types::{RecordId, ResourceKind};
use tokio::sync::RwLock;

use crate::error::BackendError;
use crate::record::Record;
use crate::traits::{required_name, RecordStore};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<RecordId, String>,
    last_id: Option<RecordId>,
}

impl Table {
    fn next_id(&mut self, kind: ResourceKind) -> Result<RecordId, BackendError> {
        let next = match self.last_id {
            None => Some(RecordId::FIRST),
            Some(last) => last.next(),
        }
        .ok_or_else(|| BackendError::SequenceExhausted {
            resource: kind.singular().to_string(),
        })?;
        self.last_id = Some(next);
        Ok(next)
    }
}

/// Thread-safe in-memory record store.
///
/// One table per resource kind, each with its own id sequence. Writers are
/// serialized by a `tokio::sync::RwLock`, so concurrent updates to the same
/// record resolve as last-writer-wins.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<ResourceKind, Table>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    async fn find_all(&self, kind: ResourceKind) -> Result<Vec<Record>, BackendError> {
        let guard = self.tables.read().await;
        let records = guard
            .get(&kind)
            .map(|table| {
                table
                    .rows
                    .iter()
                    .map(|(id, name)| Record::with_id(kind, *id, name.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(records)
    }

    async fn find_by_id(
        &self,
        kind: ResourceKind,
        id: RecordId,
    ) -> Result<Option<Record>, BackendError> {
        let guard = self.tables.read().await;
        Ok(guard
            .get(&kind)
            .and_then(|table| table.rows.get(&id))
            .map(|name| Record::with_id(kind, id, name.clone())))
    }

    async fn save(&self, record: &Record) -> Result<Record, BackendError> {
        let kind = record.kind();
        let name = required_name(record)?.to_string();
        let mut guard = self.tables.write().await;
        let table = guard.entry(kind).or_default();

        let id = match record.id() {
            Some(id) => {
                let row = table
                    .rows
                    .get_mut(&id)
                    .ok_or_else(|| BackendError::RecordNotFound {
                        resource: kind.singular().to_string(),
                        id: id.to_string(),
                    })?;
                row.clone_from(&name);
                id
            }
            None => {
                let id = table.next_id(kind)?;
                table.rows.insert(id, name.clone());
                id
            }
        };

        tracing::debug!(resource = %kind, %id, "memory store saved record");
        Ok(Record::with_id(kind, id, name))
    }

    async fn delete(&self, kind: ResourceKind, id: RecordId) -> Result<(), BackendError> {
        let mut guard = self.tables.write().await;
        let removed = guard
            .get_mut(&kind)
            .and_then(|table| table.rows.remove(&id));
        match removed {
            Some(_) => Ok(()),
            None => Err(BackendError::RecordNotFound {
                resource: kind.singular().to_string(),
                id: id.to_string(),
            }),
        }
    }
}
