use std::future::Future;

use pen_catalog_core::types::{RecordId, ResourceKind};

use crate::error::BackendError;
use crate::record::Record;

/// Storage-agnostic persistence gateway for reference records.
///
/// Every write is durable when the returned future resolves; there is no
/// separate flush step and no multi-record transaction.
///
/// Uses RPITIT (return position impl Trait in trait) for async methods,
/// avoiding the `async-trait` crate.
pub trait RecordStore: Send + Sync {
    /// Return every stored record of `kind`, ordered by id.
    fn find_all(
        &self,
        kind: ResourceKind,
    ) -> impl Future<Output = Result<Vec<Record>, BackendError>> + Send;

    /// Look up one record. Returns `None` when no such id exists.
    fn find_by_id(
        &self,
        kind: ResourceKind,
        id: RecordId,
    ) -> impl Future<Output = Result<Option<Record>, BackendError>> + Send;

    /// Persist a record.
    ///
    /// A transient record is inserted under the next id of its kind's
    /// sequence. A persisted record has its name overwritten; it must still
    /// exist (`BackendError::RecordNotFound` otherwise). A record without a
    /// name is rejected with `BackendError::RequiredFieldMissing`.
    fn save(&self, record: &Record) -> impl Future<Output = Result<Record, BackendError>> + Send;

    /// Remove a record. Returns `BackendError::RecordNotFound` if absent.
    fn delete(
        &self,
        kind: ResourceKind,
        id: RecordId,
    ) -> impl Future<Output = Result<(), BackendError>> + Send;
}

/// Extracts the name a store is about to write, enforcing the non-null column.
pub fn required_name(record: &Record) -> Result<&str, BackendError> {
    record.name().ok_or_else(|| BackendError::RequiredFieldMissing {
        field: "name".to_string(),
    })
}
