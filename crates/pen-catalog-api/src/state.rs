use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use pen_catalog_backend::error::BackendError;
use pen_catalog_backend::record::Record;
use pen_catalog_backend::traits::RecordStore;
use pen_catalog_core::types::{RecordId, ResourceKind};

// ---------------------------------------------------------------------------
// DynRecordStore
// ---------------------------------------------------------------------------

/// Object-safe wrapper for `RecordStore`.
///
/// RPITIT traits cannot be used as `dyn Trait`. This wrapper uses boxed futures
/// to enable dynamic dispatch for HTTP handler state.
pub trait DynRecordStore: Send + Sync {
    fn find_all(
        &self,
        kind: ResourceKind,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Record>, BackendError>> + Send + '_>>;

    fn find_by_id(
        &self,
        kind: ResourceKind,
        id: RecordId,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Record>, BackendError>> + Send + '_>>;

    fn save<'a>(
        &'a self,
        record: &'a Record,
    ) -> Pin<Box<dyn Future<Output = Result<Record, BackendError>> + Send + 'a>>;

    fn delete(
        &self,
        kind: ResourceKind,
        id: RecordId,
    ) -> Pin<Box<dyn Future<Output = Result<(), BackendError>> + Send + '_>>;
}

/// Blanket impl: any concrete `RecordStore` automatically implements `DynRecordStore`.
impl<T: RecordStore + 'static> DynRecordStore for T {
    fn find_all(
        &self,
        kind: ResourceKind,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Record>, BackendError>> + Send + '_>> {
        Box::pin(RecordStore::find_all(self, kind))
    }

    fn find_by_id(
        &self,
        kind: ResourceKind,
        id: RecordId,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Record>, BackendError>> + Send + '_>> {
        Box::pin(RecordStore::find_by_id(self, kind, id))
    }

    fn save<'a>(
        &'a self,
        record: &'a Record,
    ) -> Pin<Box<dyn Future<Output = Result<Record, BackendError>> + Send + 'a>> {
        Box::pin(RecordStore::save(self, record))
    }

    fn delete(
        &self,
        kind: ResourceKind,
        id: RecordId,
    ) -> Pin<Box<dyn Future<Output = Result<(), BackendError>> + Send + '_>> {
        Box::pin(RecordStore::delete(self, kind, id))
    }
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

/// A `DynRecordStore` scoped to one resource kind.
///
/// Handlers obtain one per request through [`CatalogState::repository`].
#[derive(Clone)]
pub struct Repository {
    kind: ResourceKind,
    store: Arc<dyn DynRecordStore>,
}

impl Repository {
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub async fn find_all(&self) -> Result<Vec<Record>, BackendError> {
        self.store.find_all(self.kind).await
    }

    pub async fn find_by_id(&self, id: RecordId) -> Result<Option<Record>, BackendError> {
        self.store.find_by_id(self.kind, id).await
    }

    /// Persist `record`, returning the stored copy (with its id).
    pub async fn save(&self, record: &Record) -> Result<Record, BackendError> {
        if record.kind() != self.kind {
            return Err(BackendError::Internal {
                message: format!(
                    "{} repository cannot save a {} record",
                    self.kind,
                    record.kind()
                ),
            });
        }
        self.store.save(record).await
    }

    /// Remove a persisted record.
    pub async fn delete(&self, record: &Record) -> Result<(), BackendError> {
        let id = record.id().ok_or_else(|| BackendError::Internal {
            message: format!("cannot delete unsaved record {record}"),
        })?;
        self.store.delete(self.kind, id).await
    }
}

// ---------------------------------------------------------------------------
// CatalogState
// ---------------------------------------------------------------------------

/// Shared state for catalog route handlers.
#[derive(Clone)]
pub struct CatalogState {
    /// Dynamic dispatch store for every resource kind.
    pub store: Arc<dyn DynRecordStore>,
}

impl CatalogState {
    /// Wrap a concrete store.
    pub fn new<S: RecordStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// The repository for one resource kind.
    pub fn repository(&self, kind: ResourceKind) -> Repository {
        Repository {
            kind,
            store: Arc::clone(&self.store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pen_catalog_backend::MemoryStore;

    #[test]
    fn catalog_state_is_clone_send_sync() {
        fn assert_clone_send_sync<T: Clone + Send + Sync>() {}
        assert_clone_send_sync::<CatalogState>();
        assert_clone_send_sync::<Repository>();
    }

    #[tokio::test]
    async fn repository_is_scoped_to_kind() {
        let state = CatalogState::new(MemoryStore::new());
        let brands = state.repository(ResourceKind::Brand);
        let colors = state.repository(ResourceKind::Color);

        let mut pilot = Record::new(ResourceKind::Brand);
        pilot.set_name("Pilot");
        brands.save(&pilot).await.unwrap();

        assert_eq!(brands.find_all().await.unwrap().len(), 1);
        assert!(colors.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn repository_rejects_foreign_kind() {
        let state = CatalogState::new(MemoryStore::new());
        let mut red = Record::new(ResourceKind::Color);
        red.set_name("Red");
        let err = state
            .repository(ResourceKind::Brand)
            .save(&red)
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Internal { .. }));
    }

    #[tokio::test]
    async fn repository_delete_requires_persisted_record() {
        let state = CatalogState::new(MemoryStore::new());
        let err = state
            .repository(ResourceKind::Type)
            .delete(&Record::new(ResourceKind::Type))
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Internal { .. }));
    }
}
