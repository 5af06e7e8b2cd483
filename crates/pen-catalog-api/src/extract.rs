use std::marker::PhantomData;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use pen_catalog_backend::record::Record;
use pen_catalog_core::types::{RecordId, Resource};

use crate::error::ApiError;
use crate::state::CatalogState;

/// A record loaded from the `{id}` path segment before the handler runs.
///
/// Rejects with 404 when the segment is not a positive integer or names no
/// stored record of kind `R`, so item handlers only ever see records that
/// exist.
pub struct Resolved<R: Resource> {
    pub record: Record,
    _resource: PhantomData<R>,
}

impl<R: Resource> Resolved<R> {
    pub fn into_inner(self) -> Record {
        self.record
    }
}

impl<R: Resource> FromRequestParts<CatalogState> for Resolved<R> {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &CatalogState,
    ) -> Result<Self, Self::Rejection> {
        let kind = R::KIND;
        let Path(raw_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                kind,
                id: String::new(),
            })?;

        let id = RecordId::parse(&raw_id).map_err(|_| ApiError::NotFound {
            kind,
            id: raw_id.clone(),
        })?;

        let record = state
            .repository(kind)
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound { kind, id: raw_id })?;

        tracing::debug!(record = %record, "resolved path record");
        Ok(Self {
            record,
            _resource: PhantomData,
        })
    }
}
