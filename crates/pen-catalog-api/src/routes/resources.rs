use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use pen_catalog_backend::record::Record;
use pen_catalog_core::types::{ReadGroups, Resource};

use crate::error::{ApiError, WriteError};
use crate::extract::Resolved;
use crate::state::{CatalogState, Repository};
use crate::view::{self, DeletedResponse};

// ---------------------------------------------------------------------------
// Body decoding (pure functions)
// ---------------------------------------------------------------------------

/// Pull the `name` string out of a raw request body.
///
/// The body must be a JSON object with a string `name`. Other keys are
/// ignored. Nothing is trimmed or length-checked.
pub fn decode_name(body: &[u8]) -> Result<String, WriteError> {
    let data: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| WriteError::MalformedBody {
            message: e.to_string(),
        })?;
    let obj = data.as_object().ok_or(WriteError::NotAnObject)?;
    match obj.get("name") {
        None => Err(WriteError::MissingName),
        Some(serde_json::Value::String(name)) => Ok(name.clone()),
        Some(other) => Err(WriteError::InvalidName {
            found: json_type_name(other),
        }),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => "int",
        serde_json::Value::Number(_) => "float",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

async fn create_record(repo: &Repository, body: &[u8]) -> Result<Record, WriteError> {
    let name = decode_name(body)?;
    let mut record = Record::new(repo.kind());
    record.set_name(name);
    repo.save(&record).await.map_err(WriteError::Persistence)
}

async fn rename_record(
    repo: &Repository,
    mut record: Record,
    body: &[u8],
) -> Result<Record, WriteError> {
    let name = decode_name(body)?;
    record.set_name(name);
    repo.save(&record).await.map_err(WriteError::Persistence)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /{plural} -- List every record of the resource.
pub async fn list<R: Resource>(
    State(state): State<CatalogState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let kind = R::KIND;
    let records = state.repository(kind).find_all().await?;
    tracing::debug!(resource = %kind, count = records.len(), "listed records");
    Ok(Json(view::collection(
        kind,
        &records,
        &ReadGroups::for_resource(kind),
    )))
}

/// GET /{singular}/{id} -- Get one record.
pub async fn get<R: Resource>(resolved: Resolved<R>) -> Json<serde_json::Value> {
    Json(view::project(
        &resolved.record,
        &ReadGroups::for_resource(R::KIND),
    ))
}

/// POST /{plural} -- Create a record from `{"name": ...}`.
pub async fn create<R: Resource>(
    State(state): State<CatalogState>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    let kind = R::KIND;
    let created = create_record(&state.repository(kind), &body)
        .await
        .inspect_err(|e| tracing::warn!(resource = %kind, error = %e, "create failed"))?;

    tracing::info!(record = %created, "created record");
    Ok(Json(view::project(&created, &ReadGroups::for_resource(kind))))
}

/// PUT|PATCH /{singular}/{id} -- Overwrite a record's name.
pub async fn update<R: Resource>(
    State(state): State<CatalogState>,
    resolved: Resolved<R>,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    let kind = R::KIND;
    let target = resolved.into_inner();
    let label = target.to_string();
    let updated = rename_record(&state.repository(kind), target, &body)
        .await
        .inspect_err(|e| tracing::warn!(record = %label, error = %e, "update failed"))?;

    tracing::info!(record = %updated, "updated record");
    Ok(Json(view::project(&updated, &ReadGroups::for_resource(kind))))
}

/// DELETE /{singular}/{id} -- Remove a record.
pub async fn delete<R: Resource>(
    State(state): State<CatalogState>,
    resolved: Resolved<R>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let kind = R::KIND;
    state.repository(kind).delete(&resolved.record).await?;
    tracing::info!(record = %resolved.record, "deleted record");
    Ok(Json(DeletedResponse::for_kind(kind)))
}
