//! SurrealDB implementation of the `RecordStore` trait.
//!
//! Each resource kind is a table named after its singular route name
//! (`brand`, `color`, `material`, `type`). Record ids are integers drawn from
//! a per-table counter in `_sequence`. All values travel as bound
//! parameters.

use pen_catalog_backend::error::BackendError;
use pen_catalog_backend::record::Record;
use pen_catalog_backend::traits::{required_name, RecordStore};
use pen_catalog_core::types::{RecordId, ResourceKind};
use surrealdb::engine::any::Any;
use surrealdb::opt::auth::Root;
use surrealdb::Surreal;

/// Table holding one counter row per resource table.
const SEQUENCE_TABLE: &str = "_sequence";

const SELECT_ONE: &str = "SELECT record::id(id) AS id, name FROM type::thing($table, $id);";

/// Root credentials for a remote SurrealDB server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// SurrealDB backend for the pen catalog.
///
/// Wraps a connected `Surreal<Any>` client, so the same type serves the
/// embedded `mem://` engine and remote `ws://` servers.
pub struct SurrealBackend {
    db: Surreal<Any>,
}

impl SurrealBackend {
    /// Connect to an in-memory SurrealDB instance.
    ///
    /// Uses the `kv-mem` engine. The namespace and database are created
    /// automatically.
    pub async fn connect_memory(ns: &str, db_name: &str) -> Result<Self, BackendError> {
        Self::connect("mem://", ns, db_name, None).await
    }

    /// Connect to any endpoint understood by the `any` engine.
    ///
    /// Signs in as root when `credentials` is given, then selects the
    /// namespace and database.
    pub async fn connect(
        url: &str,
        ns: &str,
        db_name: &str,
        credentials: Option<&Credentials>,
    ) -> Result<Self, BackendError> {
        let db = surrealdb::engine::any::connect(url)
            .await
            .map_err(|e| BackendError::ConnectionError {
                message: e.to_string(),
            })?;

        if let Some(creds) = credentials {
            db.signin(Root {
                username: &creds.username,
                password: &creds.password,
            })
            .await
            .map_err(|e| BackendError::ConnectionError {
                message: format!("sign-in failed: {e}"),
            })?;
        }

        db.use_ns(ns)
            .use_db(db_name)
            .await
            .map_err(|e| BackendError::ConnectionError {
                message: e.to_string(),
            })?;

        tracing::info!(url, ns, db = db_name, "connected to SurrealDB");
        Ok(Self { db })
    }

    /// Create from an already-connected client.
    pub fn from_client(db: Surreal<Any>) -> Self {
        Self { db }
    }

    /// Advance the table's counter and return the new value.
    async fn next_id(&self, kind: ResourceKind) -> Result<RecordId, BackendError> {
        let mut response = self
            .db
            .query("UPSERT type::thing($sequence, $table) SET last_id += 1 RETURN VALUE last_id;")
            .bind(("sequence", SEQUENCE_TABLE))
            .bind(("table", kind.singular()))
            .await
            .map_err(query_error)?;

        let counters: Vec<i64> = response.take(0).map_err(query_error)?;
        let value = counters
            .first()
            .copied()
            .ok_or_else(|| BackendError::Internal {
                message: format!("sequence for '{kind}' returned no counter"),
            })?;

        RecordId::new(value).map_err(|e| BackendError::Internal {
            message: e.to_string(),
        })
    }

    async fn insert(&self, kind: ResourceKind, name: &str) -> Result<Record, BackendError> {
        let id = self.next_id(kind).await?;
        let sql = format!("CREATE type::thing($table, $id) SET name = $name RETURN NONE; {SELECT_ONE}");
        let mut response = self
            .db
            .query(sql)
            .bind(("table", kind.singular()))
            .bind(("id", id.get()))
            .bind(("name", name.to_string()))
            .await
            .map_err(query_error)?;

        let _: Vec<serde_json::Value> = response.take(0).map_err(query_error)?;
        let rows: Vec<serde_json::Value> = response.take(1).map_err(query_error)?;
        let row = rows.first().ok_or_else(|| BackendError::Internal {
            message: format!("CREATE returned no result for {kind}:{id}"),
        })?;
        json_row_to_record(kind, row)
    }

    async fn overwrite(
        &self,
        kind: ResourceKind,
        id: RecordId,
        name: &str,
    ) -> Result<Record, BackendError> {
        let sql = format!("UPDATE type::thing($table, $id) SET name = $name RETURN NONE; {SELECT_ONE}");
        let mut response = self
            .db
            .query(sql)
            .bind(("table", kind.singular()))
            .bind(("id", id.get()))
            .bind(("name", name.to_string()))
            .await
            .map_err(query_error)?;

        let _: Vec<serde_json::Value> = response.take(0).map_err(query_error)?;
        let rows: Vec<serde_json::Value> = response.take(1).map_err(query_error)?;
        match rows.first() {
            Some(row) => json_row_to_record(kind, row),
            None => Err(not_found(kind, id)),
        }
    }
}

impl RecordStore for SurrealBackend {
    async fn find_all(&self, kind: ResourceKind) -> Result<Vec<Record>, BackendError> {
        let mut response = self
            .db
            .query("SELECT record::id(id) AS id, name FROM type::table($table);")
            .bind(("table", kind.singular()))
            .await
            .map_err(query_error)?;

        let rows: Vec<serde_json::Value> = response.take(0).map_err(query_error)?;
        let mut records = rows
            .iter()
            .map(|row| json_row_to_record(kind, row))
            .collect::<Result<Vec<_>, _>>()?;
        records.sort_by_key(Record::id);
        Ok(records)
    }

    async fn find_by_id(
        &self,
        kind: ResourceKind,
        id: RecordId,
    ) -> Result<Option<Record>, BackendError> {
        let mut response = self
            .db
            .query(SELECT_ONE)
            .bind(("table", kind.singular()))
            .bind(("id", id.get()))
            .await
            .map_err(query_error)?;

        let rows: Vec<serde_json::Value> = response.take(0).map_err(query_error)?;
        rows.first()
            .map(|row| json_row_to_record(kind, row))
            .transpose()
    }

    async fn save(&self, record: &Record) -> Result<Record, BackendError> {
        let kind = record.kind();
        let name = required_name(record)?;
        let saved = match record.id() {
            Some(id) => self.overwrite(kind, id, name).await?,
            None => self.insert(kind, name).await?,
        };
        tracing::debug!(record = %saved, "surreal store saved record");
        Ok(saved)
    }

    async fn delete(&self, kind: ResourceKind, id: RecordId) -> Result<(), BackendError> {
        let mut response = self
            .db
            .query(format!("{SELECT_ONE} DELETE type::thing($table, $id) RETURN NONE;"))
            .bind(("table", kind.singular()))
            .bind(("id", id.get()))
            .await
            .map_err(query_error)?;

        let existing: Vec<serde_json::Value> = response.take(0).map_err(query_error)?;
        let _: Vec<serde_json::Value> = response.take(1).map_err(query_error)?;
        if existing.is_empty() {
            return Err(not_found(kind, id));
        }
        Ok(())
    }
}

fn query_error(e: surrealdb::Error) -> BackendError {
    BackendError::QueryError {
        message: e.to_string(),
    }
}

fn not_found(kind: ResourceKind, id: RecordId) -> BackendError {
    BackendError::RecordNotFound {
        resource: kind.singular().to_string(),
        id: id.to_string(),
    }
}

/// Convert a `{ id, name }` response row to a `Record`.
fn json_row_to_record(kind: ResourceKind, row: &serde_json::Value) -> Result<Record, BackendError> {
    let obj = row.as_object().ok_or_else(|| BackendError::Internal {
        message: "expected JSON object in query result".to_string(),
    })?;

    let raw_id = obj
        .get("id")
        .and_then(serde_json::Value::as_i64)
        .ok_or_else(|| BackendError::Internal {
            message: format!("query result row has no integer 'id': {row}"),
        })?;
    let id = RecordId::new(raw_id).map_err(|e| BackendError::Internal {
        message: e.to_string(),
    })?;

    let name = obj
        .get("name")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| BackendError::Internal {
            message: format!("{kind}:{id} has no 'name' value"),
        })?;

    Ok(Record::with_id(kind, id, name))
}
