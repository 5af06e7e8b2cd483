pub mod completions;
pub mod routes;
pub mod serve;

use pen_catalog_api::CatalogState;
use pen_catalog_backend::MemoryStore;
use pen_catalog_surrealdb::SurrealBackend;

use crate::config::{DbParams, StoreTarget};
use crate::error::CliError;
use crate::output::OutputContext;
use crate::progress;

/// Connect the configured store and wrap it as handler state.
pub async fn connect_store(
    db_params: &DbParams,
    output: &OutputContext,
) -> Result<CatalogState, CliError> {
    let url = match &db_params.target {
        StoreTarget::Memory => return Ok(CatalogState::new(MemoryStore::new())),
        StoreTarget::Surreal(url) => url,
    };

    let spinner = if output.show_progress() {
        Some(progress::create_spinner("Connecting to SurrealDB..."))
    } else {
        None
    };

    let result = SurrealBackend::connect(
        url,
        &db_params.namespace,
        &db_params.database,
        db_params.credentials.as_ref(),
    )
    .await;

    match result {
        Ok(backend) => {
            if let Some(sp) = &spinner {
                progress::finish_spinner(sp, &format!("Connected to {}", db_params.describe()));
            }
            Ok(CatalogState::new(backend))
        }
        Err(err) => {
            if let Some(sp) = &spinner {
                progress::finish_spinner_error(sp, &format!("Connection failed: {err}"));
            }
            Err(CliError::Backend(err))
        }
    }
}
