pub mod resources;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use pen_catalog_core::types::{Brand, Color, Material, Resource, ResourceKind, Type};
use serde::Serialize;

use crate::config::CatalogSettings;
use crate::state::CatalogState;

/// Security scheme declared on collection routes. Documentation only; no
/// handler checks it.
pub const BEARER_SCHEME: &str = "Bearer";

/// Build the catalog router with the CRUD routes of every resource kind.
///
/// The router is returned without state applied and without a prefix; see
/// [`catalog_router`] for the mounted form. Request bodies have no size
/// limit.
pub fn catalog_routes() -> Router<CatalogState> {
    Router::new()
        .merge(resource_routes::<Brand>())
        .merge(resource_routes::<Color>())
        .merge(resource_routes::<Material>())
        .merge(resource_routes::<Type>())
        .layer(DefaultBodyLimit::disable())
}

fn resource_routes<R: Resource>() -> Router<CatalogState> {
    let kind = R::KIND;
    Router::new()
        .route(
            &collection_path(kind),
            get(resources::list::<R>).post(resources::create::<R>),
        )
        .route(
            &item_path(kind),
            get(resources::get::<R>)
                .put(resources::update::<R>)
                .patch(resources::update::<R>)
                .delete(resources::delete::<R>),
        )
}

/// Mount [`catalog_routes`] under the configured prefix and apply `state`.
pub fn catalog_router(state: CatalogState, settings: &CatalogSettings) -> Router {
    let prefix = settings.normalized_prefix();
    let router = if prefix.is_empty() {
        catalog_routes()
    } else {
        Router::new().nest(&prefix, catalog_routes())
    };
    router.with_state(state)
}

fn collection_path(kind: ResourceKind) -> String {
    format!("/{}", kind.plural())
}

fn item_path(kind: ResourceKind) -> String {
    format!("/{}/{{id}}", kind.singular())
}

// ---------------------------------------------------------------------------
// Route table
// ---------------------------------------------------------------------------

/// One named route, as listed by the CLI `routes` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub name: String,
    pub methods: Vec<&'static str>,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<&'static str>,
}

/// Every catalog route under `prefix`, in registration order.
pub fn route_table(prefix: &str) -> Vec<RouteEntry> {
    let prefix = CatalogSettings {
        route_prefix: prefix.to_string(),
    }
    .normalized_prefix();

    ResourceKind::ALL
        .into_iter()
        .flat_map(|kind| {
            let collection = format!("{prefix}{}", collection_path(kind));
            let item = format!("{prefix}{}", item_path(kind));
            let singular = kind.singular();
            [
                RouteEntry {
                    name: format!("app_{}", kind.plural()),
                    methods: vec!["GET"],
                    path: collection.clone(),
                    security: Some(BEARER_SCHEME),
                },
                RouteEntry {
                    name: format!("app_{singular}_get"),
                    methods: vec!["GET"],
                    path: item.clone(),
                    security: None,
                },
                RouteEntry {
                    name: format!("app_{singular}_add"),
                    methods: vec!["POST"],
                    path: collection,
                    security: None,
                },
                RouteEntry {
                    name: format!("app_{singular}_update"),
                    methods: vec!["PUT", "PATCH"],
                    path: item.clone(),
                    security: None,
                },
                RouteEntry {
                    name: format!("app_{singular}_delete"),
                    methods: vec!["DELETE"],
                    path: item,
                    security: None,
                },
            ]
        })
        .collect()
}
