pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
pub mod view;

pub use config::{CatalogConfig, CatalogSettings};
pub use error::{ApiError, WriteError};
pub use extract::Resolved;
pub use routes::{catalog_router, catalog_routes, route_table, RouteEntry};
pub use state::{CatalogState, DynRecordStore, Repository};
