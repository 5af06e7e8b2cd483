//! SurrealDB persistence for the pen catalog.

pub mod backend;

pub use backend::{Credentials, SurrealBackend};
pub use surrealdb;
