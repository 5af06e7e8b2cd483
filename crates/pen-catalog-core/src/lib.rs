//! Core vocabulary of the pen catalog: resource kinds, record identifiers
//! and read-group projections. No I/O.

pub mod error;
pub mod types;

pub use error::CoreError;
pub use types::{
    Brand, Color, Material, ReadGroup, ReadGroups, RecordField, RecordId, Resource,
    ResourceKind, Type,
};
