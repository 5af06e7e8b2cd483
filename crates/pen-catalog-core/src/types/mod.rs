mod read_group;
mod record_id;
mod resource_kind;

pub use read_group::{ReadGroup, ReadGroups, RecordField};
pub use record_id::RecordId;
pub use resource_kind::{Brand, Color, Material, Resource, ResourceKind, Type};
