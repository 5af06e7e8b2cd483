use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::read_group::ReadGroup;

/// The four reference-data resources a pen is described by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Brand,
    Color,
    Material,
    Type,
}

impl ResourceKind {
    /// Every resource kind, in route registration order.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Brand,
        ResourceKind::Color,
        ResourceKind::Material,
        ResourceKind::Type,
    ];

    /// Lowercase singular name, used in item routes and as the table name.
    pub fn singular(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Color => "color",
            Self::Material => "material",
            Self::Type => "type",
        }
    }

    /// Lowercase plural name, used in collection routes and list bodies.
    pub fn plural(self) -> &'static str {
        match self {
            Self::Brand => "brands",
            Self::Color => "colors",
            Self::Material => "materials",
            Self::Type => "types",
        }
    }

    /// Capitalised name used in response messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Brand => "Brand",
            Self::Color => "Color",
            Self::Material => "Material",
            Self::Type => "Type",
        }
    }

    /// The read group owning this resource's own fields.
    pub fn read_group(self) -> ReadGroup {
        ReadGroup::Resource(self)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

impl FromStr for ResourceKind {
    type Err = CoreError;

    /// Accepts either the singular or the plural route name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.singular() == s || kind.plural() == s)
            .ok_or_else(|| CoreError::UnknownResource(s.to_string()))
    }
}

/// Compile-time handle on a resource kind.
///
/// Handlers and extractors are generic over a `Resource` so that one
/// implementation serves all four kinds.
pub trait Resource: Send + Sync + 'static {
    const KIND: ResourceKind;
}

macro_rules! resource_marker {
    ($($name:ident),+ $(,)?) => {
        $(
            #[doc = concat!("Type-level marker for [`ResourceKind::", stringify!($name), "`].")]
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub enum $name {}

            impl Resource for $name {
                const KIND: ResourceKind = ResourceKind::$name;
            }
        )+
    };
}

resource_marker!(Brand, Color, Material, Type);
