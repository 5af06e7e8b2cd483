use serde::{Deserialize, Serialize};

/// API configuration, deserialized from the `[catalog]` section of
/// config.toml.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
}

/// Catalog API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogSettings {
    /// The URL path prefix all resource routes live under (default: "/api").
    #[serde(default = "default_route_prefix")]
    pub route_prefix: String,
}

fn default_route_prefix() -> String {
    "/api".to_string()
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            route_prefix: default_route_prefix(),
        }
    }
}

impl CatalogSettings {
    /// The prefix normalised to `/segment` form, or `""` for the root.
    pub fn normalized_prefix(&self) -> String {
        let trimmed = self.route_prefix.trim().trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        }
    }
}
