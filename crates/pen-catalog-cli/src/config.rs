use std::path::{Path, PathBuf};

use pen_catalog_api::CatalogConfig;
use pen_catalog_surrealdb::Credentials;
use serde::{Deserialize, Serialize};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// CLI configuration loaded from config.toml.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(flatten)]
    pub api: CatalogConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Store connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_url")]
    pub url: String,
    #[serde(default = "default_db_ns")]
    pub namespace: String,
    #[serde(default = "default_db_name")]
    pub database: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_db_url(),
            namespace: default_db_ns(),
            database: default_db_name(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_db_url() -> String {
    "mem://".to_string()
}

fn default_db_ns() -> String {
    "pen_catalog".to_string()
}

fn default_db_name() -> String {
    "dev".to_string()
}

/// Where the catalog keeps its records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreTarget {
    /// The in-process `MemoryStore`.
    Memory,
    /// A SurrealDB endpoint: `mem://` or a remote `ws://` / `wss://` server.
    Surreal(String),
}

impl StoreTarget {
    pub fn from_url(url: &str) -> Self {
        if url == "memory" {
            Self::Memory
        } else {
            Self::Surreal(url.to_string())
        }
    }

    /// Whether records are lost when the process exits.
    pub fn is_ephemeral(&self) -> bool {
        match self {
            Self::Memory => true,
            Self::Surreal(url) => url.starts_with("mem://"),
        }
    }
}

/// Resolved database connection parameters after merging config + CLI flags.
#[derive(Debug, Clone)]
pub struct DbParams {
    pub target: StoreTarget,
    pub namespace: String,
    pub database: String,
    pub credentials: Option<Credentials>,
}

impl DbParams {
    /// Human-readable location, for status lines.
    pub fn describe(&self) -> String {
        match &self.target {
            StoreTarget::Memory => "in-process memory store".to_string(),
            StoreTarget::Surreal(url) => format!("{url} ({}/{})", self.namespace, self.database),
        }
    }
}

/// Discovery order for config file:
/// 1. `--config <path>` (explicit, or `PEN_CATALOG_CONFIG`)
/// 2. `./config.toml` (project-local)
/// 3. `$XDG_CONFIG_HOME/pen-catalog/config.toml`
/// 4. `~/.config/pen-catalog/config.toml`
pub fn load_config(explicit_path: Option<&Path>) -> Result<CliConfig, CliError> {
    if let Some(path) = explicit_path {
        return load_config_from_path(path);
    }

    let local = PathBuf::from("config.toml");
    if local.exists() {
        return load_config_from_path(&local);
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("pen-catalog/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config/pen-catalog/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    Ok(CliConfig::default())
}

pub fn load_config_from_path(path: &Path) -> Result<CliConfig, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| CliError::Config {
        message: format!("failed to parse {}: {}", path.display(), e),
    })
}

/// Resolve database connection parameters from config + CLI overrides.
///
/// CLI flags take precedence over config file values. Credentials are read
/// from `PEN_CATALOG_DB_USER` / `PEN_CATALOG_DB_PASS` and only used when
/// both are set.
pub fn resolve_db_params(config: &CliConfig, global: &GlobalOpts) -> DbParams {
    let url = global
        .db_url
        .clone()
        .unwrap_or_else(|| config.database.url.clone());
    let credentials = match (
        std::env::var("PEN_CATALOG_DB_USER"),
        std::env::var("PEN_CATALOG_DB_PASS"),
    ) {
        (Ok(username), Ok(password)) => Some(Credentials { username, password }),
        _ => None,
    };

    DbParams {
        target: StoreTarget::from_url(&url),
        namespace: global
            .db_ns
            .clone()
            .unwrap_or_else(|| config.database.namespace.clone()),
        database: global
            .db_name
            .clone()
            .unwrap_or_else(|| config.database.database.clone()),
        credentials,
    }
}
