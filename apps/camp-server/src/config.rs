//! Server configuration
//!
//! Layers, lowest precedence first: built-in defaults, optional YAML file,
//! `CAMP_`-prefixed environment variables (`__` separates nested keys), and
//! finally `DB_URI` for the database URL.

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// SeaORM connection URL (sqlite:// or postgres://)
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Connection pool size
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:5555".to_string()
}

fn default_database_url() -> String {
    "sqlite://camp.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed("CAMP_").split("__"))
            .merge(Env::raw().only(&["DB_URI"]).map(|_| "database.url".into()))
    }

    /// Load configuration from all layers
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        Ok(Self::figment(config_file).extract()?)
    }
}
