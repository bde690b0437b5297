#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use toml_config::TodoConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("server.host", &self.host)?;
        validation::validate_port("server.port", self.port)
    }
}

/// Command line values that take precedence over the TOML file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// `Some(false)` turns JSON logs off even when the file enables them.
    pub json_logs: Option<bool>,
}

/// Fully resolved runtime settings: flags, then TOML file, then defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server: ServerConfig,
    pub log_level: String,
    pub json_logs: bool,
}

impl Settings {
    pub fn resolve(file: Option<&TodoConfig>, overrides: &Overrides) -> Self {
        let mut server = file.map(TodoConfig::server_config).unwrap_or_default();
        if let Some(host) = &overrides.host {
            server.host = host.clone();
        }
        if let Some(port) = overrides.port {
            server.port = port;
        }

        let log_level = file
            .map(|f| f.log_level().to_string())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let json_logs = overrides
            .json_logs
            .unwrap_or_else(|| file.map(TodoConfig::json_logs).unwrap_or(false));

        Self {
            server,
            log_level,
            json_logs,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        self.server.validate()?;
        validation::validate_log_level("logging.level", &self.log_level)
    }
}
