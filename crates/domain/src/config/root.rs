use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::validators::{validate_domain, validate_ipv4};

const LOCAL_CONFIG_PATH: &str = "hearth-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/hearth-dns/config.toml";

/// Main configuration structure for Hearth DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dns: DnsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. hearth-dns.toml in current directory
    /// 3. /etc/hearth-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(upstream) = overrides.upstream {
            self.dns.upstream = upstream;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        self.dns.upstream_addr().map_err(ConfigError::Validation)?;

        if self.dns.answer_ttl == 0 {
            return Err(ConfigError::Validation(
                "answer_ttl must be greater than 0".to_string(),
            ));
        }

        if self.dns.max_concurrent_queries == 0 {
            return Err(ConfigError::Validation(
                "max_concurrent_queries must be greater than 0".to_string(),
            ));
        }

        for record in &self.dns.records {
            validate_domain(&record.domain).map_err(|e| {
                ConfigError::Validation(format!("Static record '{}': {}", record.domain, e))
            })?;
            validate_ipv4(&record.ip).map_err(|e| {
                ConfigError::Validation(format!("Static record '{}': {}", record.domain, e))
            })?;
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
    pub upstream: Option<String>,
}
