//! Configuration module for Hearth DNS
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: Ports, binding and the web surface
//! - `dns`: Upstream, answer TTL and directory seeding
//! - `logging`: Logging settings
//! - `database`: Directory persistence
//! - `errors`: Configuration errors

pub mod database;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use database::DatabaseConfig;
pub use dns::{DnsConfig, StaticRecord};
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
