//! Hearth DNS Domain Layer
pub mod config;
pub mod directory_entry;
pub mod errors;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError, StaticRecord};
pub use directory_entry::DirectoryEntry;
pub use errors::DomainError;
