//! Hearth DNS Infrastructure Layer
//!
//! The UDP protocol engine plus the concrete directory and its SQLite backing.
pub mod database;
pub mod directory;
pub mod dns;
pub mod repositories;
