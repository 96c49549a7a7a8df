use hearth_dns_domain::{DirectoryEntry, DomainError};
use std::sync::Arc;

/// Read-only view of the directory. This is the only capability the DNS
/// engine is given.
pub trait DirectoryReader: Send + Sync {
    /// Returns the IPv4 string mapped to `domain`, `None` when there is no
    /// live entry, or `DirectoryUnavailable` when the store cannot be read.
    fn lookup(&self, domain: &str) -> Result<Option<Arc<str>>, DomainError>;
}

/// Full directory capability, held only by the administrative layer.
pub trait DirectoryStore: DirectoryReader {
    /// Inserts or replaces the entry for `entry.domain`.
    fn insert(&self, entry: DirectoryEntry) -> Result<(), DomainError>;

    /// Returns the removed entry, if there was one.
    fn remove(&self, domain: &str) -> Result<Option<DirectoryEntry>, DomainError>;

    /// All live entries, sorted by domain.
    fn list_all(&self) -> Result<Vec<DirectoryEntry>, DomainError>;

    fn replace_all(&self, entries: Vec<DirectoryEntry>) -> Result<(), DomainError>;

    /// Drops entries whose expiry is at or before `now`; returns how many.
    fn purge_expired(&self, now: i64) -> Result<usize, DomainError>;
}
