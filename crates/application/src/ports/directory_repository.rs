use async_trait::async_trait;
use hearth_dns_domain::{DirectoryEntry, DomainError};

/// Durable storage behind the in-memory directory.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    async fn save(&self, entry: &DirectoryEntry) -> Result<(), DomainError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, domain: &str) -> Result<bool, DomainError>;

    async fn get_all(&self) -> Result<Vec<DirectoryEntry>, DomainError>;

    async fn delete_expired(&self, now: i64) -> Result<u64, DomainError>;
}
