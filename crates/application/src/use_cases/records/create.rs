use std::sync::Arc;

use hearth_dns_domain::validators::{normalize_domain, validate_domain, validate_ipv4};
use hearth_dns_domain::{DirectoryEntry, DomainError};
use tracing::info;

use crate::ports::{DirectoryRepository, DirectoryStore};

pub struct CreateRecordUseCase {
    store: Arc<dyn DirectoryStore>,
    repo: Arc<dyn DirectoryRepository>,
}

impl CreateRecordUseCase {
    pub fn new(store: Arc<dyn DirectoryStore>, repo: Arc<dyn DirectoryRepository>) -> Self {
        Self { store, repo }
    }

    /// Creates or replaces the mapping for `domain`. A positive `ttl` makes
    /// the entry expire that many seconds from now.
    pub async fn execute(
        &self,
        domain: &str,
        ip: &str,
        ttl: Option<i64>,
    ) -> Result<DirectoryEntry, DomainError> {
        let domain = normalize_domain(domain);
        validate_domain(&domain).map_err(DomainError::InvalidDomainName)?;
        let ip = validate_ipv4(ip).map_err(DomainError::InvalidIpAddress)?;

        let now = chrono::Utc::now().timestamp();
        let entry = DirectoryEntry::with_ttl(domain, ip.to_string(), ttl, now);

        self.repo.save(&entry).await?;
        self.store.insert(entry.clone())?;

        info!(
            domain = %entry.domain,
            ip = %entry.ip,
            ttl = ?entry.ttl,
            "Created directory record"
        );

        Ok(entry)
    }
}
