use std::sync::Arc;

use hearth_dns_domain::validators::normalize_domain;
use hearth_dns_domain::DomainError;
use tracing::info;

use crate::ports::{DirectoryRepository, DirectoryStore};

pub struct DeleteRecordUseCase {
    store: Arc<dyn DirectoryStore>,
    repo: Arc<dyn DirectoryRepository>,
}

impl DeleteRecordUseCase {
    pub fn new(store: Arc<dyn DirectoryStore>, repo: Arc<dyn DirectoryRepository>) -> Self {
        Self { store, repo }
    }

    pub async fn execute(&self, domain: &str) -> Result<(), DomainError> {
        let domain = normalize_domain(domain);
        if domain.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "Domain name is required".to_string(),
            ));
        }

        let row_deleted = self.repo.delete(&domain).await?;
        let removed = self.store.remove(&domain)?;

        if !row_deleted && removed.is_none() {
            return Err(DomainError::NotFound(format!(
                "DNS record for {} not found",
                domain
            )));
        }

        info!(domain = %domain, "Deleted directory record");
        Ok(())
    }
}
