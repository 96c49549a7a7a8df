use std::sync::Arc;

use hearth_dns_domain::DomainError;

use crate::ports::{DirectoryRepository, DirectoryStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgeOutcome {
    pub entries_removed: usize,
    pub rows_removed: u64,
}

pub struct PurgeExpiredRecordsUseCase {
    store: Arc<dyn DirectoryStore>,
    repo: Arc<dyn DirectoryRepository>,
}

impl PurgeExpiredRecordsUseCase {
    pub fn new(store: Arc<dyn DirectoryStore>, repo: Arc<dyn DirectoryRepository>) -> Self {
        Self { store, repo }
    }

    pub async fn execute(&self, now: i64) -> Result<PurgeOutcome, DomainError> {
        let entries_removed = self.store.purge_expired(now)?;
        let rows_removed = self.repo.delete_expired(now).await?;
        Ok(PurgeOutcome {
            entries_removed,
            rows_removed,
        })
    }
}
