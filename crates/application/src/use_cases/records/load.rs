use std::collections::HashMap;
use std::sync::Arc;

use hearth_dns_domain::validators::normalize_domain;
use hearth_dns_domain::{DirectoryEntry, DomainError, StaticRecord};
use tracing::info;

use crate::ports::{DirectoryRepository, DirectoryStore};

/// Fills the in-memory directory at startup from static config records and
/// persisted rows. A persisted row wins over a static record for the same name.
pub struct LoadDirectoryUseCase {
    store: Arc<dyn DirectoryStore>,
    repo: Arc<dyn DirectoryRepository>,
}

impl LoadDirectoryUseCase {
    pub fn new(store: Arc<dyn DirectoryStore>, repo: Arc<dyn DirectoryRepository>) -> Self {
        Self { store, repo }
    }

    pub async fn execute(&self, static_records: &[StaticRecord]) -> Result<usize, DomainError> {
        let now = chrono::Utc::now().timestamp();
        let mut entries: HashMap<Arc<str>, DirectoryEntry> = HashMap::new();

        for record in static_records {
            let entry = DirectoryEntry::new(normalize_domain(&record.domain), record.ip.trim());
            entries.insert(entry.domain.clone(), entry);
        }

        let persisted = self.repo.get_all().await?;
        let persisted_count = persisted.len();
        for entry in persisted.into_iter().filter(|e| !e.is_expired(now)) {
            entries.insert(entry.domain.clone(), entry);
        }

        let total = entries.len();
        self.store.replace_all(entries.into_values().collect())?;

        info!(
            static_records = static_records.len(),
            persisted_records = persisted_count,
            total,
            "Directory loaded"
        );

        Ok(total)
    }
}
