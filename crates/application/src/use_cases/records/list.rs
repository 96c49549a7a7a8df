use std::sync::Arc;

use hearth_dns_domain::{DirectoryEntry, DomainError};

use crate::ports::DirectoryStore;

pub struct ListRecordsUseCase {
    store: Arc<dyn DirectoryStore>,
}

impl ListRecordsUseCase {
    pub fn new(store: Arc<dyn DirectoryStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> Result<Vec<DirectoryEntry>, DomainError> {
        self.store.list_all()
    }
}
