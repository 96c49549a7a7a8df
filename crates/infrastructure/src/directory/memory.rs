use hearth_dns_application::ports::{DirectoryReader, DirectoryStore};
use hearth_dns_domain::{DirectoryEntry, DomainError};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-local directory. Readers (every DNS dispatch) share the lock;
/// writers come only from the admin layer. A poisoned lock is reported as
/// `DirectoryUnavailable` rather than recovered, so lookups fail closed.
#[derive(Default)]
pub struct InMemoryDirectory {
    entries: RwLock<HashMap<Arc<str>, DirectoryEntry>>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup against an explicit clock.
    pub fn lookup_at(&self, domain: &str, now: i64) -> Result<Option<Arc<str>>, DomainError> {
        let entries = self.read()?;
        Ok(entries
            .get(domain)
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| Arc::clone(&entry.ip)))
    }

    pub fn len(&self) -> Result<usize, DomainError> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<Arc<str>, DirectoryEntry>>, DomainError> {
        self.entries
            .read()
            .map_err(|_| DomainError::DirectoryUnavailable("directory lock poisoned".into()))
    }

    fn write(
        &self,
    ) -> Result<RwLockWriteGuard<'_, HashMap<Arc<str>, DirectoryEntry>>, DomainError> {
        self.entries
            .write()
            .map_err(|_| DomainError::DirectoryUnavailable("directory lock poisoned".into()))
    }
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

impl DirectoryReader for InMemoryDirectory {
    fn lookup(&self, domain: &str) -> Result<Option<Arc<str>>, DomainError> {
        self.lookup_at(domain, now())
    }
}

impl DirectoryStore for InMemoryDirectory {
    fn insert(&self, entry: DirectoryEntry) -> Result<(), DomainError> {
        self.write()?.insert(Arc::clone(&entry.domain), entry);
        Ok(())
    }

    fn remove(&self, domain: &str) -> Result<Option<DirectoryEntry>, DomainError> {
        Ok(self.write()?.remove(domain))
    }

    fn list_all(&self) -> Result<Vec<DirectoryEntry>, DomainError> {
        let now = now();
        let mut entries: Vec<DirectoryEntry> = self
            .read()?
            .values()
            .filter(|entry| !entry.is_expired(now))
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.domain.cmp(&b.domain));
        Ok(entries)
    }

    fn replace_all(&self, entries: Vec<DirectoryEntry>) -> Result<(), DomainError> {
        let fresh: HashMap<Arc<str>, DirectoryEntry> = entries
            .into_iter()
            .map(|entry| (Arc::clone(&entry.domain), entry))
            .collect();
        *self.write()? = fresh;
        Ok(())
    }

    fn purge_expired(&self, now: i64) -> Result<usize, DomainError> {
        let mut entries = self.write()?;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        Ok(before - entries.len())
    }
}
