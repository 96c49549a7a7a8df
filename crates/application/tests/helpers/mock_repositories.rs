#![allow(dead_code)]

use async_trait::async_trait;
use hearth_dns_application::ports::{DirectoryReader, DirectoryRepository, DirectoryStore};
use hearth_dns_domain::{DirectoryEntry, DomainError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

#[derive(Clone, Default)]
pub struct MockDirectory {
    entries: Arc<RwLock<HashMap<String, DirectoryEntry>>>,
    unavailable: Arc<AtomicBool>,
}

impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, domain: &str, ip: &str) -> Self {
        self.entries
            .write()
            .unwrap()
            .insert(domain.to_string(), DirectoryEntry::new(domain, ip));
        self
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn get(&self, domain: &str) -> Option<DirectoryEntry> {
        self.entries.read().unwrap().get(domain).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::DirectoryUnavailable(
                "mock directory offline".to_string(),
            ));
        }
        Ok(())
    }
}

impl DirectoryReader for MockDirectory {
    fn lookup(&self, domain: &str) -> Result<Option<Arc<str>>, DomainError> {
        self.check_available()?;
        Ok(self
            .entries
            .read()
            .unwrap()
            .get(domain)
            .map(|e| e.ip.clone()))
    }
}

impl DirectoryStore for MockDirectory {
    fn insert(&self, entry: DirectoryEntry) -> Result<(), DomainError> {
        self.check_available()?;
        self.entries
            .write()
            .unwrap()
            .insert(entry.domain.to_string(), entry);
        Ok(())
    }

    fn remove(&self, domain: &str) -> Result<Option<DirectoryEntry>, DomainError> {
        self.check_available()?;
        Ok(self.entries.write().unwrap().remove(domain))
    }

    fn list_all(&self) -> Result<Vec<DirectoryEntry>, DomainError> {
        self.check_available()?;
        let mut all: Vec<_> = self.entries.read().unwrap().values().cloned().collect();
        all.sort_by(|a, b| a.domain.cmp(&b.domain));
        Ok(all)
    }

    fn replace_all(&self, entries: Vec<DirectoryEntry>) -> Result<(), DomainError> {
        self.check_available()?;
        let mut map = self.entries.write().unwrap();
        map.clear();
        for entry in entries {
            map.insert(entry.domain.to_string(), entry);
        }
        Ok(())
    }

    fn purge_expired(&self, now: i64) -> Result<usize, DomainError> {
        self.check_available()?;
        let mut map = self.entries.write().unwrap();
        let before = map.len();
        map.retain(|_, e| !e.is_expired(now));
        Ok(before - map.len())
    }
}

#[derive(Clone, Default)]
pub struct MockDirectoryRepository {
    rows: Arc<tokio::sync::RwLock<HashMap<String, DirectoryEntry>>>,
    should_fail: Arc<AtomicBool>,
}

impl MockDirectoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, entry: DirectoryEntry) {
        self.rows
            .write()
            .await
            .insert(entry.domain.to_string(), entry);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub async fn get(&self, domain: &str) -> Option<DirectoryEntry> {
        self.rows.read().await.get(domain).cloned()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("mock database failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DirectoryRepository for MockDirectoryRepository {
    async fn save(&self, entry: &DirectoryEntry) -> Result<(), DomainError> {
        self.check()?;
        self.rows
            .write()
            .await
            .insert(entry.domain.to_string(), entry.clone());
        Ok(())
    }

    async fn delete(&self, domain: &str) -> Result<bool, DomainError> {
        self.check()?;
        Ok(self.rows.write().await.remove(domain).is_some())
    }

    async fn get_all(&self) -> Result<Vec<DirectoryEntry>, DomainError> {
        self.check()?;
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn delete_expired(&self, now: i64) -> Result<u64, DomainError> {
        self.check()?;
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|_, e| !e.is_expired(now));
        Ok((before - rows.len()) as u64)
    }
}
