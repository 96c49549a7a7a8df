#![allow(dead_code)]

use async_trait::async_trait;
use hearth_dns_application::ports::{DirectoryReader, DirectoryRepository, DirectoryStore};
use hearth_dns_domain::{DirectoryEntry, DomainError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Directory that records how often it is purged.
#[derive(Default)]
pub struct CountingDirectory {
    entries: Mutex<Vec<DirectoryEntry>>,
    purge_calls: AtomicUsize,
}

impl CountingDirectory {
    pub fn new(entries: Vec<DirectoryEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            purge_calls: AtomicUsize::new(0),
        }
    }

    pub fn purge_calls(&self) -> usize {
        self.purge_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

impl DirectoryReader for CountingDirectory {
    fn lookup(&self, domain: &str) -> Result<Option<Arc<str>>, DomainError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.domain.as_ref() == domain)
            .map(|e| e.ip.clone()))
    }
}

impl DirectoryStore for CountingDirectory {
    fn insert(&self, entry: DirectoryEntry) -> Result<(), DomainError> {
        self.entries.lock().unwrap().push(entry);
        Ok(())
    }

    fn remove(&self, domain: &str) -> Result<Option<DirectoryEntry>, DomainError> {
        let mut entries = self.entries.lock().unwrap();
        let pos = entries.iter().position(|e| e.domain.as_ref() == domain);
        Ok(pos.map(|i| entries.remove(i)))
    }

    fn list_all(&self) -> Result<Vec<DirectoryEntry>, DomainError> {
        Ok(self.entries.lock().unwrap().clone())
    }

    fn replace_all(&self, entries: Vec<DirectoryEntry>) -> Result<(), DomainError> {
        *self.entries.lock().unwrap() = entries;
        Ok(())
    }

    fn purge_expired(&self, now: i64) -> Result<usize, DomainError> {
        self.purge_calls.fetch_add(1, Ordering::SeqCst);
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| !e.is_expired(now));
        Ok(before - entries.len())
    }
}

/// Repository that records purge calls and can be told to fail.
#[derive(Default)]
pub struct CountingRepository {
    delete_expired_calls: AtomicUsize,
    should_fail: AtomicBool,
}

impl CountingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn delete_expired_calls(&self) -> usize {
        self.delete_expired_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DirectoryRepository for CountingRepository {
    async fn save(&self, _entry: &DirectoryEntry) -> Result<(), DomainError> {
        Ok(())
    }

    async fn delete(&self, _domain: &str) -> Result<bool, DomainError> {
        Ok(false)
    }

    async fn get_all(&self) -> Result<Vec<DirectoryEntry>, DomainError> {
        Ok(Vec::new())
    }

    async fn delete_expired(&self, _now: i64) -> Result<u64, DomainError> {
        self.delete_expired_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("mock failure".to_string()));
        }
        Ok(0)
    }
}
