use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A domain → IPv4 mapping served authoritatively by the DNS engine.
///
/// `domain` is always stored normalized (lower-case, no trailing dot).
/// `expires_at` is a unix timestamp in seconds; `None` never expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub domain: Arc<str>,
    pub ip: Arc<str>,
    pub ttl: Option<u32>,
    pub expires_at: Option<i64>,
}

impl DirectoryEntry {
    pub fn new(domain: impl Into<Arc<str>>, ip: impl Into<Arc<str>>) -> Self {
        Self {
            domain: domain.into(),
            ip: ip.into(),
            ttl: None,
            expires_at: None,
        }
    }

    /// Builds an entry that expires `ttl` seconds after `now`.
    /// Zero or negative TTLs mean the entry never expires.
    pub fn with_ttl(
        domain: impl Into<Arc<str>>,
        ip: impl Into<Arc<str>>,
        ttl: Option<i64>,
        now: i64,
    ) -> Self {
        let mut entry = Self::new(domain, ip);
        if let Some(secs) = ttl.filter(|t| *t > 0) {
            let secs = secs.min(u32::MAX as i64);
            entry.ttl = Some(secs as u32);
            entry.expires_at = Some(now.saturating_add(secs));
        }
        entry
    }

    pub fn is_expired(&self, now: i64) -> bool {
        matches!(self.expires_at, Some(at) if at <= now)
    }
}
