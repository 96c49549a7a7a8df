use crate::ports::DirectoryReader;
use hearth_dns_domain::validators::normalize_domain;
use hearth_dns_domain::DomainError;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Outcome of the local/forward decision for one decoded query name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The directory holds a value; answer here with it.
    Local(Arc<str>),
    /// Not ours; relay the query to the upstream resolver.
    Forward,
    /// Drop the query without replying.
    Invalid(DomainError),
}

pub struct ResolveDomainUseCase {
    directory: Arc<dyn DirectoryReader>,
    local_suffixes: Vec<Arc<str>>,
}

impl ResolveDomainUseCase {
    pub fn new(directory: Arc<dyn DirectoryReader>) -> Self {
        Self {
            directory,
            local_suffixes: Vec::new(),
        }
    }

    /// Names under these suffixes are never forwarded: a directory miss for
    /// them is reported as `Invalid` instead.
    pub fn with_local_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.local_suffixes = suffixes
            .into_iter()
            .map(|s| normalize_domain(s.as_ref().trim_start_matches('.')))
            .filter(|s| !s.is_empty())
            .map(Arc::from)
            .collect();
        self
    }

    pub fn execute(&self, domain: &str) -> Resolution {
        match self.directory.lookup(domain) {
            Ok(Some(ip)) => {
                debug!(domain = %domain, ip = %ip, "Directory hit");
                Resolution::Local(ip)
            }
            Ok(None) if self.is_local_name(domain) => {
                warn!(domain = %domain, "No directory entry for a local name, dropping");
                Resolution::Invalid(DomainError::LocalMiss(domain.to_string()))
            }
            Ok(None) => Resolution::Forward,
            Err(e) => {
                error!(domain = %domain, error = %e, "Directory lookup failed");
                Resolution::Invalid(e)
            }
        }
    }

    fn is_local_name(&self, domain: &str) -> bool {
        self.local_suffixes.iter().any(|suffix| {
            domain == suffix.as_ref()
                || domain
                    .strip_suffix(suffix.as_ref())
                    .is_some_and(|head| head.ends_with('.'))
        })
    }
}
