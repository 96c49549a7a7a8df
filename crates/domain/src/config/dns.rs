use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// A mapping seeded into the directory at startup from the config file.
/// Static records are not persisted and cannot be removed through the API
/// for longer than the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StaticRecord {
    pub domain: String,
    pub ip: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// The single UDP resolver that receives every query the directory
    /// cannot answer (e.g. "1.1.1.1:53")
    #[serde(default = "default_upstream")]
    pub upstream: String,

    /// Deadline for one upstream round trip; 0 leaves it to the transport
    #[serde(default = "default_upstream_timeout_ms")]
    pub upstream_timeout_ms: u64,

    /// TTL written into every locally synthesized answer
    #[serde(default = "default_answer_ttl")]
    pub answer_ttl: u32,

    /// Suffixes the directory is authoritative for. A miss under one of
    /// these is dropped instead of forwarded. Empty by default.
    #[serde(default)]
    pub local_suffixes: Vec<String>,

    /// Upper bound on in-flight query tasks; datagrams beyond it are dropped
    #[serde(default = "default_max_concurrent_queries")]
    pub max_concurrent_queries: usize,

    /// How often the listening loop wakes up to check for shutdown
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,

    #[serde(default)]
    pub records: Vec<StaticRecord>,
}

impl DnsConfig {
    pub fn upstream_addr(&self) -> Result<SocketAddr, String> {
        self.upstream
            .parse::<SocketAddr>()
            .map_err(|e| format!("Invalid upstream address '{}': {}", self.upstream, e))
    }

    pub fn upstream_timeout(&self) -> Option<Duration> {
        (self.upstream_timeout_ms > 0).then(|| Duration::from_millis(self.upstream_timeout_ms))
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms.max(1))
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            upstream: default_upstream(),
            upstream_timeout_ms: default_upstream_timeout_ms(),
            answer_ttl: default_answer_ttl(),
            local_suffixes: Vec::new(),
            max_concurrent_queries: default_max_concurrent_queries(),
            read_timeout_ms: default_read_timeout_ms(),
            records: Vec::new(),
        }
    }
}

fn default_upstream() -> String {
    "1.1.1.1:53".to_string()
}

fn default_upstream_timeout_ms() -> u64 {
    5_000
}

fn default_answer_ttl() -> u32 {
    60
}

fn default_max_concurrent_queries() -> usize {
    1_024
}

fn default_read_timeout_ms() -> u64 {
    1_000
}
