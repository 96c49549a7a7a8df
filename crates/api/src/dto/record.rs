use hearth_dns_domain::DirectoryEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordDto {
    pub domain: String,
    pub ip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl From<DirectoryEntry> for RecordDto {
    fn from(entry: DirectoryEntry) -> Self {
        Self {
            domain: entry.domain.to_string(),
            ip: entry.ip.to_string(),
            ttl: entry.ttl,
            expires_at: entry.expires_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    pub domain: String,
    pub ip: String,
    /// Seconds until the record expires; absent or non-positive means never.
    #[serde(default)]
    pub ttl: Option<i64>,
}
