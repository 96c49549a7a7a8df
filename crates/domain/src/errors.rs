use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("Malformed DNS query: {0}")]
    MalformedQuery(String),

    #[error("Directory unavailable: {0}")]
    DirectoryUnavailable(String),

    #[error("Directory entry for {domain} holds an invalid IPv4 address: {value}")]
    InvalidDirectoryData { domain: String, value: String },

    #[error("Domain {0} must resolve locally but has no directory entry")]
    LocalMiss(String),

    #[error("Upstream {server} unreachable: {reason}")]
    UpstreamUnreachable { server: String, reason: String },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}
