pub mod udp;

use async_trait::async_trait;
use hearth_dns_domain::DomainError;
use std::net::SocketAddr;

pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,
    pub server: SocketAddr,
}

/// One request/response exchange with the upstream resolver.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Sends `message_bytes` unmodified and returns the first reply datagram.
    async fn send(&self, message_bytes: &[u8]) -> Result<TransportResponse, DomainError>;

    fn server_addr(&self) -> SocketAddr;
}
