//! Relay transport to the single upstream resolver.
//!
//! Each exchange uses a fresh ephemeral socket connected to the upstream, so
//! the kernel discards datagrams from any other source. One write, one read,
//! no retry.

use super::{DnsTransport, TransportResponse};
use async_trait::async_trait;
use hearth_dns_domain::DomainError;
use std::future::Future;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Large enough for EDNS(0)-sized upstream replies, which are relayed as-is.
pub const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
    timeout: Option<Duration>,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self {
            server_addr,
            timeout: None,
        }
    }

    /// Bounds each I/O step of the exchange. `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn unreachable(&self, reason: String) -> DomainError {
        DomainError::UpstreamUnreachable {
            server: self.server_addr.to_string(),
            reason,
        }
    }

    async fn step<T>(
        &self,
        stage: &'static str,
        fut: impl Future<Output = io::Result<T>>,
    ) -> Result<T, DomainError> {
        let result = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, fut)
                .await
                .map_err(|_| self.unreachable(format!("timed out during {}", stage)))?,
            None => fut.await,
        };
        result.map_err(|e| self.unreachable(format!("{} failed: {}", stage, e)))
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(&self, message_bytes: &[u8]) -> Result<TransportResponse, DomainError> {
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = self.step("bind", UdpSocket::bind(bind_addr)).await?;
        self.step("connect", socket.connect(self.server_addr)).await?;

        let bytes_sent = self.step("send", socket.send(message_bytes)).await?;
        debug!(server = %self.server_addr, bytes_sent, "Query relayed upstream");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let bytes_received = self.step("recv", socket.recv(&mut recv_buf)).await?;
        recv_buf.truncate(bytes_received);

        debug!(server = %self.server_addr, bytes_received, "Upstream reply received");

        Ok(TransportResponse {
            bytes: recv_buf,
            server: self.server_addr,
        })
    }

    fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }
}
