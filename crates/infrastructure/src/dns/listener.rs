use super::packet::MAX_PACKET_SIZE;
use super::server::DnsServerHandler;
use hearth_dns_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info, warn};

pub const DEFAULT_MAX_CONCURRENT_QUERIES: usize = 1024;
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Larger than any accepted query so an oversized datagram is seen whole
/// instead of being cut to `MAX_PACKET_SIZE` by the read.
const RECV_BUFFER_SIZE: usize = 4096;

/// Owns the listening socket. Each datagram is dispatched on its own task;
/// the loop goes straight back to reading.
pub struct UdpListener {
    socket: Arc<UdpSocket>,
    handler: Arc<DnsServerHandler>,
    max_concurrent: usize,
    read_timeout: Duration,
}

impl UdpListener {
    pub fn new(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>) -> Self {
        Self {
            socket,
            handler,
            max_concurrent: DEFAULT_MAX_CONCURRENT_QUERIES,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    /// Datagrams arriving while this many dispatches are in flight are dropped.
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    /// Runs until `shutdown` is cancelled, then waits for every in-flight
    /// dispatch to finish.
    pub async fn run(self, shutdown: CancellationToken) {
        let tracker = TaskTracker::new();
        let permits = Arc::new(Semaphore::new(self.max_concurrent));
        let mut buf = vec![0u8; RECV_BUFFER_SIZE];

        match self.socket.local_addr() {
            Ok(addr) => info!(addr = %addr, "DNS listener started"),
            Err(e) => warn!(error = %e, "DNS listener started on unknown address"),
        }

        loop {
            let received = tokio::select! {
                _ = shutdown.cancelled() => break,
                r = tokio::time::timeout(self.read_timeout, self.socket.recv_from(&mut buf)) => r,
            };

            let (len, client) = match received {
                Err(_) => continue,
                Ok(Err(e)) => {
                    warn!(error = %e, "UDP receive failed");
                    continue;
                }
                Ok(Ok(received)) => received,
            };

            if len > MAX_PACKET_SIZE {
                warn!(client = %client, len, "Dropped oversized datagram");
                continue;
            }

            let Ok(permit) = permits.clone().try_acquire_owned() else {
                warn!(client = %client, "Dispatch capacity exhausted, dropping query");
                continue;
            };

            let datagram = buf[..len].to_vec();
            let socket = Arc::clone(&self.socket);
            let handler = Arc::clone(&self.handler);

            tracker.spawn(async move {
                let _permit = permit;
                match handler.handle_datagram(&datagram, client).await {
                    Ok(reply) => {
                        if let Err(e) = socket.send_to(&reply.bytes, client).await {
                            warn!(client = %client, error = %e, "Failed to send reply");
                        }
                    }
                    Err(e) => log_drop(client, &e),
                }
            });
        }

        tracker.close();
        info!(in_flight = tracker.len(), "DNS listener stopping, draining in-flight queries");
        tracker.wait().await;
        info!("DNS listener stopped");
    }
}

fn log_drop(client: SocketAddr, err: &DomainError) {
    match err {
        DomainError::MalformedQuery(reason) => {
            warn!(client = %client, reason = %reason, "Dropped malformed query")
        }
        DomainError::LocalMiss(domain) => {
            debug!(client = %client, domain = %domain, "Dropped query for unknown local name")
        }
        DomainError::UpstreamUnreachable { server, reason } => {
            warn!(client = %client, upstream = %server, reason = %reason, "Upstream relay failed")
        }
        DomainError::InvalidDirectoryData { domain, value } => error!(
            client = %client,
            domain = %domain,
            value = %value,
            "Directory entry is not a valid IPv4 address"
        ),
        other => error!(client = %client, error = %other, "Dropped query"),
    }
}
