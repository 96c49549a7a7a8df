use super::Repositories;
use hearth_dns_application::use_cases::ResolveDomainUseCase;
use hearth_dns_domain::config::DnsConfig;
use hearth_dns_infrastructure::dns::{DnsServerHandler, UdpListener, UdpTransport};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::info;

/// The engine only ever sees the directory through its read-only port.
pub fn build_dns_handler(
    config: &DnsConfig,
    repos: &Repositories,
) -> anyhow::Result<DnsServerHandler> {
    let upstream = config.upstream_addr().map_err(anyhow::Error::msg)?;
    let transport = UdpTransport::new(upstream).with_timeout(config.upstream_timeout());

    let resolver = ResolveDomainUseCase::new(repos.directory.clone())
        .with_local_suffixes(&config.local_suffixes);

    info!(
        upstream = %upstream,
        timeout_ms = config.upstream_timeout_ms,
        answer_ttl = config.answer_ttl,
        local_suffixes = ?config.local_suffixes,
        "DNS engine configured"
    );

    Ok(DnsServerHandler::new(resolver, Arc::new(transport)).with_answer_ttl(config.answer_ttl))
}

pub fn build_udp_listener(
    socket: UdpSocket,
    handler: DnsServerHandler,
    config: &DnsConfig,
) -> UdpListener {
    UdpListener::new(Arc::new(socket), Arc::new(handler))
        .with_max_concurrent(config.max_concurrent_queries)
        .with_read_timeout(config.read_timeout())
}
