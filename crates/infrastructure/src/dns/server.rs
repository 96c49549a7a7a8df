use super::name_codec;
use super::packet::{self, HEADER_LEN};
use super::transport::DnsTransport;
use super::wire_response::{self, SynthesisError, DEFAULT_ANSWER_TTL};
use hearth_dns_application::use_cases::{Resolution, ResolveDomainUseCase};
use hearth_dns_domain::DomainError;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    /// Synthesized from a directory entry.
    Local,
    /// Relayed unchanged from the upstream resolver.
    Upstream,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub bytes: Vec<u8>,
    pub source: ReplySource,
}

/// Per-datagram entry point: validate, decode, resolve, then either
/// synthesize an answer or relay upstream. Every failure comes back as an
/// `Err` and means no reply is sent.
pub struct DnsServerHandler {
    resolver: ResolveDomainUseCase,
    transport: Arc<dyn DnsTransport>,
    answer_ttl: u32,
}

impl DnsServerHandler {
    pub fn new(resolver: ResolveDomainUseCase, transport: Arc<dyn DnsTransport>) -> Self {
        Self {
            resolver,
            transport,
            answer_ttl: DEFAULT_ANSWER_TTL,
        }
    }

    pub fn with_answer_ttl(mut self, ttl: u32) -> Self {
        self.answer_ttl = ttl;
        self
    }

    pub async fn handle_datagram(
        &self,
        datagram: &[u8],
        client: SocketAddr,
    ) -> Result<Reply, DomainError> {
        let query = packet::validate(datagram)
            .map_err(|e| DomainError::MalformedQuery(e.to_string()))?;

        let domain = name_codec::decode(&datagram[HEADER_LEN..query.question_end])
            .map_err(|e| DomainError::MalformedQuery(e.to_string()))?;

        match self.resolver.execute(&domain) {
            Resolution::Local(ip) => {
                let bytes = wire_response::synthesize(
                    datagram,
                    query.question_end,
                    &ip,
                    self.answer_ttl,
                )
                .map_err(|e| match e {
                    SynthesisError::InvalidAddress(value) => DomainError::InvalidDirectoryData {
                        domain: domain.clone(),
                        value,
                    },
                    other => DomainError::MalformedQuery(other.to_string()),
                })?;

                debug!(
                    client = %client,
                    domain = %domain,
                    ip = %ip,
                    id = query.id,
                    "Answered from directory"
                );

                Ok(Reply {
                    bytes,
                    source: ReplySource::Local,
                })
            }
            Resolution::Forward => {
                let response = self.transport.send(datagram).await?;

                debug!(
                    client = %client,
                    domain = %domain,
                    upstream = %response.server,
                    id = query.id,
                    "Relayed upstream reply"
                );

                Ok(Reply {
                    bytes: response.bytes,
                    source: ReplySource::Upstream,
                })
            }
            Resolution::Invalid(e) => Err(e),
        }
    }
}
