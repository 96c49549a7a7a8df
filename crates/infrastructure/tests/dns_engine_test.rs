use hearth_dns_application::ports::{DirectoryReader, DirectoryStore};
use hearth_dns_application::use_cases::ResolveDomainUseCase;
use hearth_dns_domain::{DirectoryEntry, DomainError};
use hearth_dns_infrastructure::directory::InMemoryDirectory;
use hearth_dns_infrastructure::dns::{DnsServerHandler, ReplySource, UdpTransport};
use hickory_proto::rr::{RData, RecordType};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

mod helpers;
use helpers::{build_query, parse_message, FailingDirectory, MockDnsServer};

fn client() -> SocketAddr {
    "192.168.1.50:40000".parse().unwrap()
}

fn directory(entries: &[(&str, &str)]) -> Arc<InMemoryDirectory> {
    let dir = Arc::new(InMemoryDirectory::new());
    for (domain, ip) in entries {
        dir.insert(DirectoryEntry::new(*domain, *ip)).unwrap();
    }
    dir
}

fn handler_with(reader: Arc<dyn DirectoryReader>, upstream: SocketAddr) -> DnsServerHandler {
    let transport = UdpTransport::new(upstream).with_timeout(Some(Duration::from_millis(500)));
    DnsServerHandler::new(ResolveDomainUseCase::new(reader), Arc::new(transport))
}

fn unused_upstream() -> SocketAddr {
    "127.0.0.1:9".parse().unwrap()
}

// ── local answers ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_registered_domain_is_answered_locally() {
    let handler = handler_with(directory(&[("home.local", "10.0.0.5")]), unused_upstream());
    let query = build_query("home.local.", 0x4242, RecordType::A);

    let reply = handler.handle_datagram(&query, client()).await.unwrap();

    assert_eq!(reply.source, ReplySource::Local);
    assert_eq!(&reply.bytes[0..2], &[0x42, 0x42]);
    assert_eq!(u16::from_be_bytes([reply.bytes[6], reply.bytes[7]]), 1);
    assert_eq!(&reply.bytes[reply.bytes.len() - 4..], &[0x0A, 0x00, 0x00, 0x05]);

    let message = parse_message(&reply.bytes);
    assert_eq!(message.answers().len(), 1);
    let answer = &message.answers()[0];
    assert_eq!(answer.ttl(), 60);
    match answer.data() {
        RData::A(a) => assert_eq!(a.0, Ipv4Addr::new(10, 0, 0, 5)),
        other => panic!("expected A record, got {:?}", other),
    }
}

#[tokio::test]
async fn test_question_section_is_echoed_verbatim() {
    let handler = handler_with(directory(&[("home.local", "10.0.0.5")]), unused_upstream());
    let query = build_query("HoMe.LoCaL.", 7, RecordType::A);

    let reply = handler.handle_datagram(&query, client()).await.unwrap();

    assert_eq!(&reply.bytes[12..query.len()], &query[12..]);
    assert_eq!(&reply.bytes[query.len()..query.len() + 2], &[0xC0, 0x0C]);
}

#[tokio::test]
async fn test_non_a_query_is_answered_as_a() {
    let handler = handler_with(directory(&[("home.local", "10.0.0.5")]), unused_upstream());
    let query = build_query("home.local.", 9, RecordType::AAAA);

    let reply = handler.handle_datagram(&query, client()).await.unwrap();

    let answer_type_at = query.len() + 2;
    assert_eq!(&reply.bytes[answer_type_at..answer_type_at + 2], &[0x00, 0x01]);
}

#[tokio::test]
async fn test_repeated_queries_yield_identical_responses() {
    let handler = handler_with(directory(&[("nas.local", "192.168.1.20")]), unused_upstream());
    let query = build_query("nas.local.", 0x0101, RecordType::A);

    let first = handler.handle_datagram(&query, client()).await.unwrap();
    let second = handler.handle_datagram(&query, client()).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_answer_rdata_matches_directory_value() {
    let cases = [
        ("a.local", "1.2.3.4"),
        ("printer.office.local", "172.16.0.254"),
        ("x.y.z.lan", "255.255.255.255"),
        ("zero.local", "0.0.0.0"),
    ];
    let handler = handler_with(directory(&cases), unused_upstream());

    for (i, (domain, ip)) in cases.iter().enumerate() {
        let id = 1000 + i as u16;
        let query = build_query(&format!("{domain}."), id, RecordType::A);
        let reply = handler.handle_datagram(&query, client()).await.unwrap();

        let expected: Ipv4Addr = ip.parse().unwrap();
        assert_eq!(u16::from_be_bytes([reply.bytes[0], reply.bytes[1]]), id);
        assert_eq!(&reply.bytes[reply.bytes.len() - 4..], &expected.octets());
    }
}

#[tokio::test]
async fn test_custom_answer_ttl() {
    let handler = handler_with(directory(&[("home.local", "10.0.0.5")]), unused_upstream())
        .with_answer_ttl(300);
    let query = build_query("home.local.", 1, RecordType::A);

    let reply = handler.handle_datagram(&query, client()).await.unwrap();

    assert_eq!(parse_message(&reply.bytes).answers()[0].ttl(), 300);
}

// ── forwarding ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unregistered_domain_is_relayed_verbatim() {
    let upstream = MockDnsServer::start().await.unwrap();
    let handler = handler_with(directory(&[("home.local", "10.0.0.5")]), upstream.addr());
    let query = build_query("example.com.", 0xBEEF, RecordType::A);

    let reply = handler.handle_datagram(&query, client()).await.unwrap();

    assert_eq!(reply.source, ReplySource::Upstream);
    assert_eq!(upstream.received(), vec![query.clone()]);
    assert_eq!(reply.bytes, MockDnsServer::build_mock_response(&query));
}

#[tokio::test]
async fn test_non_utf8_name_is_relayed_verbatim() {
    let upstream = MockDnsServer::start().await.unwrap();
    let handler = handler_with(directory(&[("home.local", "10.0.0.5")]), upstream.addr());
    let mut query = vec![0x12, 0x34, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    query.extend_from_slice(b"\x04caf\xe9\x03com\x00\x00\x01\x00\x01");

    let reply = handler.handle_datagram(&query, client()).await.unwrap();

    assert_eq!(reply.source, ReplySource::Upstream);
    assert_eq!(upstream.received(), vec![query.clone()]);
    assert_eq!(reply.bytes, MockDnsServer::build_mock_response(&query));
}

#[tokio::test]
async fn test_silent_upstream_drops_query() {
    let upstream = MockDnsServer::start_silent().await.unwrap();
    let transport = UdpTransport::new(upstream.addr()).with_timeout(Some(Duration::from_millis(100)));
    let handler = DnsServerHandler::new(
        ResolveDomainUseCase::new(directory(&[])),
        Arc::new(transport),
    );
    let query = build_query("example.com.", 3, RecordType::A);

    let result = handler.handle_datagram(&query, client()).await;

    assert!(matches!(
        result,
        Err(DomainError::UpstreamUnreachable { .. })
    ));
    assert_eq!(upstream.received().len(), 1);
}

#[tokio::test]
async fn test_local_suffix_miss_is_not_relayed() {
    let upstream = MockDnsServer::start().await.unwrap();
    let transport = UdpTransport::new(upstream.addr()).with_timeout(Some(Duration::from_millis(200)));
    let resolver = ResolveDomainUseCase::new(directory(&[])).with_local_suffixes(["lan"]);
    let handler = DnsServerHandler::new(resolver, Arc::new(transport));
    let query = build_query("printer.lan.", 5, RecordType::A);

    let result = handler.handle_datagram(&query, client()).await;

    assert_eq!(result, Err(DomainError::LocalMiss("printer.lan".to_string())));
    assert!(upstream.received().is_empty());
}

// ── drops ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_short_datagram_is_dropped() {
    let upstream = MockDnsServer::start().await.unwrap();
    let handler = handler_with(directory(&[]), upstream.addr());

    let result = handler.handle_datagram(&[0u8; 10], client()).await;

    assert!(matches!(result, Err(DomainError::MalformedQuery(_))));
    assert!(upstream.received().is_empty());
}

#[tokio::test]
async fn test_zero_question_count_is_dropped() {
    let upstream = MockDnsServer::start().await.unwrap();
    let handler = handler_with(directory(&[]), upstream.addr());
    let mut query = build_query("example.com.", 11, RecordType::A);
    query[4] = 0;
    query[5] = 0;

    let result = handler.handle_datagram(&query, client()).await;

    assert!(matches!(result, Err(DomainError::MalformedQuery(_))));
    assert!(upstream.received().is_empty());
}

#[tokio::test]
async fn test_oversized_label_is_dropped() {
    let upstream = MockDnsServer::start().await.unwrap();
    let handler = handler_with(directory(&[]), upstream.addr());
    let mut query = build_query("example.com.", 12, RecordType::A);
    query[12] = 64;

    let result = handler.handle_datagram(&query, client()).await;

    assert!(matches!(result, Err(DomainError::MalformedQuery(_))));
    assert!(upstream.received().is_empty());
}

#[tokio::test]
async fn test_label_past_end_is_dropped() {
    let handler = handler_with(directory(&[]), unused_upstream());
    let mut query = build_query("example.com.", 13, RecordType::A);
    query.truncate(15);

    let result = handler.handle_datagram(&query, client()).await;

    assert!(matches!(result, Err(DomainError::MalformedQuery(_))));
}

#[tokio::test]
async fn test_response_packet_is_dropped() {
    let handler = handler_with(directory(&[("home.local", "10.0.0.5")]), unused_upstream());
    let mut query = build_query("home.local.", 14, RecordType::A);
    query[2] |= 0x80;

    let result = handler.handle_datagram(&query, client()).await;

    assert!(matches!(result, Err(DomainError::MalformedQuery(_))));
}

#[tokio::test]
async fn test_invalid_directory_value_is_dropped() {
    let upstream = MockDnsServer::start().await.unwrap();
    let handler = handler_with(directory(&[("bad.local", "not-an-ip")]), upstream.addr());
    let query = build_query("bad.local.", 15, RecordType::A);

    let result = handler.handle_datagram(&query, client()).await;

    assert_eq!(
        result,
        Err(DomainError::InvalidDirectoryData {
            domain: "bad.local".to_string(),
            value: "not-an-ip".to_string(),
        })
    );
    assert!(upstream.received().is_empty());
}

#[tokio::test]
async fn test_directory_outage_fails_closed() {
    let upstream = MockDnsServer::start().await.unwrap();
    let handler = handler_with(Arc::new(FailingDirectory), upstream.addr());
    let query = build_query("example.com.", 16, RecordType::A);

    let result = handler.handle_datagram(&query, client()).await;

    assert!(matches!(result, Err(DomainError::DirectoryUnavailable(_))));
    assert!(upstream.received().is_empty());
}
