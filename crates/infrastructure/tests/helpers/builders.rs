#![allow(dead_code)]

use hearth_dns_application::ports::DirectoryReader;
use hearth_dns_domain::DomainError;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use std::sync::Arc;

/// Wire-format query built independently of the engine under test.
pub fn build_query(domain: &str, id: u16, record_type: RecordType) -> Vec<u8> {
    let mut query = Query::new();
    query.set_name(Name::from_str(domain).unwrap());
    query.set_query_type(record_type);
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(query);

    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

pub fn parse_message(bytes: &[u8]) -> Message {
    Message::from_vec(bytes).unwrap()
}

/// Directory whose backing store is always down.
pub struct FailingDirectory;

impl DirectoryReader for FailingDirectory {
    fn lookup(&self, _domain: &str) -> Result<Option<Arc<str>>, DomainError> {
        Err(DomainError::DirectoryUnavailable(
            "backing store offline".to_string(),
        ))
    }
}
