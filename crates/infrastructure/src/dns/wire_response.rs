use super::packet::HEADER_LEN;
use std::net::Ipv4Addr;
use thiserror::Error;

pub const DEFAULT_ANSWER_TTL: u32 = 60;

/// Pointer, TYPE, CLASS, TTL, RDLENGTH and a 4-byte IPv4 address.
const A_ANSWER_LEN: usize = 16;

const SUCCESS_FLAGS: [u8; 2] = [0x81, 0x80];
const NAME_POINTER: [u8; 2] = [0xC0, 0x0C];
const TYPE_A: [u8; 2] = [0x00, 0x01];
const CLASS_IN: [u8; 2] = [0x00, 0x01];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    #[error("directory value {0:?} is not an IPv4 address")]
    InvalidAddress(String),

    #[error("question end {question_end} is outside a {len}-byte query")]
    QuestionOutOfRange { question_end: usize, len: usize },
}

/// Builds the single-A-record answer for a locally resolved query.
///
/// The transaction ID and QDCOUNT are copied from `query`, the question
/// section `query[12..question_end]` is echoed byte for byte, and the answer
/// points back at offset 12 for its name. Whatever QTYPE the client asked
/// for, the answer is type A.
pub fn synthesize(
    query: &[u8],
    question_end: usize,
    ip: &str,
    ttl: u32,
) -> Result<Vec<u8>, SynthesisError> {
    let address: Ipv4Addr = ip
        .trim()
        .parse()
        .map_err(|_| SynthesisError::InvalidAddress(ip.to_string()))?;

    if question_end < HEADER_LEN || question_end > query.len() {
        return Err(SynthesisError::QuestionOutOfRange {
            question_end,
            len: query.len(),
        });
    }

    let mut buf = Vec::with_capacity(question_end + A_ANSWER_LEN);

    buf.extend_from_slice(&query[0..2]);
    buf.extend_from_slice(&SUCCESS_FLAGS);
    buf.extend_from_slice(&query[4..6]);
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());

    buf.extend_from_slice(&query[HEADER_LEN..question_end]);

    buf.extend_from_slice(&NAME_POINTER);
    buf.extend_from_slice(&TYPE_A);
    buf.extend_from_slice(&CLASS_IN);
    buf.extend_from_slice(&ttl.to_be_bytes());
    buf.extend_from_slice(&4u16.to_be_bytes());
    buf.extend_from_slice(&address.octets());

    Ok(buf)
}
