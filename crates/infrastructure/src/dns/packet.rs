//! Structural checks on an inbound query datagram.
//!
//! Nothing here allocates. The walk over the question name only bounds it;
//! turning the labels into text is the job of [`super::name_codec`].

use thiserror::Error;

pub const HEADER_LEN: usize = 12;

/// Conventional DNS-over-UDP ceiling without EDNS(0).
pub const MAX_PACKET_SIZE: usize = 512;

pub const MAX_QUESTIONS: u16 = 1;

pub const MAX_LABEL_LEN: u8 = 63;

/// Any length byte at or above this value is a compression pointer.
pub const POINTER_MARKER: u8 = 0xC0;

const QR_BIT: u8 = 0x80;
const POINTER_WIDTH: usize = 2;
const QTYPE_QCLASS_LEN: usize = 4;

/// Offsets of a query that passed every structural check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedQuery {
    pub id: u16,
    pub qdcount: u16,
    /// Offset just past the question name (terminator or pointer included).
    pub name_end: usize,
    /// Offset just past QTYPE and QCLASS.
    pub question_end: usize,
}

impl ValidatedQuery {
    /// The question section as it appears on the wire, name through QCLASS.
    pub fn question<'a>(&self, datagram: &'a [u8]) -> &'a [u8] {
        &datagram[HEADER_LEN..self.question_end]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PacketError {
    #[error("datagram of {0} bytes is shorter than the DNS header")]
    TooShort(usize),

    #[error("unexpected response")]
    UnexpectedResponse,

    #[error("no question")]
    NoQuestion,

    #[error("{0} questions declared, at most {MAX_QUESTIONS} supported")]
    TooManyQuestions(u16),

    #[error("invalid label length {length} at offset {offset}")]
    InvalidLabel { length: u8, offset: usize },

    #[error("question section runs past the end of the datagram at offset {0}")]
    Truncated(usize),

    #[error("question section exceeds {MAX_PACKET_SIZE} bytes (offset {0})")]
    Oversized(usize),
}

/// Runs the header and question-framing checks in order and returns the
/// offsets the rest of the pipeline needs.
pub fn validate(datagram: &[u8]) -> Result<ValidatedQuery, PacketError> {
    if datagram.len() < HEADER_LEN {
        return Err(PacketError::TooShort(datagram.len()));
    }

    if datagram[2] & QR_BIT != 0 {
        return Err(PacketError::UnexpectedResponse);
    }

    let qdcount = u16::from_be_bytes([datagram[4], datagram[5]]);
    if qdcount == 0 {
        return Err(PacketError::NoQuestion);
    }
    if qdcount > MAX_QUESTIONS {
        return Err(PacketError::TooManyQuestions(qdcount));
    }

    let name_end = walk_name(datagram, HEADER_LEN)?;

    let question_end = name_end + QTYPE_QCLASS_LEN;
    if question_end > datagram.len() {
        return Err(PacketError::Truncated(name_end));
    }
    if question_end > MAX_PACKET_SIZE {
        return Err(PacketError::Oversized(question_end));
    }

    Ok(ValidatedQuery {
        id: u16::from_be_bytes([datagram[0], datagram[1]]),
        qdcount,
        name_end,
        question_end,
    })
}

fn walk_name(datagram: &[u8], start: usize) -> Result<usize, PacketError> {
    let mut pos = start;

    loop {
        let Some(&length) = datagram.get(pos) else {
            return Err(PacketError::Truncated(pos));
        };

        match length {
            0 => return Ok(pos + 1),
            1..=MAX_LABEL_LEN => {
                pos += 1 + length as usize;
                if pos > datagram.len() {
                    return Err(PacketError::Truncated(pos));
                }
            }
            POINTER_MARKER..=u8::MAX => {
                pos += POINTER_WIDTH;
                if pos > datagram.len() {
                    return Err(PacketError::Truncated(pos));
                }
                return Ok(pos);
            }
            _ => {
                return Err(PacketError::InvalidLabel {
                    length,
                    offset: pos,
                })
            }
        }

        if pos > MAX_PACKET_SIZE {
            return Err(PacketError::Oversized(pos));
        }
    }
}
