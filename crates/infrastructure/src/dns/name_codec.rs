//! Question-name decoding.
//!
//! Compression pointers are not followed: a pointer ends the name and the
//! labels collected before it are what the query asked for.
//!
//! Label bytes are not required to be text. Bytes that are not UTF-8 decode
//! to U+FFFD, so such a name never matches a directory key and is forwarded.

use super::packet::{MAX_LABEL_LEN, POINTER_MARKER};
use thiserror::Error;

pub const MAX_NAME_LEN: usize = 253;

/// Upper bound on label traversals for a single name.
pub const MAX_LABEL_TRAVERSALS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("empty domain name")]
    Empty,

    #[error("domain name of {0} characters exceeds {MAX_NAME_LEN}")]
    TooLong(usize),

    #[error("label length {0} exceeds {MAX_LABEL_LEN}")]
    LabelTooLong(u8),

    #[error("label at offset {0} runs past the question bytes")]
    Truncated(usize),

    #[error("more than {MAX_LABEL_TRAVERSALS} labels")]
    TooManyLabels,
}

/// Decodes the label sequence at the start of `question` into a dotted,
/// lower-cased name without a trailing dot.
pub fn decode(question: &[u8]) -> Result<String, NameError> {
    let mut name: Vec<u8> = Vec::with_capacity(64);
    let mut pos = 0usize;
    let mut terminated = false;

    for _ in 0..MAX_LABEL_TRAVERSALS {
        let Some(&length) = question.get(pos) else {
            return Err(NameError::Truncated(pos));
        };

        if length == 0 || length >= POINTER_MARKER {
            terminated = true;
            break;
        }
        if length > MAX_LABEL_LEN {
            return Err(NameError::LabelTooLong(length));
        }

        let start = pos + 1;
        let end = start + length as usize;
        let label = question
            .get(start..end)
            .ok_or(NameError::Truncated(pos))?;

        if !name.is_empty() {
            name.push(b'.');
        }
        name.extend_from_slice(label);

        if name.len() > MAX_NAME_LEN {
            return Err(NameError::TooLong(name.len()));
        }

        pos = end;
    }

    if !terminated {
        return Err(NameError::TooManyLabels);
    }
    if name.is_empty() {
        return Err(NameError::Empty);
    }

    name.make_ascii_lowercase();
    Ok(String::from_utf8_lossy(&name).into_owned())
}
