// apdu-rs/apdu/src/protocol/response.rs

use crate::protocol::parser::ensure_len;
use crate::protocol::status::StatusWord;
use crate::{Error, Result};

/// Decoded response APDU: payload plus the mandatory trailing status word.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Response {
    /// Response payload, possibly empty.
    pub data: Vec<u8>,
    /// Trailing two-byte status indicator.
    pub status_word: StatusWord,
}

impl Response {
    /// Split a raw response frame into payload and status word.
    ///
    /// The status word is always the last two bytes; everything before it is
    /// payload.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        ensure_len(bytes, 2)?;

        let split = bytes.len() - 2;
        Ok(Response {
            data: bytes[..split].to_vec(),
            status_word: StatusWord::from_bytes([bytes[split], bytes[split + 1]]),
        })
    }

    /// Decode and check the status word for normal completion.
    ///
    /// Only the exact 0x9000 counts as success here; any other word becomes
    /// [`Error::Status`] carrying both the word and the payload decoded so
    /// far, which is often still useful for diagnostics. This is stricter
    /// than [`StatusWord::is_error`], which also lets the 0x9Fxx
    /// continuation family through; callers pick the policy they need.
    pub fn parse(bytes: &[u8]) -> Result<Vec<u8>> {
        let response = Self::decode(bytes)?;
        if response.status_word == StatusWord::SUCCESS {
            return Ok(response.data);
        }

        log::trace!("response finished with status {}", response.status_word);
        Err(Error::Status {
            sw: response.status_word,
            data: response.data,
        })
    }
}
