// apdu-rs/apdu/src/protocol/status.rs

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::constants::{SW1_MORE_DATA, SW_SUCCESS};
use crate::Error;

/// ISO 7816-4 status word descriptions, keyed by `sw1 << 8 | sw2`.
/// Built once on first access and never mutated afterwards.
static STATUS_WORDS: Lazy<HashMap<u16, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (0x6281, "Part of returned data may be corrupted"),
        (0x6282, "End of file reached before reading Le bytes"),
        (0x6283, "Selected file invalidated"),
        (0x6284, "FCI not formatted according to ISO"),
        (0x6300, "Authentication failed"),
        (0x6381, "File filled up by the last write"),
        (0x6581, "Memory failure"),
        (0x6700, "Wrong length"),
        (0x6800, "Functions in CLA not supported"),
        (0x6881, "Logical channel not supported"),
        (0x6882, "Secure messaging not supported"),
        (0x6900, "Command not allowed"),
        (0x6981, "Command incompatible with file structure"),
        (0x6982, "Security status not satisfied"),
        (0x6983, "Authentication method blocked"),
        (0x6984, "Referenced data invalidated"),
        (0x6985, "Conditions of use not satisfied"),
        (0x6986, "Command not allowed, no current EF"),
        (0x6987, "Expected SM data objects missing"),
        (0x6988, "SM data objects incorrect"),
        (0x6A80, "Incorrect parameters in the data field"),
        (0x6A81, "Function not supported"),
        (0x6A82, "File not found"),
        (0x6A83, "Record not found"),
        (0x6A84, "Not enough memory space in the file"),
        (0x6A85, "Lc inconsistent with TLV structure"),
        (0x6A86, "Incorrect parameters P1-P2"),
        (0x6A87, "Lc inconsistent with P1-P2"),
        (0x6A88, "Referenced data not found"),
        (0x6B00, "Wrong parameters P1-P2"),
        (0x6D00, "Instruction code not supported or invalid"),
        (0x6E00, "Class not supported"),
        (0x6F00, "No precise diagnosis"),
        (0x9000, "Success"),
    ])
});

/// StatusWord - Newtype Pattern (2 バイト)
///
/// The mandatory trailing status indicator of a response frame. Usable both
/// as plain data and, through its `std::error::Error` impl, directly as a
/// failure value whose message is the rendered description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusWord([u8; 2]);

impl StatusWord {
    /// Normal completion, 0x9000.
    pub const SUCCESS: Self = Self(SW_SUCCESS);

    /// Construct from the two raw status bytes (SW1, SW2).
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// Raw status bytes.
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// First status byte.
    pub fn sw1(&self) -> u8 {
        self.0[0]
    }

    /// Second status byte.
    pub fn sw2(&self) -> u8 {
        self.0[1]
    }

    /// Big-endian numeric view, `sw1 << 8 | sw2`.
    pub fn to_u16(&self) -> u16 {
        u16::from_be_bytes(self.0)
    }

    /// Returns true when the word signals an error condition.
    ///
    /// 0x9000 and the whole 0x9Fxx continuation family count as non-error.
    /// Note that `Response::parse` is stricter and accepts only the exact
    /// 0x9000; the two policies are deliberately separate operations.
    pub fn is_error(&self) -> bool {
        !(self.sw1() == SW1_MORE_DATA || (self.sw1() == 0x90 && self.sw2() == 0x00))
    }

    /// Description from the ISO 7816-4 table; "Unknown" for unmapped codes.
    pub fn description(&self) -> &'static str {
        STATUS_WORDS.get(&self.to_u16()).copied().unwrap_or("Unknown")
    }
}

impl TryFrom<&[u8]> for StatusWord {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 2 {
            return Err(Error::InvalidLength {
                expected: 2,
                actual: bytes.len(),
            });
        }
        Ok(Self([bytes[0], bytes[1]]))
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X} ({})", self.to_u16(), self.description())
    }
}

impl std::error::Error for StatusWord {}
