// apdu-rs/apdu/src/protocol/command.rs

use std::fmt;

use crate::constants::{
    APDU_HEADER_LEN, SELECT_CLA, SELECT_INS, SELECT_P1_BY_NAME, SELECT_P2_FIRST,
};
use crate::protocol::parser::ensure_len;
use crate::utils::{bytes_to_hex, parse_hex};
use crate::{Error, Result};

/// ISO 7816-4 command APDU.
///
/// Wire layout: `[cla][ins][p1][p2]([lc][data])?[le]`. The Lc byte and the
/// data field are present iff `data` is non-empty; `le` is always emitted
/// last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    /// Instruction class.
    pub cla: u8,
    /// Instruction code.
    pub ins: u8,
    /// First instruction parameter.
    pub p1: u8,
    /// Second instruction parameter.
    pub p2: u8,
    /// Command data field. Must fit the single-byte Lc field (0..=255).
    pub data: Vec<u8>,
    /// Expected response length (Le).
    pub le: u8,
}

impl Command {
    /// Encode into the wire byte layout. Never fails.
    ///
    /// The Lc byte is `data.len()` truncated to its low 8 bits. A data field
    /// longer than 255 bytes cannot be represented by the single-byte Lc and
    /// is a caller precondition; the encoder does not correct it.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(APDU_HEADER_LEN + 2 + self.data.len());
        out.push(self.cla);
        out.push(self.ins);
        out.push(self.p1);
        out.push(self.p2);
        if !self.data.is_empty() {
            out.push(self.data.len() as u8);
            out.extend_from_slice(&self.data);
        }
        out.push(self.le);
        out
    }

    /// Decode a raw command frame.
    ///
    /// Four bytes is the bare header; a fifth byte alone is Le. With six or
    /// more bytes the fifth byte is Lc, followed by the data field and an
    /// optional trailing Le byte (defaults to 0 when absent).
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        ensure_len(bytes, APDU_HEADER_LEN)?;

        let mut cmd = Command {
            cla: bytes[0],
            ins: bytes[1],
            p1: bytes[2],
            p2: bytes[3],
            ..Command::default()
        };

        match bytes.len() {
            4 => return Ok(cmd),
            5 => {
                cmd.le = bytes[4];
                return Ok(cmd);
            }
            _ => {}
        }

        let lc = bytes[4] as usize;
        let available = bytes.len() - 5;
        if available < lc {
            log::trace!("command frame declares lc={lc} but only {available} data bytes follow");
            return Err(Error::DataLengthMismatch {
                declared: lc,
                available,
            });
        }

        // At most Lc data bytes plus one trailing Le byte may follow the
        // five-byte prefix.
        if bytes.len() > 5 + lc + 1 {
            return Err(Error::InvalidLength {
                expected: 5 + lc + 1,
                actual: bytes.len(),
            });
        }

        cmd.data = bytes[5..5 + lc].to_vec();
        if bytes.len() > 5 + lc {
            cmd.le = bytes[5 + lc];
        }

        Ok(cmd)
    }

    /// Decode a command from its hexadecimal text form.
    ///
    /// ASCII whitespace (space, tab, newline, carriage return) is stripped
    /// anywhere in the input before decoding.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = parse_hex(s)?;
        Self::decode(&bytes)
    }

    /// Like [`Command::from_hex`] but panics on invalid input.
    ///
    /// Only for trusted literals such as embedded test fixtures. Never feed
    /// this externally sourced strings.
    pub fn must_from_hex(s: &str) -> Self {
        match Self::from_hex(s) {
            Ok(cmd) => cmd,
            Err(e) => panic!("invalid APDU literal: {e}"),
        }
    }

    /// SELECT the application identified by `aid`
    /// (cla=0x00 ins=0xA4 p1=0x04 p2=0x00).
    pub fn select(aid: &[u8]) -> Self {
        Command {
            cla: SELECT_CLA,
            ins: SELECT_INS,
            p1: SELECT_P1_BY_NAME,
            p2: SELECT_P2_FIRST,
            data: aid.to_vec(),
            le: 0,
        }
    }

    /// Lowercase hex rendering of the encoded frame, no separators.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.encode())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
