//! Hexadecimal helpers used by the textual codec entry points and for
//! display purposes.
//!
//! The parser accepts embedded ASCII whitespace anywhere in the input,
//! matching the tolerant format the string-based command constructor takes.

use crate::{Error, Result};

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{b:02x}");
    }
    s
}

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte.
///
/// Example: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{b:02x}");
    }
    s
}

fn hex_digit(b: u8) -> Result<u8> {
    (b as char)
        .to_digit(16)
        .map(|v| v as u8)
        .ok_or_else(|| Error::HexParse(format!("invalid hex digit {:?}", b as char)))
}

/// Parse a hex string into bytes.
///
/// ASCII whitespace (space, tab, newline, carriage return) is allowed
/// anywhere and stripped before decoding. Fails on an odd number of digits
/// or any non-hex character.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let cleaned: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();

    if cleaned.len() % 2 != 0 {
        return Err(Error::HexParse("odd number of hex digits".to_string()));
    }

    let mut out = Vec::with_capacity(cleaned.len() / 2);
    for pair in cleaned.chunks_exact(2) {
        out.push(hex_digit(pair[0])? << 4 | hex_digit(pair[1])?);
    }
    Ok(out)
}
