//! # Hint Byte Encoding
//!
//! This module packs a value's type tag and declared length into a single
//! byte, the "hint" that prefixes every encoded value inside a record.
//!
//! ## Encoding Format
//!
//! ```text
//!   7   6   5   4   3   2   1   0
//! +---+---+---+---+---+---+---+---+
//! | type tag  |      length       |
//! +---+---+---+---+---+---+---+---+
//! ```
//!
//! | Field | Bits | Range | Meaning |
//! |-------|------|-------|---------|
//! | type tag | 7-6 | 1-3 | 1 = int, 2 = float, 3 = text |
//! | length | 5-0 | 0-63 | payload byte count following the hint |
//!
//! ## The Zero Sentinel
//!
//! The byte value 0 is reserved. Tag 0 is never assigned to a kind, so no
//! well-formed hint can be 0; every real hint is >= 64. Records exploit
//! this: the first 0 byte after the encoded values marks end-of-record
//! inside the fixed 256-byte block. Renumbering the tags would break that
//! invariant and the wire format with it.
//!
//! ## Boundary Values
//!
//! - `encode_hint(Int, 8)` = `0b0100_1000` = 72
//! - `encode_hint(Text, 0)` = `0b1100_0000` = 192 (empty string, not a sentinel)
//! - `encode_hint(Text, 63)` = 255, the largest hint
//! - length 64 is unencodable and rejected
//!
//! ## Usage
//!
//! ```ignore
//! use pircodec::encoding::hint::{encode_hint, decode_hint};
//! use pircodec::types::ValueKind;
//!
//! let hint = encode_hint(ValueKind::Int, 8)?;
//! let (kind, len) = decode_hint(hint)?;
//! assert_eq!((kind, len), (ValueKind::Int, 8));
//! ```

use crate::types::ValueKind;
use eyre::{ensure, Result};

/// Largest length the 6-bit field can declare.
pub const MAX_HINT_LEN: usize = 63;

/// End-of-record marker. Not a valid hint byte.
pub const SENTINEL: u8 = 0;

pub fn encode_hint(kind: ValueKind, len: usize) -> Result<u8> {
    ensure!(
        len <= MAX_HINT_LEN,
        "hint length {} exceeds 6-bit maximum {}",
        len,
        MAX_HINT_LEN
    );
    Ok((kind.as_tag() << 6) | len as u8)
}

pub fn decode_hint(byte: u8) -> Result<(ValueKind, usize)> {
    let kind = ValueKind::from_tag((byte >> 6) & 0x3)?;
    Ok((kind, (byte & 0x3F) as usize))
}
