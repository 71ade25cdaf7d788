//! # Fixed-Width Record Packing
//!
//! This module packs an ordered row of values into one fixed 256-byte
//! block and unpacks a block back into a row. The fixed width is what the
//! PIR channel retrieves per query, so every record must be exactly
//! `RECORD_SIZE` bytes regardless of how much data the row carries.
//!
//! ## Record Binary Layout
//!
//! ```text
//! +--------+---------+--------+---------+-----+----------------------+
//! | hint 0 | payload | hint 1 | payload | ... | zero padding to 256  |
//! +--------+---------+--------+---------+-----+----------------------+
//! ```
//!
//! | Component | Size | Description |
//! |-----------|------|-------------|
//! | hint | 1 byte | type tag (bits 7-6) and payload length (bits 5-0) |
//! | payload | 8 bytes (int/float) or 0-63 bytes (text) | value bytes |
//! | padding | 0-256 bytes | zero fill up to `RECORD_SIZE` |
//!
//! ## End-of-Record Sentinel
//!
//! Valid hint bytes are always >= 64 (tag bits are never 0), so the first
//! 0 byte at a hint position marks the end of the encoded values. A row
//! that fills all 256 bytes has no sentinel; decoding stops at the block
//! edge instead. Padding bytes past the sentinel are not inspected:
//! decoding tolerates nonzero garbage there, and tightening that would
//! reject previously written blocks.
//!
//! ## Capacity
//!
//! The sum of (1 + payload) over a row must not exceed 256 bytes. A row of
//! 28 ints (252 bytes) fits; 33 ints (297 bytes) is a hard encode error,
//! never a truncation.
//!
//! ## Usage
//!
//! ```ignore
//! use pircodec::records::{encode_record, decode_record};
//! use pircodec::types::Value;
//!
//! let row = vec![Value::Int(42), Value::Float(3.14), Value::from("hi")];
//! let block = encode_record(&row)?;
//! assert_eq!(block.len(), 256);
//! assert_eq!(decode_record(&block)?, row);
//! ```

use crate::encoding::hint::{decode_hint, SENTINEL};
use crate::encoding::value::{decode_value, encode_value, encoded_len};
use crate::types::Value;
use eyre::{ensure, Result};


/// Fixed size of every encoded record, in bytes.
pub const RECORD_SIZE: usize = 256;

/// Encodes a row into a fresh 256-byte block.
pub fn encode_record(values: &[Value]) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(RECORD_SIZE);
    encode_record_into(values, &mut buf)?;
    Ok(buf)
}

/// Encodes a row into a caller-owned buffer, clearing it first. The buffer
/// holds exactly `RECORD_SIZE` bytes on success, so one allocation can be
/// reused across a whole table.
pub fn encode_record_into(values: &[Value], buf: &mut Vec<u8>) -> Result<()> {
    buf.clear();
    let mut total = 0usize;
    for value in values {
        total += encoded_len(value)?;
    }
    ensure!(
        total <= RECORD_SIZE,
        "row encodes to {} bytes, exceeds the {}-byte record",
        total,
        RECORD_SIZE
    );
    for value in values {
        encode_value(value, buf)?;
    }
    buf.resize(RECORD_SIZE, SENTINEL);
    Ok(())
}

/// Decodes a 256-byte block back into its row of values.
pub fn decode_record(record: &[u8]) -> Result<Vec<Value>> {
    ensure!(
        record.len() == RECORD_SIZE,
        "record must be {} bytes, got {}",
        RECORD_SIZE,
        record.len()
    );

    let mut values = Vec::new();
    let mut offset = 0;
    while offset < RECORD_SIZE {
        if record[offset] == SENTINEL {
            break;
        }
        let (kind, len) = decode_hint(record[offset])?;
        let payload_start = offset + 1;
        let payload_end = payload_start + len;
        ensure!(
            payload_end <= RECORD_SIZE,
            "value payload at offset {} runs past the record end",
            offset
        );
        values.push(decode_value(kind, len, &record[payload_start..payload_end])?);
        offset = payload_end;
    }
    Ok(values)
}
