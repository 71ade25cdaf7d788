//! # Per-Value Encoding
//!
//! This module encodes one typed value to its wire form (hint byte plus
//! payload) and decodes it back. The record layer drives it once per value.
//!
//! ## Wire Layout
//!
//! | Kind | Hint length field | Payload |
//! |------|-------------------|---------|
//! | Int | always 8 | big-endian unsigned 64-bit |
//! | Float | always 8 | big-endian IEEE-754 double |
//! | Text | exact UTF-8 byte count (0-63) | raw UTF-8 bytes |
//!
//! Int and float widths are fixed; only text is data-dependent, and its
//! UTF-8 byte count must fit the 6-bit length field. A multibyte character
//! counts its encoded bytes, not one.
//!
//! ## Zero-Allocation Encoding
//!
//! `encode_value` appends to a caller-supplied buffer, so a row encoder
//! can reuse one allocation across values. `encoded_len` reports the total
//! wire size (hint included) without encoding, letting callers pre-check
//! whether a row fits its record.
//!
//! ## Error Handling
//!
//! Returns `eyre::Result` with messages naming the violated condition:
//! - text longer than 63 UTF-8 bytes: "text value is N bytes..."
//! - payload size not matching the declared length: "declared length N..."
//! - declared int/float length other than 8: "expects an 8-byte payload"
//! - payload bytes that are not valid UTF-8

use crate::encoding::hint::{encode_hint, MAX_HINT_LEN};
use crate::types::{Value, ValueKind};
use eyre::{ensure, Result, WrapErr};

/// Fixed payload width of int and float values.
pub const NUMERIC_WIDTH: usize = 8;

/// Returns the encoded size of a value: one hint byte plus the payload.
pub fn encoded_len(value: &Value) -> Result<usize> {
    match value {
        Value::Int(_) | Value::Float(_) => Ok(1 + NUMERIC_WIDTH),
        Value::Text(s) => {
            ensure!(
                s.len() <= MAX_HINT_LEN,
                "text value is {} bytes, exceeds the {}-byte limit",
                s.len(),
                MAX_HINT_LEN
            );
            Ok(1 + s.len())
        }
    }
}

/// Appends the hint byte and payload for one value to `buf`.
pub fn encode_value(value: &Value, buf: &mut Vec<u8>) -> Result<()> {
    match value {
        Value::Int(v) => {
            buf.push(encode_hint(ValueKind::Int, NUMERIC_WIDTH)?);
            buf.extend_from_slice(&v.to_be_bytes());
        }
        Value::Float(v) => {
            buf.push(encode_hint(ValueKind::Float, NUMERIC_WIDTH)?);
            buf.extend_from_slice(&v.to_be_bytes());
        }
        Value::Text(s) => {
            ensure!(
                s.len() <= MAX_HINT_LEN,
                "text value is {} bytes, exceeds the {}-byte limit",
                s.len(),
                MAX_HINT_LEN
            );
            buf.push(encode_hint(ValueKind::Text, s.len())?);
            buf.extend_from_slice(s.as_bytes());
        }
    }
    Ok(())
}

/// Rebuilds a value from its decoded hint and payload bytes.
pub fn decode_value(kind: ValueKind, len: usize, payload: &[u8]) -> Result<Value> {
    ensure!(
        payload.len() == len,
        "declared length {} does not match {} payload bytes",
        len,
        payload.len()
    );
    match kind {
        ValueKind::Int => {
            ensure!(
                len == NUMERIC_WIDTH,
                "int hint expects an 8-byte payload, declared {}",
                len
            );
            let bytes: [u8; 8] = payload.try_into()?;
            Ok(Value::Int(u64::from_be_bytes(bytes)))
        }
        ValueKind::Float => {
            ensure!(
                len == NUMERIC_WIDTH,
                "float hint expects an 8-byte payload, declared {}",
                len
            );
            let bytes: [u8; 8] = payload.try_into()?;
            Ok(Value::Float(f64::from_be_bytes(bytes)))
        }
        ValueKind::Text => {
            let s = std::str::from_utf8(payload).wrap_err("text payload is not valid UTF-8")?;
            Ok(Value::Text(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_int_is_hint_plus_big_endian_bytes() {
        let mut buf = Vec::new();
        encode_value(&Value::Int(42), &mut buf).unwrap();
        assert_eq!(buf.len(), 9);
        assert_eq!(buf[0], 72);
        assert_eq!(&buf[1..], &42u64.to_be_bytes());
    }

    #[test]
    fn encode_float_is_hint_plus_ieee754_bits() {
        let mut buf = Vec::new();
        encode_value(&Value::Float(3.14), &mut buf).unwrap();
        assert_eq!(buf.len(), 9);
        assert_eq!(buf[0], 0b1000_1000);
        assert_eq!(&buf[1..], &3.14f64.to_be_bytes());
    }

    #[test]
    fn encode_text_declares_utf8_byte_count() {
        let mut buf = Vec::new();
        encode_value(&Value::from("hi"), &mut buf).unwrap();
        assert_eq!(buf, vec![0b1100_0010, b'h', b'i']);

        // Multibyte characters count their encoded bytes.
        buf.clear();
        encode_value(&Value::from("啊"), &mut buf).unwrap();
        assert_eq!(buf[0], 0b1100_0000 | 3);
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn encode_empty_text_is_a_single_nonzero_hint() {
        let mut buf = Vec::new();
        encode_value(&Value::from(""), &mut buf).unwrap();
        assert_eq!(buf, vec![0b1100_0000]);
    }

    #[test]
    fn encode_text_at_63_bytes_succeeds() {
        let mut buf = Vec::new();
        encode_value(&Value::from("a".repeat(63).as_str()), &mut buf).unwrap();
        assert_eq!(buf.len(), 64);
        assert_eq!(buf[0], 0xFF);
    }

    #[test]
    fn encode_text_over_63_bytes_fails() {
        let mut buf = Vec::new();
        let result = encode_value(&Value::from("a".repeat(64).as_str()), &mut buf);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("63-byte limit"));
    }

    #[test]
    fn encoded_len_matches_actual_encoding() {
        for value in [
            Value::Int(0),
            Value::Int(u64::MAX),
            Value::Float(2.71),
            Value::from(""),
            Value::from("he啊llo😀99"),
        ] {
            let mut buf = Vec::new();
            encode_value(&value, &mut buf).unwrap();
            assert_eq!(encoded_len(&value).unwrap(), buf.len());
        }
    }

    #[test]
    fn encoded_len_rejects_oversized_text() {
        assert!(encoded_len(&Value::from("a".repeat(64).as_str())).is_err());
    }

    #[test]
    fn decode_int_round_trips_extremes() {
        for v in [0u64, 1, 42, u64::MAX] {
            let mut buf = Vec::new();
            encode_value(&Value::Int(v), &mut buf).unwrap();
            assert_eq!(
                decode_value(ValueKind::Int, 8, &buf[1..]).unwrap(),
                Value::Int(v)
            );
        }
    }

    #[test]
    fn decode_float_is_bit_exact() {
        for v in [0.0f64, -0.0, 3.14, f64::MIN_POSITIVE, f64::MAX, f64::INFINITY] {
            let mut buf = Vec::new();
            encode_value(&Value::Float(v), &mut buf).unwrap();
            let decoded = decode_value(ValueKind::Float, 8, &buf[1..]).unwrap();
            match decoded {
                Value::Float(d) => assert_eq!(d.to_bits(), v.to_bits()),
                other => panic!("expected float, got {:?}", other),
            }
        }
    }

    #[test]
    fn decode_text_round_trips_multilingual_strings() {
        for s in ["", "hi", "he啊lloさせていふぁ😀99"] {
            let mut buf = Vec::new();
            encode_value(&Value::from(s), &mut buf).unwrap();
            assert_eq!(
                decode_value(ValueKind::Text, buf.len() - 1, &buf[1..]).unwrap(),
                Value::from(s)
            );
        }
    }

    #[test]
    fn decode_rejects_payload_length_mismatch() {
        let result = decode_value(ValueKind::Int, 8, &[0u8; 7]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not match"));
    }

    #[test]
    fn decode_rejects_nonstandard_numeric_length() {
        // A hint can declare int with length 4; the payload may even match.
        assert!(decode_value(ValueKind::Int, 4, &[0u8; 4]).is_err());
        assert!(decode_value(ValueKind::Float, 4, &[0u8; 4]).is_err());
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        let result = decode_value(ValueKind::Text, 2, &[0xFF, 0xFE]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("UTF-8"));
    }
}
