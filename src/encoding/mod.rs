//! # Encoding Module
//!
//! This module provides the byte-level codecs beneath the record layer:
//!
//! - **Hint encoding**: single-byte (type tag, length) descriptor
//! - **Value encoding**: hint byte plus big-endian / UTF-8 payload

pub mod hint;
pub mod value;

pub use hint::{decode_hint, encode_hint, MAX_HINT_LEN, SENTINEL};
pub use value::{decode_value, encode_value, encoded_len, NUMERIC_WIDTH};
