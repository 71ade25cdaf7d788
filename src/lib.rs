//! # pircodec - Fixed-Width Record Codec for PIR Transport
//!
//! pircodec converts tabular rows of mixed-type values (unsigned 64-bit
//! integers, IEEE-754 doubles, UTF-8 strings) into fixed 256-byte blocks
//! and back. A private-information-retrieval channel serves one fixed-size
//! block per query, so every row must occupy exactly the same width no
//! matter how much data it carries; this crate owns that packing.
//!
//! ## Quick Start
//!
//! ```ignore
//! use pircodec::{encode_table, decode_table, Value};
//!
//! let columns = vec!["id".to_string(), "name".to_string()];
//! let rows = vec![
//!     vec![Value::Int(1), Value::from("alice")],
//!     vec![Value::Int(2), Value::from("bob")],
//! ];
//!
//! let records = encode_table(&rows, &columns)?;   // Vec of 256-byte blocks
//! let table = decode_table(&records)?;
//! assert_eq!(table.rows, rows);
//! ```
//!
//! ## Wire Format
//!
//! | Field | Size | Encoding |
//! |-------|------|----------|
//! | hint | 1 byte | bits 7-6 type tag (1=int, 2=float, 3=text), bits 5-0 length |
//! | int payload | 8 bytes | big-endian unsigned 64-bit |
//! | float payload | 8 bytes | big-endian IEEE-754 double |
//! | text payload | 0-63 bytes | raw UTF-8 |
//! | record | 256 bytes | (hint + payload) sequence, zero-padded |
//! | table | N records | record 0 = column names, records 1.. = rows |
//!
//! Hint byte 0 never occurs in real data (tag 0 is reserved), so the first
//! zero byte at a hint position terminates the record early.
//!
//! ## Architecture
//!
//! Three layers, leaves first:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Table Assembly (header + rows)    │
//! ├─────────────────────────────────────┤
//! │  Record Packing (256-byte blocks)   │
//! ├─────────────────────────────────────┤
//! │  Value Codec (hint byte + payload)  │
//! └─────────────────────────────────────┘
//! ```
//!
//! Every operation is a pure, synchronous transformation with no shared
//! state, so calls may run concurrently without coordination. Errors are
//! surfaced immediately as `eyre::Result` failures; nothing is truncated
//! or coerced.
//!
//! ## Module Overview
//!
//! - [`types`]: `Value` and the `ValueKind` type tag
//! - [`encoding`]: hint byte and per-value codecs
//! - [`records`]: fixed 256-byte record pack/unpack
//! - [`tables`]: header-record + data-records assembly

pub mod encoding;
pub mod records;
pub mod tables;
pub mod types;

pub use records::{decode_record, encode_record, RECORD_SIZE};
pub use tables::{decode_table, encode_table, Table};
pub use types::{Value, ValueKind};
