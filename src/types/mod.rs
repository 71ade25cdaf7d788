//! # Value Model for Record Encoding
//!
//! This module provides the canonical value types carried through the codec.
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | `Value` | Owned runtime value (one of int, float, text) |
//! | `ValueKind` | Single-byte type tag stored in the hint byte |
//!
//! ## Usage
//!
//! ```ignore
//! use pircodec::types::{Value, ValueKind};
//!
//! let row = vec![Value::from(42u64), Value::from(3.14), Value::from("hi")];
//! assert_eq!(row[2].kind(), ValueKind::Text);
//! ```

mod value;

pub use value::{Value, ValueKind};
