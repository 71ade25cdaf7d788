//! # Runtime Value Representation
//!
//! This module provides `Value`, the owned runtime representation for the
//! three kinds of data the record format carries, and `ValueKind`, the
//! two-bit type tag packed into each value's hint byte.
//!
//! ## Value Variants
//!
//! | Variant | Rust Type | Wire Width |
//! |---------|-----------|------------|
//! | Int | u64 | 8 bytes, big-endian |
//! | Float | f64 | 8 bytes, big-endian IEEE-754 |
//! | Text | String | 0-63 UTF-8 bytes |
//!
//! ## Tag Values
//!
//! Tags occupy the top two bits of the hint byte. Tag 0 is reserved: a
//! whole hint byte of 0 marks end-of-record inside the fixed block, so no
//! value kind may ever map to it. Do not renumber these.
//!
//! | Tag | Kind |
//! |-----|------|
//! | 0 | reserved (record sentinel) |
//! | 1 | Int |
//! | 2 | Float |
//! | 3 | Text |
//!
//! The enum is closed by design: the encoder dispatches with an exhaustive
//! match, so there is no "unsupported type" path at runtime.

use eyre::{bail, Result};

/// Single-byte type tag for a value, stored in bits 7-6 of the hint byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValueKind {
    Int = 1,
    Float = 2,
    Text = 3,
}

impl ValueKind {
    /// Maps a raw tag back to a kind. Tag 0 is the record sentinel and is
    /// rejected here; well-formed input never presents it as a hint.
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            1 => Ok(ValueKind::Int),
            2 => Ok(ValueKind::Float),
            3 => Ok(ValueKind::Text),
            _ => bail!("unknown type tag: {}", tag),
        }
    }

    pub fn as_tag(self) -> u8 {
        self as u8
    }
}

/// Owned runtime value carried through record encode/decode.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(u64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Returns the type tag packed into this value's hint byte.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
        }
    }

    pub fn as_int(&self) -> Option<u64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}
