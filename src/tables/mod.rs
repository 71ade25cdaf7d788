//! # Table Assembly
//!
//! This module turns a whole table (column names plus data rows) into a
//! sequence of fixed 256-byte records and back. The PIR channel serves one
//! record per query, so a table travels as N independent blocks.
//!
//! ## Table Layout
//!
//! | Record | Contents |
//! |--------|----------|
//! | 0 | header: each column name encoded as a text value |
//! | 1.. | data rows, in the order supplied |
//!
//! Column names are ordinary text values and obey the same 63-byte UTF-8
//! limit; the header row must also fit 256 bytes in total.
//!
//! ## Usage
//!
//! ```ignore
//! use pircodec::tables::{encode_table, decode_table};
//! use pircodec::types::Value;
//!
//! let columns = vec!["id".to_string(), "name".to_string()];
//! let rows = vec![
//!     vec![Value::Int(1), Value::from("x")],
//!     vec![Value::Int(2), Value::from("y")],
//! ];
//! let records = encode_table(&rows, &columns)?;
//! let table = decode_table(&records)?;
//! assert_eq!(table.columns, columns);
//! assert_eq!(table.rows, rows);
//! ```

use crate::records::encode_record_into;
use crate::records::{decode_record, RECORD_SIZE};
use crate::types::Value;
use eyre::{bail, ensure, Result};

/// A decoded table: header names plus data rows, order preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Builds a table, checking that every row is as wide as the header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self> {
        for (idx, row) in rows.iter().enumerate() {
            ensure!(
                row.len() == columns.len(),
                "row {} has {} values for {} columns",
                idx,
                row.len(),
                columns.len()
            );
        }
        Ok(Self { columns, rows })
    }

    /// Encodes this table as header record plus one record per row.
    pub fn encode(&self) -> Result<Vec<Vec<u8>>> {
        encode_table(&self.rows, &self.columns)
    }
}

/// Encodes column names and rows into a record sequence, header first.
pub fn encode_table(rows: &[Vec<Value>], columns: &[String]) -> Result<Vec<Vec<u8>>> {
    let header: Vec<Value> = columns.iter().map(|c| Value::Text(c.clone())).collect();

    let mut records = Vec::with_capacity(1 + rows.len());
    let mut buf = Vec::with_capacity(RECORD_SIZE);

    encode_record_into(&header, &mut buf)?;
    records.push(buf.clone());

    for row in rows {
        encode_record_into(row, &mut buf)?;
        records.push(buf.clone());
    }
    Ok(records)
}

/// Decodes a record sequence back into a table. The first record is the
/// header and every value in it must be text.
pub fn decode_table(records: &[Vec<u8>]) -> Result<Table> {
    let Some((header, data)) = records.split_first() else {
        bail!("table must contain at least a header record");
    };

    let mut columns = Vec::new();
    for value in decode_record(header)? {
        match value {
            Value::Text(name) => columns.push(name),
            other => bail!("header record holds a non-text value: {:?}", other),
        }
    }

    let mut rows = Vec::with_capacity(data.len());
    for record in data {
        rows.push(decode_record(record)?);
    }
    Ok(Table { columns, rows })
}
