//! Row codec
//!
//! Encoding and decoding of Entry bodies against a table schema.
//!
//! ## Wire Format
//!
//! ```text
//! ┌─────────────┬─────────────┬────────┬─────────────┐
//! │  value[0]   │  value[1]   │  ...   │  value[n-1] │
//! └─────────────┴─────────────┴────────┴─────────────┘
//! ```
//!
//! Each value is fixed-width per its field type (little-endian):
//! - Float: 8 bytes (f64)
//! - Int:   8 bytes (i64)
//! - Bool:  1 byte (0 = false, non-zero = true)
//! - Str:   4 bytes (u32 string id)

use bytes::{Buf, BufMut};

use crate::error::{Result, WireError};
use crate::schema::{FieldType, TableSchema};
use crate::strings::StringTable;

use super::{Entry, Value};

/// Decode one row against its schema
///
/// `bytes` must be exactly one row: shorter input fails with
/// `TruncatedEntry`, longer input with `SchemaMismatch`. All field-name ids
/// and string-value ids must resolve in `strings`.
pub fn decode_row(schema: &TableSchema, strings: &StringTable, bytes: &[u8]) -> Result<Entry> {
    // Field names must resolve before the schema is used (deferred from
    // definition time to allow String messages to arrive late).
    schema.check_names(strings)?;

    let expected = schema.row_width();
    if bytes.len() < expected {
        return Err(WireError::TruncatedEntry {
            expected,
            actual: bytes.len(),
        });
    }
    if bytes.len() > expected {
        return Err(WireError::SchemaMismatch(format!(
            "entry body has {} trailing bytes (row width is {})",
            bytes.len() - expected,
            expected
        )));
    }

    let mut buf = bytes;
    let mut values = Vec::with_capacity(schema.fields.len());

    for field in &schema.fields {
        let value = match field.field_type {
            FieldType::Float => Value::Float(buf.get_f64_le()),
            FieldType::Int => Value::Int(buf.get_i64_le()),
            FieldType::Bool => Value::Bool(buf.get_u8() != 0),
            FieldType::Str => {
                let id = buf.get_u32_le();
                strings.resolve(id)?;
                Value::Str(id)
            }
        };
        values.push(value);
    }

    Ok(Entry::new(schema.uid, values))
}

/// Encode one row against its schema
///
/// The exact inverse of `decode_row`: values are concatenated in field order
/// at their fixed widths. Fails with `SchemaMismatch` if the value count or
/// any value's type does not match the schema.
pub fn encode_row(entry: &Entry, schema: &TableSchema) -> Result<Vec<u8>> {
    if entry.values.len() != schema.fields.len() {
        return Err(WireError::SchemaMismatch(format!(
            "entry has {} values, table {} has {} fields",
            entry.values.len(),
            schema.uid,
            schema.fields.len()
        )));
    }

    let mut buf: Vec<u8> = Vec::with_capacity(schema.row_width());

    for (index, (value, field)) in entry.values.iter().zip(&schema.fields).enumerate() {
        if value.field_type() != field.field_type {
            return Err(WireError::SchemaMismatch(format!(
                "field {} of table {}: expected {:?}, got {:?}",
                index,
                schema.uid,
                field.field_type,
                value.field_type()
            )));
        }

        match value {
            Value::Float(v) => buf.put_f64_le(*v),
            Value::Int(v) => buf.put_i64_le(*v),
            Value::Bool(v) => buf.put_u8(*v as u8),
            Value::Str(id) => buf.put_u32_le(*id),
        }
    }

    Ok(buf)
}
