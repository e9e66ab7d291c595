//! Row Module
//!
//! Typed values and the fixed-width row codec.
//!
//! ## Responsibilities
//! - Decoded value representation for one Entry
//! - Encode/decode Entry bodies against a `TableSchema`
//!
//! An Entry body carries no per-value framing: each value occupies exactly
//! the wire width of its field type, in schema field order, so the body
//! length is fully determined by the schema.

mod codec;

pub use codec::{decode_row, encode_row};

use crate::schema::FieldType;

/// A single decoded field value
///
/// String values keep the u32 id rather than the resolved text, so an Entry
/// stays a plain value type with no borrow into the session; decode verifies
/// that the id resolves.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Float(f64),
    Int(i64),
    Bool(bool),
    Str(u32),
}

impl Value {
    /// The field type this value encodes as
    pub fn field_type(&self) -> FieldType {
        match self {
            Value::Float(_) => FieldType::Float,
            Value::Int(_) => FieldType::Int,
            Value::Bool(_) => FieldType::Bool,
            Value::Str(_) => FieldType::Str,
        }
    }
}

/// One decoded row
///
/// Transient: constructed on decode, consumed by the caller, never retained
/// by the codec. `values` is always the same length as the schema's field
/// list.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Uid of the table this row belongs to
    pub table_uid: u32,

    /// Field values in schema order
    pub values: Vec<Value>,
}

impl Entry {
    pub fn new(table_uid: u32, values: Vec<Value>) -> Self {
        Self { table_uid, values }
    }
}
