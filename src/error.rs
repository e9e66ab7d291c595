//! Error types for tablewire
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using WireError
pub type Result<T> = std::result::Result<T, WireError>;

/// Unified error type for tablewire operations
#[derive(Debug, Error)]
pub enum WireError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Framing Errors
    // -------------------------------------------------------------------------
    #[error("Unknown message kind: 0x{tag:02x}")]
    UnknownMessageKind { tag: u8 },

    #[error("Incomplete message: {0}")]
    IncompleteMessage(String),

    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),

    // -------------------------------------------------------------------------
    // String Table Errors
    // -------------------------------------------------------------------------
    #[error("Unknown string id: {id}")]
    UnknownString { id: u32 },

    #[error("String id 0 is reserved")]
    ReservedStringId,

    #[error("Invalid UTF-8 in string payload: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    // -------------------------------------------------------------------------
    // Schema Errors
    // -------------------------------------------------------------------------
    #[error("Unknown table uid: {uid}")]
    UnknownTable { uid: u32 },

    #[error("Duplicate table uid: {uid}")]
    DuplicateTable { uid: u32 },

    #[error("Unknown field type: 0x{tag:02x}")]
    UnknownFieldType { tag: u8 },

    // -------------------------------------------------------------------------
    // Row Codec Errors
    // -------------------------------------------------------------------------
    #[error("Truncated entry: expected {expected} bytes, got {actual}")]
    TruncatedEntry { expected: usize, actual: usize },

    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),
}
