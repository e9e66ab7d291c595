//! Framer Module
//!
//! Demultiplexes a byte stream into the three wire message kinds.
//!
//! ## Wire Format
//!
//! ```text
//! ┌──────────┬──────────────────────┬─────────────────────────────┐
//! │ Tag (1)  │  Kind header         │          Body               │
//! └──────────┴──────────────────────┴─────────────────────────────┘
//! ```
//!
//! ### Message Kinds
//! - 0x01 String: uid (4) + len (4) + UTF-8 payload
//! - 0x02 Table:  uid (4) + num_fields (4) + num_fields × (type (1) + name_id (4))
//! - 0x03 Entry:  uid (4) + one row at the schema's fixed width
//!
//! All integers are little-endian. Each message is a one-shot parse: there is
//! no state carried between frames, and an Entry's body length is derived
//! from its table's schema rather than a length prefix.

mod codec;

pub use codec::{encode_message, read_message, write_message};

use crate::error::{Result, WireError};
use crate::row::Entry;
use crate::schema::TableSchema;

/// Wire tags for the three message kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MessageKind {
    String = 0x01,
    Table = 0x02,
    Entry = 0x03,
}

impl MessageKind {
    /// Parse a wire message tag
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            0x01 => Ok(MessageKind::String),
            0x02 => Ok(MessageKind::Table),
            0x03 => Ok(MessageKind::Entry),
            _ => Err(WireError::UnknownMessageKind { tag }),
        }
    }

    /// The wire tag for this kind
    pub fn tag(&self) -> u8 {
        *self as u8
    }
}

/// A fully decoded wire message
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Intern a string under `uid`
    String { uid: u32, text: String },

    /// Define a table
    Table(TableSchema),

    /// One row of a previously defined table
    Entry(Entry),
}

impl Message {
    /// Get the message kind
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::String { .. } => MessageKind::String,
            Message::Table(_) => MessageKind::Table,
            Message::Entry(_) => MessageKind::Entry,
        }
    }
}
