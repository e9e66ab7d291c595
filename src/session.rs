//! Session Module
//!
//! One decode session: the string table and schema registry for a single
//! byte stream, plus the pull loop that drives the framer over it.
//!
//! ## Responsibilities
//! - Own the per-session String Table and Schema Registry
//! - Apply decoded messages atomically (registries mutate only after a
//!   message has fully decoded and validated)
//! - Hand Entry rows to the caller
//!
//! ## Concurrency Model
//!
//! Sessions are single-threaded and synchronous. A process may run any
//! number of sessions; each owns its registries outright, so there is no
//! shared state and no locking. Abandoning a session mid-message simply
//! drops it — partially read frames never touch the registries.

use std::io::{Read, Write};

use crate::config::SessionConfig;
use crate::error::{Result, WireError};
use crate::framer::{self, Message};
use crate::row::{decode_row, Entry};
use crate::schema::{SchemaRegistry, TableSchema};
use crate::strings::StringTable;

/// A single decode session over one byte stream
pub struct Session {
    /// Framing limits
    config: SessionConfig,

    /// Interned strings, scoped to this session
    strings: StringTable,

    /// Table definitions, scoped to this session
    schemas: SchemaRegistry,
}

impl Session {
    /// Create a session with the given config
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            strings: StringTable::new(),
            schemas: SchemaRegistry::new(),
        }
    }

    /// Apply one decoded message
    ///
    /// String and Table messages update the session registries and return
    /// `None`; Entry messages are returned to the caller. The message has
    /// already fully decoded by the time it reaches here, so a failure
    /// (reserved string id, duplicate table) leaves the registries unchanged.
    pub fn apply(&mut self, message: Message) -> Result<Option<Entry>> {
        match message {
            Message::String { uid, text } => {
                self.strings.intern(uid, text)?;
                Ok(None)
            }
            Message::Table(schema) => {
                self.schemas.define(schema)?;
                Ok(None)
            }
            Message::Entry(entry) => {
                tracing::trace!(
                    "entry for table {} with {} values",
                    entry.table_uid,
                    entry.values.len()
                );
                Ok(Some(entry))
            }
        }
    }

    /// Read the next message from a stream
    ///
    /// Returns `Ok(None)` at a clean end of stream (end-of-stream on a frame
    /// boundary). End-of-stream inside a frame fails with
    /// `IncompleteMessage`.
    pub fn read_message<R: Read>(&self, reader: &mut R) -> Result<Option<Message>> {
        match framer::read_message(reader, &self.schemas, &self.strings, &self.config) {
            Ok(message) => Ok(Some(message)),
            Err(WireError::Io(ref e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                // Stream ended on a frame boundary
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Pull the next Entry from a stream
    ///
    /// String and Table messages encountered along the way are applied to
    /// the session. Returns `Ok(None)` at a clean end of stream.
    pub fn next_entry<R: Read>(&mut self, reader: &mut R) -> Result<Option<Entry>> {
        loop {
            let message = match self.read_message(reader)? {
                Some(m) => m,
                None => return Ok(None),
            };

            if let Some(entry) = self.apply(message)? {
                return Ok(Some(entry));
            }
        }
    }

    /// Decode one row against a previously defined table
    ///
    /// Fails with `UnknownTable` if the uid is not defined; no registry is
    /// touched on any failure path.
    pub fn decode_entry(&self, table_uid: u32, bytes: &[u8]) -> Result<Entry> {
        let schema = self.schemas.lookup(table_uid)?;
        decode_row(schema, &self.strings, bytes)
    }

    /// Encode a message against this session's registries
    pub fn encode(&self, message: &Message) -> Result<Vec<u8>> {
        framer::encode_message(message, &self.schemas)
    }

    /// Write a message to a stream
    pub fn write<W: Write>(&self, writer: &mut W, message: &Message) -> Result<()> {
        framer::write_message(writer, message, &self.schemas)
    }

    // =========================================================================
    // Direct registry access
    // =========================================================================

    /// Intern a string directly (equivalent to applying a String message)
    pub fn intern(&mut self, uid: u32, text: impl Into<String>) -> Result<()> {
        self.strings.intern(uid, text)
    }

    /// Define a table directly (equivalent to applying a Table message)
    pub fn define(&mut self, schema: TableSchema) -> Result<()> {
        self.schemas.define(schema)
    }

    /// The session's string table
    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    /// The session's schema registry
    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    /// The session's framing limits
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
