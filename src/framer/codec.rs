//! Frame codec
//!
//! Encoding and stream decoding for the three message kinds.
//!
//! End-of-stream before the tag byte is the normal end of a session and
//! surfaces as the underlying IO error; end-of-stream anywhere after the tag
//! byte means a frame was cut short and fails with `IncompleteMessage`.

use std::io::{Read, Write};

use crate::config::SessionConfig;
use crate::error::{Result, WireError};
use crate::row::{decode_row, encode_row};
use crate::schema::{FieldDef, FieldType, SchemaRegistry, TableSchema};
use crate::strings::StringTable;

use super::{Message, MessageKind};

/// Fixed header size after the tag byte, for String and Table messages
const KIND_HEADER_SIZE: usize = 8;

/// Encoded size of one field definition in a Table body
const FIELD_DEF_SIZE: usize = 5;

// =============================================================================
// Encoding
// =============================================================================

/// Encode a message to bytes
///
/// Entry messages need the registry to lay out their row, so encoding an
/// Entry for an undefined table fails with `UnknownTable`.
pub fn encode_message(message: &Message, schemas: &SchemaRegistry) -> Result<Vec<u8>> {
    match message {
        Message::String { uid, text } => {
            let mut frame = Vec::with_capacity(1 + KIND_HEADER_SIZE + text.len());
            frame.push(MessageKind::String.tag());
            frame.extend_from_slice(&uid.to_le_bytes());
            frame.extend_from_slice(&(text.len() as u32).to_le_bytes());
            frame.extend_from_slice(text.as_bytes());
            Ok(frame)
        }
        Message::Table(schema) => {
            let body_len = schema.fields.len() * FIELD_DEF_SIZE;
            let mut frame = Vec::with_capacity(1 + KIND_HEADER_SIZE + body_len);
            frame.push(MessageKind::Table.tag());
            frame.extend_from_slice(&schema.uid.to_le_bytes());
            frame.extend_from_slice(&(schema.fields.len() as u32).to_le_bytes());
            for field in &schema.fields {
                frame.push(field.field_type.tag());
                frame.extend_from_slice(&field.name_id.to_le_bytes());
            }
            Ok(frame)
        }
        Message::Entry(entry) => {
            let schema = schemas.lookup(entry.table_uid)?;
            let row = encode_row(entry, schema)?;

            let mut frame = Vec::with_capacity(1 + 4 + row.len());
            frame.push(MessageKind::Entry.tag());
            frame.extend_from_slice(&entry.table_uid.to_le_bytes());
            frame.extend_from_slice(&row);
            Ok(frame)
        }
    }
}

/// Write a message to a stream
pub fn write_message<W: Write>(
    writer: &mut W,
    message: &Message,
    schemas: &SchemaRegistry,
) -> Result<()> {
    let bytes = encode_message(message, schemas)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

// =============================================================================
// Stream Decoding
// =============================================================================

/// Read one complete message from a stream
///
/// Entry bodies are sized from the table's schema, so the table must already
/// be defined (`UnknownTable` otherwise — the frame length is unknowable and
/// the stream cannot be resynchronized).
pub fn read_message<R: Read>(
    reader: &mut R,
    schemas: &SchemaRegistry,
    strings: &StringTable,
    config: &SessionConfig,
) -> Result<Message> {
    // The tag read is the one place where end-of-stream is not an error:
    // the caller treats it as the end of the session.
    let mut tag = [0u8; 1];
    reader.read_exact(&mut tag)?;

    let kind = MessageKind::from_tag(tag[0])?;
    match kind {
        MessageKind::String => read_string_message(reader, config),
        MessageKind::Table => read_table_message(reader, config),
        MessageKind::Entry => read_entry_message(reader, schemas, strings),
    }
}

/// Read a String message body (after the tag byte)
fn read_string_message<R: Read>(reader: &mut R, config: &SessionConfig) -> Result<Message> {
    let mut header = [0u8; KIND_HEADER_SIZE];
    read_frame_bytes(reader, &mut header, "string header")?;

    let uid = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
    let len = u32::from_le_bytes([header[4], header[5], header[6], header[7]]) as usize;

    if len > config.max_string_len {
        return Err(WireError::LimitExceeded(format!(
            "string payload of {} bytes (max {})",
            len, config.max_string_len
        )));
    }

    let mut payload = vec![0u8; len];
    read_frame_bytes(reader, &mut payload, "string payload")?;

    let text = String::from_utf8(payload)?;
    Ok(Message::String { uid, text })
}

/// Read a Table message body (after the tag byte)
fn read_table_message<R: Read>(reader: &mut R, config: &SessionConfig) -> Result<Message> {
    let mut header = [0u8; KIND_HEADER_SIZE];
    read_frame_bytes(reader, &mut header, "table header")?;

    let uid = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
    let num_fields = u32::from_le_bytes([header[4], header[5], header[6], header[7]]) as usize;

    if num_fields > config.max_fields {
        return Err(WireError::LimitExceeded(format!(
            "table with {} fields (max {})",
            num_fields, config.max_fields
        )));
    }

    let mut body = vec![0u8; num_fields * FIELD_DEF_SIZE];
    read_frame_bytes(reader, &mut body, "table field list")?;

    let mut fields = Vec::with_capacity(num_fields);
    for chunk in body.chunks_exact(FIELD_DEF_SIZE) {
        let field_type = FieldType::from_tag(chunk[0])?;
        let name_id = u32::from_le_bytes([chunk[1], chunk[2], chunk[3], chunk[4]]);
        fields.push(FieldDef::new(field_type, name_id));
    }

    Ok(Message::Table(TableSchema::new(uid, fields)))
}

/// Read an Entry message body (after the tag byte)
fn read_entry_message<R: Read>(
    reader: &mut R,
    schemas: &SchemaRegistry,
    strings: &StringTable,
) -> Result<Message> {
    let mut header = [0u8; 4];
    read_frame_bytes(reader, &mut header, "entry header")?;

    let uid = u32::from_le_bytes(header);
    let schema = schemas.lookup(uid)?;

    let mut body = vec![0u8; schema.row_width()];
    read_frame_bytes(reader, &mut body, "entry body")?;

    let entry = decode_row(schema, strings, &body)?;
    Ok(Message::Entry(entry))
}

/// Read exact bytes inside a frame
///
/// End-of-stream here means the frame was truncated.
fn read_frame_bytes<R: Read>(reader: &mut R, buf: &mut [u8], context: &str) -> Result<()> {
    reader.read_exact(buf).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            WireError::IncompleteMessage(format!(
                "end of stream while reading {} ({} bytes expected)",
                context,
                buf.len()
            ))
        } else {
            WireError::Io(e)
        }
    })
}
