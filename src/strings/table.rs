//! StringTable implementation
//!
//! HashMap-based id → string mapping with last-writer-wins overwrite.

use std::collections::HashMap;

use crate::error::{Result, WireError};

use super::RESERVED_STRING_ID;

/// Interned strings for one decode session
#[derive(Debug, Default)]
pub struct StringTable {
    strings: HashMap<u32, String>,
}

impl StringTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or overwrite the mapping id → text
    ///
    /// Re-interning an existing id replaces the previous string (last writer
    /// wins). Id 0 is reserved and rejected.
    pub fn intern(&mut self, id: u32, text: impl Into<String>) -> Result<()> {
        if id == RESERVED_STRING_ID {
            return Err(WireError::ReservedStringId);
        }

        let text = text.into();
        if let Some(old) = self.strings.insert(id, text) {
            tracing::debug!("string id {} re-interned (was {:?})", id, old);
        } else {
            tracing::trace!("string id {} interned", id);
        }

        Ok(())
    }

    /// Resolve an id to its string
    pub fn resolve(&self, id: u32) -> Result<&str> {
        self.strings
            .get(&id)
            .map(String::as_str)
            .ok_or(WireError::UnknownString { id })
    }

    /// Check whether an id is interned
    pub fn contains(&self, id: u32) -> bool {
        self.strings.contains_key(&id)
    }

    /// Number of interned strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True if no strings are interned
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
