//! SchemaRegistry implementation
//!
//! HashMap-based uid → schema mapping. Schemas are immutable once defined.

use std::collections::HashMap;

use crate::error::{Result, WireError};

use super::TableSchema;

/// Table definitions for one decode session
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<u32, TableSchema>,
}

impl SchemaRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table schema
    ///
    /// Fails with `DuplicateTable` if the uid is already defined; the
    /// registry is left untouched in that case.
    pub fn define(&mut self, schema: TableSchema) -> Result<()> {
        let uid = schema.uid;
        if self.schemas.contains_key(&uid) {
            return Err(WireError::DuplicateTable { uid });
        }

        tracing::debug!(
            "table uid {} defined with {} fields",
            uid,
            schema.fields.len()
        );
        self.schemas.insert(uid, schema);
        Ok(())
    }

    /// Look up a schema by table uid
    pub fn lookup(&self, uid: u32) -> Result<&TableSchema> {
        self.schemas
            .get(&uid)
            .ok_or(WireError::UnknownTable { uid })
    }

    /// Check whether a table uid is defined
    pub fn contains(&self, uid: u32) -> bool {
        self.schemas.contains_key(&uid)
    }

    /// Number of defined tables
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// True if no tables are defined
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
