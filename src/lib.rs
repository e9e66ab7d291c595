//! # tablewire
//!
//! A compact binary wire-format codec for typed tables with:
//! - String interning (u32 id ↔ UTF-8 string)
//! - Table schemas (ordered, fixed-width field lists)
//! - Fixed-width row encoding derived from the schema
//! - Session-scoped registries — no global state
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Byte Stream                            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Message Framer                            │
//! │           (tag → String / Table / Entry)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼────────────────┐
//!          │            │                │
//!          ▼            ▼                ▼
//!   ┌─────────────┐ ┌─────────────┐ ┌─────────────┐
//!   │ StringTable │ │   Schema    │ │  Row Codec  │
//!   │  (intern)   │ │  Registry   │ │ (per-field) │
//!   └─────────────┘ └─────────────┘ └─────────────┘
//! ```
//!
//! A `Session` owns one `StringTable` and one `SchemaRegistry` and pulls
//! messages from a `std::io::Read` source. Registries are updated only after
//! a message fully decodes, so every message applies all-or-nothing.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod strings;
pub mod schema;
pub mod row;
pub mod framer;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, WireError};
pub use config::SessionConfig;
pub use framer::{Message, MessageKind};
pub use row::{Entry, Value};
pub use schema::{FieldDef, FieldType, SchemaRegistry, TableSchema};
pub use session::Session;
pub use strings::StringTable;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of tablewire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
