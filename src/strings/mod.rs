//! String Table Module
//!
//! Interned strings keyed by a 32-bit id.
//!
//! ## Responsibilities
//! - Map stable u32 ids to UTF-8 strings for the decode session
//! - Resolve field-name and string-value references from the wire
//! - Reject the reserved id 0
//!
//! ## Ownership
//! One table per decode session, owned by the `Session` and passed by
//! reference into the framer and row codec. Nothing is process-global, so
//! independent sessions never observe each other's ids.

mod table;

pub use table::StringTable;

/// String id 0 is reserved and never maps to a string
pub const RESERVED_STRING_ID: u32 = 0;
