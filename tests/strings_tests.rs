//! String Table Tests
//!
//! Tests for interning and resolving session-scoped strings.

use tablewire::{StringTable, WireError};

// =============================================================================
// Intern / Resolve Tests
// =============================================================================

#[test]
fn test_intern_and_resolve() {
    let mut strings = StringTable::new();
    strings.intern(1, "age").unwrap();
    strings.intern(2, "name").unwrap();

    assert_eq!(strings.resolve(1).unwrap(), "age");
    assert_eq!(strings.resolve(2).unwrap(), "name");
}

#[test]
fn test_resolve_unknown_id() {
    let strings = StringTable::new();
    let err = strings.resolve(7).unwrap_err();

    assert!(matches!(err, WireError::UnknownString { id: 7 }));
}

#[test]
fn test_reintern_overwrites() {
    let mut strings = StringTable::new();
    strings.intern(5, "first").unwrap();
    strings.intern(5, "second").unwrap();

    // Last writer wins
    assert_eq!(strings.resolve(5).unwrap(), "second");
    assert_eq!(strings.len(), 1);
}

#[test]
fn test_empty_string_is_valid() {
    let mut strings = StringTable::new();
    strings.intern(3, "").unwrap();

    assert_eq!(strings.resolve(3).unwrap(), "");
}

// =============================================================================
// Reserved Id Tests
// =============================================================================

#[test]
fn test_intern_reserved_id_fails() {
    let mut strings = StringTable::new();
    let err = strings.intern(0, "nope").unwrap_err();

    assert!(matches!(err, WireError::ReservedStringId));
    assert!(strings.is_empty());
}

#[test]
fn test_resolve_reserved_id_is_unknown() {
    let strings = StringTable::new();
    let err = strings.resolve(0).unwrap_err();

    assert!(matches!(err, WireError::UnknownString { id: 0 }));
}

// =============================================================================
// Accessor Tests
// =============================================================================

#[test]
fn test_contains_and_len() {
    let mut strings = StringTable::new();
    assert!(strings.is_empty());
    assert!(!strings.contains(1));

    strings.intern(1, "x").unwrap();
    strings.intern(9, "y").unwrap();

    assert!(strings.contains(1));
    assert!(strings.contains(9));
    assert!(!strings.contains(2));
    assert_eq!(strings.len(), 2);
}
