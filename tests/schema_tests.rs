//! Schema Tests
//!
//! Tests for field types, table schemas, and the registry.

use tablewire::{FieldDef, FieldType, SchemaRegistry, StringTable, TableSchema, WireError};

// =============================================================================
// FieldType Tests
// =============================================================================

#[test]
fn test_field_type_tags_roundtrip() {
    for ft in [
        FieldType::Float,
        FieldType::Int,
        FieldType::Bool,
        FieldType::Str,
    ] {
        assert_eq!(FieldType::from_tag(ft.tag()).unwrap(), ft);
    }
}

#[test]
fn test_field_type_unknown_tag() {
    let err = FieldType::from_tag(0x04).unwrap_err();
    assert!(matches!(err, WireError::UnknownFieldType { tag: 0x04 }));

    let err = FieldType::from_tag(0xFF).unwrap_err();
    assert!(matches!(err, WireError::UnknownFieldType { tag: 0xFF }));
}

#[test]
fn test_field_type_widths() {
    assert_eq!(FieldType::Float.width(), 8);
    assert_eq!(FieldType::Int.width(), 8);
    assert_eq!(FieldType::Bool.width(), 1);
    assert_eq!(FieldType::Str.width(), 4);
}

// =============================================================================
// TableSchema Tests
// =============================================================================

#[test]
fn test_row_width() {
    let schema = TableSchema::new(
        1,
        vec![
            FieldDef::new(FieldType::Float, 1),
            FieldDef::new(FieldType::Int, 2),
            FieldDef::new(FieldType::Bool, 3),
            FieldDef::new(FieldType::Str, 4),
        ],
    );

    assert_eq!(schema.row_width(), 8 + 8 + 1 + 4);
}

#[test]
fn test_empty_schema_row_width() {
    let schema = TableSchema::new(1, vec![]);
    assert_eq!(schema.row_width(), 0);
}

#[test]
fn test_check_names_is_lazy() {
    // A schema may be built while its name strings are still unknown;
    // the check only fails when actually performed.
    let schema = TableSchema::new(1, vec![FieldDef::new(FieldType::Int, 42)]);

    let mut strings = StringTable::new();
    let err = schema.check_names(&strings).unwrap_err();
    assert!(matches!(err, WireError::UnknownString { id: 42 }));

    strings.intern(42, "count").unwrap();
    schema.check_names(&strings).unwrap();
}

// =============================================================================
// SchemaRegistry Tests
// =============================================================================

#[test]
fn test_define_and_lookup() {
    let mut registry = SchemaRegistry::new();
    let schema = TableSchema::new(10, vec![FieldDef::new(FieldType::Int, 1)]);

    registry.define(schema.clone()).unwrap();

    let found = registry.lookup(10).unwrap();
    assert_eq!(*found, schema);
    assert!(registry.contains(10));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_lookup_unknown_table() {
    let registry = SchemaRegistry::new();
    let err = registry.lookup(99).unwrap_err();

    assert!(matches!(err, WireError::UnknownTable { uid: 99 }));
}

#[test]
fn test_duplicate_define_fails_and_keeps_original() {
    let mut registry = SchemaRegistry::new();
    let original = TableSchema::new(10, vec![FieldDef::new(FieldType::Int, 1)]);
    let replacement = TableSchema::new(10, vec![FieldDef::new(FieldType::Bool, 2)]);

    registry.define(original.clone()).unwrap();
    let err = registry.define(replacement).unwrap_err();

    assert!(matches!(err, WireError::DuplicateTable { uid: 10 }));
    assert_eq!(registry.len(), 1);
    assert_eq!(*registry.lookup(10).unwrap(), original);
}

#[test]
fn test_define_empty_field_list() {
    let mut registry = SchemaRegistry::new();
    registry.define(TableSchema::new(3, vec![])).unwrap();

    assert!(registry.lookup(3).unwrap().fields.is_empty());
}
