//! Compatibility-mode behavior across the feature gates.

use pretty_assertions::assert_eq;

use super::{generator, loose};
use crate::error::Error;
use crate::expression::*;

#[test]
fn test_strict_error_carries_the_feature_message() {
    let mut foreign_key = ForeignKeyDefinition::new("orders", "users");
    foreign_key.foreign_columns = vec!["user_id".into()];
    foreign_key.primary_columns = vec!["id".into()];
    let err = generator("sqlite")
        .generate(&CreateForeignKey { foreign_key }.into())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "operation not supported: SQLite cannot add a foreign key to an existing table; recreate the table instead"
    );
}

#[test]
fn test_loose_skip_is_observable_as_empty_output() {
    let expr: Expression = CreateSchema {
        schema_name: "audit".into(),
    }
    .into();
    assert!(matches!(
        generator("sqlite").generate(&expr).unwrap_err(),
        Error::Unsupported(_)
    ));
    assert_eq!(loose("sqlite").generate(&expr).unwrap(), "");
    assert_eq!(
        loose("sqlite").generate_statements(&expr).unwrap(),
        Vec::<String>::new()
    );
}

#[test]
fn test_loose_mode_does_not_mask_malformed_expressions() {
    let mut foreign_key = ForeignKeyDefinition::new("orders", "users");
    foreign_key.foreign_columns = vec!["user_id".into(), "tenant_id".into()];
    foreign_key.primary_columns = vec!["id".into()];
    let err = loose("postgres")
        .generate(&CreateForeignKey { foreign_key }.into())
        .unwrap_err();
    assert!(matches!(err, Error::ForeignKeyColumnCountMismatch { .. }));
}

#[test]
fn test_loose_mode_skips_sequences_on_mysql() {
    let g = loose("mysql");
    let sequence = SequenceDefinition::new("s");
    assert_eq!(g.generate(&CreateSequence { sequence }.into()).unwrap(), "");
    let expr = DeleteSequence {
        sequence_name: "s".into(),
        schema_name: None,
    };
    assert_eq!(g.generate(&expr.into()).unwrap(), "");
}

#[test]
fn test_supported_features_ignore_the_mode() {
    // Loose mode only affects unsupported features; everything else renders
    // identically in both modes.
    let expr: Expression = DeleteTable {
        table_name: "users".into(),
        schema_name: None,
        if_exists: false,
    }
    .into();
    assert_eq!(
        generator("postgres").generate(&expr).unwrap(),
        loose("postgres").generate(&expr).unwrap()
    );
}

#[test]
fn test_schemas_are_dropped_for_schemaless_dialects() {
    let expr: Expression = DeleteTable {
        table_name: "users".into(),
        schema_name: Some("app".into()),
        if_exists: false,
    }
    .into();
    assert_eq!(
        generator("sqlite").generate(&expr).unwrap(),
        "DROP TABLE \"users\";"
    );
    assert_eq!(
        generator("postgres").generate(&expr).unwrap(),
        "DROP TABLE \"app\".\"users\";"
    );
}
