//! DML rendering: insert, update, delete.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use super::generator;
use crate::error::Error;
use crate::expression::*;

#[test]
fn test_insert_renders_one_statement_per_row() {
    let expr = InsertData {
        table_name: "users".into(),
        schema_name: None,
        rows: vec![
            vec![
                ("name".into(), Value::from("Ada")),
                ("active".into(), Value::from(true)),
            ],
            vec![
                ("name".into(), Value::from("O'Brien")),
                ("active".into(), Value::from(false)),
            ],
        ],
    };
    let stmts = generator("postgres").generate_statements(&expr.into()).unwrap();
    assert_eq!(
        stmts,
        vec![
            "INSERT INTO \"users\" (\"name\", \"active\") VALUES ('Ada', true);".to_string(),
            "INSERT INTO \"users\" (\"name\", \"active\") VALUES ('O''Brien', false);".to_string(),
        ]
    );
}

#[test]
fn test_insert_system_method_renders_native_function() {
    let expr = InsertData {
        table_name: "users".into(),
        schema_name: None,
        rows: vec![vec![
            ("id".into(), Value::from(SystemMethod::NewGuid)),
            ("created_at".into(), Value::from(SystemMethod::CurrentDateTime)),
        ]],
    };
    assert_eq!(
        generator("postgres").generate(&expr.into()).unwrap(),
        "INSERT INTO \"users\" (\"id\", \"created_at\") VALUES (gen_random_uuid(), now());"
    );
}

#[test]
fn test_insert_unmapped_system_method_is_unsupported() {
    let expr = InsertData {
        table_name: "users".into(),
        schema_name: None,
        rows: vec![vec![("id".into(), Value::from(SystemMethod::NewGuid))]],
    };
    let err = generator("sqlite").generate(&expr.into()).unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));
}

#[test]
fn test_insert_without_rows_is_malformed() {
    let expr = InsertData {
        table_name: "users".into(),
        schema_name: None,
        rows: vec![],
    };
    let err = generator("postgres").generate(&expr.into()).unwrap_err();
    assert!(matches!(err, Error::Malformed(_)));
}

#[test]
fn test_update_with_criteria() {
    let expr = UpdateData {
        table_name: "users".into(),
        schema_name: None,
        set: vec![("active".into(), Value::from(false))],
        wheres: vec![
            ("name".into(), Value::from("Ada")),
            ("deleted_at".into(), Value::Null),
        ],
        is_all_rows: false,
    };
    assert_eq!(
        generator("postgres").generate(&expr.into()).unwrap(),
        "UPDATE \"users\" SET \"active\" = false WHERE \"name\" = 'Ada' AND \"deleted_at\" IS NULL;"
    );
}

#[test]
fn test_update_all_rows_is_explicit() {
    let expr = UpdateData {
        table_name: "users".into(),
        schema_name: None,
        set: vec![("active".into(), Value::from(true))],
        wheres: vec![],
        is_all_rows: true,
    };
    assert_eq!(
        generator("postgres").generate(&expr.into()).unwrap(),
        "UPDATE \"users\" SET \"active\" = true WHERE 1 = 1;"
    );
}

#[test]
fn test_update_without_criteria_is_malformed() {
    let expr = UpdateData {
        table_name: "users".into(),
        schema_name: None,
        set: vec![("active".into(), Value::from(true))],
        wheres: vec![],
        is_all_rows: false,
    };
    let err = generator("postgres").generate(&expr.into()).unwrap_err();
    assert!(matches!(err, Error::Malformed(_)));
}

#[test]
fn test_delete_per_criteria_row() {
    let expr = DeleteData {
        table_name: "sessions".into(),
        schema_name: None,
        rows: vec![
            vec![("user_id".into(), Value::from(7))],
            vec![("user_id".into(), Value::Null)],
        ],
        is_all_rows: false,
    };
    let stmts = generator("postgres").generate_statements(&expr.into()).unwrap();
    assert_eq!(
        stmts,
        vec![
            "DELETE FROM \"sessions\" WHERE \"user_id\" = 7;".to_string(),
            "DELETE FROM \"sessions\" WHERE \"user_id\" IS NULL;".to_string(),
        ]
    );
}

#[test]
fn test_delete_all_rows() {
    let expr = DeleteData {
        table_name: "sessions".into(),
        schema_name: None,
        rows: vec![],
        is_all_rows: true,
    };
    assert_eq!(
        generator("postgres").generate(&expr.into()).unwrap(),
        "DELETE FROM \"sessions\" WHERE 1 = 1;"
    );
}

#[test]
fn test_datetime_literal_formats_differ_by_dialect() {
    let dt = NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap();
    let expr = InsertData {
        table_name: "events".into(),
        schema_name: None,
        rows: vec![vec![("at".into(), Value::from(dt))]],
    };
    let expr: Expression = expr.into();

    assert_eq!(
        generator("postgres").generate(&expr).unwrap(),
        "INSERT INTO \"events\" (\"at\") VALUES ('2024-01-15T10:30:00');"
    );
    assert_eq!(
        generator("mysql").generate(&expr).unwrap(),
        "INSERT INTO `events` (`at`) VALUES ('2024-01-15 10:30:00');"
    );
    assert_eq!(
        generator("oracle").generate(&expr).unwrap(),
        "INSERT INTO \"events\" (\"at\") VALUES (to_date('2024-01-15T10:30:00', 'yyyy-mm-dd\"T\"HH24:MI:SS'));"
    );
}

#[test]
fn test_bool_literal_formats_differ_by_dialect() {
    let expr: Expression = InsertData {
        table_name: "flags".into(),
        schema_name: None,
        rows: vec![vec![("on".into(), Value::from(true))]],
    }
    .into();

    assert_eq!(
        generator("sqlserver").generate(&expr).unwrap(),
        "INSERT INTO [flags] ([on]) VALUES (1);"
    );
    assert_eq!(
        generator("snowflake").generate(&expr).unwrap(),
        "INSERT INTO \"flags\" (\"on\") VALUES (true);"
    );
}
