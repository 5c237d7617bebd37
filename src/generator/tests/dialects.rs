//! Per-dialect statement shapes.

use pretty_assertions::assert_eq;

use super::{generator, loose, users_table};
use crate::error::Error;
use crate::expression::*;
use crate::expression::extensions::{Extension, IndexAlgorithm};

#[test]
fn test_mysql_create_table_inline_extras() {
    let mut expr = users_table();
    expr.table.columns[1]
        .extensions
        .push(Extension::ColumnCharset("utf8mb4".into()));
    expr.table.columns[1].description = Some("login email".into());
    let sql = generator("mysql").generate(&expr.into()).unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE `users` (`id` INT AUTO_INCREMENT, `email` VARCHAR(255) CHARACTER SET utf8mb4 NOT NULL COMMENT 'login email', PRIMARY KEY (`id`));"
    );
}

#[test]
fn test_mysql_statement_shapes() {
    let g = generator("mysql");

    let expr = RenameTable {
        schema_name: None,
        old_name: "users".into(),
        new_name: "people".into(),
    };
    assert_eq!(
        g.generate(&expr.into()).unwrap(),
        "RENAME TABLE `users` TO `people`;"
    );

    let index = IndexDefinition::new("ix_users_email", "users");
    assert_eq!(
        g.generate(&DeleteIndex { index }.into()).unwrap(),
        "DROP INDEX `ix_users_email` ON `users`;"
    );

    let mut foreign_key = ForeignKeyDefinition::new("orders", "users");
    foreign_key.name = "FK_orders_users".into();
    assert_eq!(
        g.generate(&DeleteForeignKey { foreign_key }.into()).unwrap(),
        "ALTER TABLE `orders` DROP FOREIGN KEY `FK_orders_users`;"
    );

    let constraint = ConstraintDefinition::new("PK_users", "users", ConstraintKind::PrimaryKey);
    assert_eq!(
        g.generate(&DeleteConstraint { constraint }.into()).unwrap(),
        "ALTER TABLE `users` DROP PRIMARY KEY;"
    );

    let mut column = ColumnDefinition::new("email", ColumnType::String);
    column.table_name = "users".into();
    column.size = Some(500);
    assert_eq!(
        g.generate(&AlterColumn { column }.into()).unwrap(),
        "ALTER TABLE `users` MODIFY COLUMN `email` VARCHAR(500);"
    );
}

#[test]
fn test_mysql_sequences_are_unsupported() {
    let sequence = SequenceDefinition::new("s");
    let err = generator("mysql")
        .generate(&CreateSequence { sequence }.into())
        .unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));
}

#[test]
fn test_sqlite_single_identity_primary_key_renders_inline() {
    let mut expr = users_table();
    expr.table.columns[1].size = None;
    let sql = generator("sqlite").generate(&expr.into()).unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE \"users\" (\"id\" INTEGER PRIMARY KEY AUTOINCREMENT, \"email\" TEXT NOT NULL);"
    );
}

#[test]
fn test_sqlite_compound_primary_key_stays_table_level() {
    let mut table = TableDefinition::new("memberships");
    let mut user_id = ColumnDefinition::new("user_id", ColumnType::Int32);
    user_id.is_primary_key = true;
    let mut group_id = ColumnDefinition::new("group_id", ColumnType::Int32);
    group_id.is_primary_key = true;
    table.columns = vec![user_id, group_id];
    let sql = generator("sqlite")
        .generate(&CreateTable { table }.into())
        .unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE \"memberships\" (\"user_id\" INTEGER, \"group_id\" INTEGER, PRIMARY KEY (\"user_id\", \"group_id\"));"
    );
}

#[test]
fn test_sqlite_alter_column_gated_by_compatibility() {
    let mut column = ColumnDefinition::new("email", ColumnType::String);
    column.table_name = "users".into();
    let expr: Expression = AlterColumn { column }.into();

    let err = generator("sqlite").generate(&expr).unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));

    // Loose mode degrades to no statements, observably.
    assert_eq!(loose("sqlite").generate(&expr).unwrap(), "");
    assert!(loose("sqlite").generate_statements(&expr).unwrap().is_empty());
}

#[test]
fn test_sqlserver_create_table_with_identity() {
    let mut expr = users_table();
    expr.table.columns[0].is_nullable = Some(false);
    let sql = generator("sqlserver").generate(&expr.into()).unwrap();
    assert_eq!(
        sql,
        "CREATE TABLE [users] ([id] INT IDENTITY(1,1) NOT NULL, [email] NVARCHAR(255) NOT NULL, PRIMARY KEY ([id]));"
    );
}

#[test]
fn test_sqlserver_identity_seed_extension() {
    let mut column = ColumnDefinition::new("id", ColumnType::Int64);
    column.table_name = "events".into();
    column.is_identity = true;
    column
        .extensions
        .push(Extension::IdentitySeed { seed: 100, increment: 5 });
    let sql = generator("sqlserver")
        .generate(&CreateColumn { column }.into())
        .unwrap();
    assert_eq!(
        sql,
        "ALTER TABLE [events] ADD [id] BIGINT IDENTITY(100,5);"
    );
}

#[test]
fn test_sqlserver_clustered_index_and_drop() {
    let g = generator("sqlserver");
    let mut index = IndexDefinition::new("ix_users_email", "users");
    index.is_unique = true;
    index.is_clustered = true;
    index.columns = vec![IndexColumn::new("email")];
    assert_eq!(
        g.generate(&CreateIndex { index: index.clone() }.into()).unwrap(),
        "CREATE UNIQUE CLUSTERED INDEX [ix_users_email] ON [users] ([email] ASC);"
    );
    assert_eq!(
        g.generate(&DeleteIndex { index }.into()).unwrap(),
        "DROP INDEX [ix_users_email] ON [users];"
    );
}

#[test]
fn test_sqlserver_rename_uses_sp_rename() {
    let g = generator("sqlserver");
    let expr = RenameTable {
        schema_name: Some("dbo".into()),
        old_name: "users".into(),
        new_name: "people".into(),
    };
    assert_eq!(
        g.generate(&expr.into()).unwrap(),
        "EXEC sp_rename '[dbo].[users]', 'people';"
    );

    let expr = RenameColumn {
        table_name: "users".into(),
        schema_name: None,
        old_name: "email".into(),
        new_name: "mail".into(),
    };
    assert_eq!(
        g.generate(&expr.into()).unwrap(),
        "EXEC sp_rename '[users].[email]', 'mail', 'COLUMN';"
    );
}

#[test]
fn test_sqlserver_column_description_uses_extended_properties() {
    let mut column = ColumnDefinition::new("email", ColumnType::String);
    column.table_name = "users".into();
    column.description = Some("login email".into());
    let stmts = generator("sqlserver")
        .generate_statements(&CreateColumn { column }.into())
        .unwrap();
    assert_eq!(stmts.len(), 2);
    assert!(stmts[1].starts_with("EXEC sp_addextendedproperty @name = N'MS_Description'"));
    assert!(stmts[1].contains("@level0name = 'dbo'"));
    assert!(stmts[1].contains("@level2type = N'COLUMN', @level2name = 'email'"));
}

#[test]
fn test_oracle_default_precedes_not_null() {
    let mut column = ColumnDefinition::new("age", ColumnType::Int32);
    column.table_name = "users".into();
    column.is_nullable = Some(false);
    column.default = ColumnDefault::Value(Value::from(0));
    let sql = generator("oracle")
        .generate(&CreateColumn { column }.into())
        .unwrap();
    assert_eq!(
        sql,
        "ALTER TABLE \"users\" ADD \"age\" NUMBER(10) DEFAULT 0 NOT NULL;"
    );
}

#[test]
fn test_oracle_identity_is_unsupported() {
    let err = generator("oracle")
        .generate(&users_table().into())
        .unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));
}

#[test]
fn test_oracle_modify_column() {
    let mut column = ColumnDefinition::new("email", ColumnType::String);
    column.table_name = "users".into();
    column.size = Some(500);
    let sql = generator("oracle")
        .generate(&AlterColumn { column }.into())
        .unwrap();
    assert_eq!(
        sql,
        "ALTER TABLE \"users\" MODIFY \"email\" NVARCHAR2(500);"
    );
}

#[test]
fn test_firebird_alter_column_changes_type_only() {
    let mut column = ColumnDefinition::new("name", ColumnType::String);
    column.table_name = "users".into();
    column.size = Some(500);
    let sql = generator("firebird")
        .generate(&AlterColumn { column }.into())
        .unwrap();
    assert_eq!(
        sql,
        "ALTER TABLE \"users\" ALTER COLUMN \"name\" TYPE VARCHAR(500);"
    );
}

#[test]
fn test_firebird_sequence_cache_dropped_in_loose_mode() {
    let mut sequence = SequenceDefinition::new("s");
    sequence.increment = Some(1);
    sequence.cache = Some(10);
    let expr: Expression = CreateSequence { sequence }.into();

    let err = generator("firebird").generate(&expr).unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));
    assert_eq!(
        loose("firebird").generate(&expr).unwrap(),
        "CREATE SEQUENCE \"s\" INCREMENT BY 1;"
    );
}

#[test]
fn test_postgres_sequence_rejects_cache_of_one() {
    let mut sequence = SequenceDefinition::new("s");
    sequence.cache = Some(1);
    let expr: Expression = CreateSequence { sequence }.into();

    let err = generator("postgres").generate(&expr).unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));
    // Loose mode skips the whole statement.
    assert!(loose("postgres").generate_statements(&expr).unwrap().is_empty());
}

#[test]
fn test_postgres_index_algorithm_extension() {
    let mut index = IndexDefinition::new("ix_docs_tags", "docs");
    index.columns = vec![IndexColumn::new("tags")];
    index
        .extensions
        .push(Extension::IndexAlgorithm(IndexAlgorithm::Gin));
    let sql = generator("postgres")
        .generate(&CreateIndex { index }.into())
        .unwrap();
    assert_eq!(
        sql,
        "CREATE INDEX \"ix_docs_tags\" ON \"docs\" USING GIN (\"tags\" ASC);"
    );
}

#[test]
fn test_db2_identity_clause() {
    let mut column = ColumnDefinition::new("id", ColumnType::Int32);
    column.table_name = "events".into();
    column.is_identity = true;
    column.is_nullable = Some(false);
    let sql = generator("db2")
        .generate(&CreateColumn { column }.into())
        .unwrap();
    assert_eq!(
        sql,
        "ALTER TABLE \"events\" ADD COLUMN \"id\" INTEGER NOT NULL GENERATED BY DEFAULT AS IDENTITY;"
    );
}

#[test]
fn test_snowflake_indexes_are_unsupported() {
    let mut index = IndexDefinition::new("ix", "users");
    index.columns = vec![IndexColumn::new("email")];
    let expr: Expression = CreateIndex { index }.into();
    let err = generator("snowflake").generate(&expr).unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));
    assert_eq!(loose("snowflake").generate(&expr).unwrap(), "");
}

#[test]
fn test_snowflake_identity_start_increment() {
    let mut column = ColumnDefinition::new("id", ColumnType::Int64);
    column.table_name = "events".into();
    column
        .extensions
        .push(Extension::IdentitySeed { seed: 10, increment: 10 });
    column.is_identity = true;
    let sql = generator("snowflake")
        .generate(&CreateColumn { column }.into())
        .unwrap();
    assert_eq!(
        sql,
        "ALTER TABLE \"events\" ADD COLUMN \"id\" BIGINT IDENTITY START 10 INCREMENT 10;"
    );
}

#[test]
fn test_hana_string_tiers() {
    let g = generator("hana");
    let mut column = ColumnDefinition::new("body", ColumnType::String);
    column.table_name = "docs".into();
    column.size = Some(5000);
    assert_eq!(
        g.generate(&CreateColumn { column: column.clone() }.into()).unwrap(),
        "ALTER TABLE \"docs\" ADD \"body\" NVARCHAR(5000);"
    );
    column.size = Some(5001);
    assert_eq!(
        g.generate(&CreateColumn { column }.into()).unwrap(),
        "ALTER TABLE \"docs\" ADD \"body\" NCLOB;"
    );
}

#[test]
fn test_sqlanywhere_autoincrement_and_rename() {
    let g = generator("sqlanywhere");
    let mut column = ColumnDefinition::new("id", ColumnType::Int32);
    column.table_name = "events".into();
    column.is_identity = true;
    column.is_nullable = Some(false);
    assert_eq!(
        g.generate(&CreateColumn { column }.into()).unwrap(),
        "ALTER TABLE \"events\" ADD \"id\" INTEGER NOT NULL DEFAULT AUTOINCREMENT;"
    );

    let expr = RenameTable {
        schema_name: None,
        old_name: "users".into(),
        new_name: "people".into(),
    };
    assert_eq!(
        g.generate(&expr.into()).unwrap(),
        "ALTER TABLE \"users\" RENAME \"people\";"
    );
}
