//! The expression model: abstract, dialect-independent descriptions of one
//! schema-change operation each.
//!
//! Expressions are plain data. They are built upstream (by a fluent DSL or by
//! hand), flow once through a [`Generator`](crate::generator::Generator),
//! and are only read during rendering.

pub mod column;
pub mod constraint;
pub mod data;
pub mod extensions;
pub mod foreign_key;
pub mod index;
pub mod sequence;
pub mod table;
pub mod values;

pub use column::{ColumnDefault, ColumnDefinition, ColumnType, ColumnTypeSpec};
pub use constraint::{ConstraintDefinition, ConstraintKind};
pub use data::{DeleteData, InsertData, Row, UpdateData};
pub use extensions::{Extension, Extensions, IndexAlgorithm};
pub use foreign_key::{CascadeRule, ForeignKeyDefinition};
pub use index::{Direction, IndexColumn, IndexDefinition};
pub use sequence::SequenceDefinition;
pub use table::TableDefinition;
pub use values::{SystemMethod, Value};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTable {
    pub table: TableDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteTable {
    pub table_name: String,
    pub schema_name: Option<String>,
    pub if_exists: bool,
}

/// Alters table metadata. On its own this renders only a table-description
/// statement (or nothing, for dialects without comment support).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTable {
    pub table_name: String,
    pub schema_name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateColumn {
    pub column: ColumnDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterColumn {
    pub column: ColumnDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteColumn {
    pub table_name: String,
    pub schema_name: Option<String>,
    pub column_names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIndex {
    pub index: IndexDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteIndex {
    pub index: IndexDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateForeignKey {
    pub foreign_key: ForeignKeyDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteForeignKey {
    pub foreign_key: ForeignKeyDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSequence {
    pub sequence: SequenceDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteSequence {
    pub sequence_name: String,
    pub schema_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateConstraint {
    pub constraint: ConstraintDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteConstraint {
    pub constraint: ConstraintDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateSchema {
    pub schema_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteSchema {
    pub schema_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameTable {
    pub schema_name: Option<String>,
    pub old_name: String,
    pub new_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenameColumn {
    pub table_name: String,
    pub schema_name: Option<String>,
    pub old_name: String,
    pub new_name: String,
}

/// Raw SQL passed through untouched apart from the statement terminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSql {
    pub sql: String,
}

/// One schema-change operation, dispatched by variant in the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    CreateTable(CreateTable),
    DeleteTable(DeleteTable),
    AlterTable(AlterTable),
    CreateColumn(CreateColumn),
    AlterColumn(AlterColumn),
    DeleteColumn(DeleteColumn),
    CreateIndex(CreateIndex),
    DeleteIndex(DeleteIndex),
    CreateForeignKey(CreateForeignKey),
    DeleteForeignKey(DeleteForeignKey),
    CreateSequence(CreateSequence),
    DeleteSequence(DeleteSequence),
    CreateConstraint(CreateConstraint),
    DeleteConstraint(DeleteConstraint),
    InsertData(InsertData),
    UpdateData(UpdateData),
    DeleteData(DeleteData),
    CreateSchema(CreateSchema),
    DeleteSchema(DeleteSchema),
    RenameTable(RenameTable),
    RenameColumn(RenameColumn),
    RawSql(RawSql),
}

macro_rules! into_expression {
    ($($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for Expression {
                fn from(e: $ty) -> Self {
                    Expression::$ty(e)
                }
            }
        )*
    };
}

into_expression!(
    CreateTable,
    DeleteTable,
    AlterTable,
    CreateColumn,
    AlterColumn,
    DeleteColumn,
    CreateIndex,
    DeleteIndex,
    CreateForeignKey,
    DeleteForeignKey,
    CreateSequence,
    DeleteSequence,
    CreateConstraint,
    DeleteConstraint,
    InsertData,
    UpdateData,
    DeleteData,
    CreateSchema,
    DeleteSchema,
    RenameTable,
    RenameColumn,
    RawSql,
);
