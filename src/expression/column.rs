//! Column definitions with compile-time type safety.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::extensions::Extensions;
use super::values::Value;

/// Abstract, dialect-independent column types. Each dialect's type map
/// translates these (plus an optional size/precision) into SQL type syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    AnsiString,
    AnsiStringFixed,
    String,
    StringFixed,
    Binary,
    Boolean,
    Byte,
    Int16,
    Int32,
    Int64,
    Currency,
    Decimal,
    Double,
    Float,
    Date,
    DateTime,
    DateTimeOffset,
    Time,
    Guid,
    Xml,
    Json,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A column resolves to exactly one rendered type expression: either a type
/// map entry for its abstract type, or a raw dialect string emitted verbatim.
/// The enum makes the either/or structural instead of two nullable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnTypeSpec {
    Abstract(ColumnType),
    Custom(String),
}

/// Default value of a column, as an explicit three-state option.
///
/// `Unset` means "no DEFAULT clause at all"; `Null` means `DEFAULT NULL`.
/// The two are distinct on purpose.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum ColumnDefault {
    #[default]
    Unset,
    Null,
    Value(Value),
}

/// A column definition. Constructed upstream, read-only during rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub table_name: String,
    pub schema_name: Option<String>,
    pub type_spec: ColumnTypeSpec,
    pub size: Option<u32>,
    pub precision: Option<u32>,
    /// `None` = emit no NULL/NOT NULL clause.
    pub is_nullable: Option<bool>,
    pub is_identity: bool,
    pub is_primary_key: bool,
    pub is_unique: bool,
    pub is_indexed: bool,
    pub default: ColumnDefault,
    pub description: Option<String>,
    pub extensions: Extensions,
}

impl ColumnDefinition {
    /// A column with an abstract type and everything else defaulted.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            table_name: String::new(),
            schema_name: None,
            type_spec: ColumnTypeSpec::Abstract(column_type),
            size: None,
            precision: None,
            is_nullable: None,
            is_identity: false,
            is_primary_key: false,
            is_unique: false,
            is_indexed: false,
            default: ColumnDefault::Unset,
            description: None,
            extensions: Extensions::new(),
        }
    }

    /// A column with a raw dialect type string emitted verbatim.
    pub fn custom(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        Self {
            type_spec: ColumnTypeSpec::Custom(sql_type.into()),
            ..Self::new(name, ColumnType::String)
        }
    }
}
