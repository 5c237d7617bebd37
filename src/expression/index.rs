//! Index definitions.

use serde::{Deserialize, Serialize};

use super::extensions::Extensions;

/// Sort direction of an indexed column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

/// One column of an index, with its sort direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexColumn {
    pub name: String,
    pub direction: Direction,
}

impl IndexColumn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Direction::Ascending,
        }
    }

    pub fn descending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Direction::Descending,
        }
    }
}

/// An index definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDefinition {
    pub name: String,
    pub table_name: String,
    pub schema_name: Option<String>,
    pub is_unique: bool,
    pub is_clustered: bool,
    pub columns: Vec<IndexColumn>,
    pub extensions: Extensions,
}

impl IndexDefinition {
    pub fn new(name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            schema_name: None,
            is_unique: false,
            is_clustered: false,
            columns: Vec::new(),
            extensions: Extensions::new(),
        }
    }
}
