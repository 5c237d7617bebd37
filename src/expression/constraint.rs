//! Named table constraints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintKind {
    PrimaryKey,
    Unique,
}

/// A named PRIMARY KEY or UNIQUE constraint over a column list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintDefinition {
    pub name: String,
    pub table_name: String,
    pub schema_name: Option<String>,
    pub kind: ConstraintKind,
    pub columns: Vec<String>,
}

impl ConstraintDefinition {
    pub fn new(
        name: impl Into<String>,
        table_name: impl Into<String>,
        kind: ConstraintKind,
    ) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            schema_name: None,
            kind,
            columns: Vec::new(),
        }
    }
}
