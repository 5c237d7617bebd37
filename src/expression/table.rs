//! Table definitions.

use serde::{Deserialize, Serialize};

use super::column::ColumnDefinition;

/// A table definition: name, optional schema, ordered columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDefinition {
    pub name: String,
    pub schema_name: Option<String>,
    pub columns: Vec<ColumnDefinition>,
    pub description: Option<String>,
}

impl TableDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema_name: None,
            columns: Vec::new(),
            description: None,
        }
    }
}
