//! Foreign key definitions.

use serde::{Deserialize, Serialize};

/// Referential action for ON DELETE / ON UPDATE.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CascadeRule {
    /// Emit no clause.
    #[default]
    None,
    Cascade,
    SetNull,
    SetDefault,
    Restrict,
    NoAction,
}

/// A foreign key definition. The foreign and primary column lists are
/// positional pairs and must have equal length; a mismatch is a hard error
/// at rendering time, never a silent truncation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignKeyDefinition {
    /// Constraint name. Empty = derive `FK_<foreign>_<primary>`.
    pub name: String,
    pub foreign_table: String,
    pub foreign_table_schema: Option<String>,
    pub primary_table: String,
    pub primary_table_schema: Option<String>,
    pub foreign_columns: Vec<String>,
    pub primary_columns: Vec<String>,
    pub on_delete: CascadeRule,
    pub on_update: CascadeRule,
}

impl ForeignKeyDefinition {
    pub fn new(foreign_table: impl Into<String>, primary_table: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            foreign_table: foreign_table.into(),
            foreign_table_schema: None,
            primary_table: primary_table.into(),
            primary_table_schema: None,
            foreign_columns: Vec::new(),
            primary_columns: Vec::new(),
            on_delete: CascadeRule::None,
            on_update: CascadeRule::None,
        }
    }
}
