//! Sequence definitions.

use serde::{Deserialize, Serialize};

/// A sequence definition. Absent options emit no clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceDefinition {
    pub name: String,
    pub schema_name: Option<String>,
    pub increment: Option<i64>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub start_with: Option<i64>,
    pub cache: Option<i64>,
    pub cycle: bool,
}

impl SequenceDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema_name: None,
            increment: None,
            min_value: None,
            max_value: None,
            start_with: None,
            cache: None,
            cycle: false,
        }
    }
}
