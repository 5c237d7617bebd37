//! Data (DML) expressions: insert, update, delete.

use serde::{Deserialize, Serialize};

use super::values::Value;

/// One row of (column, value) pairs, in insertion order.
pub type Row = Vec<(String, Value)>;

/// Insert one or more rows; one INSERT statement is rendered per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertData {
    pub table_name: String,
    pub schema_name: Option<String>,
    pub rows: Vec<Row>,
}

/// Update rows matching the criteria, or all rows when `is_all_rows` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateData {
    pub table_name: String,
    pub schema_name: Option<String>,
    pub set: Row,
    pub wheres: Row,
    pub is_all_rows: bool,
}

/// Delete rows matching each criteria row, or all rows when `is_all_rows`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteData {
    pub table_name: String,
    pub schema_name: Option<String>,
    pub rows: Vec<Row>,
    pub is_all_rows: bool,
}
