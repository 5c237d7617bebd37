//! Auxiliary description ("comment") statements.
//!
//! Dialects that store table/column comments via separate statements get them
//! appended after the primary DDL. The `None` style returns empty collections,
//! never a null-equivalent, so callers can iterate unconditionally.

use serde::{Deserialize, Serialize};

use crate::expression::column::ColumnDefinition;
use crate::expression::{AlterTable, CreateTable};
use crate::quoter::Quoter;

/// How a dialect stores table/column descriptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DescriptionStyle {
    /// `COMMENT ON TABLE/COLUMN ... IS '...'` (Postgres, Oracle, DB2, ...).
    CommentOn,
    /// `EXEC sp_addextendedproperty ...` (SQL Server).
    ExtendedProperties,
    /// No separate statements. MySQL renders comments inline instead.
    #[default]
    None,
}

/// Emits description statements for one dialect. Borrowed per call.
#[derive(Debug, Clone)]
pub struct DescriptionGenerator<'a> {
    pub style: DescriptionStyle,
    pub quoter: &'a Quoter,
    pub default_schema: Option<&'a str>,
}

impl DescriptionGenerator<'_> {
    /// Table + column description statements for a CREATE TABLE, in order.
    pub fn create_table_statements(&self, expr: &CreateTable) -> Vec<String> {
        let mut statements = Vec::new();
        let table = &expr.table;
        if let Some(desc) = &table.description {
            if let Some(stmt) =
                self.table_statement(&table.name, table.schema_name.as_deref(), desc)
            {
                statements.push(stmt);
            }
        }
        for column in &table.columns {
            if let Some(desc) = &column.description {
                if let Some(stmt) = self.column_description(
                    &table.name,
                    table.schema_name.as_deref(),
                    &column.name,
                    desc,
                ) {
                    statements.push(stmt);
                }
            }
        }
        statements
    }

    /// The statement updating a table description, if any.
    pub fn alter_table_statement(&self, expr: &AlterTable) -> Option<String> {
        let desc = expr.description.as_ref()?;
        self.table_statement(&expr.table_name, expr.schema_name.as_deref(), desc)
    }

    /// The statement setting one column's description, if any.
    pub fn column_statement(&self, column: &ColumnDefinition) -> Option<String> {
        let desc = column.description.as_ref()?;
        self.column_description(
            &column.table_name,
            column.schema_name.as_deref(),
            &column.name,
            desc,
        )
    }

    fn table_statement(&self, table: &str, schema: Option<&str>, desc: &str) -> Option<String> {
        match self.style {
            DescriptionStyle::CommentOn => Some(format!(
                "COMMENT ON TABLE {} IS {}",
                self.quoter.quote_table_name(table, self.schema_or_default(schema)),
                self.quoter.quote_string(desc)
            )),
            DescriptionStyle::ExtendedProperties => Some(format!(
                "EXEC sp_addextendedproperty @name = N'MS_Description', @value = N'{}', \
                 @level0type = N'SCHEMA', @level0name = '{}', \
                 @level1type = N'TABLE', @level1name = '{}'",
                escape_literal(desc),
                self.schema_or_dbo(schema),
                table
            )),
            DescriptionStyle::None => Option::None,
        }
    }

    fn column_description(
        &self,
        table: &str,
        schema: Option<&str>,
        column: &str,
        desc: &str,
    ) -> Option<String> {
        match self.style {
            DescriptionStyle::CommentOn => Some(format!(
                "COMMENT ON COLUMN {}.{} IS {}",
                self.quoter.quote_table_name(table, self.schema_or_default(schema)),
                self.quoter.quote_column_name(column),
                self.quoter.quote_string(desc)
            )),
            DescriptionStyle::ExtendedProperties => Some(format!(
                "EXEC sp_addextendedproperty @name = N'MS_Description', @value = N'{}', \
                 @level0type = N'SCHEMA', @level0name = '{}', \
                 @level1type = N'TABLE', @level1name = '{}', \
                 @level2type = N'COLUMN', @level2name = '{}'",
                escape_literal(desc),
                self.schema_or_dbo(schema),
                table,
                column
            )),
            DescriptionStyle::None => Option::None,
        }
    }

    fn schema_or_default<'s>(&'s self, schema: Option<&'s str>) -> Option<&'s str> {
        schema.or(self.default_schema)
    }

    fn schema_or_dbo<'s>(&'s self, schema: Option<&'s str>) -> &'s str {
        schema.or(self.default_schema).unwrap_or("dbo")
    }
}

fn escape_literal(s: &str) -> String {
    s.replace('\'', "''")
}
