//! The expression-to-SQL dispatcher.
//!
//! One rendering method per expression type. Each method validates required
//! fields, delegates column/type/quoting work to the composed renderer, type
//! map and quoter, applies the compatibility mode for anything the dialect
//! cannot express, and returns finished statement text. A shared helper
//! appends the dialect's statement terminator so every statement is
//! terminated consistently.

pub mod ops;
pub mod registry;

#[cfg(test)]
mod tests;

use crate::column::ColumnRenderer;
use crate::compat::CompatibilityMode;
use crate::description::DescriptionGenerator;
use crate::dialects::{Dialect, Feature};
use crate::error::{Error, Result};
use crate::expression::*;
use crate::quoter::Quoter;
use crate::typemap::TypeMap;

/// Construction-time generator options.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub compatibility: CompatibilityMode,
    /// Set false to opt out of identifier quoting entirely.
    pub quote_identifiers: bool,
    /// Schema applied when an expression names none.
    pub default_schema: Option<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            compatibility: CompatibilityMode::Strict,
            quote_identifiers: true,
            default_schema: None,
        }
    }
}

/// Renders expressions into SQL statement text for one dialect.
///
/// Holds only read-only configuration once constructed; each `generate` call
/// is a pure function of the input expression, so one instance may serve
/// multiple threads concurrently.
#[derive(Debug, Clone)]
pub struct Generator {
    dialect: Dialect,
    options: GeneratorOptions,
}

impl Generator {
    pub fn new(dialect: Dialect) -> Self {
        Self::with_options(dialect, GeneratorOptions::default())
    }

    pub fn with_options(mut dialect: Dialect, options: GeneratorOptions) -> Self {
        if !options.quote_identifiers {
            dialect.quoter.enabled = false;
        }
        Self { dialect, options }
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    pub fn quoter(&self) -> &Quoter {
        &self.dialect.quoter
    }

    pub fn type_map(&self) -> &TypeMap {
        &self.dialect.type_map
    }

    pub fn compatibility(&self) -> CompatibilityMode {
        self.options.compatibility
    }

    pub fn default_schema(&self) -> Option<&str> {
        self.options.default_schema.as_deref()
    }

    /// The column renderer composing this dialect's quoter, type map and
    /// clause pipeline.
    pub fn renderer(&self) -> ColumnRenderer<'_> {
        ColumnRenderer {
            quoter: &self.dialect.quoter,
            type_map: &self.dialect.type_map,
            pipeline: &self.dialect.pipeline,
            compatibility: self.options.compatibility,
        }
    }

    pub fn descriptions(&self) -> DescriptionGenerator<'_> {
        DescriptionGenerator {
            style: self.dialect.descriptions,
            quoter: &self.dialect.quoter,
            default_schema: self.default_schema(),
        }
    }

    /// Quoted, schema-qualified table reference. The schema falls back to the
    /// configured default and is dropped entirely for schema-less dialects.
    pub fn table_ref(&self, name: &str, schema: Option<&str>) -> String {
        let schema = if matches!(self.dialect.features.schemas, Feature::Unsupported(_)) {
            None
        } else {
            schema.or(self.default_schema())
        };
        self.dialect.quoter.quote_table_name(name, schema)
    }

    /// Render an expression to finished SQL text. Multi-statement expressions
    /// are joined with newlines; a loose-mode skip yields an empty string.
    pub fn generate(&self, expression: &Expression) -> Result<String> {
        Ok(self.generate_statements(expression)?.join("\n"))
    }

    /// Render an expression to a sequence of terminated statements.
    /// An empty sequence means the operation produced no SQL (loose-mode
    /// skip, or a no-op such as an AlterTable without a description).
    pub fn generate_statements(&self, expression: &Expression) -> Result<Vec<String>> {
        let raw = match expression {
            Expression::CreateTable(e) => self.create_table(e)?,
            Expression::DeleteTable(e) => vec![self.delete_table(e)?],
            Expression::AlterTable(e) => self.alter_table(e),
            Expression::CreateColumn(e) => self.create_column(e)?,
            Expression::AlterColumn(e) => vec![self.alter_column(e)?],
            Expression::DeleteColumn(e) => self.delete_column(e)?,
            Expression::CreateIndex(e) => vec![self.create_index(e)?],
            Expression::DeleteIndex(e) => vec![self.delete_index(e)?],
            Expression::CreateForeignKey(e) => vec![self.create_foreign_key(e)?],
            Expression::DeleteForeignKey(e) => vec![self.delete_foreign_key(e)?],
            Expression::CreateSequence(e) => vec![self.create_sequence(e)?],
            Expression::DeleteSequence(e) => vec![self.delete_sequence(e)?],
            Expression::CreateConstraint(e) => vec![self.create_constraint(e)?],
            Expression::DeleteConstraint(e) => vec![self.delete_constraint(e)?],
            Expression::InsertData(e) => self.insert_data(e)?,
            Expression::UpdateData(e) => vec![self.update_data(e)?],
            Expression::DeleteData(e) => self.delete_data(e)?,
            Expression::CreateSchema(e) => vec![self.create_schema(e)?],
            Expression::DeleteSchema(e) => vec![self.delete_schema(e)?],
            Expression::RenameTable(e) => vec![self.rename_table(e)?],
            Expression::RenameColumn(e) => vec![self.rename_column(e)?],
            Expression::RawSql(e) => vec![e.sql.clone()],
        };
        Ok(raw
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(|s| self.finish(s))
            .collect())
    }

    fn finish(&self, statement: String) -> String {
        format!("{}{}", statement, self.dialect.terminator)
    }

    /// Ok(true) = proceed; Ok(false) = loose-mode skip; Err = strict failure.
    fn gate(&self, feature: Feature) -> Result<bool> {
        match feature {
            Feature::Supported => Ok(true),
            Feature::Unsupported(message) => {
                self.options.compatibility.handle(message)?;
                Ok(false)
            }
        }
    }

    fn create_table(&self, e: &CreateTable) -> Result<Vec<String>> {
        require(&e.table.name, "table name")?;
        if e.table.columns.is_empty() {
            return Err(Error::malformed(format!(
                "table '{}' has no columns",
                e.table.name
            )));
        }
        let columns = self.renderer().generate_columns(&e.table.columns)?;
        let mut statements = vec![format!(
            "CREATE TABLE {} ({})",
            self.table_ref(&e.table.name, e.table.schema_name.as_deref()),
            columns
        )];
        statements.extend(self.descriptions().create_table_statements(e));
        Ok(statements)
    }

    fn delete_table(&self, e: &DeleteTable) -> Result<String> {
        require(&e.table_name, "table name")?;
        let exists = if e.if_exists { "IF EXISTS " } else { "" };
        Ok(format!(
            "DROP TABLE {}{}",
            exists,
            self.table_ref(&e.table_name, e.schema_name.as_deref())
        ))
    }

    fn alter_table(&self, e: &AlterTable) -> Vec<String> {
        self.descriptions()
            .alter_table_statement(e)
            .into_iter()
            .collect()
    }

    fn create_column(&self, e: &CreateColumn) -> Result<Vec<String>> {
        require(&e.column.table_name, "table name")?;
        let definition = self.renderer().generate(&e.column)?;
        let mut statements = vec![format!(
            "ALTER TABLE {} {} {}",
            self.table_ref(&e.column.table_name, e.column.schema_name.as_deref()),
            self.dialect.add_column_clause,
            definition
        )];
        if let Some(stmt) = self.descriptions().column_statement(&e.column) {
            statements.push(stmt);
        }
        Ok(statements)
    }

    fn alter_column(&self, e: &AlterColumn) -> Result<String> {
        require(&e.column.table_name, "table name")?;
        if !self.gate(self.dialect.features.alter_column)? {
            return Ok(String::new());
        }
        (self.dialect.alter_column)(self, e)
    }

    fn delete_column(&self, e: &DeleteColumn) -> Result<Vec<String>> {
        require(&e.table_name, "table name")?;
        if e.column_names.is_empty() {
            return Err(Error::malformed("delete column names no columns"));
        }
        let table = self.table_ref(&e.table_name, e.schema_name.as_deref());
        Ok(e.column_names
            .iter()
            .map(|name| {
                format!(
                    "ALTER TABLE {} DROP COLUMN {}",
                    table,
                    self.quoter().quote_column_name(name)
                )
            })
            .collect())
    }

    fn create_index(&self, e: &CreateIndex) -> Result<String> {
        require(&e.index.name, "index name")?;
        require(&e.index.table_name, "table name")?;
        if !self.gate(self.dialect.features.indexes)? {
            return Ok(String::new());
        }
        (self.dialect.create_index)(self, e)
    }

    fn delete_index(&self, e: &DeleteIndex) -> Result<String> {
        require(&e.index.name, "index name")?;
        if !self.gate(self.dialect.features.indexes)? {
            return Ok(String::new());
        }
        (self.dialect.drop_index)(self, e)
    }

    fn create_foreign_key(&self, e: &CreateForeignKey) -> Result<String> {
        require(&e.foreign_key.foreign_table, "foreign table name")?;
        require(&e.foreign_key.primary_table, "primary table name")?;
        if !self.gate(self.dialect.features.foreign_keys)? {
            return Ok(String::new());
        }
        let fragment = self.renderer().format_foreign_key(&e.foreign_key)?;
        Ok(format!(
            "ALTER TABLE {} ADD {}",
            self.table_ref(
                &e.foreign_key.foreign_table,
                e.foreign_key.foreign_table_schema.as_deref()
            ),
            fragment
        ))
    }

    fn delete_foreign_key(&self, e: &DeleteForeignKey) -> Result<String> {
        require(&e.foreign_key.foreign_table, "foreign table name")?;
        require(&e.foreign_key.name, "foreign key name")?;
        if !self.gate(self.dialect.features.foreign_keys)? {
            return Ok(String::new());
        }
        (self.dialect.drop_foreign_key)(self, e)
    }

    fn create_sequence(&self, e: &CreateSequence) -> Result<String> {
        require(&e.sequence.name, "sequence name")?;
        if !self.gate(self.dialect.features.sequences)? {
            return Ok(String::new());
        }
        (self.dialect.create_sequence)(self, e)
    }

    fn delete_sequence(&self, e: &DeleteSequence) -> Result<String> {
        require(&e.sequence_name, "sequence name")?;
        if !self.gate(self.dialect.features.sequences)? {
            return Ok(String::new());
        }
        Ok(format!(
            "DROP SEQUENCE {}",
            self.quoter()
                .quote_sequence_name(&e.sequence_name, e.schema_name.as_deref())
        ))
    }

    fn create_constraint(&self, e: &CreateConstraint) -> Result<String> {
        let c = &e.constraint;
        require(&c.name, "constraint name")?;
        require(&c.table_name, "table name")?;
        if c.columns.is_empty() {
            return Err(Error::malformed(format!(
                "constraint '{}' has no columns",
                c.name
            )));
        }
        if !self.gate(self.dialect.features.constraints)? {
            return Ok(String::new());
        }
        let kind = match c.kind {
            ConstraintKind::PrimaryKey => "PRIMARY KEY",
            ConstraintKind::Unique => "UNIQUE",
        };
        let columns = c
            .columns
            .iter()
            .map(|n| self.quoter().quote_column_name(n))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!(
            "ALTER TABLE {} ADD CONSTRAINT {} {} ({})",
            self.table_ref(&c.table_name, c.schema_name.as_deref()),
            self.quoter().quote_constraint_name(&c.name),
            kind,
            columns
        ))
    }

    fn delete_constraint(&self, e: &DeleteConstraint) -> Result<String> {
        require(&e.constraint.name, "constraint name")?;
        require(&e.constraint.table_name, "table name")?;
        if !self.gate(self.dialect.features.constraints)? {
            return Ok(String::new());
        }
        (self.dialect.drop_constraint)(self, e)
    }

    fn insert_data(&self, e: &InsertData) -> Result<Vec<String>> {
        require(&e.table_name, "table name")?;
        if e.rows.is_empty() {
            return Err(Error::malformed("insert has no rows"));
        }
        let table = self.table_ref(&e.table_name, e.schema_name.as_deref());
        e.rows
            .iter()
            .map(|row| {
                if row.is_empty() {
                    return Err(Error::malformed("insert row has no values"));
                }
                let columns = row
                    .iter()
                    .map(|(c, _)| self.quoter().quote_column_name(c))
                    .collect::<Vec<_>>()
                    .join(", ");
                let values = row
                    .iter()
                    .map(|(_, v)| self.quoter().quote_value(v))
                    .collect::<Result<Vec<_>>>()?
                    .join(", ");
                Ok(format!(
                    "INSERT INTO {table} ({columns}) VALUES ({values})"
                ))
            })
            .collect()
    }

    fn update_data(&self, e: &UpdateData) -> Result<String> {
        require(&e.table_name, "table name")?;
        if e.set.is_empty() {
            return Err(Error::malformed("update sets no columns"));
        }
        if !e.is_all_rows && e.wheres.is_empty() {
            return Err(Error::malformed(
                "update requires criteria or an explicit all-rows update",
            ));
        }
        let set = e
            .set
            .iter()
            .map(|(c, v)| {
                Ok(format!(
                    "{} = {}",
                    self.quoter().quote_column_name(c),
                    self.quoter().quote_value(v)?
                ))
            })
            .collect::<Result<Vec<_>>>()?
            .join(", ");
        let criteria = if e.is_all_rows {
            "1 = 1".to_string()
        } else {
            self.where_clause(&e.wheres)?
        };
        Ok(format!(
            "UPDATE {} SET {} WHERE {}",
            self.table_ref(&e.table_name, e.schema_name.as_deref()),
            set,
            criteria
        ))
    }

    fn delete_data(&self, e: &DeleteData) -> Result<Vec<String>> {
        require(&e.table_name, "table name")?;
        let table = self.table_ref(&e.table_name, e.schema_name.as_deref());
        if e.is_all_rows {
            return Ok(vec![format!("DELETE FROM {table} WHERE 1 = 1")]);
        }
        if e.rows.is_empty() {
            return Err(Error::malformed(
                "delete requires criteria or an explicit all-rows delete",
            ));
        }
        e.rows
            .iter()
            .map(|row| {
                if row.is_empty() {
                    return Err(Error::malformed("delete criteria row is empty"));
                }
                Ok(format!(
                    "DELETE FROM {table} WHERE {}",
                    self.where_clause(row)?
                ))
            })
            .collect()
    }

    fn where_clause(&self, row: &Row) -> Result<String> {
        Ok(row
            .iter()
            .map(|(c, v)| {
                let column = self.quoter().quote_column_name(c);
                Ok(match v {
                    Value::Null => format!("{column} IS NULL"),
                    _ => format!("{column} = {}", self.quoter().quote_value(v)?),
                })
            })
            .collect::<Result<Vec<_>>>()?
            .join(" AND "))
    }

    fn create_schema(&self, e: &CreateSchema) -> Result<String> {
        require(&e.schema_name, "schema name")?;
        if !self.gate(self.dialect.features.schemas)? {
            return Ok(String::new());
        }
        Ok(format!(
            "CREATE SCHEMA {}",
            self.quoter().quote_schema_name(&e.schema_name)
        ))
    }

    fn delete_schema(&self, e: &DeleteSchema) -> Result<String> {
        require(&e.schema_name, "schema name")?;
        if !self.gate(self.dialect.features.schemas)? {
            return Ok(String::new());
        }
        Ok(format!(
            "DROP SCHEMA {}",
            self.quoter().quote_schema_name(&e.schema_name)
        ))
    }

    fn rename_table(&self, e: &RenameTable) -> Result<String> {
        require(&e.old_name, "table name")?;
        require(&e.new_name, "new table name")?;
        (self.dialect.rename_table)(self, e)
    }

    fn rename_column(&self, e: &RenameColumn) -> Result<String> {
        require(&e.table_name, "table name")?;
        require(&e.old_name, "column name")?;
        require(&e.new_name, "new column name")?;
        if !self.gate(self.dialect.features.rename_column)? {
            return Ok(String::new());
        }
        (self.dialect.rename_column)(self, e)
    }
}

fn require(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::malformed(format!("{what} must not be empty")))
    } else {
        Ok(())
    }
}
