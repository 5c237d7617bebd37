//! Firebird dialect.

use crate::column::{self, ClausePipeline, ColumnRenderer};
use crate::description::DescriptionStyle;
use crate::dialects::{Dialect, Feature};
use crate::error::Result;
use crate::expression::column::{ColumnDefinition, ColumnType};
use crate::expression::values::SystemMethod;
use crate::expression::{AlterColumn, CreateSequence};
use crate::generator::{Generator, ops};
use crate::quoter::Quoter;
use crate::typemap::TypeMap;

pub fn dialect() -> Dialect {
    let mut d = Dialect::base("firebird", quoter(), type_map());
    d.pipeline = ClausePipeline::with_steps(vec![
        column::format_name,
        column::format_type,
        column::format_default,
        column::format_nullable,
        format_identity,
        column::format_unique,
    ]);
    d.add_column_clause = "ADD";
    d.features.schemas = Feature::Unsupported("Firebird does not support schemas");
    d.descriptions = DescriptionStyle::CommentOn;
    d.alter_column = alter_column;
    d.create_sequence = create_sequence;
    d
}

fn quoter() -> Quoter {
    Quoter {
        system_method,
        ..Quoter::ansi()
    }
}

fn system_method(m: SystemMethod) -> Option<&'static str> {
    match m {
        SystemMethod::NewGuid | SystemMethod::NewSequentialId => Some("gen_uuid()"),
        SystemMethod::CurrentDateTime => Some("CURRENT_TIMESTAMP"),
        SystemMethod::CurrentUtcDateTime => None,
        SystemMethod::CurrentUser => Some("CURRENT_USER"),
    }
}

fn format_identity(r: &ColumnRenderer<'_>, c: &ColumnDefinition) -> Result<String> {
    if c.is_identity {
        return r
            .compatibility
            .handle("Firebird does not support identity columns; use a sequence and a trigger");
    }
    Ok(String::new())
}

/// Firebird alters one aspect per statement; type changes use `TYPE`.
fn alter_column(g: &Generator, e: &AlterColumn) -> Result<String> {
    let r = g.renderer();
    let type_sql = column::format_type(&r, &e.column)?;
    Ok(format!(
        "ALTER TABLE {} ALTER COLUMN {} TYPE {}",
        g.table_ref(&e.column.table_name, e.column.schema_name.as_deref()),
        g.quoter().quote_column_name(&e.column.name),
        type_sql
    ))
}

fn create_sequence(g: &Generator, e: &CreateSequence) -> Result<String> {
    if e.sequence.cache.is_some() {
        // Strict fails; loose drops the clause and keeps the statement.
        g.compatibility()
            .handle("Firebird sequences do not support a cache size")?;
    }
    let mut sequence = e.sequence.clone();
    sequence.cache = None;
    ops::create_sequence(g, &CreateSequence { sequence })
}

fn type_map() -> TypeMap {
    let mut map = TypeMap::new();
    map.set(ColumnType::AnsiString, "VARCHAR(255)");
    map.set_with_size(ColumnType::AnsiString, 32_765, "VARCHAR($size)");
    map.set_with_size(ColumnType::AnsiString, u32::MAX, "BLOB SUB_TYPE TEXT");
    map.set(ColumnType::AnsiStringFixed, "CHAR(255)");
    map.set_with_size(ColumnType::AnsiStringFixed, 32_767, "CHAR($size)");
    map.set(ColumnType::String, "VARCHAR(255)");
    map.set_with_size(ColumnType::String, 32_765, "VARCHAR($size)");
    map.set_with_size(ColumnType::String, u32::MAX, "BLOB SUB_TYPE TEXT");
    map.set(ColumnType::StringFixed, "CHAR(255)");
    map.set_with_size(ColumnType::StringFixed, 32_767, "CHAR($size)");
    map.set(ColumnType::Binary, "BLOB SUB_TYPE BINARY");
    map.set(ColumnType::Boolean, "SMALLINT");
    map.set(ColumnType::Byte, "SMALLINT");
    map.set(ColumnType::Int16, "SMALLINT");
    map.set(ColumnType::Int32, "INTEGER");
    map.set(ColumnType::Int64, "BIGINT");
    map.set(ColumnType::Currency, "DECIMAL(18,4)");
    map.set(ColumnType::Decimal, "DECIMAL(18,4)");
    map.set_with_size(ColumnType::Decimal, 18, "DECIMAL($size,$precision)");
    map.set(ColumnType::Double, "DOUBLE PRECISION");
    map.set(ColumnType::Float, "FLOAT");
    map.set(ColumnType::Date, "DATE");
    map.set(ColumnType::DateTime, "TIMESTAMP");
    map.set(ColumnType::DateTimeOffset, "TIMESTAMP");
    map.set(ColumnType::Time, "TIME");
    map.set(ColumnType::Guid, "CHAR(16) CHARACTER SET OCTETS");
    map.set(ColumnType::Xml, "BLOB SUB_TYPE TEXT");
    map.set(ColumnType::Json, "BLOB SUB_TYPE TEXT");
    map
}
