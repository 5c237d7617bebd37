//! SAP SQL Anywhere dialect.

use crate::column::{self, ClausePipeline, ColumnRenderer};
use crate::description::DescriptionStyle;
use crate::dialects::Dialect;
use crate::error::Result;
use crate::expression::RenameTable;
use crate::expression::column::{ColumnDefinition, ColumnType};
use crate::expression::values::SystemMethod;
use crate::generator::Generator;
use crate::quoter::Quoter;
use crate::typemap::TypeMap;

pub fn dialect() -> Dialect {
    let mut d = Dialect::base("sqlanywhere", quoter(), type_map());
    d.aliases = &["sybase"];
    d.pipeline = ClausePipeline::with_steps(vec![
        column::format_name,
        column::format_type,
        column::format_nullable,
        format_identity,
        column::format_unique,
    ]);
    d.add_column_clause = "ADD";
    d.descriptions = DescriptionStyle::CommentOn;
    d.rename_table = rename_table;
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
        SystemMethod::NewGuid | SystemMethod::NewSequentialId => Some("NEWID()"),
        SystemMethod::CurrentDateTime => Some("CURRENT TIMESTAMP"),
        SystemMethod::CurrentUtcDateTime => Some("CURRENT UTC TIMESTAMP"),
        SystemMethod::CurrentUser => Some("CURRENT USER"),
    }
}

/// Identity renders as a default, which is why the DEFAULT step is absent
/// from the pipeline above and folded in here.
fn format_identity(r: &ColumnRenderer<'_>, c: &ColumnDefinition) -> Result<String> {
    if c.is_identity {
        return Ok("DEFAULT AUTOINCREMENT".to_string());
    }
    column::format_default(r, c)
}

fn rename_table(g: &Generator, e: &RenameTable) -> Result<String> {
    Ok(format!(
        "ALTER TABLE {} RENAME {}",
        g.table_ref(&e.old_name, e.schema_name.as_deref()),
        g.quoter().quote(&e.new_name)
    ))
}

fn type_map() -> TypeMap {
    let mut map = TypeMap::new();
    map.set(ColumnType::AnsiString, "VARCHAR(255)");
    map.set_with_size(ColumnType::AnsiString, 32_767, "VARCHAR($size)");
    map.set_with_size(ColumnType::AnsiString, u32::MAX, "LONG VARCHAR");
    map.set(ColumnType::AnsiStringFixed, "CHAR(255)");
    map.set_with_size(ColumnType::AnsiStringFixed, 32_767, "CHAR($size)");
    map.set(ColumnType::String, "NVARCHAR(255)");
    map.set_with_size(ColumnType::String, 32_767, "NVARCHAR($size)");
    map.set_with_size(ColumnType::String, u32::MAX, "LONG NVARCHAR");
    map.set(ColumnType::StringFixed, "NCHAR(255)");
    map.set_with_size(ColumnType::StringFixed, 32_767, "NCHAR($size)");
    map.set(ColumnType::Binary, "LONG BINARY");
    map.set_with_size(ColumnType::Binary, 32_767, "VARBINARY($size)");
    map.set(ColumnType::Boolean, "BIT");
    map.set(ColumnType::Byte, "TINYINT");
    map.set(ColumnType::Int16, "SMALLINT");
    map.set(ColumnType::Int32, "INTEGER");
    map.set(ColumnType::Int64, "BIGINT");
    map.set(ColumnType::Currency, "MONEY");
    map.set(ColumnType::Decimal, "NUMERIC(19,5)");
    map.set_with_size(ColumnType::Decimal, 127, "NUMERIC($size,$precision)");
    map.set(ColumnType::Double, "DOUBLE");
    map.set(ColumnType::Float, "FLOAT");
    map.set(ColumnType::Date, "DATE");
    map.set(ColumnType::DateTime, "DATETIME");
    map.set(ColumnType::DateTimeOffset, "TIMESTAMP WITH TIME ZONE");
    map.set(ColumnType::Time, "TIME");
    map.set(ColumnType::Guid, "UNIQUEIDENTIFIER");
    map.set(ColumnType::Xml, "XML");
    map.set(ColumnType::Json, "LONG NVARCHAR");
    map
}
