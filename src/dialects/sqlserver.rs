//! SQL Server dialect (2008 and later share one configuration).

use crate::column::{self, ClausePipeline, ColumnRenderer};
use crate::description::DescriptionStyle;
use crate::dialects::Dialect;
use crate::error::{Error, Result};
use crate::expression::column::{ColumnDefinition, ColumnType};
use crate::expression::values::SystemMethod;
use crate::expression::{CreateIndex, DeleteIndex, RenameColumn, RenameTable};
use crate::generator::{Generator, ops};
use crate::quoter::Quoter;
use crate::typemap::TypeMap;

pub fn dialect() -> Dialect {
    let mut d = Dialect::base("sqlserver", quoter(), type_map());
    d.aliases = &[
        "mssql",
        "sqlserver2008",
        "sqlserver2012",
        "sqlserver2014",
        "sqlserver2016",
    ];
    d.pipeline = ClausePipeline::with_steps(vec![
        column::format_name,
        column::format_type,
        format_identity,
        column::format_nullable,
        column::format_default,
        column::format_unique,
    ]);
    d.add_column_clause = "ADD";
    d.descriptions = DescriptionStyle::ExtendedProperties;
    d.create_index = create_index;
    d.drop_index = drop_index;
    d.rename_table = rename_table;
    d.rename_column = rename_column;
    d
}

fn quoter() -> Quoter {
    Quoter {
        system_method,
        ..Quoter::brackets()
    }
}

fn system_method(m: SystemMethod) -> Option<&'static str> {
    match m {
        SystemMethod::NewGuid => Some("NEWID()"),
        SystemMethod::NewSequentialId => Some("NEWSEQUENTIALID()"),
        SystemMethod::CurrentDateTime => Some("GETDATE()"),
        SystemMethod::CurrentUtcDateTime => Some("GETUTCDATE()"),
        SystemMethod::CurrentUser => Some("CURRENT_USER"),
    }
}

fn format_identity(_r: &ColumnRenderer<'_>, c: &ColumnDefinition) -> Result<String> {
    if !c.is_identity {
        return Ok(String::new());
    }
    let (seed, increment) = c.extensions.identity_seed().unwrap_or((1, 1));
    Ok(format!("IDENTITY({seed},{increment})"))
}

fn create_index(g: &Generator, e: &CreateIndex) -> Result<String> {
    let index = &e.index;
    if index.columns.is_empty() {
        return Err(Error::malformed(format!(
            "index '{}' has no columns",
            index.name
        )));
    }
    let unique = if index.is_unique { "UNIQUE " } else { "" };
    let clustered = if index.is_clustered {
        "CLUSTERED "
    } else {
        "NONCLUSTERED "
    };
    Ok(format!(
        "CREATE {}{}INDEX {} ON {} ({})",
        unique,
        clustered,
        g.quoter().quote_index_name(&index.name),
        g.table_ref(&index.table_name, index.schema_name.as_deref()),
        ops::index_column_list(g, &index.columns)
    ))
}

fn drop_index(g: &Generator, e: &DeleteIndex) -> Result<String> {
    Ok(format!(
        "DROP INDEX {} ON {}",
        g.quoter().quote_index_name(&e.index.name),
        g.table_ref(&e.index.table_name, e.index.schema_name.as_deref())
    ))
}

fn rename_table(g: &Generator, e: &RenameTable) -> Result<String> {
    Ok(format!(
        "EXEC sp_rename '{}', '{}'",
        g.table_ref(&e.old_name, e.schema_name.as_deref()),
        e.new_name
    ))
}

fn rename_column(g: &Generator, e: &RenameColumn) -> Result<String> {
    Ok(format!(
        "EXEC sp_rename '{}.{}', '{}', 'COLUMN'",
        g.table_ref(&e.table_name, e.schema_name.as_deref()),
        g.quoter().quote_column_name(&e.old_name),
        e.new_name
    ))
}

fn type_map() -> TypeMap {
    let mut map = TypeMap::new();
    map.set(ColumnType::AnsiString, "VARCHAR(255)");
    map.set_with_size(ColumnType::AnsiString, 8000, "VARCHAR($size)");
    map.set_with_size(ColumnType::AnsiString, u32::MAX, "VARCHAR(MAX)");
    map.set(ColumnType::AnsiStringFixed, "CHAR(255)");
    map.set_with_size(ColumnType::AnsiStringFixed, 8000, "CHAR($size)");
    map.set(ColumnType::String, "NVARCHAR(255)");
    map.set_with_size(ColumnType::String, 4000, "NVARCHAR($size)");
    map.set_with_size(ColumnType::String, u32::MAX, "NVARCHAR(MAX)");
    map.set(ColumnType::StringFixed, "NCHAR(255)");
    map.set_with_size(ColumnType::StringFixed, 4000, "NCHAR($size)");
    map.set(ColumnType::Binary, "VARBINARY(8000)");
    map.set_with_size(ColumnType::Binary, 8000, "VARBINARY($size)");
    map.set_with_size(ColumnType::Binary, u32::MAX, "VARBINARY(MAX)");
    map.set(ColumnType::Boolean, "BIT");
    map.set(ColumnType::Byte, "TINYINT");
    map.set(ColumnType::Int16, "SMALLINT");
    map.set(ColumnType::Int32, "INT");
    map.set(ColumnType::Int64, "BIGINT");
    map.set(ColumnType::Currency, "MONEY");
    map.set(ColumnType::Decimal, "DECIMAL(19,5)");
    map.set_with_size(ColumnType::Decimal, 38, "DECIMAL($size,$precision)");
    map.set(ColumnType::Double, "FLOAT");
    map.set(ColumnType::Float, "REAL");
    map.set(ColumnType::Date, "DATE");
    map.set(ColumnType::DateTime, "DATETIME");
    map.set(ColumnType::DateTimeOffset, "DATETIMEOFFSET");
    map.set(ColumnType::Time, "TIME");
    map.set(ColumnType::Guid, "UNIQUEIDENTIFIER");
    map.set(ColumnType::Xml, "XML");
    map.set(ColumnType::Json, "NVARCHAR(MAX)");
    map
}
