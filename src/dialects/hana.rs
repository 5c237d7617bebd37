//! SAP HANA dialect.

use crate::column::{self, ClausePipeline, ColumnRenderer};
use crate::description::DescriptionStyle;
use crate::dialects::Dialect;
use crate::error::Result;
use crate::expression::column::{ColumnDefinition, ColumnType};
use crate::expression::values::SystemMethod;
use crate::quoter::Quoter;
use crate::typemap::TypeMap;

pub fn dialect() -> Dialect {
    let mut d = Dialect::base("hana", quoter(), type_map());
    d.pipeline = ClausePipeline::with_steps(vec![
        column::format_name,
        column::format_type,
        format_identity,
        column::format_nullable,
        column::format_default,
        column::format_unique,
    ]);
    d.add_column_clause = "ADD";
    d.descriptions = DescriptionStyle::CommentOn;
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
        SystemMethod::NewGuid | SystemMethod::NewSequentialId => Some("SYSUUID"),
        SystemMethod::CurrentDateTime => Some("CURRENT_TIMESTAMP"),
        SystemMethod::CurrentUtcDateTime => Some("CURRENT_UTCTIMESTAMP"),
        SystemMethod::CurrentUser => Some("CURRENT_USER"),
    }
}

fn format_identity(_r: &ColumnRenderer<'_>, c: &ColumnDefinition) -> Result<String> {
    Ok(if c.is_identity {
        "GENERATED BY DEFAULT AS IDENTITY".to_string()
    } else {
        String::new()
    })
}

fn type_map() -> TypeMap {
    let mut map = TypeMap::new();
    map.set(ColumnType::AnsiString, "VARCHAR(255)");
    map.set_with_size(ColumnType::AnsiString, 5000, "VARCHAR($size)");
    map.set_with_size(ColumnType::AnsiString, u32::MAX, "CLOB");
    map.set(ColumnType::AnsiStringFixed, "VARCHAR(255)");
    map.set_with_size(ColumnType::AnsiStringFixed, 5000, "VARCHAR($size)");
    map.set(ColumnType::String, "NVARCHAR(255)");
    map.set_with_size(ColumnType::String, 5000, "NVARCHAR($size)");
    map.set_with_size(ColumnType::String, u32::MAX, "NCLOB");
    map.set(ColumnType::StringFixed, "NVARCHAR(255)");
    map.set_with_size(ColumnType::StringFixed, 5000, "NVARCHAR($size)");
    map.set(ColumnType::Binary, "BLOB");
    map.set_with_size(ColumnType::Binary, 5000, "VARBINARY($size)");
    map.set_with_size(ColumnType::Binary, u32::MAX, "BLOB");
    map.set(ColumnType::Boolean, "BOOLEAN");
    map.set(ColumnType::Byte, "TINYINT");
    map.set(ColumnType::Int16, "SMALLINT");
    map.set(ColumnType::Int32, "INTEGER");
    map.set(ColumnType::Int64, "BIGINT");
    map.set(ColumnType::Currency, "DECIMAL(19,4)");
    map.set(ColumnType::Decimal, "DECIMAL(19,5)");
    map.set_with_size(ColumnType::Decimal, 38, "DECIMAL($size,$precision)");
    map.set(ColumnType::Double, "DOUBLE");
    map.set(ColumnType::Float, "REAL");
    map.set(ColumnType::Date, "DATE");
    map.set(ColumnType::DateTime, "TIMESTAMP");
    map.set(ColumnType::DateTimeOffset, "TIMESTAMP");
    map.set(ColumnType::Time, "TIME");
    map.set(ColumnType::Guid, "VARCHAR(36)");
    map.set(ColumnType::Xml, "NCLOB");
    map.set(ColumnType::Json, "NCLOB");
    map
}
