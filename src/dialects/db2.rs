//! IBM DB2 dialect.

use crate::column::{self, ClausePipeline, ColumnRenderer};
use crate::description::DescriptionStyle;
use crate::dialects::Dialect;
use crate::error::Result;
use crate::expression::column::{ColumnDefinition, ColumnType};
use crate::expression::values::SystemMethod;
use crate::quoter::Quoter;
use crate::typemap::TypeMap;

pub fn dialect() -> Dialect {
    let mut d = Dialect::base("db2", quoter(), type_map());
    d.pipeline = ClausePipeline::with_steps(vec![
        column::format_name,
        column::format_type,
        column::format_nullable,
        column::format_default,
        format_identity,
        column::format_unique,
    ]);
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
        SystemMethod::NewGuid | SystemMethod::NewSequentialId => None,
        SystemMethod::CurrentDateTime => Some("CURRENT TIMESTAMP"),
        SystemMethod::CurrentUtcDateTime => Some("CURRENT TIMESTAMP - CURRENT TIMEZONE"),
        SystemMethod::CurrentUser => Some("USER"),
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
    map.set_with_size(ColumnType::AnsiString, 32_704, "VARCHAR($size)");
    map.set_with_size(ColumnType::AnsiString, u32::MAX, "CLOB");
    map.set(ColumnType::AnsiStringFixed, "CHAR(255)");
    map.set_with_size(ColumnType::AnsiStringFixed, 254, "CHAR($size)");
    map.set(ColumnType::String, "VARGRAPHIC(255)");
    map.set_with_size(ColumnType::String, 16_352, "VARGRAPHIC($size)");
    map.set_with_size(ColumnType::String, u32::MAX, "DBCLOB");
    map.set(ColumnType::StringFixed, "GRAPHIC(255)");
    map.set_with_size(ColumnType::StringFixed, 127, "GRAPHIC($size)");
    map.set(ColumnType::Binary, "BLOB");
    map.set_with_size(ColumnType::Binary, 32_704, "VARBINARY($size)");
    map.set_with_size(ColumnType::Binary, u32::MAX, "BLOB");
    map.set(ColumnType::Boolean, "SMALLINT");
    map.set(ColumnType::Byte, "SMALLINT");
    map.set(ColumnType::Int16, "SMALLINT");
    map.set(ColumnType::Int32, "INTEGER");
    map.set(ColumnType::Int64, "BIGINT");
    map.set(ColumnType::Currency, "DECIMAL(19,4)");
    map.set(ColumnType::Decimal, "DECIMAL(19,5)");
    map.set_with_size(ColumnType::Decimal, 31, "DECIMAL($size,$precision)");
    map.set(ColumnType::Double, "DOUBLE");
    map.set(ColumnType::Float, "REAL");
    map.set(ColumnType::Date, "DATE");
    map.set(ColumnType::DateTime, "TIMESTAMP");
    map.set(ColumnType::DateTimeOffset, "TIMESTAMP");
    map.set(ColumnType::Time, "TIME");
    map.set(ColumnType::Guid, "CHAR(16) FOR BIT DATA");
    map.set(ColumnType::Xml, "XML");
    map.set(ColumnType::Json, "CLOB");
    map
}
