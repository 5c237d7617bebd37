//! Oracle dialect.
//!
//! The DEFAULT clause must precede NOT NULL, so the pipeline reorders those
//! two steps relative to the ANSI order.

use chrono::NaiveDateTime;

use crate::column::{self, ClausePipeline, ColumnRenderer};
use crate::description::DescriptionStyle;
use crate::dialects::Dialect;
use crate::error::Result;
use crate::expression::AlterColumn;
use crate::expression::column::{ColumnDefinition, ColumnType};
use crate::expression::values::SystemMethod;
use crate::generator::Generator;
use crate::quoter::Quoter;
use crate::typemap::TypeMap;

pub fn dialect() -> Dialect {
    let mut d = Dialect::base("oracle", quoter(), type_map());
    d.pipeline = ClausePipeline::with_steps(vec![
        column::format_name,
        column::format_type,
        column::format_default,
        column::format_nullable,
        format_identity,
        column::format_unique,
    ]);
    d.add_column_clause = "ADD";
    d.descriptions = DescriptionStyle::CommentOn;
    d.alter_column = alter_column;
    d
}

fn quoter() -> Quoter {
    Quoter {
        format_datetime: to_date_datetime,
        system_method,
        ..Quoter::ansi()
    }
}

fn to_date_datetime(dt: &NaiveDateTime) -> String {
    format!(
        "to_date('{}', 'yyyy-mm-dd\"T\"HH24:MI:SS')",
        dt.format("%Y-%m-%dT%H:%M:%S")
    )
}

fn system_method(m: SystemMethod) -> Option<&'static str> {
    match m {
        SystemMethod::NewGuid | SystemMethod::NewSequentialId => Some("sys_guid()"),
        SystemMethod::CurrentDateTime => Some("sysdate"),
        SystemMethod::CurrentUtcDateTime => Some("sys_extract_utc(systimestamp)"),
        SystemMethod::CurrentUser => Some("USER"),
    }
}

fn format_identity(r: &ColumnRenderer<'_>, c: &ColumnDefinition) -> Result<String> {
    if c.is_identity {
        return r
            .compatibility
            .handle("Oracle does not support identity columns; use a sequence and a trigger");
    }
    Ok(String::new())
}

fn alter_column(g: &Generator, e: &AlterColumn) -> Result<String> {
    let definition = g.renderer().generate(&e.column)?;
    Ok(format!(
        "ALTER TABLE {} MODIFY {}",
        g.table_ref(&e.column.table_name, e.column.schema_name.as_deref()),
        definition
    ))
}

fn type_map() -> TypeMap {
    let mut map = TypeMap::new();
    map.set(ColumnType::AnsiString, "VARCHAR2(255)");
    map.set_with_size(ColumnType::AnsiString, 4000, "VARCHAR2($size)");
    map.set_with_size(ColumnType::AnsiString, u32::MAX, "CLOB");
    map.set(ColumnType::AnsiStringFixed, "CHAR(255)");
    map.set_with_size(ColumnType::AnsiStringFixed, 2000, "CHAR($size)");
    map.set(ColumnType::String, "NVARCHAR2(255)");
    map.set_with_size(ColumnType::String, 2000, "NVARCHAR2($size)");
    map.set_with_size(ColumnType::String, u32::MAX, "NCLOB");
    map.set(ColumnType::StringFixed, "NCHAR(255)");
    map.set_with_size(ColumnType::StringFixed, 1000, "NCHAR($size)");
    map.set(ColumnType::Binary, "BLOB");
    map.set_with_size(ColumnType::Binary, 2000, "RAW($size)");
    map.set_with_size(ColumnType::Binary, u32::MAX, "BLOB");
    map.set(ColumnType::Boolean, "NUMBER(1)");
    map.set(ColumnType::Byte, "NUMBER(3)");
    map.set(ColumnType::Int16, "NUMBER(5)");
    map.set(ColumnType::Int32, "NUMBER(10)");
    map.set(ColumnType::Int64, "NUMBER(19)");
    map.set(ColumnType::Currency, "NUMBER(19,4)");
    map.set(ColumnType::Decimal, "NUMBER(19,5)");
    map.set_with_size(ColumnType::Decimal, 38, "NUMBER($size,$precision)");
    map.set(ColumnType::Double, "DOUBLE PRECISION");
    map.set(ColumnType::Float, "FLOAT");
    map.set(ColumnType::Date, "DATE");
    map.set(ColumnType::DateTime, "TIMESTAMP");
    map.set(ColumnType::DateTimeOffset, "TIMESTAMP WITH TIME ZONE");
    map.set(ColumnType::Time, "DATE");
    map.set(ColumnType::Guid, "RAW(16)");
    map.set(ColumnType::Xml, "XMLTYPE");
    map.set(ColumnType::Json, "CLOB");
    map
}
