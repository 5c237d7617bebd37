//! Snowflake dialect.

use crate::column::{self, ClausePipeline, ColumnRenderer};
use crate::description::DescriptionStyle;
use crate::dialects::{Dialect, Feature};
use crate::error::Result;
use crate::expression::column::{ColumnDefinition, ColumnType};
use crate::expression::values::SystemMethod;
use crate::quoter::{Quoter, true_false_bool};
use crate::typemap::TypeMap;

pub fn dialect() -> Dialect {
    let mut d = Dialect::base("snowflake", quoter(), type_map());
    d.pipeline = ClausePipeline::with_steps(vec![
        column::format_name,
        column::format_type,
        format_identity,
        column::format_nullable,
        column::format_default,
        column::format_unique,
    ]);
    d.features.indexes =
        Feature::Unsupported("Snowflake does not support indexes; clustering keys are separate");
    d.descriptions = DescriptionStyle::CommentOn;
    d
}

fn quoter() -> Quoter {
    Quoter {
        format_bool: true_false_bool,
        system_method,
        ..Quoter::ansi()
    }
}

fn system_method(m: SystemMethod) -> Option<&'static str> {
    match m {
        SystemMethod::NewGuid | SystemMethod::NewSequentialId => Some("UUID_STRING()"),
        SystemMethod::CurrentDateTime => Some("CURRENT_TIMESTAMP"),
        SystemMethod::CurrentUtcDateTime => Some("SYSDATE()"),
        SystemMethod::CurrentUser => Some("CURRENT_USER"),
    }
}

fn format_identity(_r: &ColumnRenderer<'_>, c: &ColumnDefinition) -> Result<String> {
    if !c.is_identity {
        return Ok(String::new());
    }
    let (seed, increment) = c.extensions.identity_seed().unwrap_or((1, 1));
    Ok(format!("IDENTITY START {seed} INCREMENT {increment}"))
}

fn type_map() -> TypeMap {
    let mut map = TypeMap::new();
    for t in [ColumnType::AnsiString, ColumnType::String] {
        map.set(t, "VARCHAR");
        map.set_with_size(t, 16_777_216, "VARCHAR($size)");
    }
    for t in [ColumnType::AnsiStringFixed, ColumnType::StringFixed] {
        map.set(t, "CHAR(255)");
        map.set_with_size(t, 16_777_216, "CHAR($size)");
    }
    map.set(ColumnType::Binary, "BINARY");
    map.set_with_size(ColumnType::Binary, 8_388_608, "BINARY($size)");
    map.set(ColumnType::Boolean, "BOOLEAN");
    map.set(ColumnType::Byte, "SMALLINT");
    map.set(ColumnType::Int16, "SMALLINT");
    map.set(ColumnType::Int32, "INTEGER");
    map.set(ColumnType::Int64, "BIGINT");
    map.set(ColumnType::Currency, "NUMBER(19,4)");
    map.set(ColumnType::Decimal, "NUMBER(19,5)");
    map.set_with_size(ColumnType::Decimal, 38, "NUMBER($size,$precision)");
    map.set(ColumnType::Double, "DOUBLE");
    map.set(ColumnType::Float, "FLOAT");
    map.set(ColumnType::Date, "DATE");
    map.set(ColumnType::DateTime, "TIMESTAMP_NTZ");
    map.set(ColumnType::DateTimeOffset, "TIMESTAMP_TZ");
    map.set(ColumnType::Time, "TIME");
    map.set(ColumnType::Guid, "VARCHAR(36)");
    map.set(ColumnType::Xml, "VARIANT");
    map.set(ColumnType::Json, "VARIANT");
    map
}
