//! SQLite dialect.
//!
//! SQLite's type system is affinity-based, so every abstract type collapses
//! to one of a handful of storage classes. A lone identity primary key must
//! render inline as `INTEGER PRIMARY KEY AUTOINCREMENT`; a table-level
//! PRIMARY KEY clause would lose rowid aliasing.

use crate::column::{self, ClausePipeline, ColumnRenderer};
use crate::dialects::{Dialect, Feature};
use crate::error::Result;
use crate::expression::column::{ColumnDefinition, ColumnType};
use crate::expression::values::SystemMethod;
use crate::quoter::Quoter;
use crate::typemap::TypeMap;

pub fn dialect() -> Dialect {
    let mut d = Dialect::base("sqlite", quoter(), type_map());
    let mut pipeline = ClausePipeline::with_steps(vec![
        column::format_name,
        column::format_type,
        format_identity,
        column::format_nullable,
        column::format_default,
        column::format_unique,
    ]);
    pipeline.inline_primary_key = true;
    d.pipeline = pipeline;
    d.features.schemas = Feature::Unsupported("SQLite does not support schemas");
    d.features.sequences = Feature::Unsupported("SQLite does not support sequences");
    d.features.alter_column =
        Feature::Unsupported("SQLite cannot alter a column; recreate the table instead");
    d.features.foreign_keys = Feature::Unsupported(
        "SQLite cannot add a foreign key to an existing table; recreate the table instead",
    );
    d.features.constraints = Feature::Unsupported(
        "SQLite cannot add a constraint to an existing table; recreate the table instead",
    );
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
        SystemMethod::CurrentDateTime | SystemMethod::CurrentUtcDateTime => {
            Some("CURRENT_TIMESTAMP")
        }
        SystemMethod::CurrentUser | SystemMethod::NewGuid | SystemMethod::NewSequentialId => None,
    }
}

fn format_identity(_r: &ColumnRenderer<'_>, c: &ColumnDefinition) -> Result<String> {
    Ok(if c.is_identity && c.is_primary_key {
        "PRIMARY KEY AUTOINCREMENT".to_string()
    } else {
        String::new()
    })
}

fn type_map() -> TypeMap {
    let mut map = TypeMap::new();
    for t in [
        ColumnType::AnsiString,
        ColumnType::AnsiStringFixed,
        ColumnType::String,
        ColumnType::StringFixed,
        ColumnType::Xml,
        ColumnType::Json,
    ] {
        map.set(t, "TEXT");
    }
    for t in [
        ColumnType::Boolean,
        ColumnType::Byte,
        ColumnType::Int16,
        ColumnType::Int32,
        ColumnType::Int64,
    ] {
        map.set(t, "INTEGER");
    }
    map.set(ColumnType::Binary, "BLOB");
    map.set(ColumnType::Currency, "NUMERIC");
    map.set(ColumnType::Decimal, "NUMERIC");
    map.set(ColumnType::Double, "REAL");
    map.set(ColumnType::Float, "REAL");
    map.set(ColumnType::Date, "DATETIME");
    map.set(ColumnType::DateTime, "DATETIME");
    map.set(ColumnType::DateTimeOffset, "DATETIME");
    map.set(ColumnType::Time, "DATETIME");
    map.set(ColumnType::Guid, "UNIQUEIDENTIFIER");
    map
}
