//! PostgreSQL dialect.

use crate::column::{self, ClausePipeline, ColumnRenderer};
use crate::description::DescriptionStyle;
use crate::dialects::Dialect;
use crate::error::{Error, Result};
use crate::expression::column::{ColumnDefinition, ColumnType, ColumnTypeSpec};
use crate::expression::values::SystemMethod;
use crate::expression::{CreateIndex, CreateSequence};
use crate::generator::{Generator, ops};
use crate::quoter::{Quoter, true_false_bool};
use crate::typemap::TypeMap;

pub fn dialect() -> Dialect {
    let mut d = Dialect::base("postgres", quoter(), type_map());
    d.aliases = &["postgresql", "pg"];
    // serial/bigserial replaces both the type and the identity clause, so
    // identity handling lives inside the type step here.
    d.pipeline = ClausePipeline::with_steps(vec![
        column::format_name,
        format_type,
        column::format_nullable,
        column::format_default,
        column::format_unique,
    ]);
    d.descriptions = DescriptionStyle::CommentOn;
    d.create_index = create_index;
    d.create_sequence = create_sequence;
    d
}

fn quoter() -> Quoter {
    Quoter {
        format_bool: true_false_bool,
        format_bytes: escaped_hex_bytes,
        system_method,
        ..Quoter::ansi()
    }
}

fn escaped_hex_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(5 + bytes.len() * 2);
    out.push_str("E'\\\\x");
    for b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    out.push('\'');
    out
}

fn system_method(m: SystemMethod) -> Option<&'static str> {
    match m {
        SystemMethod::NewGuid | SystemMethod::NewSequentialId => Some("gen_random_uuid()"),
        SystemMethod::CurrentDateTime => Some("now()"),
        SystemMethod::CurrentUtcDateTime => Some("(now() at time zone 'UTC')"),
        SystemMethod::CurrentUser => Some("current_user"),
    }
}

fn format_type(r: &ColumnRenderer<'_>, c: &ColumnDefinition) -> Result<String> {
    if c.is_identity {
        if let ColumnTypeSpec::Abstract(t) = &c.type_spec {
            let serial = match t {
                ColumnType::Int16 => Some("smallserial"),
                ColumnType::Int32 => Some("serial"),
                ColumnType::Int64 => Some("bigserial"),
                _ => None,
            };
            if let Some(s) = serial {
                return Ok(s.to_string());
            }
        }
    }
    column::format_type(r, c)
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
    let using = index
        .extensions
        .index_algorithm()
        .map(|a| format!(" USING {}", a.as_sql()))
        .unwrap_or_default();
    Ok(format!(
        "CREATE {}INDEX {} ON {}{} ({})",
        unique,
        g.quoter().quote_index_name(&index.name),
        g.table_ref(&index.table_name, index.schema_name.as_deref()),
        using,
        ops::index_column_list(g, &index.columns)
    ))
}

fn create_sequence(g: &Generator, e: &CreateSequence) -> Result<String> {
    if let Some(cache) = e.sequence.cache {
        if cache <= 1 {
            return g.compatibility().handle(
                "cache size must be greater than 1; to disable caching, leave the cache size unset",
            );
        }
    }
    ops::create_sequence(g, e)
}

fn type_map() -> TypeMap {
    let mut map = TypeMap::new();
    map.set(ColumnType::AnsiString, "text");
    map.set_with_size(ColumnType::AnsiString, 10_485_760, "varchar($size)");
    map.set(ColumnType::AnsiStringFixed, "char(255)");
    map.set_with_size(ColumnType::AnsiStringFixed, 10_485_760, "char($size)");
    map.set(ColumnType::String, "text");
    map.set_with_size(ColumnType::String, 10_485_760, "varchar($size)");
    map.set(ColumnType::StringFixed, "char(255)");
    map.set_with_size(ColumnType::StringFixed, 10_485_760, "char($size)");
    map.set(ColumnType::Binary, "bytea");
    map.set(ColumnType::Boolean, "boolean");
    map.set(ColumnType::Byte, "smallint");
    map.set(ColumnType::Int16, "smallint");
    map.set(ColumnType::Int32, "integer");
    map.set(ColumnType::Int64, "bigint");
    map.set(ColumnType::Currency, "money");
    map.set(ColumnType::Decimal, "numeric(19,5)");
    map.set_with_size(ColumnType::Decimal, 1000, "numeric($size,$precision)");
    map.set(ColumnType::Double, "double precision");
    map.set(ColumnType::Float, "real");
    map.set(ColumnType::Date, "date");
    map.set(ColumnType::DateTime, "timestamp");
    map.set(ColumnType::DateTimeOffset, "timestamptz");
    map.set(ColumnType::Time, "time");
    map.set(ColumnType::Guid, "uuid");
    map.set(ColumnType::Xml, "xml");
    map.set(ColumnType::Json, "jsonb");
    map
}
