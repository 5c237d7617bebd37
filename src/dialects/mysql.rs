//! MySQL / MariaDB dialect.

use chrono::NaiveDateTime;

use crate::column::{self, ClausePipeline, ColumnRenderer};
use crate::dialects::{Dialect, Feature};
use crate::error::Result;
use crate::expression::column::{ColumnDefinition, ColumnType};
use crate::expression::values::SystemMethod;
use crate::expression::{AlterColumn, DeleteConstraint, DeleteForeignKey, DeleteIndex, RenameTable};
use crate::expression::ConstraintKind;
use crate::generator::Generator;
use crate::quoter::Quoter;
use crate::typemap::TypeMap;

pub fn dialect() -> Dialect {
    let mut d = Dialect::base("mysql", quoter(), type_map());
    d.aliases = &["mariadb"];
    d.pipeline = ClausePipeline::with_steps(vec![
        column::format_name,
        column::format_type,
        format_charset,
        column::format_nullable,
        column::format_default,
        format_identity,
        column::format_unique,
        format_comment,
    ]);
    d.features.schemas = Feature::Unsupported("MySQL schemas are databases; qualify via connection instead");
    d.features.sequences = Feature::Unsupported("MySQL does not support sequences");
    d.alter_column = alter_column;
    d.rename_table = rename_table;
    d.drop_index = drop_index;
    d.drop_foreign_key = drop_foreign_key;
    d.drop_constraint = drop_constraint;
    d
}

fn quoter() -> Quoter {
    Quoter {
        format_datetime: space_datetime,
        system_method,
        ..Quoter::backticks()
    }
}

fn space_datetime(dt: &NaiveDateTime) -> String {
    format!("'{}'", dt.format("%Y-%m-%d %H:%M:%S"))
}

fn system_method(m: SystemMethod) -> Option<&'static str> {
    match m {
        SystemMethod::NewGuid | SystemMethod::NewSequentialId => Some("uuid()"),
        SystemMethod::CurrentDateTime => Some("CURRENT_TIMESTAMP"),
        SystemMethod::CurrentUtcDateTime => Some("UTC_TIMESTAMP()"),
        SystemMethod::CurrentUser => Some("CURRENT_USER()"),
    }
}

fn format_charset(_r: &ColumnRenderer<'_>, c: &ColumnDefinition) -> Result<String> {
    Ok(c.extensions
        .column_charset()
        .map(|cs| format!("CHARACTER SET {cs}"))
        .unwrap_or_default())
}

fn format_identity(_r: &ColumnRenderer<'_>, c: &ColumnDefinition) -> Result<String> {
    Ok(if c.is_identity {
        "AUTO_INCREMENT".to_string()
    } else {
        String::new()
    })
}

/// Column descriptions render inline; MySQL has no separate comment
/// statement for columns.
fn format_comment(_r: &ColumnRenderer<'_>, c: &ColumnDefinition) -> Result<String> {
    Ok(c.description
        .as_deref()
        .map(|d| format!("COMMENT '{}'", d.replace('\'', "''")))
        .unwrap_or_default())
}

fn alter_column(g: &Generator, e: &AlterColumn) -> Result<String> {
    let definition = g.renderer().generate(&e.column)?;
    Ok(format!(
        "ALTER TABLE {} MODIFY COLUMN {}",
        g.table_ref(&e.column.table_name, e.column.schema_name.as_deref()),
        definition
    ))
}

fn rename_table(g: &Generator, e: &RenameTable) -> Result<String> {
    Ok(format!(
        "RENAME TABLE {} TO {}",
        g.table_ref(&e.old_name, e.schema_name.as_deref()),
        g.quoter().quote(&e.new_name)
    ))
}

fn drop_index(g: &Generator, e: &DeleteIndex) -> Result<String> {
    Ok(format!(
        "DROP INDEX {} ON {}",
        g.quoter().quote_index_name(&e.index.name),
        g.table_ref(&e.index.table_name, e.index.schema_name.as_deref())
    ))
}

fn drop_foreign_key(g: &Generator, e: &DeleteForeignKey) -> Result<String> {
    let fk = &e.foreign_key;
    Ok(format!(
        "ALTER TABLE {} DROP FOREIGN KEY {}",
        g.table_ref(&fk.foreign_table, fk.foreign_table_schema.as_deref()),
        g.quoter().quote_constraint_name(&fk.name)
    ))
}

fn drop_constraint(g: &Generator, e: &DeleteConstraint) -> Result<String> {
    let c = &e.constraint;
    let table = g.table_ref(&c.table_name, c.schema_name.as_deref());
    Ok(match c.kind {
        ConstraintKind::PrimaryKey => format!("ALTER TABLE {table} DROP PRIMARY KEY"),
        ConstraintKind::Unique => format!(
            "ALTER TABLE {table} DROP INDEX {}",
            g.quoter().quote_constraint_name(&c.name)
        ),
    })
}

fn type_map() -> TypeMap {
    let mut map = TypeMap::new();
    map.set(ColumnType::AnsiString, "VARCHAR(255)");
    map.set_with_size(ColumnType::AnsiString, 8000, "VARCHAR($size)");
    map.set_with_size(ColumnType::AnsiString, 65_535, "TEXT");
    map.set_with_size(ColumnType::AnsiString, 16_777_215, "MEDIUMTEXT");
    map.set_with_size(ColumnType::AnsiString, u32::MAX, "LONGTEXT");
    map.set(ColumnType::AnsiStringFixed, "CHAR(255)");
    map.set_with_size(ColumnType::AnsiStringFixed, 255, "CHAR($size)");
    map.set(ColumnType::String, "VARCHAR(255)");
    map.set_with_size(ColumnType::String, 8000, "VARCHAR($size)");
    map.set_with_size(ColumnType::String, 65_535, "TEXT");
    map.set_with_size(ColumnType::String, 16_777_215, "MEDIUMTEXT");
    map.set_with_size(ColumnType::String, u32::MAX, "LONGTEXT");
    map.set(ColumnType::StringFixed, "CHAR(255)");
    map.set_with_size(ColumnType::StringFixed, 255, "CHAR($size)");
    map.set(ColumnType::Binary, "BLOB");
    map.set_with_size(ColumnType::Binary, 8000, "VARBINARY($size)");
    map.set_with_size(ColumnType::Binary, 65_535, "BLOB");
    map.set_with_size(ColumnType::Binary, 16_777_215, "MEDIUMBLOB");
    map.set_with_size(ColumnType::Binary, u32::MAX, "LONGBLOB");
    map.set(ColumnType::Boolean, "TINYINT(1)");
    map.set(ColumnType::Byte, "TINYINT UNSIGNED");
    map.set(ColumnType::Int16, "SMALLINT");
    map.set(ColumnType::Int32, "INT");
    map.set(ColumnType::Int64, "BIGINT");
    map.set(ColumnType::Currency, "DECIMAL(19,4)");
    map.set(ColumnType::Decimal, "DECIMAL(19,5)");
    map.set_with_size(ColumnType::Decimal, 65, "DECIMAL($size,$precision)");
    map.set(ColumnType::Double, "DOUBLE");
    map.set(ColumnType::Float, "FLOAT");
    map.set(ColumnType::Date, "DATE");
    map.set(ColumnType::DateTime, "DATETIME");
    map.set(ColumnType::DateTimeOffset, "DATETIME");
    map.set(ColumnType::Time, "TIME");
    map.set(ColumnType::Guid, "CHAR(36)");
    map.set(ColumnType::Xml, "TEXT");
    map.set(ColumnType::Json, "JSON");
    map
}
