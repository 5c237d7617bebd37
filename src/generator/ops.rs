//! Shared operation renderers.
//!
//! These are the ANSI-flavored defaults installed by
//! [`Dialect::base`](crate::dialects::Dialect::base). A dialect whose
//! statement shape differs points the corresponding field at its own fn
//! instead; everything here is also reusable from those overrides.

use crate::error::{Error, Result};
use crate::expression::{
    AlterColumn, CreateIndex, CreateSequence, DeleteConstraint, DeleteForeignKey, DeleteIndex,
    Direction, IndexColumn, RenameColumn, RenameTable,
};
use crate::generator::Generator;

/// `ALTER TABLE t ALTER COLUMN <definition>`.
pub fn alter_column(g: &Generator, e: &AlterColumn) -> Result<String> {
    let definition = g.renderer().generate(&e.column)?;
    Ok(format!(
        "ALTER TABLE {} ALTER COLUMN {}",
        g.table_ref(&e.column.table_name, e.column.schema_name.as_deref()),
        definition
    ))
}

/// `ALTER TABLE old RENAME TO new`.
pub fn rename_table(g: &Generator, e: &RenameTable) -> Result<String> {
    Ok(format!(
        "ALTER TABLE {} RENAME TO {}",
        g.table_ref(&e.old_name, e.schema_name.as_deref()),
        g.quoter().quote(&e.new_name)
    ))
}

/// `ALTER TABLE t RENAME COLUMN old TO new`.
pub fn rename_column(g: &Generator, e: &RenameColumn) -> Result<String> {
    Ok(format!(
        "ALTER TABLE {} RENAME COLUMN {} TO {}",
        g.table_ref(&e.table_name, e.schema_name.as_deref()),
        g.quoter().quote_column_name(&e.old_name),
        g.quoter().quote_column_name(&e.new_name)
    ))
}

/// Quoted `"col" ASC, "col2" DESC` list shared by index renderers.
pub fn index_column_list(g: &Generator, columns: &[IndexColumn]) -> String {
    columns
        .iter()
        .map(|c| {
            let direction = match c.direction {
                Direction::Ascending => "ASC",
                Direction::Descending => "DESC",
            };
            format!("{} {direction}", g.quoter().quote_column_name(&c.name))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// `CREATE [UNIQUE ]INDEX i ON t (cols)`.
pub fn create_index(g: &Generator, e: &CreateIndex) -> Result<String> {
    let index = &e.index;
    if index.columns.is_empty() {
        return Err(Error::malformed(format!(
            "index '{}' has no columns",
            index.name
        )));
    }
    let unique = if index.is_unique { "UNIQUE " } else { "" };
    Ok(format!(
        "CREATE {}INDEX {} ON {} ({})",
        unique,
        g.quoter().quote_index_name(&index.name),
        g.table_ref(&index.table_name, index.schema_name.as_deref()),
        index_column_list(g, &index.columns)
    ))
}

/// `DROP INDEX i`, schema-qualified where schemas apply.
pub fn drop_index(g: &Generator, e: &DeleteIndex) -> Result<String> {
    Ok(format!(
        "DROP INDEX {}",
        g.table_ref(&e.index.name, e.index.schema_name.as_deref())
    ))
}

/// `ALTER TABLE t DROP CONSTRAINT fk`.
pub fn drop_foreign_key(g: &Generator, e: &DeleteForeignKey) -> Result<String> {
    let fk = &e.foreign_key;
    Ok(format!(
        "ALTER TABLE {} DROP CONSTRAINT {}",
        g.table_ref(&fk.foreign_table, fk.foreign_table_schema.as_deref()),
        g.quoter().quote_constraint_name(&fk.name)
    ))
}

/// `ALTER TABLE t DROP CONSTRAINT c`.
pub fn drop_constraint(g: &Generator, e: &DeleteConstraint) -> Result<String> {
    let c = &e.constraint;
    Ok(format!(
        "ALTER TABLE {} DROP CONSTRAINT {}",
        g.table_ref(&c.table_name, c.schema_name.as_deref()),
        g.quoter().quote_constraint_name(&c.name)
    ))
}

/// `CREATE SEQUENCE s` plus whichever optional clauses the definition sets.
pub fn create_sequence(g: &Generator, e: &CreateSequence) -> Result<String> {
    let seq = &e.sequence;
    let mut sql = format!(
        "CREATE SEQUENCE {}",
        g.quoter()
            .quote_sequence_name(&seq.name, seq.schema_name.as_deref())
    );
    if let Some(increment) = seq.increment {
        sql.push_str(&format!(" INCREMENT BY {increment}"));
    }
    if let Some(min) = seq.min_value {
        sql.push_str(&format!(" MINVALUE {min}"));
    }
    if let Some(max) = seq.max_value {
        sql.push_str(&format!(" MAXVALUE {max}"));
    }
    if let Some(start) = seq.start_with {
        sql.push_str(&format!(" START WITH {start}"));
    }
    if let Some(cache) = seq.cache {
        sql.push_str(&format!(" CACHE {cache}"));
    }
    if seq.cycle {
        sql.push_str(" CYCLE");
    }
    Ok(sql)
}
