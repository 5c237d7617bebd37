//! Column rendering: an ordered pipeline of clause formatters.
//!
//! One column definition is rendered by running an ordered list of steps
//! (name, type, nullable, default, identity, unique — exact set and order is
//! dialect-configurable) over the definition. Each step returns a fragment or
//! an empty string meaning "this clause does not apply". Dialects swap
//! individual steps or reorder the list at construction instead of
//! duplicating the renderer; Oracle, for instance, moves the DEFAULT clause
//! ahead of NOT NULL.

use crate::compat::CompatibilityMode;
use crate::error::{Error, Result};
use crate::expression::column::{ColumnDefault, ColumnDefinition, ColumnTypeSpec};
use crate::expression::foreign_key::{CascadeRule, ForeignKeyDefinition};
use crate::quoter::Quoter;
use crate::typemap::TypeMap;

/// One clause-formatter step. Empty output = clause does not apply.
pub type ClauseFormatter = fn(&ColumnRenderer<'_>, &ColumnDefinition) -> Result<String>;

/// The ordered list of clause formatters a dialect runs per column.
#[derive(Debug, Clone)]
pub struct ClausePipeline {
    pub steps: Vec<ClauseFormatter>,
    /// When set, a lone identity primary key renders inline through its
    /// pipeline step (SQLite `INTEGER PRIMARY KEY AUTOINCREMENT`) and no
    /// table-level PRIMARY KEY clause is added for it.
    pub inline_primary_key: bool,
}

impl ClausePipeline {
    /// The ANSI order: name, type, nullable, default, identity, unique.
    pub fn ansi() -> Self {
        Self::with_steps(vec![
            format_name,
            format_type,
            format_nullable,
            format_default,
            format_identity,
            format_unique,
        ])
    }

    pub fn with_steps(steps: Vec<ClauseFormatter>) -> Self {
        Self {
            steps,
            inline_primary_key: false,
        }
    }
}

/// Renders column definitions for one dialect; composes the dialect's
/// quoter, type map and clause pipeline. Borrowed from a generator per call.
#[derive(Debug, Clone)]
pub struct ColumnRenderer<'a> {
    pub quoter: &'a Quoter,
    pub type_map: &'a TypeMap,
    pub pipeline: &'a ClausePipeline,
    pub compatibility: CompatibilityMode,
}

impl ColumnRenderer<'_> {
    /// Render one standalone column definition (ALTER TABLE ADD/ALTER).
    pub fn generate(&self, column: &ColumnDefinition) -> Result<String> {
        let mut fragment = self.run_pipeline(column)?;
        if column.is_primary_key && !(self.pipeline.inline_primary_key && column.is_identity) {
            fragment.push_str(" PRIMARY KEY");
        }
        Ok(fragment)
    }

    /// Render a comma-joined column list for CREATE TABLE, appending a
    /// table-level PRIMARY KEY clause when one is needed.
    pub fn generate_columns(&self, columns: &[ColumnDefinition]) -> Result<String> {
        let primary: Vec<&ColumnDefinition> =
            columns.iter().filter(|c| c.is_primary_key).collect();
        let inline_pk = self.pipeline.inline_primary_key
            && primary.len() == 1
            && primary[0].is_identity;

        let fragments = columns
            .iter()
            .map(|c| self.run_pipeline(c))
            .collect::<Result<Vec<_>>>()?;
        let mut sql = fragments.join(", ");

        if !primary.is_empty() && !inline_pk {
            let names = primary
                .iter()
                .map(|c| self.quoter.quote_column_name(&c.name))
                .collect::<Vec<_>>()
                .join(", ");
            sql.push_str(&format!(", PRIMARY KEY ({names})"));
        }
        Ok(sql)
    }

    fn run_pipeline(&self, column: &ColumnDefinition) -> Result<String> {
        if column.name.trim().is_empty() {
            return Err(Error::malformed("column name must not be empty"));
        }
        let mut parts = Vec::with_capacity(self.pipeline.steps.len());
        for step in &self.pipeline.steps {
            let clause = step(self, column)?;
            if !clause.is_empty() {
                parts.push(clause);
            }
        }
        Ok(parts.join(" "))
    }

    /// Default constraint name when a foreign key carries none.
    pub fn generate_foreign_key_name(&self, fk: &ForeignKeyDefinition) -> String {
        format!("FK_{}_{}", fk.foreign_table, fk.primary_table)
    }

    /// Render the `CONSTRAINT ... FOREIGN KEY ... REFERENCES ...` fragment.
    /// Mismatched column-list lengths are a hard error, not a truncation.
    pub fn format_foreign_key(&self, fk: &ForeignKeyDefinition) -> Result<String> {
        if fk.foreign_columns.is_empty() {
            return Err(Error::malformed("foreign key has no foreign columns"));
        }
        if fk.foreign_columns.len() != fk.primary_columns.len() {
            return Err(Error::ForeignKeyColumnCountMismatch {
                foreign: fk.foreign_columns.len(),
                primary: fk.primary_columns.len(),
            });
        }

        let name = if fk.name.trim().is_empty() {
            self.generate_foreign_key_name(fk)
        } else {
            fk.name.clone()
        };
        let foreign_cols = self.quote_list(&fk.foreign_columns);
        let primary_cols = self.quote_list(&fk.primary_columns);
        Ok(format!(
            "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({}){}{}",
            self.quoter.quote_constraint_name(&name),
            foreign_cols,
            self.quoter.quote_table_name(
                &fk.primary_table,
                fk.primary_table_schema.as_deref()
            ),
            primary_cols,
            self.format_cascade("DELETE", fk.on_delete),
            self.format_cascade("UPDATE", fk.on_update),
        ))
    }

    /// Render an ` ON DELETE ...` / ` ON UPDATE ...` clause, or nothing.
    pub fn format_cascade(&self, event: &str, rule: CascadeRule) -> String {
        match rule {
            CascadeRule::None => String::new(),
            CascadeRule::Cascade => format!(" ON {event} CASCADE"),
            CascadeRule::SetNull => format!(" ON {event} SET NULL"),
            CascadeRule::SetDefault => format!(" ON {event} SET DEFAULT"),
            CascadeRule::Restrict => format!(" ON {event} RESTRICT"),
            CascadeRule::NoAction => format!(" ON {event} NO ACTION"),
        }
    }

    fn quote_list(&self, names: &[String]) -> String {
        names
            .iter()
            .map(|n| self.quoter.quote_column_name(n))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn format_name(r: &ColumnRenderer<'_>, column: &ColumnDefinition) -> Result<String> {
    Ok(r.quoter.quote_column_name(&column.name))
}

pub fn format_type(r: &ColumnRenderer<'_>, column: &ColumnDefinition) -> Result<String> {
    match &column.type_spec {
        ColumnTypeSpec::Custom(raw) => Ok(raw.clone()),
        ColumnTypeSpec::Abstract(t) => r.type_map.resolve(*t, column.size, column.precision),
    }
}

pub fn format_nullable(_r: &ColumnRenderer<'_>, column: &ColumnDefinition) -> Result<String> {
    Ok(match column.is_nullable {
        Some(true) => "NULL".to_string(),
        Some(false) => "NOT NULL".to_string(),
        None => String::new(),
    })
}

pub fn format_default(r: &ColumnRenderer<'_>, column: &ColumnDefinition) -> Result<String> {
    match &column.default {
        ColumnDefault::Unset => Ok(String::new()),
        ColumnDefault::Null => Ok("DEFAULT NULL".to_string()),
        ColumnDefault::Value(v) => Ok(format!("DEFAULT {}", r.quoter.quote_value(v)?)),
    }
}

/// The ANSI pipeline has no identity syntax; dialects that support identity
/// columns substitute their own step at this position.
pub fn format_identity(_r: &ColumnRenderer<'_>, _column: &ColumnDefinition) -> Result<String> {
    Ok(String::new())
}

pub fn format_unique(_r: &ColumnRenderer<'_>, column: &ColumnDefinition) -> Result<String> {
    Ok(if column.is_unique {
        "UNIQUE".to_string()
    } else {
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::column::ColumnType;
    use crate::expression::values::Value;

    fn fixtures() -> (Quoter, TypeMap, ClausePipeline) {
        let mut map = TypeMap::new();
        map.set(ColumnType::Int32, "INTEGER");
        map.set(ColumnType::String, "TEXT");
        map.set_with_size(ColumnType::String, 4000, "VARCHAR($size)");
        (Quoter::ansi(), map, ClausePipeline::ansi())
    }

    fn renderer<'a>(
        quoter: &'a Quoter,
        map: &'a TypeMap,
        pipeline: &'a ClausePipeline,
    ) -> ColumnRenderer<'a> {
        ColumnRenderer {
            quoter,
            type_map: map,
            pipeline,
            compatibility: CompatibilityMode::Strict,
        }
    }

    #[test]
    fn test_basic_column() {
        let (q, m, p) = fixtures();
        let r = renderer(&q, &m, &p);
        let mut col = ColumnDefinition::new("name", ColumnType::String);
        col.size = Some(100);
        col.is_nullable = Some(false);
        assert_eq!(r.generate(&col).unwrap(), "\"name\" VARCHAR(100) NOT NULL");
    }

    #[test]
    fn test_default_null_vs_unset() {
        let (q, m, p) = fixtures();
        let r = renderer(&q, &m, &p);

        let unset = ColumnDefinition::new("a", ColumnType::Int32);
        assert_eq!(r.generate(&unset).unwrap(), "\"a\" INTEGER");

        let mut explicit_null = ColumnDefinition::new("a", ColumnType::Int32);
        explicit_null.default = ColumnDefault::Null;
        assert_eq!(r.generate(&explicit_null).unwrap(), "\"a\" INTEGER DEFAULT NULL");

        let mut with_value = ColumnDefinition::new("a", ColumnType::Int32);
        with_value.default = ColumnDefault::Value(Value::from(7));
        assert_eq!(r.generate(&with_value).unwrap(), "\"a\" INTEGER DEFAULT 7");
    }

    #[test]
    fn test_reordered_pipeline_swaps_default_before_nullable() {
        let (q, m, _) = fixtures();
        let swapped = ClausePipeline::with_steps(vec![
            format_name,
            format_type,
            format_default,
            format_nullable,
            format_unique,
        ]);
        let r = renderer(&q, &m, &swapped);
        let mut col = ColumnDefinition::new("a", ColumnType::Int32);
        col.is_nullable = Some(false);
        col.default = ColumnDefault::Value(Value::from(0));
        assert_eq!(r.generate(&col).unwrap(), "\"a\" INTEGER DEFAULT 0 NOT NULL");
    }

    #[test]
    fn test_compound_primary_key_is_table_level() {
        let (q, m, p) = fixtures();
        let r = renderer(&q, &m, &p);
        let mut a = ColumnDefinition::new("a", ColumnType::Int32);
        a.is_primary_key = true;
        let mut b = ColumnDefinition::new("b", ColumnType::Int32);
        b.is_primary_key = true;
        assert_eq!(
            r.generate_columns(&[a, b]).unwrap(),
            "\"a\" INTEGER, \"b\" INTEGER, PRIMARY KEY (\"a\", \"b\")"
        );
    }

    #[test]
    fn test_foreign_key_count_mismatch_is_hard_error() {
        let (q, m, p) = fixtures();
        let r = renderer(&q, &m, &p);
        let mut fk = ForeignKeyDefinition::new("orders", "users");
        fk.foreign_columns = vec!["user_id".into(), "tenant_id".into()];
        fk.primary_columns = vec!["id".into()];
        let err = r.format_foreign_key(&fk).unwrap_err();
        assert!(matches!(
            err,
            Error::ForeignKeyColumnCountMismatch {
                foreign: 2,
                primary: 1
            }
        ));
    }

    #[test]
    fn test_foreign_key_derived_name_and_cascade() {
        let (q, m, p) = fixtures();
        let r = renderer(&q, &m, &p);
        let mut fk = ForeignKeyDefinition::new("orders", "users");
        fk.foreign_columns = vec!["user_id".into()];
        fk.primary_columns = vec!["id".into()];
        fk.on_delete = CascadeRule::Cascade;
        fk.on_update = CascadeRule::SetNull;
        assert_eq!(
            r.format_foreign_key(&fk).unwrap(),
            "CONSTRAINT \"FK_orders_users\" FOREIGN KEY (\"user_id\") REFERENCES \"users\" (\"id\") ON DELETE CASCADE ON UPDATE SET NULL"
        );
    }

    #[test]
    fn test_empty_column_name_is_malformed() {
        let (q, m, p) = fixtures();
        let r = renderer(&q, &m, &p);
        let col = ColumnDefinition::new("  ", ColumnType::Int32);
        assert!(matches!(r.generate(&col).unwrap_err(), Error::Malformed(_)));
    }
}
