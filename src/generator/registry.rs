//! The dialect registry.
//!
//! A compile-time list of dialect factories keyed by name and aliases.
//! Lookup is case-insensitive; an unknown identifier is a typed error listing
//! nothing magical — callers can enumerate [`names`] to present choices.

use crate::dialects::{self, Dialect};
use crate::error::{Error, Result};
use crate::generator::{Generator, GeneratorOptions};

type DialectFactory = fn() -> Dialect;

const FACTORIES: &[DialectFactory] = &[
    dialects::db2::dialect,
    dialects::firebird::dialect,
    dialects::hana::dialect,
    dialects::mysql::dialect,
    dialects::oracle::dialect,
    dialects::postgres::dialect,
    dialects::snowflake::dialect,
    dialects::sqlanywhere::dialect,
    dialects::sqlite::dialect,
    dialects::sqlserver::dialect,
];

/// Canonical names of every registered dialect.
pub fn names() -> Vec<&'static str> {
    FACTORIES.iter().map(|f| f().name).collect()
}

/// Find a dialect by canonical name or alias, case-insensitively.
pub fn lookup(id: &str) -> Option<Dialect> {
    let id = id.trim();
    FACTORIES.iter().map(|f| f()).find(|d| {
        d.name.eq_ignore_ascii_case(id) || d.aliases.iter().any(|a| a.eq_ignore_ascii_case(id))
    })
}

/// Build a generator for the named dialect.
pub fn generator_for(id: &str, options: GeneratorOptions) -> Result<Generator> {
    let dialect = lookup(id).ok_or_else(|| Error::UnknownDialect(id.to_string()))?;
    Ok(Generator::with_options(dialect, options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert!(lookup("Postgres").is_some());
        assert!(lookup("POSTGRESQL").is_some());
        assert!(lookup("MariaDB").is_some());
        assert!(lookup("informix").is_none());
    }

    #[test]
    fn test_sqlserver_version_aliases_share_one_dialect() {
        for id in ["mssql", "sqlserver2008", "sqlserver2016"] {
            assert_eq!(lookup(id).unwrap().name, "sqlserver");
        }
    }

    #[test]
    fn test_unknown_dialect_error() {
        let err = generator_for("access", GeneratorOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "unknown dialect: 'access'");
    }

    #[test]
    fn test_names_are_unique() {
        let mut all = names();
        all.sort();
        let len = all.len();
        all.dedup();
        assert_eq!(all.len(), len);
    }
}
