//! Typed dialect extensions.
//!
//! A small typed registry replaces an open string-keyed bag: each known
//! dialect extension is a variant, looked up by a typed accessor, so a typo
//! in an extension key is a compile error instead of a silent no-op.

use serde::{Deserialize, Serialize};

/// Index algorithm selection (Postgres `USING ...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexAlgorithm {
    BTree,
    Hash,
    Gist,
    SpGist,
    Gin,
    Brin,
}

impl IndexAlgorithm {
    pub fn as_sql(&self) -> &'static str {
        match self {
            IndexAlgorithm::BTree => "BTREE",
            IndexAlgorithm::Hash => "HASH",
            IndexAlgorithm::Gist => "GIST",
            IndexAlgorithm::SpGist => "SPGIST",
            IndexAlgorithm::Gin => "GIN",
            IndexAlgorithm::Brin => "BRIN",
        }
    }
}

/// A single dialect-specific extension attached to an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Extension {
    /// Postgres index algorithm (`CREATE INDEX ... USING GIN`).
    IndexAlgorithm(IndexAlgorithm),
    /// Identity seed/increment pair (SQL Server `IDENTITY(seed, increment)`,
    /// Snowflake `IDENTITY START seed INCREMENT increment`).
    IdentitySeed { seed: i64, increment: i64 },
    /// MySQL per-column character set.
    ColumnCharset(String),
}

/// The extension set carried by an entity. Empty by default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extensions(Vec<Extension>);

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ext: Extension) {
        self.0.push(ext);
    }

    pub fn with(mut self, ext: Extension) -> Self {
        self.0.push(ext);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn index_algorithm(&self) -> Option<IndexAlgorithm> {
        self.0.iter().find_map(|e| match e {
            Extension::IndexAlgorithm(a) => Some(*a),
            _ => None,
        })
    }

    pub fn identity_seed(&self) -> Option<(i64, i64)> {
        self.0.iter().find_map(|e| match e {
            Extension::IdentitySeed { seed, increment } => Some((*seed, *increment)),
            _ => None,
        })
    }

    pub fn column_charset(&self) -> Option<&str> {
        self.0.iter().find_map(|e| match e {
            Extension::ColumnCharset(cs) => Some(cs.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_lookup() {
        let exts = Extensions::new()
            .with(Extension::IndexAlgorithm(IndexAlgorithm::Gin))
            .with(Extension::IdentitySeed {
                seed: 100,
                increment: 5,
            });
        assert_eq!(exts.index_algorithm(), Some(IndexAlgorithm::Gin));
        assert_eq!(exts.identity_seed(), Some((100, 5)));
        assert_eq!(exts.column_charset(), None);
    }
}
