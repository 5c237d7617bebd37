//! Literal values carried by expressions.
//!
//! Value quoting dispatches on the runtime variant, not on a declared schema
//! type: callers pass heterogeneous literals (ints, decimals, GUIDs, system
//! method sentinels) through one entry point.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named "system method" default sentinel, rendered as the dialect's
/// native function call text (`NEWID()`, `GETDATE()`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMethod {
    NewGuid,
    NewSequentialId,
    CurrentDateTime,
    CurrentUtcDateTime,
    CurrentUser,
}

/// A literal value in an expression (column default, insert/update/delete data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// NULL value
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Float
    Float(f64),
    /// Exact decimal
    Decimal(Decimal),
    /// String, quoted with embedded `'` doubled
    String(String),
    /// Single character, treated as a one-character string
    Char(char),
    /// GUID in canonical hyphenated form
    Uuid(Uuid),
    /// Date/time without offset, rendered as ISO-8601 regardless of locale
    DateTime(NaiveDateTime),
    /// Date/time with offset
    DateTimeOffset(DateTime<FixedOffset>),
    /// Byte array, rendered as a hex literal
    Bytes(Vec<u8>),
    /// Enum member, rendered as its quoted name
    Enum(String),
    /// System method sentinel (e.g. "new GUID", "current timestamp")
    Method(SystemMethod),
    /// Raw SQL fragment, passed through unquoted
    Raw(String),
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<Uuid> for Value {
    fn from(u: Uuid) -> Self {
        Value::Uuid(u)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Value::DateTimeOffset(dt)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<SystemMethod> for Value {
    fn from(m: SystemMethod) -> Self {
        Value::Method(m)
    }
}
