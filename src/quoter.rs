//! Identifier quoting and literal value formatting.
//!
//! Identifier quoting wraps a name in the dialect's open/close quote strings
//! and doubles any embedded close quote. It is idempotent: quoting an
//! already-quoted name is a no-op. Value formatting dispatches on the runtime
//! [`Value`] variant and is culture-independent by construction — the decimal
//! separator is always `.` and dates are ISO-8601 regardless of locale.

use std::fmt::Write as _;

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::error::{Error, Result};
use crate::expression::values::{SystemMethod, Value};

/// The quoting and value-formatting configuration of one dialect.
#[derive(Debug, Clone)]
pub struct Quoter {
    pub open_quote: &'static str,
    pub close_quote: &'static str,
    /// Escape token replacing an embedded close quote (doubled by default).
    pub close_quote_escape: &'static str,
    /// Dialects may opt out of identifier quoting entirely.
    pub enabled: bool,
    pub format_bool: fn(bool) -> &'static str,
    pub format_bytes: fn(&[u8]) -> String,
    pub format_datetime: fn(&NaiveDateTime) -> String,
    pub format_datetime_offset: fn(&DateTime<FixedOffset>) -> String,
    /// Native function text for a system method; `None` = not expressible.
    pub system_method: fn(SystemMethod) -> Option<&'static str>,
}

impl Quoter {
    /// ANSI double-quote quoting with 1/0 booleans and `0x..` byte literals.
    pub fn ansi() -> Self {
        Self {
            open_quote: "\"",
            close_quote: "\"",
            close_quote_escape: "\"\"",
            enabled: true,
            format_bool: one_zero_bool,
            format_bytes: hex_bytes,
            format_datetime: iso_datetime,
            format_datetime_offset: iso_datetime_offset,
            system_method: ansi_system_method,
        }
    }

    /// Square-bracket quoting (SQL Server family).
    pub fn brackets() -> Self {
        Self {
            open_quote: "[",
            close_quote: "]",
            close_quote_escape: "]]",
            ..Self::ansi()
        }
    }

    /// Backtick quoting (MySQL family).
    pub fn backticks() -> Self {
        Self {
            open_quote: "`",
            close_quote: "`",
            close_quote_escape: "``",
            ..Self::ansi()
        }
    }

    /// True when the name is already wrapped in this dialect's quotes.
    /// Always false when quoting is disabled.
    pub fn is_quoted(&self, name: &str) -> bool {
        self.enabled
            && !self.open_quote.is_empty()
            && name.len() >= self.open_quote.len() + self.close_quote.len()
            && name.starts_with(self.open_quote)
            && name.ends_with(self.close_quote)
    }

    /// Quote an identifier, doubling any embedded close quote. Idempotent.
    pub fn quote(&self, name: &str) -> String {
        if !self.enabled || name.is_empty() || self.is_quoted(name) {
            return name.to_string();
        }
        format!(
            "{}{}{}",
            self.open_quote,
            name.replace(self.close_quote, self.close_quote_escape),
            self.close_quote
        )
    }

    /// Strip this dialect's quotes and undo close-quote escaping.
    /// A name that is not quoted is returned unchanged.
    pub fn unquote(&self, name: &str) -> String {
        if !self.is_quoted(name) {
            return name.to_string();
        }
        name[self.open_quote.len()..name.len() - self.close_quote.len()]
            .replace(self.close_quote_escape, self.close_quote)
    }

    pub fn quote_column_name(&self, name: &str) -> String {
        self.quote(name)
    }

    pub fn quote_index_name(&self, name: &str) -> String {
        self.quote(name)
    }

    pub fn quote_constraint_name(&self, name: &str) -> String {
        self.quote(name)
    }

    pub fn quote_schema_name(&self, name: &str) -> String {
        self.quote(name)
    }

    /// Quote a table name, schema-qualified when a schema applies.
    pub fn quote_table_name(&self, name: &str, schema: Option<&str>) -> String {
        match schema {
            Some(s) => format!("{}.{}", self.quote_schema_name(s), self.quote(name)),
            None => self.quote(name),
        }
    }

    pub fn quote_sequence_name(&self, name: &str, schema: Option<&str>) -> String {
        self.quote_table_name(name, schema)
    }

    /// Quote a string literal, doubling embedded single quotes.
    pub fn quote_string(&self, value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    /// Format a literal value, dispatching on its runtime variant.
    pub fn quote_value(&self, value: &Value) -> Result<String> {
        Ok(match value {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => (self.format_bool)(*b).to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Decimal(d) => d.to_string(),
            Value::String(s) => self.quote_string(s),
            Value::Char(c) => self.quote_string(&c.to_string()),
            Value::Uuid(u) => format!("'{u}'"),
            Value::DateTime(dt) => (self.format_datetime)(dt),
            Value::DateTimeOffset(dt) => (self.format_datetime_offset)(dt),
            Value::Bytes(bytes) => (self.format_bytes)(bytes),
            Value::Enum(name) => self.quote_string(name),
            Value::Method(m) => (self.system_method)(*m)
                .map(str::to_string)
                .ok_or_else(|| {
                    Error::unsupported(format!("system method {m:?} has no mapping in this dialect"))
                })?,
            Value::Raw(sql) => sql.clone(),
        })
    }
}

pub(crate) fn one_zero_bool(b: bool) -> &'static str {
    if b { "1" } else { "0" }
}

pub(crate) fn true_false_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

pub(crate) fn hex_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(2 + bytes.len() * 2);
    out.push_str("0x");
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}

pub(crate) fn iso_datetime(dt: &NaiveDateTime) -> String {
    format!("'{}'", dt.format("%Y-%m-%dT%H:%M:%S"))
}

pub(crate) fn iso_datetime_offset(dt: &DateTime<FixedOffset>) -> String {
    format!("'{}'", dt.format("%Y-%m-%dT%H:%M:%S%:z"))
}

fn ansi_system_method(m: SystemMethod) -> Option<&'static str> {
    match m {
        SystemMethod::CurrentDateTime | SystemMethod::CurrentUtcDateTime => {
            Some("CURRENT_TIMESTAMP")
        }
        SystemMethod::CurrentUser => Some("CURRENT_USER"),
        SystemMethod::NewGuid | SystemMethod::NewSequentialId => None,
    }
}
