//! Capacity-tiered type mapping.
//!
//! For a given abstract type a dialect registers zero or more
//! (capacity, template) tiers plus one default template. Resolution picks the
//! smallest registered capacity that can hold the requested size; if none
//! qualifies the default template applies. Most dialects use different SQL
//! keywords for small vs. large variants of the same logical type
//! (`VARCHAR(n)` vs. `TEXT`/`CLOB`), so picking the wrong tier either
//! truncates data or generates invalid SQL.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::expression::column::ColumnType;

/// Placeholder substituted with the requested size.
pub const SIZE_PLACEHOLDER: &str = "$size";
/// Placeholder substituted with the requested precision.
pub const PRECISION_PLACEHOLDER: &str = "$precision";

#[derive(Debug, Clone, Default)]
struct TypeEntry {
    /// Unsized template, used when no size is requested or no tier qualifies.
    base: Option<String>,
    /// (capacity, template) tiers in ascending capacity order.
    sized: Vec<(u32, String)>,
}

/// The table mapping abstract column types + size to dialect type syntax.
#[derive(Debug, Clone, Default)]
pub struct TypeMap {
    entries: HashMap<ColumnType, TypeEntry>,
}

impl TypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the default (unsized) template for a type.
    pub fn set(&mut self, column_type: ColumnType, template: &str) {
        self.entries.entry(column_type).or_default().base = Some(template.to_string());
    }

    /// Register a sized tier: `template` applies to sizes up to `max_size`.
    /// Tiers are kept in ascending capacity order regardless of call order.
    pub fn set_with_size(&mut self, column_type: ColumnType, max_size: u32, template: &str) {
        let entry = self.entries.entry(column_type).or_default();
        let pos = entry
            .sized
            .iter()
            .position(|(cap, _)| *cap >= max_size)
            .unwrap_or(entry.sized.len());
        entry.sized.insert(pos, (max_size, template.to_string()));
    }

    /// Resolve an abstract type + optional size/precision to type syntax.
    ///
    /// Selection picks the smallest capacity >= the requested size; with no
    /// qualifying tier (or no requested size) the default template is used.
    /// A type with no entry at all is an unmapped-type error — there is no
    /// guessed fallback.
    pub fn resolve(
        &self,
        column_type: ColumnType,
        size: Option<u32>,
        precision: Option<u32>,
    ) -> Result<String> {
        let entry = self.entries.get(&column_type).ok_or(Error::UnmappedType {
            column_type,
            size,
        })?;

        let template = match size {
            Some(requested) => entry
                .sized
                .iter()
                .find(|(cap, _)| *cap >= requested)
                .map(|(_, template)| template)
                .or(entry.base.as_ref()),
            None => entry.base.as_ref(),
        };

        template
            .map(|t| expand(t, size, precision))
            .ok_or(Error::UnmappedType { column_type, size })
    }
}

fn expand(template: &str, size: Option<u32>, precision: Option<u32>) -> String {
    let mut out = template.to_string();
    if let Some(s) = size {
        out = out.replace(SIZE_PLACEHOLDER, &s.to_string());
    }
    if let Some(p) = precision {
        out = out.replace(PRECISION_PLACEHOLDER, &p.to_string());
    }
    out
}
