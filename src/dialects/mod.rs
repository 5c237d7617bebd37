//! Dialect configurations.
//!
//! Each dialect is a configuration value injected into the one generic
//! [`Generator`](crate::generator::Generator): quoter settings, type map
//! entries, clause-pipeline order, feature support, and fn-pointer overrides
//! for the few operations whose statement shape genuinely varies. There is no
//! generator subclassing; a dialect that only differs in clause order swaps
//! two pipeline positions instead of overriding a method.

pub mod db2;
pub mod firebird;
pub mod hana;
pub mod mysql;
pub mod oracle;
pub mod postgres;
pub mod snowflake;
pub mod sqlanywhere;
pub mod sqlite;
pub mod sqlserver;

use crate::column::ClausePipeline;
use crate::description::DescriptionStyle;
use crate::error::Result;
use crate::expression::{
    AlterColumn, CreateIndex, CreateSequence, DeleteConstraint, DeleteForeignKey, DeleteIndex,
    RenameColumn, RenameTable,
};
use crate::generator::{Generator, ops};
use crate::quoter::Quoter;
use crate::typemap::TypeMap;

/// An operation override: same signature as the shared default it replaces.
pub type OpFn<E> = fn(&Generator, &E) -> Result<String>;

/// Whether a dialect can express a feature. The message of an unsupported
/// feature is surfaced verbatim by strict compatibility mode.
#[derive(Debug, Clone, Copy)]
pub enum Feature {
    Supported,
    Unsupported(&'static str),
}

/// Per-dialect feature support, gated through the compatibility mode.
#[derive(Debug, Clone)]
pub struct Features {
    pub schemas: Feature,
    pub sequences: Feature,
    pub indexes: Feature,
    pub foreign_keys: Feature,
    pub constraints: Feature,
    pub alter_column: Feature,
    pub rename_column: Feature,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            schemas: Feature::Supported,
            sequences: Feature::Supported,
            indexes: Feature::Supported,
            foreign_keys: Feature::Supported,
            constraints: Feature::Supported,
            alter_column: Feature::Supported,
            rename_column: Feature::Supported,
        }
    }
}

/// One dialect's complete configuration.
#[derive(Debug, Clone)]
pub struct Dialect {
    /// Registry identifier ("postgres", "sqlserver", ...).
    pub name: &'static str,
    /// Additional registry identifiers (version variants, shorthands).
    pub aliases: &'static [&'static str],
    pub quoter: Quoter,
    pub type_map: TypeMap,
    pub pipeline: ClausePipeline,
    /// Appended to every emitted statement.
    pub terminator: &'static str,
    /// `ADD COLUMN` vs. `ADD` in ALTER TABLE.
    pub add_column_clause: &'static str,
    pub descriptions: DescriptionStyle,
    pub features: Features,
    pub alter_column: OpFn<AlterColumn>,
    pub rename_table: OpFn<RenameTable>,
    pub rename_column: OpFn<RenameColumn>,
    pub create_index: OpFn<CreateIndex>,
    pub drop_index: OpFn<DeleteIndex>,
    pub drop_foreign_key: OpFn<DeleteForeignKey>,
    pub drop_constraint: OpFn<DeleteConstraint>,
    pub create_sequence: OpFn<CreateSequence>,
}

impl Dialect {
    /// ANSI-flavored base configuration; dialect modules override fields.
    pub fn base(name: &'static str, quoter: Quoter, type_map: TypeMap) -> Self {
        Self {
            name,
            aliases: &[],
            quoter,
            type_map,
            pipeline: ClausePipeline::ansi(),
            terminator: ";",
            add_column_clause: "ADD COLUMN",
            descriptions: DescriptionStyle::None,
            features: Features::default(),
            alter_column: ops::alter_column,
            rename_table: ops::rename_table,
            rename_column: ops::rename_column,
            create_index: ops::create_index,
            drop_index: ops::drop_index,
            drop_foreign_key: ops::drop_foreign_key,
            drop_constraint: ops::drop_constraint,
            create_sequence: ops::create_sequence,
        }
    }
}
