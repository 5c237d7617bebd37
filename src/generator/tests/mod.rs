mod compat;
mod data;
mod dialects;

use crate::compat::CompatibilityMode;
use crate::expression::column::{ColumnDefinition, ColumnType};
use crate::expression::{CreateTable, TableDefinition};
use crate::generator::{Generator, GeneratorOptions, registry};

fn generator(id: &str) -> Generator {
    registry::generator_for(id, GeneratorOptions::default()).unwrap()
}

fn loose(id: &str) -> Generator {
    registry::generator_for(
        id,
        GeneratorOptions {
            compatibility: CompatibilityMode::Loose,
            ..GeneratorOptions::default()
        },
    )
    .unwrap()
}

/// users(id identity pk, email varchar(255) not null) — the shared fixture
/// most dialect assertions render.
fn users_table() -> CreateTable {
    let mut table = TableDefinition::new("users");
    let mut id = ColumnDefinition::new("id", ColumnType::Int32);
    id.table_name = "users".into();
    id.is_identity = true;
    id.is_primary_key = true;
    let mut email = ColumnDefinition::new("email", ColumnType::String);
    email.table_name = "users".into();
    email.size = Some(255);
    email.is_nullable = Some(false);
    table.columns = vec![id, email];
    CreateTable { table }
}
