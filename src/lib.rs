//! Dialect-abstracted SQL schema-change generation.
//!
//! Describe a schema change once as a typed expression, render it for any
//! registered dialect. No connection, no execution — input expression to
//! output statement text, deterministically.
//!
//! ```ignore
//! use ddlforge::prelude::*;
//! let generator = registry::generator_for("postgres", GeneratorOptions::default())?;
//! let sql = generator.generate(&CreateTable { table }.into())?;
//! ```

pub mod column;
pub mod compat;
pub mod description;
pub mod dialects;
pub mod error;
pub mod expression;
pub mod generator;
pub mod quoter;
pub mod typemap;

pub use compat::CompatibilityMode;
pub use error::{Error, Result};
pub use generator::{Generator, GeneratorOptions, registry};

pub mod prelude {
    pub use crate::compat::CompatibilityMode;
    pub use crate::error::{Error, Result};
    pub use crate::expression::*;
    pub use crate::generator::{Generator, GeneratorOptions, registry};
}
