//! Entity resolution and semantic query building for Fabrica.
//!
//! This crate turns a parse tree into a typed query model:
//! - `EntityResolver` - matches free-text spans against database entities
//!   using exact, plural, canonical-variable, and regex strategies
//! - `QueryCompiler` - walks the parse tree, resolves every entity span,
//!   and assembles an optimization or information query
//! - [`compile`] - the one-call entry point: text in, query out

pub mod builder;
pub mod resolver;

pub use builder::{Query, QueryCompiler};
pub use resolver::EntityResolver;

use fabrica_foundation::{Database, Result};

/// Compiles one command string against a database.
///
/// # Errors
///
/// Returns a grammar error if the text matches no query shape, a resolution
/// error if an entity span matches no database entity, or a semantic error
/// for objective/output violations.
pub fn compile(input: &str, db: &dyn Database) -> Result<Query> {
    let ast = fabrica_language::parse(input)?;
    QueryCompiler::new(db).compile(&ast)
}
