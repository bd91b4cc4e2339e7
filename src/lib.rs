//! Fabrica - Natural-language query compiler for factory production planning
//!
//! This crate re-exports all layers of the Fabrica system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: fabrica_runtime    — REPL, CLI
//! Layer 4: fabrica_compiler   — Entity resolution, semantic query building
//! Layer 3: fabrica_query      — Typed query model (objective, constraints)
//! Layer 2: fabrica_language   — Lexer, grammar, parse tree
//! Layer 1: fabrica_storage    — In-memory entity database
//! Layer 0: fabrica_foundation — Core types (TypeTag, Var, Entity, Error)
//! ```

pub use fabrica_compiler as compiler;
pub use fabrica_foundation as foundation;
pub use fabrica_language as language;
pub use fabrica_query as query;
pub use fabrica_runtime as runtime;
pub use fabrica_storage as storage;
