//! Core types, variables, and errors for Fabrica.
//!
//! This crate provides:
//! - [`TypeTag`] - The closed set of domain entity types
//! - [`VarId`] / [`SyntheticVar`] / [`Var`] - Canonical variable identifiers
//! - [`Entity`] / [`Database`] - Capability traits for the domain database
//! - [`Error`] - The query compiler error taxonomy
//! - [`pluralize`] - English pluralization for entity name matching

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod error;
pub mod plural;
pub mod tag;
pub mod var;

pub use entity::{Database, Entity, EntityRef};
pub use error::{Error, ErrorKind, Result};
pub use plural::pluralize;
pub use tag::TypeTag;
pub use var::{SyntheticVar, Var, VarId};
