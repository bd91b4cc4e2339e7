//! Typed query model for Fabrica.
//!
//! This crate provides:
//! - [`OptimizationQuery`] - Objective plus eq/ge/le constraint maps with
//!   per-category strictness
//! - [`InfoQuery`] - An ordered list of resolved entities
//! - [`Section`] / [`Category`] - Strictness-carrying groupings of clause
//!   elements by canonical-variable type
//!
//! Query models are constructed by the semantic builder in the compiler
//! crate, one fresh instance per compiled command, and are immutable once
//! handed to the consumer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod category;
pub mod info;
pub mod optimization;

pub use category::{Category, CategoryKey, Section};
pub use info::InfoQuery;
pub use optimization::{Exclude, Include, Input, Objective, OptimizationQuery, Output};
