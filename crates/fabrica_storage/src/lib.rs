//! In-memory entity database for Fabrica.
//!
//! This crate provides:
//! - Typed domain entities (`Item`, `Recipe`, `PowerRecipe`, `Crafter`,
//!   `Generator`) implementing the foundation `Entity` trait
//! - `MemoryDatabase` - an immutable `Database` implementation with
//!   product/ingredient/crafter/generator link indexes built at construction
//! - `sample` - a canned dataset exercising every query shape

pub mod database;
pub mod entity;
pub mod sample;

pub use database::{MemoryDatabase, MemoryDatabaseBuilder};
pub use entity::{Crafter, Generator, Item, PowerRecipe, Recipe, RecipeItem};
pub use sample::sample_database;
