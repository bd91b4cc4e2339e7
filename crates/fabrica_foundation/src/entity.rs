//! Capability traits for the domain database.
//!
//! The compiler consumes the database through these read-only traits; it
//! never mutates entities, so one database may serve any number of
//! concurrent compilations.

use std::fmt;
use std::sync::Arc;

use crate::tag::TypeTag;
use crate::var::VarId;

/// One queryable domain entity.
pub trait Entity: fmt::Debug + Send + Sync {
    /// Returns the canonical variable identifying this entity.
    fn var(&self) -> &VarId;

    /// Returns the human-readable display name.
    fn name(&self) -> &str;

    /// Returns true if this entity is a raw resource.
    fn is_resource(&self) -> bool {
        false
    }

    /// Returns the type tag of this entity.
    fn tag(&self) -> TypeTag {
        self.var().tag()
    }
}

/// A shared handle to an entity.
pub type EntityRef = Arc<dyn Entity>;

/// Read-only access to the domain database.
///
/// Bulk accessors return owned snapshots so that callers never hold a lock
/// across resolution; implementations are expected to be in-memory.
pub trait Database: Send + Sync {
    /// All items, resources included.
    fn items(&self) -> Vec<EntityRef>;

    /// All crafting recipes.
    fn recipes(&self) -> Vec<EntityRef>;

    /// All power generation recipes.
    fn power_recipes(&self) -> Vec<EntityRef>;

    /// All crafting buildings.
    fn crafters(&self) -> Vec<EntityRef>;

    /// All power generation buildings.
    fn generators(&self) -> Vec<EntityRef>;

    /// All recipes producing the given item or resource.
    fn recipes_for_product(&self, var: &VarId) -> Vec<EntityRef>;

    /// All recipes consuming the given item or resource as an ingredient.
    fn recipes_for_ingredient(&self, var: &VarId) -> Vec<EntityRef>;

    /// All recipes built in the given crafter.
    fn recipes_for_crafter(&self, var: &VarId) -> Vec<EntityRef>;

    /// All power recipes run in the given generator.
    fn power_recipes_for_generator(&self, var: &VarId) -> Vec<EntityRef>;
}
