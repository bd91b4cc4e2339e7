//! The compiled result for information lookups.
//!
//! An [`InfoQuery`] is an ordered list of resolved entities; it carries no
//! constraint semantics.

use fabrica_foundation::EntityRef;

/// An ordered sequence of resolved domain entities.
#[derive(Clone, Debug, Default)]
pub struct InfoQuery {
    entities: Vec<EntityRef>,
}

impl InfoQuery {
    /// Creates an empty info query.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Appends one entity.
    pub fn push(&mut self, entity: EntityRef) {
        self.entities.push(entity);
    }

    /// Appends every entity from an iterator.
    pub fn extend(&mut self, entities: impl IntoIterator<Item = EntityRef>) {
        self.entities.extend(entities);
    }

    /// Returns the resolved entities in order.
    #[must_use]
    pub fn entities(&self) -> &[EntityRef] {
        &self.entities
    }

    /// Returns the number of resolved entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if nothing was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates over the resolved entities.
    pub fn iter(&self) -> impl Iterator<Item = &EntityRef> {
        self.entities.iter()
    }
}
