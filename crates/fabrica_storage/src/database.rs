//! The in-memory database.
//!
//! `MemoryDatabase` is immutable once built; link indexes (product,
//! ingredient, crafter, generator) are computed at construction so lookups
//! are map reads. The compiler only reads, so one database may serve any
//! number of concurrent compilations.

use std::collections::BTreeMap;
use std::sync::Arc;

use fabrica_foundation::{Database, Entity, EntityRef, VarId};

use crate::entity::{Crafter, Generator, Item, PowerRecipe, Recipe};

/// Erases a slice of concrete entities into shared trait handles.
fn erase<T: Entity + 'static>(entities: &[Arc<T>]) -> Vec<EntityRef> {
    entities.iter().map(|e| Arc::clone(e) as EntityRef).collect()
}

/// An immutable in-memory entity database.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    items: Vec<Arc<Item>>,
    recipes: Vec<Arc<Recipe>>,
    power_recipes: Vec<Arc<PowerRecipe>>,
    crafters: Vec<Arc<Crafter>>,
    generators: Vec<Arc<Generator>>,
    by_product: BTreeMap<VarId, Vec<Arc<Recipe>>>,
    by_ingredient: BTreeMap<VarId, Vec<Arc<Recipe>>>,
    by_crafter: BTreeMap<VarId, Vec<Arc<Recipe>>>,
    by_generator: BTreeMap<VarId, Vec<Arc<PowerRecipe>>>,
}

impl MemoryDatabase {
    /// Starts building a database.
    #[must_use]
    pub fn builder() -> MemoryDatabaseBuilder {
        MemoryDatabaseBuilder::default()
    }
}

impl Database for MemoryDatabase {
    fn items(&self) -> Vec<EntityRef> {
        erase(&self.items)
    }

    fn recipes(&self) -> Vec<EntityRef> {
        erase(&self.recipes)
    }

    fn power_recipes(&self) -> Vec<EntityRef> {
        erase(&self.power_recipes)
    }

    fn crafters(&self) -> Vec<EntityRef> {
        erase(&self.crafters)
    }

    fn generators(&self) -> Vec<EntityRef> {
        erase(&self.generators)
    }

    fn recipes_for_product(&self, var: &VarId) -> Vec<EntityRef> {
        self.by_product.get(var).map_or_else(Vec::new, |r| erase(r))
    }

    fn recipes_for_ingredient(&self, var: &VarId) -> Vec<EntityRef> {
        self.by_ingredient
            .get(var)
            .map_or_else(Vec::new, |r| erase(r))
    }

    fn recipes_for_crafter(&self, var: &VarId) -> Vec<EntityRef> {
        self.by_crafter.get(var).map_or_else(Vec::new, |r| erase(r))
    }

    fn power_recipes_for_generator(&self, var: &VarId) -> Vec<EntityRef> {
        self.by_generator
            .get(var)
            .map_or_else(Vec::new, |r| erase(r))
    }
}

/// Builder collecting entities before index construction.
#[derive(Debug, Default)]
pub struct MemoryDatabaseBuilder {
    items: Vec<Arc<Item>>,
    recipes: Vec<Arc<Recipe>>,
    power_recipes: Vec<Arc<PowerRecipe>>,
    crafters: Vec<Arc<Crafter>>,
    generators: Vec<Arc<Generator>>,
}

impl MemoryDatabaseBuilder {
    /// Adds an item or resource.
    #[must_use]
    pub fn item(mut self, item: Item) -> Self {
        self.items.push(Arc::new(item));
        self
    }

    /// Adds a recipe.
    #[must_use]
    pub fn recipe(mut self, recipe: Recipe) -> Self {
        self.recipes.push(Arc::new(recipe));
        self
    }

    /// Adds a power recipe.
    #[must_use]
    pub fn power_recipe(mut self, power_recipe: PowerRecipe) -> Self {
        self.power_recipes.push(Arc::new(power_recipe));
        self
    }

    /// Adds a crafter.
    #[must_use]
    pub fn crafter(mut self, crafter: Crafter) -> Self {
        self.crafters.push(Arc::new(crafter));
        self
    }

    /// Adds a generator.
    #[must_use]
    pub fn generator(mut self, generator: Generator) -> Self {
        self.generators.push(Arc::new(generator));
        self
    }

    /// Builds the database, computing all link indexes.
    #[must_use]
    pub fn build(self) -> MemoryDatabase {
        let mut by_product: BTreeMap<VarId, Vec<Arc<Recipe>>> = BTreeMap::new();
        let mut by_ingredient: BTreeMap<VarId, Vec<Arc<Recipe>>> = BTreeMap::new();
        let mut by_crafter: BTreeMap<VarId, Vec<Arc<Recipe>>> = BTreeMap::new();

        for recipe in &self.recipes {
            for product in recipe.products() {
                by_product
                    .entry(product.item.clone())
                    .or_default()
                    .push(Arc::clone(recipe));
            }
            for ingredient in recipe.ingredients() {
                by_ingredient
                    .entry(ingredient.item.clone())
                    .or_default()
                    .push(Arc::clone(recipe));
            }
            by_crafter
                .entry(recipe.crafter().clone())
                .or_default()
                .push(Arc::clone(recipe));
        }

        let mut by_generator: BTreeMap<VarId, Vec<Arc<PowerRecipe>>> = BTreeMap::new();
        for power_recipe in &self.power_recipes {
            by_generator
                .entry(power_recipe.generator().clone())
                .or_default()
                .push(Arc::clone(power_recipe));
        }

        MemoryDatabase {
            items: self.items,
            recipes: self.recipes,
            power_recipes: self.power_recipes,
            crafters: self.crafters,
            generators: self.generators,
            by_product,
            by_ingredient,
            by_crafter,
            by_generator,
        }
    }
}
