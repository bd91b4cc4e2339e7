//! Typed domain entities.
//!
//! Each entity owns its canonical variable and display name; the compiler
//! only ever sees them through the foundation `Entity` trait.

use fabrica_foundation::{Entity, TypeTag, VarId};

/// A craftable item or raw resource.
#[derive(Clone, Debug)]
pub struct Item {
    var: VarId,
    name: String,
    liquid: bool,
}

impl Item {
    /// Creates a craftable item (`item:<slug>`).
    #[must_use]
    pub fn new(slug: &str, name: &str) -> Self {
        Self {
            var: VarId::new(TypeTag::Item, slug),
            name: name.to_string(),
            liquid: false,
        }
    }

    /// Creates a raw resource (`resource:<slug>`).
    #[must_use]
    pub fn resource(slug: &str, name: &str) -> Self {
        Self {
            var: VarId::new(TypeTag::Resource, slug),
            name: name.to_string(),
            liquid: false,
        }
    }

    /// Marks this item as a liquid.
    #[must_use]
    pub const fn liquid(mut self) -> Self {
        self.liquid = true;
        self
    }

    /// Returns true if this item is a liquid.
    #[must_use]
    pub const fn is_liquid(&self) -> bool {
        self.liquid
    }
}

impl Entity for Item {
    fn var(&self) -> &VarId {
        &self.var
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_resource(&self) -> bool {
        self.var.tag() == TypeTag::Resource
    }
}

/// One ingredient or product line of a recipe.
#[derive(Clone, Debug)]
pub struct RecipeItem {
    /// The item consumed or produced.
    pub item: VarId,
    /// Units per minute at 100% clock.
    pub rate: u64,
}

/// A crafting recipe.
#[derive(Clone, Debug)]
pub struct Recipe {
    var: VarId,
    name: String,
    crafter: VarId,
    ingredients: Vec<RecipeItem>,
    products: Vec<RecipeItem>,
    alternate: bool,
}

impl Recipe {
    /// Creates a recipe. The display name is prefixed with "Recipe: "; a
    /// display name starting with "Alternate: " marks an alternate recipe.
    #[must_use]
    pub fn new(slug: &str, display_name: &str, crafter: VarId) -> Self {
        Self {
            var: VarId::new(TypeTag::Recipe, slug),
            name: format!("Recipe: {display_name}"),
            crafter,
            ingredients: Vec::new(),
            products: Vec::new(),
            alternate: display_name.starts_with("Alternate: "),
        }
    }

    /// Adds an ingredient line.
    #[must_use]
    pub fn with_ingredient(mut self, item: VarId, rate: u64) -> Self {
        self.ingredients.push(RecipeItem { item, rate });
        self
    }

    /// Adds a product line.
    #[must_use]
    pub fn with_product(mut self, item: VarId, rate: u64) -> Self {
        self.products.push(RecipeItem { item, rate });
        self
    }

    /// Returns the crafter this recipe is built in.
    #[must_use]
    pub const fn crafter(&self) -> &VarId {
        &self.crafter
    }

    /// Returns the ingredient lines.
    #[must_use]
    pub fn ingredients(&self) -> &[RecipeItem] {
        &self.ingredients
    }

    /// Returns the product lines.
    #[must_use]
    pub fn products(&self) -> &[RecipeItem] {
        &self.products
    }

    /// Returns true if this is an alternate recipe.
    #[must_use]
    pub const fn is_alternate(&self) -> bool {
        self.alternate
    }
}

impl Entity for Recipe {
    fn var(&self) -> &VarId {
        &self.var
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A power generation recipe: one fuel burned in one generator.
#[derive(Clone, Debug)]
pub struct PowerRecipe {
    var: VarId,
    name: String,
    generator: VarId,
    fuel: VarId,
}

impl PowerRecipe {
    /// Creates a power recipe. The display name is prefixed with
    /// "Power Recipe: ".
    #[must_use]
    pub fn new(slug: &str, display_name: &str, generator: VarId, fuel: VarId) -> Self {
        Self {
            var: VarId::new(TypeTag::PowerRecipe, slug),
            name: format!("Power Recipe: {display_name}"),
            generator,
            fuel,
        }
    }

    /// Returns the generator this power recipe runs in.
    #[must_use]
    pub const fn generator(&self) -> &VarId {
        &self.generator
    }

    /// Returns the fuel item.
    #[must_use]
    pub const fn fuel(&self) -> &VarId {
        &self.fuel
    }
}

impl Entity for PowerRecipe {
    fn var(&self) -> &VarId {
        &self.var
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A crafting building.
#[derive(Clone, Debug)]
pub struct Crafter {
    var: VarId,
    name: String,
}

impl Crafter {
    /// Creates a crafter.
    #[must_use]
    pub fn new(slug: &str, name: &str) -> Self {
        Self {
            var: VarId::new(TypeTag::Crafter, slug),
            name: name.to_string(),
        }
    }
}

impl Entity for Crafter {
    fn var(&self) -> &VarId {
        &self.var
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A power generation building.
#[derive(Clone, Debug)]
pub struct Generator {
    var: VarId,
    name: String,
}

impl Generator {
    /// Creates a generator.
    #[must_use]
    pub fn new(slug: &str, name: &str) -> Self {
        Self {
            var: VarId::new(TypeTag::Generator, slug),
            name: name.to_string(),
        }
    }
}

impl Entity for Generator {
    fn var(&self) -> &VarId {
        &self.var
    }

    fn name(&self) -> &str {
        &self.name
    }
}
