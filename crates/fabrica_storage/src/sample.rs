//! A canned sample dataset.
//!
//! A small slice of a factory tech tree, large enough to exercise every
//! query shape: resources and items, smelting/constructing/assembling
//! recipes, one alternate recipe, and coal/biomass power.

use fabrica_foundation::{TypeTag, VarId};

use crate::database::MemoryDatabase;
use crate::entity::{Crafter, Generator, Item, PowerRecipe, Recipe};

fn item(slug: &str) -> VarId {
    VarId::new(TypeTag::Item, slug)
}

fn resource(slug: &str) -> VarId {
    VarId::new(TypeTag::Resource, slug)
}

fn crafter(slug: &str) -> VarId {
    VarId::new(TypeTag::Crafter, slug)
}

fn generator(slug: &str) -> VarId {
    VarId::new(TypeTag::Generator, slug)
}

/// Builds the sample database.
#[must_use]
pub fn sample_database() -> MemoryDatabase {
    MemoryDatabase::builder()
        // Resources
        .item(Item::resource("iron-ore", "Iron Ore"))
        .item(Item::resource("copper-ore", "Copper Ore"))
        .item(Item::resource("limestone", "Limestone"))
        .item(Item::resource("coal", "Coal"))
        .item(Item::resource("water", "Water").liquid())
        .item(Item::resource("leaves", "Leaves"))
        // Items
        .item(Item::new("iron-ingot", "Iron Ingot"))
        .item(Item::new("copper-ingot", "Copper Ingot"))
        .item(Item::new("iron-plate", "Iron Plate"))
        .item(Item::new("iron-rod", "Iron Rod"))
        .item(Item::new("screw", "Screw"))
        .item(Item::new("wire", "Wire"))
        .item(Item::new("cable", "Cable"))
        .item(Item::new("concrete", "Concrete"))
        .item(Item::new("reinforced-iron-plate", "Reinforced Iron Plate"))
        .item(Item::new("biomass", "Biomass"))
        // Buildings
        .crafter(Crafter::new("smelter", "Smelter"))
        .crafter(Crafter::new("constructor", "Constructor"))
        .crafter(Crafter::new("assembler", "Assembler"))
        .generator(Generator::new("coal-generator", "Coal Generator"))
        .generator(Generator::new("biomass-burner", "Biomass Burner"))
        // Smelting
        .recipe(
            Recipe::new("iron-ingot", "Iron Ingot", crafter("smelter"))
                .with_ingredient(resource("iron-ore"), 30)
                .with_product(item("iron-ingot"), 30),
        )
        .recipe(
            Recipe::new("copper-ingot", "Copper Ingot", crafter("smelter"))
                .with_ingredient(resource("copper-ore"), 30)
                .with_product(item("copper-ingot"), 30),
        )
        // Constructing
        .recipe(
            Recipe::new("iron-plate", "Iron Plate", crafter("constructor"))
                .with_ingredient(item("iron-ingot"), 30)
                .with_product(item("iron-plate"), 20),
        )
        .recipe(
            Recipe::new("iron-rod", "Iron Rod", crafter("constructor"))
                .with_ingredient(item("iron-ingot"), 15)
                .with_product(item("iron-rod"), 15),
        )
        .recipe(
            Recipe::new("screw", "Screw", crafter("constructor"))
                .with_ingredient(item("iron-rod"), 10)
                .with_product(item("screw"), 40),
        )
        .recipe(
            Recipe::new(
                "alternate-cast-screw",
                "Alternate: Cast Screw",
                crafter("constructor"),
            )
            .with_ingredient(item("iron-ingot"), 13)
            .with_product(item("screw"), 50),
        )
        .recipe(
            Recipe::new("wire", "Wire", crafter("constructor"))
                .with_ingredient(item("copper-ingot"), 15)
                .with_product(item("wire"), 30),
        )
        .recipe(
            Recipe::new("cable", "Cable", crafter("constructor"))
                .with_ingredient(item("wire"), 60)
                .with_product(item("cable"), 30),
        )
        .recipe(
            Recipe::new("concrete", "Concrete", crafter("constructor"))
                .with_ingredient(resource("limestone"), 45)
                .with_product(item("concrete"), 15),
        )
        .recipe(
            Recipe::new("biomass-leaves", "Biomass (Leaves)", crafter("constructor"))
                .with_ingredient(resource("leaves"), 120)
                .with_product(item("biomass"), 60),
        )
        // Assembling
        .recipe(
            Recipe::new(
                "reinforced-iron-plate",
                "Reinforced Iron Plate",
                crafter("assembler"),
            )
            .with_ingredient(item("iron-plate"), 30)
            .with_ingredient(item("screw"), 60)
            .with_product(item("reinforced-iron-plate"), 5),
        )
        // Power
        .power_recipe(PowerRecipe::new(
            "coal",
            "Coal",
            generator("coal-generator"),
            resource("coal"),
        ))
        .power_recipe(PowerRecipe::new(
            "biomass",
            "Biomass",
            generator("biomass-burner"),
            item("biomass"),
        ))
        .build()
}
