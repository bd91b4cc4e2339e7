//! Domain entity type tags.
//!
//! Every canonical variable carries one of these tags as its type prefix.
//! Downstream code branches on the tag; it is stored explicitly rather than
//! recovered by splitting identifier strings.

use std::fmt;

/// The closed set of domain entity types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeTag {
    /// A craftable item.
    Item,
    /// A raw resource (extracted, not crafted).
    Resource,
    /// A crafting recipe.
    Recipe,
    /// A power generation recipe.
    PowerRecipe,
    /// A crafting building.
    Crafter,
    /// A power generation building.
    Generator,
}

impl TypeTag {
    /// All tags, in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Item,
        Self::Resource,
        Self::Recipe,
        Self::PowerRecipe,
        Self::Crafter,
        Self::Generator,
    ];

    /// Returns the wire string for this tag (the `<type>` in `<type>:<slug>`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Resource => "resource",
            Self::Recipe => "recipe",
            Self::PowerRecipe => "power-recipe",
            Self::Crafter => "crafter",
            Self::Generator => "generator",
        }
    }

    /// Parses a wire string back into a tag.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "item" => Some(Self::Item),
            "resource" => Some(Self::Resource),
            "recipe" => Some(Self::Recipe),
            "power-recipe" => Some(Self::PowerRecipe),
            "crafter" => Some(Self::Crafter),
            "generator" => Some(Self::Generator),
            _ => None,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
