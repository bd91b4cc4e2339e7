//! Canonical variable identifiers.
//!
//! A [`VarId`] names one domain entity as `<type>:<slug>`; at most one entity
//! maps to a given id across the whole database. A [`SyntheticVar`] is a
//! grammar literal that flows into constraint maps without database
//! resolution. [`Var`] is the union of the two and the key type of every
//! constraint map.

use std::fmt;

use crate::tag::TypeTag;

/// A canonical variable: a type tag plus a slug, displayed as `<type>:<slug>`.
///
/// The string form is derived only at display boundaries; code branches on
/// [`VarId::tag`], never on string prefixes.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId {
    tag: TypeTag,
    slug: String,
}

impl VarId {
    /// Creates a new canonical variable.
    #[must_use]
    pub fn new(tag: TypeTag, slug: impl Into<String>) -> Self {
        Self {
            tag,
            slug: slug.into(),
        }
    }

    /// Returns the type tag.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Returns the slug (the part after the type prefix).
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Parses a `<type>:<slug>` string back into a variable.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        // power-recipe contains a hyphen but no colon, so splitting on the
        // first colon is unambiguous.
        let (prefix, slug) = s.split_once(':')?;
        let tag = TypeTag::parse(prefix)?;
        if slug.is_empty() {
            return None;
        }
        Some(Self::new(tag, slug))
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.tag, self.slug)
    }
}

/// A grammar literal that names a solver concept rather than a database
/// entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SyntheticVar {
    /// Net electric power.
    Power,
    /// Award tickets.
    Tickets,
    /// Factory floor space.
    Space,
    /// Aggregate raw resource consumption, unweighted.
    UnweightedResources,
    /// Aggregate raw resource consumption, rarity-weighted.
    WeightedResources,
    /// All alternate recipes, as an exclusion group.
    AlternateRecipes,
    /// All byproduct outputs, as an exclusion group.
    Byproducts,
}

impl SyntheticVar {
    /// All synthetic variables, in canonical order.
    pub const ALL: [Self; 7] = [
        Self::Power,
        Self::Tickets,
        Self::Space,
        Self::UnweightedResources,
        Self::WeightedResources,
        Self::AlternateRecipes,
        Self::Byproducts,
    ];

    /// Returns the wire string for this variable.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Power => "power",
            Self::Tickets => "tickets",
            Self::Space => "space",
            Self::UnweightedResources => "unweighted-resources",
            Self::WeightedResources => "weighted-resources",
            Self::AlternateRecipes => "alternate-recipes",
            Self::Byproducts => "byproducts",
        }
    }
}

impl fmt::Display for SyntheticVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The key type of constraint maps: either a database entity or a synthetic
/// solver variable.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Var {
    /// A resolved database entity.
    Entity(VarId),
    /// A synthetic solver variable.
    Synthetic(SyntheticVar),
}

impl Var {
    /// Creates an entity variable.
    #[must_use]
    pub fn entity(tag: TypeTag, slug: impl Into<String>) -> Self {
        Self::Entity(VarId::new(tag, slug))
    }

    /// Returns the type tag if this is an entity variable.
    #[must_use]
    pub const fn tag(&self) -> Option<TypeTag> {
        match self {
            Self::Entity(id) => Some(id.tag()),
            Self::Synthetic(_) => None,
        }
    }

    /// Returns the entity id if this is an entity variable.
    #[must_use]
    pub const fn as_entity(&self) -> Option<&VarId> {
        match self {
            Self::Entity(id) => Some(id),
            Self::Synthetic(_) => None,
        }
    }
}

impl From<VarId> for Var {
    fn from(id: VarId) -> Self {
        Self::Entity(id)
    }
}

impl From<SyntheticVar> for Var {
    fn from(synthetic: SyntheticVar) -> Self {
        Self::Synthetic(synthetic)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entity(id) => id.fmt(f),
            Self::Synthetic(synthetic) => synthetic.fmt(f),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{SyntheticVar, Var, VarId};

    // Variables serialize as their wire strings so that constraint maps come
    // out as plain string-keyed maps.

    impl Serialize for VarId {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for VarId {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            Self::parse(&s).ok_or_else(|| D::Error::custom(format!("invalid variable: {s}")))
        }
    }

    impl Serialize for Var {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Var {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            if let Some(id) = VarId::parse(&s) {
                return Ok(Self::Entity(id));
            }
            for synthetic in SyntheticVar::ALL {
                if synthetic.as_str() == s {
                    return Ok(Self::Synthetic(synthetic));
                }
            }
            Err(D::Error::custom(format!("invalid variable: {s}")))
        }
    }
}
