//! Strictness-carrying groupings of clause elements.
//!
//! A [`Section`] holds one clause kind (outputs, inputs, includes, or
//! excludes) grouped into [`Category`]s by canonical-variable type. Each
//! category carries an aggregate strict flag: true if any contributing
//! clause was marked `only`.

use std::collections::BTreeMap;
use std::fmt;

use fabrica_foundation::{SyntheticVar, TypeTag, Var};

/// The grouping key of a section: a type tag for entity variables, the
/// synthetic variable itself otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryKey {
    /// Entity variables of one type.
    Tag(TypeTag),
    /// A synthetic solver variable.
    Synthetic(SyntheticVar),
}

impl CategoryKey {
    /// Returns the category key of a variable. Total: every variable has
    /// exactly one key.
    #[must_use]
    pub const fn of(var: &Var) -> Self {
        match var {
            Var::Entity(id) => Self::Tag(id.tag()),
            Var::Synthetic(synthetic) => Self::Synthetic(*synthetic),
        }
    }

    /// Returns the wire string of this key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tag(tag) => tag.as_str(),
            Self::Synthetic(synthetic) => synthetic.as_str(),
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A grouping of same-kind clause elements sharing one category key.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Category<T> {
    strict: bool,
    elements: BTreeMap<Var, T>,
}

impl<T> Category<T> {
    /// Creates an empty category.
    #[must_use]
    pub const fn new(strict: bool) -> Self {
        Self {
            strict,
            elements: BTreeMap::new(),
        }
    }

    /// Returns the raw strict flag, regardless of emptiness.
    #[must_use]
    pub const fn strict_flag(&self) -> bool {
        self.strict
    }

    /// Returns true if this category is effectively strict: flagged strict
    /// AND non-empty. An empty `only` category is not meaningfully strict.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict && !self.elements.is_empty()
    }

    /// Inserts an element, overwriting any previous element for the same
    /// variable, and escalates the strict flag.
    pub fn insert(&mut self, var: Var, element: T, strict: bool) {
        self.elements.insert(var, element);
        self.strict |= strict;
    }

    /// Returns the elements of this category.
    #[must_use]
    pub const fn elements(&self) -> &BTreeMap<Var, T> {
        &self.elements
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if this category has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// All categories of one clause kind, keyed by category key.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section<T> {
    categories: BTreeMap<CategoryKey, Category<T>>,
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Section<T> {
    /// Creates an empty section.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            categories: BTreeMap::new(),
        }
    }

    /// Adds an element under the variable's category, creating the category
    /// on first use and escalating its strict flag.
    pub fn add(&mut self, var: Var, element: T, strict: bool) {
        self.categories
            .entry(CategoryKey::of(&var))
            .or_insert_with(|| Category::new(false))
            .insert(var, element, strict);
    }

    /// Escalates the strict flag of a category, creating it if absent.
    ///
    /// An empty strict category stays inert: strictness predicates also
    /// require non-emptiness.
    pub fn mark_strict(&mut self, key: CategoryKey) {
        self.categories
            .entry(key)
            .or_insert_with(|| Category::new(false))
            .strict = true;
    }

    /// Returns the category for a key, if present.
    #[must_use]
    pub fn category(&self, key: CategoryKey) -> Option<&Category<T>> {
        self.categories.get(&key)
    }

    /// Returns true if the category for a key is effectively strict.
    #[must_use]
    pub fn is_strict(&self, key: CategoryKey) -> bool {
        self.category(key).is_some_and(Category::is_strict)
    }

    /// Iterates over (key, category) pairs in key order.
    pub fn categories(&self) -> impl Iterator<Item = (&CategoryKey, &Category<T>)> {
        self.categories.iter()
    }

    /// Iterates over every (variable, element) pair across all categories.
    pub fn elements(&self) -> impl Iterator<Item = (&Var, &T)> {
        self.categories.values().flat_map(|c| c.elements().iter())
    }

    /// Iterates over every variable across all categories.
    pub fn vars(&self) -> impl Iterator<Item = &Var> {
        self.elements().map(|(var, _)| var)
    }

    /// Returns the total number of elements across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.values().map(Category::len).sum()
    }

    /// Returns true if no category has any element.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use fabrica_foundation::{SyntheticVar, TypeTag};

    use super::CategoryKey;

    impl Serialize for CategoryKey {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for CategoryKey {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            if let Some(tag) = TypeTag::parse(&s) {
                return Ok(Self::Tag(tag));
            }
            for synthetic in SyntheticVar::ALL {
                if synthetic.as_str() == s {
                    return Ok(Self::Synthetic(synthetic));
                }
            }
            Err(D::Error::custom(format!("invalid category key: {s}")))
        }
    }
}
