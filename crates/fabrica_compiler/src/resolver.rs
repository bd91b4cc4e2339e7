//! Entity resolution.
//!
//! Matches a free-text span against candidate database entities. Strategies,
//! in order; an entity matches if any holds:
//!
//! 1. token-sequence equality with the human-readable name
//! 2. same, against the English plural of the name
//! 3. same, against the canonical variable split on `:`/`-`
//! 4. same, against the canonical variable with its type prefix stripped
//! 5. the span as a regular expression, full-matched against name, plural,
//!    and canonical variable with or without prefix
//!
//! Steps 1-4 cover the common case without regex cost; step 5 gives power
//! users regex search. The allowed-type set restricts candidates before
//! matching so that a recipe and an item sharing a display name never
//! collide across clause kinds.

use regex::Regex;
use tracing::debug;

use fabrica_foundation::{Database, Entity, EntityRef, TypeTag, pluralize};

/// Splits on the given delimiters, dropping empty tokens.
fn split_tokens(text: &str, delimiters: &[char]) -> Vec<String> {
    text.split(delimiters)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// A span prepared for matching: normalized tokens plus the optional
/// compiled regex fallback.
struct SpanMatcher {
    tokens: Vec<String>,
    regex: Option<Regex>,
}

impl SpanMatcher {
    fn new(text: &str) -> Self {
        let normalized = text.trim().to_lowercase();
        // A span that fails to compile as a regex simply loses the fallback
        // strategy; the exact strategies still apply.
        let regex = Regex::new(&format!("^(?:{normalized})$")).ok();
        Self {
            tokens: split_tokens(&normalized, &[' ', '\t', '-', '_', ':']),
            regex,
        }
    }

    fn matches(&self, entity: &dyn Entity) -> bool {
        let name = entity.name().to_lowercase();
        if self.tokens == split_tokens(&name, &[' ', ':']) {
            return true;
        }

        let plural = pluralize(&name);
        if self.tokens == split_tokens(&plural, &[' ', ':']) {
            return true;
        }

        let var = entity.var().to_string();
        if self.tokens == split_tokens(&var, &[':', '-']) {
            return true;
        }

        // The type prefix is optional: users need not name the category.
        let slug = entity.var().slug();
        if self.tokens == split_tokens(slug, &['-']) {
            return true;
        }

        self.regex.as_ref().is_some_and(|re| {
            re.is_match(&name) || re.is_match(&plural) || re.is_match(&var) || re.is_match(slug)
        })
    }
}

/// Resolves free-text spans against the database.
pub struct EntityResolver<'db> {
    db: &'db dyn Database,
}

impl<'db> EntityResolver<'db> {
    /// Creates a resolver over the given database.
    #[must_use]
    pub const fn new(db: &'db dyn Database) -> Self {
        Self { db }
    }

    /// Returns every entity of the allowed types matching the span.
    ///
    /// The result is sorted by canonical variable so resolution order is
    /// deterministic. Zero matches is the caller's error to report.
    #[must_use]
    pub fn resolve(&self, text: &str, allowed: &[TypeTag]) -> Vec<EntityRef> {
        debug!(expr = text, ?allowed, "resolving entity expression");

        let matcher = SpanMatcher::new(text);
        let mut matches: Vec<EntityRef> = self
            .candidates(allowed)
            .into_iter()
            .filter(|entity| matcher.matches(entity.as_ref()))
            .collect();
        matches.sort_by_key(|entity| entity.var().to_string());

        debug!(expr = text, count = matches.len(), "resolved");
        matches
    }

    /// Gathers the candidate set for the allowed types. `Item` selects
    /// non-resource items, `Resource` selects resource items.
    fn candidates(&self, allowed: &[TypeTag]) -> Vec<EntityRef> {
        let mut candidates = Vec::new();
        for &tag in allowed {
            match tag {
                TypeTag::Item => {
                    candidates.extend(self.db.items().into_iter().filter(|e| !e.is_resource()));
                }
                TypeTag::Resource => {
                    candidates.extend(self.db.items().into_iter().filter(|e| e.is_resource()));
                }
                TypeTag::Recipe => candidates.extend(self.db.recipes()),
                TypeTag::PowerRecipe => candidates.extend(self.db.power_recipes()),
                TypeTag::Crafter => candidates.extend(self.db.crafters()),
                TypeTag::Generator => candidates.extend(self.db.generators()),
            }
        }
        candidates
    }
}
