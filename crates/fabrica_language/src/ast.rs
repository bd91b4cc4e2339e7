//! Parse tree for query commands.
//!
//! The grammar produces one [`QueryAst`] per command; the semantic builder
//! in the compiler crate walks it to assemble the typed query model.

use fabrica_foundation::SyntheticVar;

use crate::span::Span;

/// A parsed query, one variant per recognized shape.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryAst {
    /// A production-planning command: "produce 60 iron plates from ore".
    Optimization(OptimizationAst),
    /// A lookup of recipes producing something, or built in a crafter:
    /// "recipes for iron ingot", "iron ingot recipes".
    RecipesFor(EntitySpan),
    /// A lookup of recipes consuming an ingredient: "recipes from iron ore".
    RecipesFrom(EntitySpan),
    /// A bare entity lookup: "iron ingot".
    EntityDetails(EntitySpan),
}

impl QueryAst {
    /// Returns true if this is an optimization query.
    #[must_use]
    pub const fn is_optimization(&self) -> bool {
        matches!(self, Self::Optimization(_))
    }
}

/// The clause lists of an optimization query.
///
/// Outputs are mandatory; the other sections are optional and appear in
/// grammar order (inputs, includes, excludes).
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizationAst {
    /// "produce ..." clauses.
    pub outputs: Vec<ClauseAst>,
    /// "from ..." clauses.
    pub inputs: Vec<ClauseAst>,
    /// "using ..." clauses.
    pub includes: Vec<ClauseAst>,
    /// "without ..." clauses.
    pub excludes: Vec<ClauseAst>,
}

/// One parsed clause within a section.
#[derive(Clone, Debug, PartialEq)]
pub struct ClauseAst {
    /// True if the clause carried a leading `only`.
    pub strict: bool,
    /// The amount marker, if the clause kind takes one.
    pub amount: Amount,
    /// What the clause names: a fixed literal or a free-text entity span.
    pub subject: Subject,
    /// Source location of the whole clause.
    pub span: Span,
}

/// The quantity part of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Amount {
    /// `?` - this clause sets the objective.
    Objective,
    /// A concrete non-negative amount.
    Count(u64),
    /// `any`, `_`, or omitted - no fixed amount.
    Any,
}

/// The subject of a clause.
#[derive(Clone, Debug, PartialEq)]
pub enum Subject {
    /// A reserved literal such as `power` or `alternate recipes`.
    Literal(SyntheticVar),
    /// A free-text span to resolve against the database.
    Entity(EntitySpan),
}

/// A free-text entity span with its source location.
#[derive(Clone, Debug, PartialEq)]
pub struct EntitySpan {
    /// The span text: lowercased words joined by single spaces.
    pub text: String,
    /// Source location of the span.
    pub span: Span,
}

impl EntitySpan {
    /// Creates a new entity span.
    #[must_use]
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}
