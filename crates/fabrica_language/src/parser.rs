//! Recursive-descent grammar for query commands.
//!
//! Top-level alternation, first match wins: optimization query, recipe
//! lookup ("recipes for x" / "x recipes" / "recipes from x"), bare entity
//! details. Keyword sets are static token tables checked by exact string
//! match before falling into the free-text entity-span rule; an entity span
//! is a maximal run of word tokens not equal to any reserved keyword, so a
//! keyword collision with an entity's literal name is a known limitation
//! rather than a parse ambiguity.

use fabrica_foundation::{Error, Result, SyntheticVar};

use crate::ast::{Amount, ClauseAst, EntitySpan, OptimizationAst, QueryAst, Subject};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Section keywords opening an output clause list.
const OUTPUT_KEYWORDS: &[&str] = &["produce", "make", "create", "output"];
/// Section keywords opening an input clause list.
const INPUT_KEYWORDS: &[&str] = &["from", "input"];
/// Section keywords opening an include clause list.
const INCLUDE_KEYWORDS: &[&str] = &["using", "with"];
/// Section keywords opening an exclude clause list.
const EXCLUDE_KEYWORDS: &[&str] = &["without", "excluding"];
/// Clause joiners for outputs, inputs, and includes (`+` also joins).
const AND_KEYWORDS: &[&str] = &["and"];
/// Clause joiners for excludes.
const OR_KEYWORDS: &[&str] = &["or", "nor", "and"];
/// The recipe-lookup trigger words.
const RECIPE_WORDS: &[&str] = &["recipe", "recipes"];

/// Returns true if `word` terminates an entity span.
fn is_reserved(word: &str) -> bool {
    OUTPUT_KEYWORDS.contains(&word)
        || INPUT_KEYWORDS.contains(&word)
        || INCLUDE_KEYWORDS.contains(&word)
        || EXCLUDE_KEYWORDS.contains(&word)
        || AND_KEYWORDS.contains(&word)
        || OR_KEYWORDS.contains(&word)
        || RECIPE_WORDS.contains(&word)
}

/// The clause kind currently being parsed; controls the literal table, the
/// amount rule, and the joiner set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClauseKind {
    Output,
    Input,
    Include,
    Exclude,
}

impl ClauseKind {
    /// Output and input clauses carry an amount; includes and excludes do not.
    const fn has_amount(self) -> bool {
        matches!(self, Self::Output | Self::Input)
    }

    const fn subject_expectation(self) -> &'static str {
        match self {
            Self::Output => "expected output expression",
            Self::Input => "expected input expression",
            Self::Include => "expected include expression",
            Self::Exclude => "expected exclude expression",
        }
    }
}

/// Parses one command string into a query parse tree.
///
/// # Errors
///
/// Returns a grammar error with the failing offset and an expectation
/// message when the input matches no recognized query shape.
pub fn parse(source: &str) -> Result<QueryAst> {
    Parser::new(source).parse_query()
}

/// Recursive-descent parser over the token stream.
struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            tokens: Lexer::tokenize(source),
            pos: 0,
        }
    }

    // =========================================================================
    // Query shapes
    // =========================================================================

    fn parse_query(mut self) -> Result<QueryAst> {
        let Some(word) = self.peek_word().map(str::to_string) else {
            return Err(self.error_here("expected a query"));
        };

        if OUTPUT_KEYWORDS.contains(&word.as_str()) {
            return self.parse_optimization();
        }

        if word == "recipes" {
            self.advance();
            return self.parse_recipe_lookup();
        }
        if word == "recipe" {
            self.advance();
            if !self.eat_word("for") {
                return Err(self.error_here("expected 'for' after 'recipe'"));
            }
            let span = self.parse_entity_span("expected entity expression")?;
            self.expect_eof()?;
            return Ok(QueryAst::RecipesFor(span));
        }

        // "x recipes" or bare entity details.
        let span = self.parse_entity_span("expected a query")?;
        if self.peek_word().is_some_and(|w| RECIPE_WORDS.contains(&w)) {
            self.advance();
            self.expect_eof()?;
            return Ok(QueryAst::RecipesFor(span));
        }
        self.expect_eof()?;
        Ok(QueryAst::EntityDetails(span))
    }

    /// Parses the tail of a query that began with the word "recipes".
    fn parse_recipe_lookup(&mut self) -> Result<QueryAst> {
        if self.eat_word("for") {
            let span = self.parse_entity_span("expected entity expression")?;
            self.expect_eof()?;
            return Ok(QueryAst::RecipesFor(span));
        }
        if self.eat_word("from") || self.eat_word("using") || self.eat_word("with") {
            let span = self.parse_entity_span("expected entity expression")?;
            self.expect_eof()?;
            return Ok(QueryAst::RecipesFrom(span));
        }
        Err(self.error_here("expected 'for', 'from', 'using', or 'with' after 'recipes'"))
    }

    fn parse_optimization(&mut self) -> Result<QueryAst> {
        // Output keyword already sighted by the caller.
        self.advance();
        let outputs = self.parse_clause_list(ClauseKind::Output)?;

        let inputs = if self.eat_any_word(INPUT_KEYWORDS) {
            self.parse_clause_list(ClauseKind::Input)?
        } else {
            Vec::new()
        };
        let includes = if self.eat_any_word(INCLUDE_KEYWORDS) {
            self.parse_clause_list(ClauseKind::Include)?
        } else {
            Vec::new()
        };
        let excludes = if self.eat_any_word(EXCLUDE_KEYWORDS) {
            self.parse_clause_list(ClauseKind::Exclude)?
        } else {
            Vec::new()
        };

        self.expect_eof()?;
        Ok(QueryAst::Optimization(OptimizationAst {
            outputs,
            inputs,
            includes,
            excludes,
        }))
    }

    // =========================================================================
    // Clauses
    // =========================================================================

    fn parse_clause_list(&mut self, kind: ClauseKind) -> Result<Vec<ClauseAst>> {
        let mut clauses = vec![self.parse_clause(kind)?];
        while self.eat_joiner(kind) {
            clauses.push(self.parse_clause(kind)?);
        }
        Ok(clauses)
    }

    fn eat_joiner(&mut self, kind: ClauseKind) -> bool {
        match kind {
            ClauseKind::Exclude => self.eat_any_word(OR_KEYWORDS),
            _ => {
                if self.peek().kind == TokenKind::Plus {
                    self.advance();
                    true
                } else {
                    self.eat_any_word(AND_KEYWORDS)
                }
            }
        }
    }

    fn parse_clause(&mut self, kind: ClauseKind) -> Result<ClauseAst> {
        let start = self.here();

        // Excludes take no `only`; a leading "only" there falls into the
        // entity span, as in the original grammar.
        let strict = kind != ClauseKind::Exclude && self.eat_word("only");

        let amount = if kind.has_amount() {
            self.parse_amount()
        } else {
            Amount::Any
        };

        let subject = self.parse_subject(kind)?;
        let end = self.previous_span();

        Ok(ClauseAst {
            strict,
            amount,
            subject,
            span: start.to(end),
        })
    }

    fn parse_amount(&mut self) -> Amount {
        match &self.peek().kind {
            TokenKind::Question => {
                self.advance();
                Amount::Objective
            }
            TokenKind::Int(n) => {
                let n = *n;
                self.advance();
                Amount::Count(n)
            }
            TokenKind::Underscore => {
                self.advance();
                Amount::Any
            }
            TokenKind::Word(w) if w == "any" => {
                self.advance();
                Amount::Any
            }
            _ => Amount::Any,
        }
    }

    fn parse_subject(&mut self, kind: ClauseKind) -> Result<Subject> {
        if let Some(literal) = self.eat_literal(kind) {
            return Ok(Subject::Literal(literal));
        }
        let span = self.parse_entity_span(kind.subject_expectation())?;
        Ok(Subject::Entity(span))
    }

    /// Matches the clause kind's literal table, two-word forms first.
    fn eat_literal(&mut self, kind: ClauseKind) -> Option<SyntheticVar> {
        let first = self.peek_word()?;
        let second = self.peek_second_word();

        let (literal, words) = match kind {
            ClauseKind::Output => match first {
                "power" => (SyntheticVar::Power, 1),
                "tickets" => (SyntheticVar::Tickets, 1),
                _ => return None,
            },
            ClauseKind::Input => match (first, second) {
                ("unweighted", Some("resources")) => (SyntheticVar::UnweightedResources, 2),
                ("weighted", Some("resources")) => (SyntheticVar::WeightedResources, 2),
                ("resources", _) => (SyntheticVar::UnweightedResources, 1),
                ("power", _) => (SyntheticVar::Power, 1),
                ("space", _) => (SyntheticVar::Space, 1),
                _ => return None,
            },
            ClauseKind::Include => match first {
                "space" => (SyntheticVar::Space, 1),
                _ => return None,
            },
            ClauseKind::Exclude => match (first, second) {
                ("alternate", Some("recipes")) => (SyntheticVar::AlternateRecipes, 2),
                ("byproducts", _) => (SyntheticVar::Byproducts, 1),
                _ => return None,
            },
        };

        for _ in 0..words {
            self.advance();
        }
        Some(literal)
    }

    /// Parses a maximal run of non-reserved word tokens.
    fn parse_entity_span(&mut self, expectation: &str) -> Result<EntitySpan> {
        let mut words: Vec<String> = Vec::new();
        let mut span = self.here();

        while let TokenKind::Word(w) = &self.peek().kind {
            if is_reserved(w) {
                break;
            }
            words.push(w.clone());
            span = span.to(self.peek().span);
            self.advance();
        }

        if words.is_empty() {
            return Err(self.error_here(expectation));
        }
        Ok(EntitySpan::new(words.join(" "), span))
    }

    // =========================================================================
    // Token stream helpers
    // =========================================================================

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_word(&self) -> Option<&str> {
        self.peek().kind.as_word()
    }

    fn peek_second_word(&self) -> Option<&str> {
        self.tokens.get(self.pos + 1)?.kind.as_word()
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn eat_word(&mut self, word: &str) -> bool {
        if self.peek_word() == Some(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn eat_any_word(&mut self, table: &[&str]) -> bool {
        if self.peek_word().is_some_and(|w| table.contains(&w)) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect_eof(&self) -> Result<()> {
        match self.peek().kind {
            TokenKind::Eof => Ok(()),
            TokenKind::Error(c) => Err(self.error_here(format!("unexpected character '{c}'"))),
            _ => Err(self.error_here("unexpected trailing input")),
        }
    }

    /// The span of the current token (empty at end of input).
    fn here(&self) -> Span {
        self.peek().span
    }

    /// The span of the most recently consumed token.
    fn previous_span(&self) -> Span {
        if self.pos == 0 {
            Span::default()
        } else {
            self.tokens[self.pos - 1].span
        }
    }

    fn error_here(&self, message: impl Into<String>) -> Error {
        Error::grammar(self.source, self.here().start, message)
    }
}
