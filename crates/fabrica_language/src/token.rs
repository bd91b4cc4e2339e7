//! Token types for query commands.
//!
//! Tokens are the output of the lexer and input to the parser.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the text this token covers in the given source.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }
}

/// Token types for query commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A lowercased word. Dots, stars, colons, hyphens, and underscores are
    /// word characters so regex-ish entity spans and canonical variables
    /// lex as single words.
    Word(String),
    /// An unsigned integer literal like `60`.
    Int(u64),
    /// `?`, the objective marker.
    Question,
    /// `+`, a clause joiner.
    Plus,
    /// `_`, the wildcard amount.
    Underscore,
    /// End of input.
    Eof,
    /// A character the lexer does not recognize.
    Error(char),
}

impl TokenKind {
    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Word(_) => "word",
            Self::Int(_) => "integer",
            Self::Question => "'?'",
            Self::Plus => "'+'",
            Self::Underscore => "'_'",
            Self::Eof => "end of input",
            Self::Error(_) => "unrecognized character",
        }
    }

    /// Returns the word text if this is a word token.
    #[must_use]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(w) => Some(w),
            _ => None,
        }
    }
}
