//! Error types for query compilation.
//!
//! Uses `thiserror` for the outer error; the grammar diagnostic needs a
//! multi-line caret rendering, so `ErrorKind` implements `Display` by hand.

use std::fmt;

use thiserror::Error;

use crate::tag::TypeTag;

/// Result alias for query compilation.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for query compilation.
///
/// Every error is terminal for the current command; the compiler never
/// returns a partially-populated query.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a grammar error with a caret diagnostic at `offset`.
    #[must_use]
    pub fn grammar(input: impl Into<String>, offset: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Grammar {
            input: input.into(),
            offset,
            message: message.into(),
        })
    }

    /// Creates a resolution error for an entity span that matched nothing.
    #[must_use]
    pub fn resolution(span: impl Into<String>, searched: &[TypeTag]) -> Self {
        Self::new(ErrorKind::Resolution {
            span: span.into(),
            searched: searched.to_vec(),
        })
    }

    /// Creates a duplicate-objective error.
    #[must_use]
    pub const fn duplicate_objective() -> Self {
        Self::new(ErrorKind::DuplicateObjective)
    }

    /// Creates an empty-outputs error.
    #[must_use]
    pub const fn empty_outputs() -> Self {
        Self::new(ErrorKind::EmptyOutputs)
    }

    /// Returns true if this is a grammar error.
    #[must_use]
    pub const fn is_grammar(&self) -> bool {
        matches!(self.kind, ErrorKind::Grammar { .. })
    }

    /// Returns true if this is a resolution error.
    #[must_use]
    pub const fn is_resolution(&self) -> bool {
        matches!(self.kind, ErrorKind::Resolution { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input did not match any recognized query shape.
    Grammar {
        /// The original command text.
        input: String,
        /// Byte offset where parsing failed.
        offset: usize,
        /// What the parser expected at the failure point.
        message: String,
    },

    /// An entity span matched zero database entities.
    Resolution {
        /// The unmatched span text, exactly as written.
        span: String,
        /// The type set that was searched.
        searched: Vec<TypeTag>,
    },

    /// More than one objective marker was specified.
    DuplicateObjective,

    /// An optimization query specified no outputs.
    EmptyOutputs,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grammar {
                input,
                offset,
                message,
            } => {
                writeln!(f, "\"{input}\" ==> failed parse:")?;
                // The caret sits under the failing offset; the leading quote
                // shifts it right by one.
                writeln!(f, "{}^", " ".repeat(offset + 1))?;
                write!(f, "{message} (at offset {offset})")
            }
            Self::Resolution { span, searched } => {
                let types = searched
                    .iter()
                    .map(|t| t.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "could not parse entity expression '{span}' (searched: {types})"
                )
            }
            Self::DuplicateObjective => write!(f, "only one objective may be specified"),
            Self::EmptyOutputs => write!(f, "no outputs specified in optimization query"),
        }
    }
}

impl std::error::Error for ErrorKind {}
