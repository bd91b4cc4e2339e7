//! Lexer, grammar, and parse tree for Fabrica query commands.
//!
//! This crate provides:
//! - [`Lexer`] / [`Token`] - Tokenization of one command string
//! - [`QueryAst`] - The typed parse tree (one variant per query shape)
//! - [`parse`] - The recursive-descent grammar over the token stream
//!
//! The grammar recognizes four query shapes, tried in order: optimization
//! ("produce 60 iron plates from ore"), recipe lookup by product ("recipes
//! for x" / "x recipes"), recipe lookup by ingredient ("recipes from x"),
//! and bare entity details ("iron ingot").

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;


pub use ast::{Amount, ClauseAst, EntitySpan, OptimizationAst, QueryAst, Subject};
pub use lexer::Lexer;
pub use parser::parse;
pub use span::Span;
pub use token::{Token, TokenKind};
