//! End-to-end tests: text in, query model out.
//!
//! Exercises the full pipeline (lexer, grammar, resolver, builder) against
//! the sample database, including the compile-twice idempotence guarantee.

mod pipeline;
