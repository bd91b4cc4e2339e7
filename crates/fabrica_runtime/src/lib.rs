//! REPL and CLI for Fabrica.
//!
//! The `fabrica` binary compiles queries against the sample database:
//! interactively (rustyline REPL) or one-shot via `-e <query>`.

pub mod repl;

pub use repl::{Repl, render_result};
