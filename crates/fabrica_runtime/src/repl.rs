//! The interactive REPL.

use std::fmt::Write as _;
use std::sync::Arc;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use fabrica_compiler::{Query, compile};
use fabrica_foundation::{Database, Entity as _};
use fabrica_query::{InfoQuery, OptimizationQuery};

/// The interactive query REPL.
pub struct Repl {
    /// The line editor for input.
    editor: DefaultEditor,

    /// The entity database queries compile against.
    db: Arc<dyn Database>,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl {
    /// Creates a new REPL over the given database.
    ///
    /// # Errors
    ///
    /// Returns an error if the line editor fails to initialize.
    pub fn new(db: Arc<dyn Database>) -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
            db,
            show_banner: true,
            prompt: "?> ".to_string(),
        })
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> rustyline::Result<()> {
        if self.show_banner {
            print_banner();
        }

        loop {
            match self.editor.readline(&self.prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if matches!(line, "exit" | "quit") {
                        break;
                    }
                    let _ = self.editor.add_history_entry(line);
                    println!("{}", render_result(&*self.db, line));
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e),
            }
        }

        println!("Goodbye!");
        Ok(())
    }
}

fn print_banner() {
    println!("fabrica {}", env!("CARGO_PKG_VERSION"));
    println!("Ask for a production plan (\"produce 60 iron plates from ore\")");
    println!("or look something up (\"recipes for screws\"). Type exit to quit.");
}

/// Compiles one query and renders the result for display.
#[must_use]
pub fn render_result(db: &dyn Database, input: &str) -> String {
    match compile(input, db) {
        Ok(Query::Optimization(query)) => render_optimization(&query),
        Ok(Query::Info(query)) => render_info(&query),
        Err(e) => e.to_string(),
    }
}

fn render_optimization(query: &OptimizationQuery) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "query: {query}");

    if let Some(objective) = query.objective() {
        let direction = if objective.is_maximize() {
            "maximize"
        } else {
            "minimize"
        };
        let vars = objective
            .vars()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "objective: {direction} {vars}");
    }

    for (var, value) in query.eq_constraints() {
        let _ = writeln!(out, "  {var} = {value}");
    }
    for (var, value) in query.ge_constraints() {
        let _ = writeln!(out, "  {var} >= {value}");
    }
    for (var, value) in query.le_constraints() {
        let _ = writeln!(out, "  {var} <= {value}");
    }

    let strict: Vec<&str> = [
        ("outputs", query.strict_outputs()),
        ("inputs", query.strict_inputs()),
        ("recipes", query.strict_recipes()),
        ("power recipes", query.strict_power_recipes()),
        ("crafters", query.strict_crafters()),
        ("generators", query.strict_generators()),
    ]
    .into_iter()
    .filter_map(|(name, strict)| strict.then_some(name))
    .collect();
    if !strict.is_empty() {
        let _ = writeln!(out, "strict: {}", strict.join(", "));
    }

    out.trim_end().to_string()
}

fn render_info(query: &InfoQuery) -> String {
    if query.is_empty() {
        return "no matching recipes".to_string();
    }
    query
        .iter()
        .map(|entity| format!("{}  {}", entity.var(), entity.name()))
        .collect::<Vec<_>>()
        .join("\n")
}
