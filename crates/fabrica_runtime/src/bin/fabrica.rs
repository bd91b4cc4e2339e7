//! Fabrica CLI entry point.

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use fabrica_runtime::{Repl, render_result};
use fabrica_storage::sample_database;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    eval: Option<String>,
    no_banner: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--no-banner" => config.no_banner = true,
            "-e" | "--eval" => {
                i += 1;
                if i >= args.len() {
                    return Err("-e requires a query".into());
                }
                config.eval = Some(args[i].clone());
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("fabrica {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let db = Arc::new(sample_database());

    if let Some(query) = config.eval {
        println!("{}", render_result(&*db, &query));
        return Ok(());
    }

    let mut repl = Repl::new(db)?;
    if config.no_banner {
        repl = repl.without_banner();
    }
    repl.run()?;
    Ok(())
}

fn print_help() {
    println!("fabrica - natural-language query compiler for factory planning");
    println!();
    println!("Usage: fabrica [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -e, --eval <QUERY>  Compile one query and exit");
    println!("      --no-banner     Skip the welcome banner");
    println!("  -h, --help          Show this help");
    println!("  -V, --version       Show version");
    println!();
    println!("Set RUST_LOG=debug to trace entity resolution.");
}
