//! CLI tool for tablespan - computes the span grid of a table described as JSON
//!
//! Usage:
//!   tablespan_cli <table.json>              # Output JSON to stdout
//!   tablespan_cli <table.json> -o out.json  # Output JSON to file
//!
//! Log output goes to stderr and is controlled by `RUST_LOG` (default `warn`).

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tablespan::{Result, SpanError, TableInput};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: tablespan_cli <table.json> [-o output.json]";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Input path and optional `-o` destination.
fn parse_args(args: &[String]) -> Option<(&str, Option<&str>)> {
    match args {
        [_, input] => Some((input.as_str(), None)),
        [_, input, flag, output] if flag.as_str() == "-o" => {
            Some((input.as_str(), Some(output.as_str())))
        }
        _ => None,
    }
}

fn write_output(json: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, json)?;
            eprintln!("Written: {path}");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

fn run(input: &str, output: Option<&str>) -> Result<()> {
    let text = fs::read_to_string(Path::new(input))
        .map_err(|e| SpanError::Other(format!("reading {input}: {e}")))?;
    let table = TableInput::from_json(&text)?;

    let grid = table.span_grid();
    tracing::info!(
        rows = grid.rows,
        cols = grid.cols,
        merges = grid.merge_ranges().len(),
        hidden = grid.hidden_count(),
        "span grid computed"
    );

    let json = serde_json::to_string_pretty(&grid)?;
    write_output(&json, output)
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let Some((input, output)) = parse_args(&args) else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    if let Err(e) = run(input, output) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
