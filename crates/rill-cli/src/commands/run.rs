//! Run command - execute Rill source files

use anyhow::{Context, Result};
use rill_runtime::{Rill, Value};
use std::fs;

/// Run a Rill source file
///
/// Evaluates the file and prints the resulting value to stdout unless it is
/// null. Diagnostics go to stderr.
pub fn run(file_path: &str) -> Result<()> {
    let source = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read source file: {}", file_path))?;

    let runtime = Rill::new();
    match runtime.eval(&source) {
        Ok(value) => {
            if !matches!(value, Value::Null) {
                println!("{}", value.inspect());
            }
            Ok(())
        }
        Err(diagnostics) => {
            eprintln!("Errors occurred while running {}:", file_path);
            for diag in &diagnostics {
                eprintln!("{}", super::format_diagnostic(diag));
            }
            Err(anyhow::anyhow!("Failed to execute program"))
        }
    }
}
