//! REPL command implementation

use anyhow::Result;
use rill_runtime::{ReplCore, Value};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive REPL
pub fn run() -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut repl = ReplCore::new();

    println!("Rill v{} REPL", rill_runtime::VERSION);
    println!("Type expressions or statements, or :quit to exit");
    println!("Commands: :quit (or :q), :reset, :help");
    println!();

    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == ":quit" || trimmed == ":q" {
                    println!("Goodbye!");
                    break;
                }

                if trimmed == ":reset" {
                    repl.reset();
                    println!("REPL state reset");
                    continue;
                }

                if trimmed == ":help" || trimmed == ":h" {
                    print_help();
                    continue;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                let result = repl.eval_line(&line);

                for diag in &result.diagnostics {
                    println!("{}", super::format_diagnostic(diag));
                }

                if let Some(value) = result.value {
                    if !matches!(value, Value::Null) {
                        println!("{}", value.inspect());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                println!("Use :quit or :q to exit");
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error reading input: {}", err);
                break;
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("Rill REPL commands:");
    println!("  :quit, :q   Exit the REPL");
    println!("  :reset      Clear all bindings");
    println!("  :help, :h   Show this help");
    println!();
    println!("Anything else is evaluated as Rill source, e.g.:");
    println!("  >> let add = fn(a, b) {{ a + b }};");
    println!("  >> add(2, 3)");
    println!("  5");
}
