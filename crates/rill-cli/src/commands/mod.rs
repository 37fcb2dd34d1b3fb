//! CLI command implementations

pub mod repl;
pub mod run;

use colored::Colorize;
use rill_runtime::{Diagnostic, DiagnosticLevel};

/// Format a diagnostic for terminal display
pub fn format_diagnostic(diag: &Diagnostic) -> String {
    let level = match diag.level {
        DiagnosticLevel::Error => "error".red().bold(),
        DiagnosticLevel::Warning => "warning".yellow().bold(),
    };

    format!("{}[{}]: {}", level, diag.code, diag.message)
}
