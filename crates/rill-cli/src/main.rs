use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "rill")]
#[command(about = "Rill programming language interpreter", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Rill source file
    Run {
        /// Path to the Rill source file
        file: String,
    },
    /// Start an interactive REPL
    Repl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { file } => {
            commands::run::run(&file)?;
        }
        Commands::Repl => {
            commands::repl::run()?;
        }
    }

    Ok(())
}
