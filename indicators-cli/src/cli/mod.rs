//! Command-line interface definitions

pub mod commands;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use commands::{InspectCommands, SeedCommands, TemplateCommands};

#[derive(Parser, Debug)]
#[command(name = "indicators-cli")]
#[command(about = "Inspect indicator spreadsheets and generate SQL seed migrations")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: ~/.config/indicators-cli/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the shape, first rows and column types of a spreadsheet and save a JSON preview
    Inspect(InspectCommands),
    /// Generate the SQL seed migration for the indicators table
    Seed(SeedCommands),
    /// Write an empty spreadsheet with the expected indicator columns
    Template(TemplateCommands),
}

/// Section separator used in console reports
pub fn rule() -> String {
    "=".repeat(80)
}
