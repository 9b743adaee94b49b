mod handler;

use clap::Args;
use std::path::PathBuf;

pub use handler::handle_seed_command;

#[derive(Args, Debug)]
pub struct SeedCommands {
    /// Indicator spreadsheet (.xlsx, .xls, .ods or .csv)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write the SQL migration (overwritten)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the SQL to stdout instead of writing the file
    #[arg(long)]
    pub dry: bool,
}
