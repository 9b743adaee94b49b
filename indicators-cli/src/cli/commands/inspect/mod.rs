mod handler;

use clap::Args;
use std::path::PathBuf;

pub use handler::handle_inspect_command;

#[derive(Args, Debug)]
pub struct InspectCommands {
    /// Spreadsheet to inspect (.xlsx, .xls, .ods or .csv)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write the JSON preview
    #[arg(short, long)]
    pub preview: Option<PathBuf>,

    /// Number of rows to include in the JSON preview
    #[arg(short, long)]
    pub rows: Option<usize>,
}
