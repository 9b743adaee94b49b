mod handler;

use clap::Args;
use std::path::PathBuf;

pub use handler::handle_template_command;

#[derive(Args, Debug)]
pub struct TemplateCommands {
    /// Where to write the blank workbook
    #[arg(short, long, default_value = "indicadores_template.xlsx")]
    pub output: PathBuf,
}
