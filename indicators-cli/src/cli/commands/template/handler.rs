use anyhow::{Result, bail};
use colored::*;

use super::TemplateCommands;
use crate::indicators::write_template;

pub fn handle_template_command(args: TemplateCommands) -> Result<()> {
    if args.output.exists() {
        bail!(
            "Refusing to overwrite existing file: {}",
            args.output.display()
        );
    }

    write_template(&args.output)?;

    println!(
        "{} Template criado: {}",
        "✓".bright_green().bold(),
        args.output.display().to_string().bright_green()
    );
    Ok(())
}
