//! Inspect command handler

use anyhow::Result;
use colored::*;

use super::InspectCommands;
use crate::cli::rule;
use crate::config::Config;
use crate::inspect::{preview_records, render_head, render_info, render_shape, write_preview};
use crate::sheet::load_sheet;

pub fn handle_inspect_command(args: InspectCommands, config: &Config) -> Result<()> {
    let input = args.input.unwrap_or_else(|| config.input.clone());
    let preview_path = args.preview.unwrap_or_else(|| config.preview.clone());
    let preview_rows = args.rows.unwrap_or(config.preview_rows);

    let sheet = load_sheet(&input)?;

    println!("{}", rule());
    println!("{}", "ANÁLISE DA PLANILHA DE INDICADORES".bold());
    println!("{}", rule());
    println!();
    print!("{}", render_shape(&sheet));

    println!();
    println!("{}", rule());
    println!("{}", format!("PRIMEIRAS {} LINHAS DE DADOS:", config.head_rows).bold());
    println!("{}", rule());
    print!("{}", render_head(&sheet, config.head_rows));

    println!();
    println!("{}", rule());
    println!("{}", "RESUMO DOS DADOS:".bold());
    println!("{}", rule());
    print!("{}", render_info(&sheet));

    let preview = preview_records(&sheet, preview_rows);
    write_preview(&preview_path, &preview)?;

    println!();
    println!("{}", rule());
    println!(
        "Preview salvo em: {}",
        preview_path.display().to_string().bright_green()
    );
    println!("{}", rule());

    Ok(())
}
