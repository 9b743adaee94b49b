//! Seed command handler

use anyhow::Result;
use chrono::Local;
use colored::*;

use super::SeedCommands;
use crate::config::Config;
use crate::indicators::load_indicators;
use crate::seed::{build_seed, write_seed};

pub fn handle_seed_command(args: SeedCommands, config: &Config) -> Result<()> {
    let input = args.input.unwrap_or_else(|| config.input.clone());
    let output = args.output.unwrap_or_else(|| config.output.clone());

    let loaded = load_indicators(&input)?;

    if !args.dry {
        println!("Processando {} indicadores...", loaded.records.len());
    }

    let generated_at = Local::now().naive_local();
    let seed = build_seed(&loaded.records, &loaded.source_name, generated_at)?;

    if args.dry {
        print!("{}", seed.sql);
        return Ok(());
    }

    write_seed(&output, &seed.sql)?;

    println!(
        "{} Migration criada: {}",
        "✓".bright_green().bold(),
        output.display().to_string().bright_green()
    );
    println!(
        "{} Total de indicadores: {}",
        "✓".bright_green().bold(),
        seed.statement_count
    );

    if !seed.categories.is_empty() {
        println!();
        println!("Categorias encontradas:");
        for (category, count) in seed.categories.counts() {
            println!("  - {}: {} indicadores", category.cyan(), count);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::Column;
    use rust_xlsxwriter::Workbook;
    use std::path::Path;

    /// Write a workbook with the full indicator header and the given cells
    fn write_workbook(path: &Path, rows: &[Vec<(Column, &str)>], priorities: &[Option<f64>]) {
        let mut workbook = Workbook::new();
        let ws = workbook.add_worksheet();

        for (col, column) in Column::ALL.iter().enumerate() {
            ws.write_string(0, col as u16, column.header()).unwrap();
        }

        let priority_col = Column::ALL
            .iter()
            .position(|c| *c == Column::Priority)
            .unwrap() as u16;

        for (idx, fields) in rows.iter().enumerate() {
            let row = (idx + 1) as u32;
            for (column, text) in fields {
                let col = Column::ALL.iter().position(|c| c == column).unwrap() as u16;
                ws.write_string(row, col, *text).unwrap();
            }
            if let Some(Some(priority)) = priorities.get(idx) {
                ws.write_number(row, priority_col, *priority).unwrap();
            }
        }

        workbook.save(path).unwrap();
    }

    #[test]
    fn test_seed_from_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("indicadores.xlsx");
        let output = dir.path().join("migrations").join("seed.sql");

        write_workbook(
            &input,
            &[
                vec![
                    (Column::Name, "Lead Time"),
                    (Column::Category, "Flow"),
                    (Column::Description, "It's fast"),
                ],
                vec![(Column::Category, "Quality"), (Column::Acronym, "X")],
            ],
            &[Some(1.0), Some(2.0)],
        );

        let args = SeedCommands {
            input: Some(input),
            output: Some(output.clone()),
            dry: false,
        };
        handle_seed_command(args, &Config::default()).unwrap();

        let sql = std::fs::read_to_string(&output).unwrap();
        assert!(sql.starts_with("-- WK.metrics - Seed de Indicadores\n"));
        assert!(sql.contains("-- Importação automática da planilha indicadores.xlsx\n"));
        assert!(sql.contains("-- Total de indicadores: 1\n"));
        assert_eq!(sql.matches("INSERT INTO public.indicators (").count(), 1);
        assert!(sql.contains("  false,\n  1,\n  'Lead Time',\n"));
        assert_eq!(sql.matches("'It''s fast'").count(), 2);
        assert!(sql.ends_with(
            "-- Total de indicadores inseridos: 1\n-- Categorias únicas: Flow\n"
        ));
    }

    #[test]
    fn test_seed_missing_column_leaves_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.xlsx");
        let output = dir.path().join("seed.sql");
        std::fs::write(&output, "-- previous\n").unwrap();

        let mut workbook = Workbook::new();
        let ws = workbook.add_worksheet();
        ws.write_string(0, 0, "Indicador").unwrap();
        ws.write_string(1, 0, "Lead Time").unwrap();
        workbook.save(&input).unwrap();

        let args = SeedCommands {
            input: Some(input),
            output: Some(output.clone()),
            dry: false,
        };
        let err = handle_seed_command(args, &Config::default()).unwrap_err();

        assert!(format!("{:#}", err).contains("'Categoria'"));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "-- previous\n");
    }

    #[test]
    fn test_seed_from_csv_keeps_cell_text() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("indicadores.csv");
        let output = dir.path().join("seed.sql");

        let mut writer = csv::Writer::from_path(&input).unwrap();
        writer
            .write_record(Column::ALL.iter().map(|c| c.header()))
            .unwrap();
        writer
            .write_record(Column::ALL.iter().map(|c| match c {
                Column::Name => "Lead Time",
                Column::Acronym => "007",
                Column::Type => "TRUE",
                Column::Category => "1.50",
                Column::Description => "N/A",
                Column::Segmentation => "1e3",
                Column::Priority => "2",
                _ => "",
            }))
            .unwrap();
        writer.flush().unwrap();
        drop(writer);

        let args = SeedCommands {
            input: Some(input),
            output: Some(output.clone()),
            dry: false,
        };
        handle_seed_command(args, &Config::default()).unwrap();

        let sql = std::fs::read_to_string(&output).unwrap();
        assert!(sql.contains("  false,\n  2,\n  'Lead Time',\n  '007',\n  'TRUE',\n  '1.50',\n  NULL,\n  NULL,\n"));
        assert!(sql.contains("  '1e3',\n"));
        assert!(sql.ends_with("-- Categorias únicas: 1.50\n"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("indicadores.xlsx");
        let output = dir.path().join("seed.sql");
        write_workbook(&input, &[vec![(Column::Name, "WIP")]], &[None]);

        let args = SeedCommands {
            input: Some(input),
            output: Some(output.clone()),
            dry: true,
        };
        handle_seed_command(args, &Config::default()).unwrap();

        assert!(!output.exists());
    }
}
