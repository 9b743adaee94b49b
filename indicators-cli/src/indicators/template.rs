//! Blank indicator workbook with the expected header row

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

use super::Column;

const SHEET_NAME: &str = "Indicadores";

/// Write an empty workbook whose first row holds every expected column
pub fn write_template(path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header = Format::new().set_bold();
    for (col, column) in Column::ALL.iter().enumerate() {
        let col = col as u16;
        worksheet.write_string_with_format(0, col, column.header(), &header)?;
        worksheet.set_column_width(col, column.header().chars().count().max(12) as f64)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    log::info!("Template written to {}", path.display());
    Ok(())
}
