//! Indicator spreadsheet schema and records

mod record;
mod schema;
mod template;

pub use record::{IndicatorRecord, extract_records};
pub use schema::{Column, ColumnMap};
pub use template::write_template;

use anyhow::{Context, Result};
use std::path::Path;

use crate::sheet::load_sheet;

/// Named indicator rows from one spreadsheet
#[derive(Debug, Clone)]
pub struct LoadedIndicators {
    /// File name of the spreadsheet
    pub source_name: String,
    pub records: Vec<IndicatorRecord>,
}

/// Load a spreadsheet, validate its header and extract named indicator rows
pub fn load_indicators<P: AsRef<Path>>(path: P) -> Result<LoadedIndicators> {
    let path = path.as_ref();
    let sheet = load_sheet(path)?;
    let columns = ColumnMap::resolve(&sheet)
        .with_context(|| format!("Invalid indicator spreadsheet: {}", path.display()))?;

    Ok(LoadedIndicators {
        source_name: sheet.source_name(),
        records: extract_records(&sheet, &columns),
    })
}
