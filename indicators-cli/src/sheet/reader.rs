//! Load tabular data from workbooks and CSV files
//!
//! The first row (or CSV record) is the header. Data rows are padded to the
//! header width. Blank rows between data rows are kept; only the blank tail a
//! worksheet's used range can carry is dropped. CSV fields load as text.

use anyhow::{Context, Result, bail};
use calamine::{Data, Reader, open_workbook_auto};
use std::path::{Path, PathBuf};

use super::CellValue;

/// A loaded sheet: header names plus data rows
#[derive(Debug, Clone)]
pub struct Sheet {
    /// Path the data was loaded from
    pub source: PathBuf,
    /// Column names, in sheet order
    pub columns: Vec<String>,
    /// Data rows, each exactly `columns.len()` wide
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(source: impl Into<PathBuf>, columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Null);
                row
            })
            .collect();

        Self {
            source: source.into(),
            columns,
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of a column by exact header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// File name of the source, for display
    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

/// Supported input formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputFormat {
    Workbook,
    Csv,
}

fn detect_format(path: &Path) -> InputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("csv") => InputFormat::Csv,
        _ => InputFormat::Workbook,
    }
}

/// Load a sheet from a workbook (first worksheet) or a CSV file
pub fn load_sheet<P: AsRef<Path>>(path: P) -> Result<Sheet> {
    let path = path.as_ref();
    if !path.exists() {
        bail!("Input file does not exist: {}", path.display());
    }

    let sheet = match detect_format(path) {
        InputFormat::Workbook => load_workbook(path)?,
        InputFormat::Csv => load_csv(path)?,
    };

    log::info!(
        "Loaded {} rows x {} columns from {}",
        sheet.row_count(),
        sheet.column_count(),
        path.display()
    );

    Ok(sheet)
}

fn load_workbook(path: &Path) -> Result<Sheet> {
    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open spreadsheet: {}", path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .with_context(|| format!("Spreadsheet has no sheets: {}", path.display()))?;

    log::debug!("Reading sheet '{}'", sheet_name);

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

    let mut rows = range.rows();
    let columns = match rows.next() {
        Some(header) => header_names(header.iter().map(header_text)),
        None => return Ok(Sheet::new(path, Vec::new(), Vec::new())),
    };

    let mut data: Vec<Vec<CellValue>> = rows
        .map(|row| row.iter().map(CellValue::from_data).collect())
        .collect();
    trim_trailing_blank(&mut data);

    Ok(Sheet::new(path, columns, data))
}

fn load_csv(path: &Path) -> Result<Sheet> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read CSV header: {}", path.display()))?
        .clone();
    let columns = header_names(headers.iter().map(|h| h.to_string()));

    let mut data = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        // +2: one for the header line, one for 1-based numbering
        let record = record
            .with_context(|| format!("Failed to parse CSV line {}", idx + 2))?;
        data.push(record.iter().map(CellValue::from_text).collect());
    }

    Ok(Sheet::new(path, columns, data))
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => CellValue::from_data(other).to_text().unwrap_or_default(),
    }
}

/// Fill in unnamed header cells as `Unnamed: <idx>`
fn header_names(raw: impl Iterator<Item = String>) -> Vec<String> {
    raw.enumerate()
        .map(|(idx, name)| {
            if name.trim().is_empty() {
                format!("Unnamed: {}", idx)
            } else {
                name
            }
        })
        .collect()
}

fn is_blank(row: &[CellValue]) -> bool {
    row.iter().all(CellValue::is_null)
}

/// Drop blank rows at the end of the data
fn trim_trailing_blank(rows: &mut Vec<Vec<CellValue>>) {
    while rows.last().is_some_and(|row| is_blank(row)) {
        rows.pop();
    }
}
