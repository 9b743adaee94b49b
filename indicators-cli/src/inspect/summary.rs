//! Text summaries of a loaded sheet

use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

use crate::sheet::{CellKind, CellValue, Sheet};

/// Column data type, named the way dataframe summaries name them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Dtype {
    Bool,
    DateTime,
    Float64,
    Int64,
    Object,
}

impl std::fmt::Display for Dtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dtype::Bool => write!(f, "bool"),
            Dtype::DateTime => write!(f, "datetime64[ns]"),
            Dtype::Float64 => write!(f, "float64"),
            Dtype::Int64 => write!(f, "int64"),
            Dtype::Object => write!(f, "object"),
        }
    }
}

/// Infer a column dtype from its values
///
/// A column with no values at all is float64 (all NaN). Integers with gaps
/// widen to float64; booleans with gaps fall back to object.
pub fn infer_dtype<'a>(values: impl IntoIterator<Item = &'a CellValue>) -> Dtype {
    let mut has_null = false;
    let mut kinds = Vec::new();

    for value in values {
        match value.kind() {
            CellKind::Null => has_null = true,
            kind if !kinds.contains(&kind) => kinds.push(kind),
            _ => {}
        }
    }

    let only = |allowed: &[CellKind]| kinds.iter().all(|k| allowed.contains(k));

    if kinds.is_empty() {
        Dtype::Float64
    } else if only(&[CellKind::Int]) {
        if has_null { Dtype::Float64 } else { Dtype::Int64 }
    } else if only(&[CellKind::Int, CellKind::Float]) {
        Dtype::Float64
    } else if only(&[CellKind::Bool]) && !has_null {
        Dtype::Bool
    } else if only(&[CellKind::DateTime]) {
        Dtype::DateTime
    } else {
        Dtype::Object
    }
}

/// Per-column statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub non_null: usize,
    pub dtype: Dtype,
}

pub fn column_info(sheet: &Sheet) -> Vec<ColumnInfo> {
    sheet
        .columns
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let values = sheet.rows.iter().filter_map(|row| row.get(idx));
            ColumnInfo {
                name: name.clone(),
                non_null: values.clone().filter(|v| !v.is_null()).count(),
                dtype: infer_dtype(values),
            }
        })
        .collect()
}

/// Row count and numbered column list
pub fn render_shape(sheet: &Sheet) -> String {
    let mut out = format!("Total de linhas: {}\n\n", sheet.row_count());
    out.push_str(&format!(
        "Colunas disponíveis ({}):\n",
        sheet.column_count()
    ));
    for (i, column) in sheet.columns.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, column));
    }
    out
}

/// Aligned table of the first `n` rows, with a leading row index
pub fn render_head(sheet: &Sheet, n: usize) -> String {
    if sheet.columns.is_empty() {
        return "Empty sheet\n".to_string();
    }

    let rows: Vec<&Vec<CellValue>> = sheet.rows.iter().take(n).collect();
    if rows.is_empty() {
        return format!("Empty sheet\nColumns: [{}]\n", sheet.columns.join(", "));
    }

    let index: Vec<String> = (0..rows.len()).map(|i| i.to_string()).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    let index_width = index.iter().map(|s| s.width()).max().unwrap_or(0);
    let widths: Vec<usize> = sheet
        .columns
        .iter()
        .enumerate()
        .map(|(col, name)| {
            cells
                .iter()
                .map(|row| row[col].width())
                .chain(std::iter::once(name.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&" ".repeat(index_width));
    for (name, width) in sheet.columns.iter().zip(&widths) {
        out.push_str("  ");
        out.push_str(&pad_left(name, *width));
    }
    out.push('\n');

    for (idx, row) in index.iter().zip(&cells) {
        out.push_str(&pad_right(idx, index_width));
        for (cell, width) in row.iter().zip(&widths) {
            out.push_str("  ");
            out.push_str(&pad_left(cell, *width));
        }
        out.push('\n');
    }

    out
}

/// Per-column non-null counts and dtypes
pub fn render_info(sheet: &Sheet) -> String {
    let info = column_info(sheet);
    let rows = sheet.row_count();

    let mut out = String::new();
    if rows == 0 {
        out.push_str("RangeIndex: 0 entries\n");
    } else {
        out.push_str(&format!("RangeIndex: {} entries, 0 to {}\n", rows, rows - 1));
    }
    out.push_str(&format!("Data columns (total {} columns):\n", info.len()));

    let counts: Vec<String> = info.iter().map(|c| format!("{} non-null", c.non_null)).collect();
    let num_width = info.len().saturating_sub(1).to_string().len().max(3);
    let name_width = info
        .iter()
        .map(|c| c.name.width())
        .chain(std::iter::once("Column".len()))
        .max()
        .unwrap_or(0);
    let count_width = counts
        .iter()
        .map(|c| c.len())
        .chain(std::iter::once("Non-Null Count".len()))
        .max()
        .unwrap_or(0);

    out.push_str(&format!(
        " {}  {}  {}  Dtype\n",
        pad_right("#", num_width),
        pad_right("Column", name_width),
        pad_right("Non-Null Count", count_width)
    ));
    out.push_str(&format!(
        " {}  {}  {}  -----\n",
        pad_right("---", num_width),
        pad_right("------", name_width),
        pad_right("--------------", count_width)
    ));
    for (i, (column, count)) in info.iter().zip(&counts).enumerate() {
        out.push_str(&format!(
            " {}  {}  {}  {}\n",
            pad_right(&i.to_string(), num_width),
            pad_right(&column.name, name_width),
            pad_right(count, count_width),
            column.dtype
        ));
    }

    let mut by_dtype: BTreeMap<String, usize> = BTreeMap::new();
    for column in &info {
        *by_dtype.entry(column.dtype.to_string()).or_default() += 1;
    }
    let dtypes: Vec<String> = by_dtype
        .iter()
        .map(|(dtype, count)| format!("{}({})", dtype, count))
        .collect();
    out.push_str(&format!("dtypes: {}\n", dtypes.join(", ")));

    out
}

fn cell_text(value: &CellValue) -> String {
    value.to_string().replace('\n', "\\n")
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}
