//! Cell value representation for loaded spreadsheets

use calamine::Data;
use serde_json::json;

/// Text cells that load as missing values, in both workbooks and CSV files
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a text cell stands for a missing value; matching is exact
pub fn is_na_token(s: &str) -> bool {
    NA_TOKENS.contains(&s)
}

/// A single spreadsheet cell after loading
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell, empty string, NaN or spreadsheet error
    Null,
    /// Text value
    String(String),
    /// Whole number
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Date/time, already rendered as `YYYY-MM-DD HH:MM:SS`
    DateTime(String),
}

/// Coarse type of a cell, used when summarizing columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Null,
    String,
    Int,
    Float,
    Bool,
    DateTime,
}

impl CellValue {
    /// Convert a calamine cell into a CellValue
    pub fn from_data(cell: &Data) -> Self {
        match cell {
            Data::Empty => CellValue::Null,
            Data::String(s) => CellValue::from_text(s),
            Data::Int(i) => CellValue::Int(*i),
            Data::Float(f) if f.is_nan() => CellValue::Null,
            Data::Float(f) => CellValue::Float(*f),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(naive) => CellValue::DateTime(naive.format("%Y-%m-%d %H:%M:%S").to_string()),
                None => CellValue::DateTime(dt.to_string()),
            },
            Data::DateTimeIso(s) => CellValue::DateTime(s.clone()),
            Data::DurationIso(s) => CellValue::String(s.clone()),
            Data::Error(_) => CellValue::Null,
        }
    }

    /// Text cell as written, or Null for a missing-value token
    ///
    /// No type guessing happens here, so `007` stays `007`.
    pub fn from_text(s: &str) -> Self {
        if is_na_token(s) {
            CellValue::Null
        } else {
            CellValue::String(s.to_string())
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn kind(&self) -> CellKind {
        match self {
            CellValue::Null => CellKind::Null,
            CellValue::String(_) => CellKind::String,
            CellValue::Int(_) => CellKind::Int,
            CellValue::Float(_) => CellKind::Float,
            CellValue::Bool(_) => CellKind::Bool,
            CellValue::DateTime(_) => CellKind::DateTime,
        }
    }

    /// Text representation, or None for Null
    ///
    /// Whole floats render without a fractional part, so a numeric cell
    /// holding `2.0` becomes `2`.
    pub fn to_text(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::String(s) => Some(s.clone()),
            CellValue::Int(i) => Some(i.to_string()),
            CellValue::Float(f) => {
                if f.fract() == 0.0 && f.is_finite() && f.abs() < i64::MAX as f64 {
                    Some((*f as i64).to_string())
                } else {
                    Some(f.to_string())
                }
            }
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::DateTime(s) => Some(s.clone()),
        }
    }

    /// Convert to JSON for the preview file
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            CellValue::Null => serde_json::Value::Null,
            CellValue::String(s) => serde_json::Value::String(s.clone()),
            CellValue::Int(i) => json!(*i),
            CellValue::Float(f) => json!(*f),
            CellValue::Bool(b) => serde_json::Value::Bool(*b),
            CellValue::DateTime(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Null => write!(f, "NaN"),
            CellValue::Float(fl) => write!(f, "{:?}", fl),
            other => write!(f, "{}", other.to_text().unwrap_or_default()),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Null
    }
}
