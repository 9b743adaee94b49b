//! JSON preview of the first rows of a sheet

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::sheet::Sheet;

/// First `n` rows as an array of column -> value objects, in column order
pub fn preview_records(sheet: &Sheet, n: usize) -> Value {
    let records = sheet
        .rows
        .iter()
        .take(n)
        .map(|row| {
            let mut object = Map::new();
            for (column, cell) in sheet.columns.iter().zip(row) {
                object.insert(column.clone(), cell.to_json());
            }
            Value::Object(object)
        })
        .collect();

    Value::Array(records)
}

/// Write the preview as pretty-printed UTF-8 JSON, replacing any existing file
pub fn write_preview(path: &Path, preview: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let json = serde_json::to_string_pretty(preview).context("Failed to serialize preview")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write preview to: {}", path.display()))?;

    log::info!("Preview written to {}", path.display());
    Ok(())
}
