//! Indicator records extracted from sheet rows

use anyhow::{Result, bail};

use super::{Column, ColumnMap};
use crate::sheet::{CellValue, Sheet};

/// One indicator row, keyed by field rather than by column position
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRecord {
    /// 1-based data row number in the source sheet (header excluded)
    pub row_number: usize,
    pub name: CellValue,
    pub acronym: CellValue,
    pub indicator_type: CellValue,
    pub category: CellValue,
    pub priority: CellValue,
    pub description: CellValue,
    pub calculation_formula: CellValue,
    pub action_when_bad: CellValue,
    pub result_when_good: CellValue,
    pub suggested_target: CellValue,
    pub default_granularity: CellValue,
    pub segmentation: CellValue,
    pub azure_devops_source: CellValue,
    pub base_query: CellValue,
}

impl IndicatorRecord {
    /// Build a record from a sheet row, or None when the indicator name is empty
    pub fn from_row(row_number: usize, row: &[CellValue], columns: &ColumnMap) -> Option<Self> {
        let get = |column: Column| -> CellValue {
            row.get(columns.index_of(column))
                .cloned()
                .unwrap_or(CellValue::Null)
        };

        let name = get(Column::Name);
        if name.is_null() {
            return None;
        }

        Some(Self {
            row_number,
            name,
            acronym: get(Column::Acronym),
            indicator_type: get(Column::Type),
            category: get(Column::Category),
            priority: get(Column::Priority),
            description: get(Column::Description),
            calculation_formula: get(Column::CalculationFormula),
            action_when_bad: get(Column::ActionWhenBad),
            result_when_good: get(Column::ResultWhenGood),
            suggested_target: get(Column::SuggestedTarget),
            default_granularity: get(Column::DefaultGranularity),
            segmentation: get(Column::Segmentation),
            azure_devops_source: get(Column::AzureDevopsSource),
            base_query: get(Column::BaseQuery),
        })
    }

    /// Priority as an integer; absent means 0
    ///
    /// Floats truncate toward zero and numeric text is parsed. Anything else
    /// is an error naming the row.
    pub fn priority_value(&self) -> Result<i64> {
        match &self.priority {
            CellValue::Null => Ok(0),
            CellValue::Int(i) => Ok(*i),
            CellValue::Float(f) if f.is_finite() => Ok(f.trunc() as i64),
            CellValue::Bool(b) => Ok(i64::from(*b)),
            CellValue::String(s) => {
                let trimmed = s.trim();
                if let Ok(i) = trimmed.parse::<i64>() {
                    return Ok(i);
                }
                match trimmed.parse::<f64>() {
                    Ok(f) if f.is_finite() => Ok(f.trunc() as i64),
                    _ => bail!(
                        "Row {}: priority '{}' is not a number",
                        self.row_number,
                        s
                    ),
                }
            }
            other => bail!(
                "Row {}: priority '{}' is not a number",
                self.row_number,
                other
            ),
        }
    }

    /// Category text, if present
    pub fn category_text(&self) -> Option<String> {
        self.category.to_text()
    }
}

/// Extract indicator records from a validated sheet, dropping rows with no name
pub fn extract_records(sheet: &Sheet, columns: &ColumnMap) -> Vec<IndicatorRecord> {
    let mut records = Vec::with_capacity(sheet.row_count());

    for (idx, row) in sheet.rows.iter().enumerate() {
        match IndicatorRecord::from_row(idx + 1, row, columns) {
            Some(record) => records.push(record),
            None => log::debug!("Skipping row {}: empty '{}'", idx + 1, Column::Name.header()),
        }
    }

    log::info!(
        "{} of {} rows have an indicator name",
        records.len(),
        sheet.row_count()
    );

    records
}
