//! INSERT statements for the indicators table

use anyhow::Result;

use super::escape::sql_literal;
use crate::indicators::IndicatorRecord;

/// Fully qualified target table
pub const TARGET_TABLE: &str = "public.indicators";

/// Target columns, in statement order
pub const TARGET_COLUMNS: [&str; 17] = [
    "is_active",
    "is_kr",
    "priority",
    "name",
    "acronym",
    "type",
    "category",
    "description",
    "objective",
    "calculation_formula",
    "action_when_bad",
    "result_when_good",
    "suggested_target",
    "default_granularity",
    "segmentation",
    "azure_devops_source",
    "base_query",
];

/// One rendered INSERT, values already escaped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    values: Vec<String>,
}

impl InsertStatement {
    /// Map a record onto the target columns
    ///
    /// `description` fills both the description and objective columns.
    pub fn from_record(record: &IndicatorRecord) -> Result<Self> {
        let priority = record.priority_value()?;
        let description = sql_literal(&record.description);

        let values = vec![
            "true".to_string(),
            "false".to_string(),
            priority.to_string(),
            sql_literal(&record.name),
            sql_literal(&record.acronym),
            sql_literal(&record.indicator_type),
            sql_literal(&record.category),
            description.clone(),
            description,
            sql_literal(&record.calculation_formula),
            sql_literal(&record.action_when_bad),
            sql_literal(&record.result_when_good),
            sql_literal(&record.suggested_target),
            sql_literal(&record.default_granularity),
            sql_literal(&record.segmentation),
            sql_literal(&record.azure_devops_source),
            sql_literal(&record.base_query),
        ];
        debug_assert_eq!(values.len(), TARGET_COLUMNS.len());

        Ok(Self { values })
    }

    /// Rendered value for a target column
    #[cfg(test)]
    pub fn value(&self, column: &str) -> Option<&str> {
        TARGET_COLUMNS
            .iter()
            .position(|c| *c == column)
            .and_then(|idx| self.values.get(idx))
            .map(|v| v.as_str())
    }
}

impl std::fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "INSERT INTO {} (", TARGET_TABLE)?;
        writeln!(f, "  {}", TARGET_COLUMNS.join(",\n  "))?;
        writeln!(f, ") VALUES (")?;
        writeln!(f, "  {}", self.values.join(",\n  "))?;
        writeln!(f, ");")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::CellValue;

    fn record() -> IndicatorRecord {
        IndicatorRecord {
            row_number: 1,
            name: CellValue::String("Lead Time".into()),
            acronym: CellValue::String("LT".into()),
            indicator_type: CellValue::String("Downstream".into()),
            category: CellValue::String("Flow".into()),
            priority: CellValue::Float(1.0),
            description: CellValue::String("It's fast".into()),
            calculation_formula: CellValue::Null,
            action_when_bad: CellValue::Null,
            result_when_good: CellValue::Null,
            suggested_target: CellValue::Null,
            default_granularity: CellValue::String("Sprint".into()),
            segmentation: CellValue::Null,
            azure_devops_source: CellValue::Null,
            base_query: CellValue::Null,
        }
    }

    #[test]
    fn test_constants_and_mapped_values() {
        let stmt = InsertStatement::from_record(&record()).unwrap();
        assert_eq!(stmt.value("is_active"), Some("true"));
        assert_eq!(stmt.value("is_kr"), Some("false"));
        assert_eq!(stmt.value("priority"), Some("1"));
        assert_eq!(stmt.value("name"), Some("'Lead Time'"));
        assert_eq!(stmt.value("type"), Some("'Downstream'"));
        assert_eq!(stmt.value("base_query"), Some("NULL"));
        assert_eq!(stmt.value("nope"), None);
    }

    #[test]
    fn test_description_fills_objective() {
        let stmt = InsertStatement::from_record(&record()).unwrap();
        assert_eq!(stmt.value("description"), Some("'It''s fast'"));
        assert_eq!(stmt.value("objective"), Some("'It''s fast'"));
    }

    #[test]
    fn test_render() {
        let stmt = InsertStatement::from_record(&record()).unwrap();
        let sql = stmt.to_string();

        assert!(sql.starts_with("INSERT INTO public.indicators (\n  is_active,\n  is_kr,\n"));
        assert!(sql.contains("  base_query\n) VALUES (\n  true,\n  false,\n  1,\n  'Lead Time',\n"));
        assert!(sql.ends_with("  NULL\n);\n"));
        assert_eq!(sql.lines().count(), 3 + 17 + 17);
    }

    #[test]
    fn test_bad_priority_fails() {
        let mut rec = record();
        rec.priority = CellValue::String("high".into());
        assert!(InsertStatement::from_record(&rec).is_err());
    }
}
