//! Seed document assembly
//!
//! The document is a header comment block, one INSERT per record in source
//! order and a trailing summary comment. It is built entirely in memory and
//! handed back as a string; writing it is the caller's job.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use super::statement::{InsertStatement, TARGET_TABLE};
use crate::indicators::IndicatorRecord;

/// Timestamp format used in the header comment
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Distinct categories in first-seen order, with row counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySummary {
    entries: Vec<(String, usize)>,
}

impl CategorySummary {
    pub fn from_records(records: &[IndicatorRecord]) -> Self {
        let mut summary = Self::default();
        for category in records.iter().filter_map(|r| r.category_text()) {
            summary.add(category);
        }
        summary
    }

    fn add(&mut self, category: String) {
        match self.entries.iter_mut().find(|(name, _)| *name == category) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((category, 1)),
        }
    }

    /// Category names, first-seen order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// (category, row count) pairs, first-seen order
    pub fn counts(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Append-only SQL seed buffer
#[derive(Debug)]
pub struct SeedDocument {
    buffer: String,
    statements: usize,
}

impl SeedDocument {
    /// Start a document with the header comment block
    pub fn new(source_name: &str, total: usize, generated_at: NaiveDateTime) -> Self {
        let mut buffer = String::new();
        buffer.push_str("-- WK.metrics - Seed de Indicadores\n");
        buffer.push_str(&format!(
            "-- Importação automática da planilha {}\n",
            source_name
        ));
        buffer.push_str(&format!("-- Total de indicadores: {}\n", total));
        buffer.push_str(&format!(
            "-- Data de geração: {}\n",
            generated_at.format(TIMESTAMP_FORMAT)
        ));
        buffer.push('\n');
        buffer.push_str("-- Limpar indicadores existentes (opcional - comentar se quiser manter)\n");
        buffer.push_str(&format!("-- DELETE FROM {};\n", TARGET_TABLE));
        buffer.push('\n');
        buffer.push_str("-- Inserir indicadores\n");

        Self {
            buffer,
            statements: 0,
        }
    }

    /// Append one statement, preceded by a blank line
    pub fn push(&mut self, statement: &InsertStatement) {
        self.buffer.push('\n');
        self.buffer.push_str(&statement.to_string());
        self.statements += 1;
    }

    pub fn statement_count(&self) -> usize {
        self.statements
    }

    /// Close the document with the summary comment and return its text
    pub fn finish(mut self, categories: &CategorySummary) -> String {
        self.buffer.push('\n');
        self.buffer.push_str(&format!(
            "-- Total de indicadores inseridos: {}\n",
            self.statements
        ));
        self.buffer.push_str(&format!(
            "-- Categorias únicas: {}\n",
            categories.names().join(", ")
        ));
        self.buffer
    }
}

/// A rendered seed plus what went into it
#[derive(Debug, Clone)]
pub struct Seed {
    pub sql: String,
    pub statement_count: usize,
    pub categories: CategorySummary,
}

/// Build the full seed document from filtered records
pub fn build_seed(
    records: &[IndicatorRecord],
    source_name: &str,
    generated_at: NaiveDateTime,
) -> Result<Seed> {
    let mut document = SeedDocument::new(source_name, records.len(), generated_at);

    for record in records {
        let statement = InsertStatement::from_record(record).with_context(|| {
            format!(
                "Failed to build INSERT for row {} ({})",
                record.row_number, record.name
            )
        })?;
        document.push(&statement);
    }

    let categories = CategorySummary::from_records(records);
    let statement_count = document.statement_count();
    log::debug!(
        "Built {} statements across {} categories",
        statement_count,
        categories.counts().len()
    );

    Ok(Seed {
        sql: document.finish(&categories),
        statement_count,
        categories,
    })
}
