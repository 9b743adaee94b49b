//! Expected spreadsheet columns and header validation

use crate::sheet::Sheet;

/// A column the indicator spreadsheet must provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Name,
    Acronym,
    Type,
    Category,
    Priority,
    Description,
    CalculationFormula,
    ActionWhenBad,
    ResultWhenGood,
    SuggestedTarget,
    DefaultGranularity,
    Segmentation,
    AzureDevopsSource,
    BaseQuery,
}

impl Column {
    /// All columns, in template order
    pub const ALL: [Column; 14] = [
        Column::Name,
        Column::Acronym,
        Column::Type,
        Column::Category,
        Column::Priority,
        Column::Description,
        Column::CalculationFormula,
        Column::ActionWhenBad,
        Column::ResultWhenGood,
        Column::SuggestedTarget,
        Column::DefaultGranularity,
        Column::Segmentation,
        Column::AzureDevopsSource,
        Column::BaseQuery,
    ];

    /// Header text as it appears in the spreadsheet
    pub fn header(self) -> &'static str {
        match self {
            Column::Name => "Indicador",
            Column::Acronym => "Sigla",
            Column::Type => "Tipo (Upstream/Downstream)",
            Column::Category => "Categoria",
            Column::Priority => "Prioridade",
            Column::Description => "Descrição / Objetivo",
            Column::CalculationFormula => "Memória de Cálculo (Fórmula)",
            Column::ActionWhenBad => "Ação quando a métrica estiver ruim",
            Column::ResultWhenGood => "Quando a métrica está boa (resultado esperado)",
            Column::SuggestedTarget => "Meta sugerida (baseline→alvo)",
            Column::DefaultGranularity => "Granularidade Padrão",
            Column::Segmentation => "Segmentação",
            Column::AzureDevopsSource => "Fonte no Azure DevOps (campos/artefatos)",
            Column::BaseQuery => "Consulta base (WIQL / OData)",
        }
    }

    /// Slot in [`Column::ALL`]; declaration order matches it
    fn slot(self) -> usize {
        self as usize
    }
}

/// The spreadsheet is missing one or more expected columns
#[derive(Debug, Clone)]
pub struct SchemaError {
    pub missing: Vec<&'static str>,
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "missing expected column(s): ")?;
        for (i, name) in self.missing.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}'", name)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

/// Resolved positions of every expected column within a sheet
#[derive(Debug, Clone)]
pub struct ColumnMap {
    positions: [usize; 14],
}

impl ColumnMap {
    /// Validate a sheet's header and resolve every expected column
    ///
    /// Extra columns are ignored. All missing columns are reported at once.
    pub fn resolve(sheet: &Sheet) -> Result<Self, SchemaError> {
        let mut positions = [0usize; 14];
        let mut missing = Vec::new();

        for (slot, column) in Column::ALL.iter().enumerate() {
            match sheet.column_index(column.header()) {
                Some(idx) => positions[slot] = idx,
                None => missing.push(column.header()),
            }
        }

        if !missing.is_empty() {
            return Err(SchemaError { missing });
        }

        Ok(Self { positions })
    }

    /// Index into a sheet row for the given column
    pub fn index_of(&self, column: Column) -> usize {
        self.positions[column.slot()]
    }
}
