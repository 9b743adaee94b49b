//! Tabular input loading
//!
//! Reads `.xlsx`/`.xlsm`/`.xls`/`.ods` workbooks through calamine and `.csv`
//! files through the csv crate into a uniform [`Sheet`]. Both loaders share one
//! rule for missing-value text.

mod reader;
mod value;

pub use reader::{Sheet, load_sheet};
pub use value::{CellKind, CellValue};
