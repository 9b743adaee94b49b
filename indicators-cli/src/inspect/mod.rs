//! Diagnostic views of an indicator spreadsheet

mod preview;
mod summary;

pub use preview::{preview_records, write_preview};
pub use summary::{render_head, render_info, render_shape};
