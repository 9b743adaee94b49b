//! SQL seed generation for the indicators table

mod document;
mod escape;
mod statement;
mod writer;

pub use document::build_seed;
pub use writer::write_seed;
