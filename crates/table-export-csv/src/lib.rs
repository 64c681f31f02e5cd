//! # table-export-csv
//!
//! CSV serialization for table-export.

mod escape;
mod options;
mod writer;

pub use escape::escape_field;
pub use options::{CsvWriteOptions, LineTerminator};
pub use writer::{CsvWriter, BYTE_ORDER_MARK};
