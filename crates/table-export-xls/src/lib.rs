//! # table-export-xls
//!
//! Legacy Excel export for table-export: an HTML document with Excel XML
//! metadata, which spreadsheet applications open as a single-sheet workbook.

mod template;
mod writer;

pub use template::{render, EXCEL_TEMPLATE};
pub use writer::{XlsWriter, DEFAULT_WORKSHEET_NAME};
