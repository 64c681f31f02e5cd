//! CSV writer

use std::io::Write;

use crate::escape::escape_field;
use crate::options::CsvWriteOptions;
use table_export_core::{Result, Table};

/// Byte-order marker prepended to CSV documents so spreadsheet applications
/// read them as UTF-8
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// CSV serializer for table snapshots
pub struct CsvWriter;

impl CsvWriter {
    /// Serialize a table to CSV text.
    ///
    /// Every row, including the last, is followed by the line terminator. A
    /// table with no rows produces an empty string.
    pub fn to_string(table: &Table, options: &CsvWriteOptions) -> String {
        let mut data = String::new();

        for row in table.rows() {
            for (i, cell) in row.cells().iter().enumerate() {
                if i > 0 {
                    data.push_str(&options.delimiter);
                }
                data.push_str(&escape_field(cell.text(), &options.delimiter));
            }
            data.push_str(&options.line_terminator);
        }

        data
    }

    /// Serialize a table to a complete CSV document: the byte-order marker
    /// followed by the CSV text
    pub fn to_document(table: &Table, options: &CsvWriteOptions) -> String {
        let body = Self::to_string(table, options);
        let mut document = String::with_capacity(body.len() + BYTE_ORDER_MARK.len_utf8());
        document.push(BYTE_ORDER_MARK);
        document.push_str(&body);
        document
    }

    /// Write a table as a CSV document (with byte-order marker) to a writer
    pub fn write<W: Write>(table: &Table, mut writer: W, options: &CsvWriteOptions) -> Result<()> {
        writer.write_all(Self::to_document(table, options).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
