//! # table-export
//!
//! Export HTML tables to CSV and legacy Excel files delivered as client-side
//! downloads, without any server involvement.
//!
//! ## Features
//!
//! - CSV with a UTF-8 byte-order marker, configurable delimiter and line
//!   terminator, and quoting of fields that need it
//! - Excel-compatible HTML workbooks carrying the table's markup verbatim
//! - Base64 payloads delivered through the best mechanism the host offers:
//!   a native "save blob" primitive, an object URL, or a `data:` URI
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use table_export::prelude::*;
//!
//! let doc = Document::parse(
//!     r#"<table id="people"><tr><td>Ann</td><td>Paris, FR</td></tr></table>"#,
//! );
//!
//! let host = Rc::new(RecordingHost::new(HostCapabilities::default()));
//! let mut exporter = Exporter::new(Rc::clone(&host));
//!
//! exporter.to_csv("people", &doc, "people", None, None).unwrap();
//! exporter.to_excel("people", "", &doc, "people").unwrap();
//!
//! let files = host.files();
//! assert_eq!(files[0].file_name, "people.csv");
//! assert_eq!(files[0].bytes, "\u{FEFF}Ann,\"Paris, FR\"\r\n".as_bytes());
//! assert_eq!(files[1].file_name, "people.xls");
//! ```

pub mod exporter;
pub mod prelude;

pub use exporter::Exporter;

// Re-export core types
pub use table_export_core::{Cell, Document, ElementLookup, ElementRef, Error, Result, Row, Table};

// Re-export format types
pub use table_export_csv::{
    escape_field, CsvWriteOptions, CsvWriter, LineTerminator, BYTE_ORDER_MARK,
};
pub use table_export_xls::{XlsWriter, DEFAULT_WORKSHEET_NAME, EXCEL_TEMPLATE};

// Re-export download types
pub use table_export_download::{
    decode_base64, encode_base64, encode_base64_utf16, select_sink, to_binary, Anchor,
    BinaryObject, DataUriSink, DownloadHost, DownloadMechanism, DownloadRequest, DownloadSink,
    HostCapabilities, NativeSaveSink, ObjectUrlSink, RecordingHost, SavedFile, CSV_MIME_TYPE,
    DEFAULT_SLICE_SIZE, EXCEL_MIME_TYPE,
};

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
