//! # table-export-core
//!
//! Core data structures for the table-export library.
//!
//! This crate provides the types shared by every export format:
//! - [`Table`], [`Row`], [`Cell`] - A snapshot of a tabular source
//! - [`Document`] - Tables parsed from HTML, addressable by element id
//! - [`ElementRef`] and [`ElementLookup`] - Identifier-or-reference arguments
//! - [`Error`] - The error taxonomy (`NotFound`, `Encoding`)
//!
//! ## Example
//!
//! ```rust
//! use table_export_core::{Document, ElementRef};
//!
//! let doc = Document::parse(r#"<table id="people"><tr><td>Ann</td></tr></table>"#);
//! let table = ElementRef::Identifier("people").resolve(&doc).unwrap();
//! assert_eq!(table.rows()[0].cells()[0].text(), "Ann");
//! ```

pub mod document;
pub mod element;
pub mod error;
pub mod table;

// Re-exports for convenience
pub use document::Document;
pub use element::{ElementLookup, ElementRef};
pub use error::{Error, Result};
pub use table::{Cell, Row, Table};
