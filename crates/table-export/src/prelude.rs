//! Prelude module - common imports for table-export users
//!
//! ```rust
//! use table_export::prelude::*;
//! ```

pub use crate::{
    // Core types
    Document,
    ElementRef,
    Error,
    // Main types
    Exporter,
    Result,
    Table,

    // Formats
    CsvWriteOptions,
    LineTerminator,

    // Download types
    DownloadHost,
    DownloadMechanism,
    DownloadSink,
    HostCapabilities,
    RecordingHost,
};
