//! # table-export-download
//!
//! The encode/download pipeline of table-export: text is encoded to base64,
//! materialized into a binary object where the host supports one, and handed
//! to the host's save mechanism.
//!
//! Hosts implement [`DownloadHost`]; [`select_sink`] probes a host once and
//! returns the [`DownloadSink`] for the best mechanism it offers.
//!
//! ```rust
//! use table_export_download::{
//!     encode_base64, select_sink, DownloadMechanism, DownloadRequest, HostCapabilities,
//!     RecordingHost,
//! };
//! use std::rc::Rc;
//!
//! let host = Rc::new(RecordingHost::new(HostCapabilities::default()));
//! let sink = select_sink(Rc::clone(&host));
//! assert_eq!(sink.mechanism(), DownloadMechanism::DataUri);
//!
//! let request = DownloadRequest::new("hello.txt", encode_base64("hi"), "text/plain");
//! sink.deliver(&request).unwrap();
//! assert_eq!(host.files()[0].bytes, b"hi");
//! ```

mod binary;
mod encoding;
mod host;
mod recording;
mod request;
mod sink;

pub use binary::{to_binary, BinaryObject, DEFAULT_SLICE_SIZE};
pub use encoding::{decode_base64, decode_base64_bytes, encode_base64, encode_base64_utf16};
pub use host::{Anchor, DownloadHost, DownloadMechanism, HostCapabilities};
pub use recording::{RecordingHost, SavedFile};
pub use request::{DownloadRequest, CSV_MIME_TYPE, EXCEL_MIME_TYPE};
pub use sink::{select_sink, DataUriSink, DownloadSink, NativeSaveSink, ObjectUrlSink};
