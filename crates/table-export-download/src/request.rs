//! Download requests

/// MIME type of CSV exports
pub const CSV_MIME_TYPE: &str = "application/csv";

/// MIME type of legacy Excel exports
pub const EXCEL_MIME_TYPE: &str = "application/vnd.ms-excel";

/// One file to hand to the host: name, base64 payload and MIME type.
///
/// Built per export call and consumed by a [`DownloadSink`](crate::DownloadSink).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub file_name: String,
    pub payload_base64: String,
    pub mime_type: String,
}

impl DownloadRequest {
    /// Create a request for one file
    pub fn new<N, P, M>(file_name: N, payload_base64: P, mime_type: M) -> Self
    where
        N: Into<String>,
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            file_name: file_name.into(),
            payload_base64: payload_base64.into(),
            mime_type: mime_type.into(),
        }
    }

    /// `data:` URI embedding the MIME type and the base64 payload
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.payload_base64)
    }
}
