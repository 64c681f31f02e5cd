//! In-memory host that records what it is asked to save

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::binary::BinaryObject;
use crate::encoding::decode_base64_bytes;
use crate::host::{Anchor, DownloadHost, DownloadMechanism, HostCapabilities};

const OBJECT_URL_PREFIX: &str = "blob:recording/";

/// A file a [`RecordingHost`] saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
    pub mechanism: DownloadMechanism,
}

/// A [`DownloadHost`] that keeps saved files in memory.
///
/// It issues its own object URLs and resolves clicked anchors (object URLs
/// and `data:` URIs) back to bytes, so every download branch ends up as a
/// [`SavedFile`].
#[derive(Debug, Default)]
pub struct RecordingHost {
    capabilities: HostCapabilities,
    files: RefCell<Vec<SavedFile>>,
    object_urls: RefCell<HashMap<String, BinaryObject>>,
    next_url: Cell<usize>,
}

impl RecordingHost {
    /// Create a host advertising `capabilities`
    pub fn new(capabilities: HostCapabilities) -> Self {
        Self {
            capabilities,
            ..Self::default()
        }
    }

    /// Files saved so far
    pub fn files(&self) -> Vec<SavedFile> {
        self.files.borrow().clone()
    }

    /// Remove and return the files saved so far
    pub fn take_files(&self) -> Vec<SavedFile> {
        self.files.take()
    }

    /// Object URLs issued and not yet revoked
    pub fn outstanding_object_urls(&self) -> usize {
        self.object_urls.borrow().len()
    }

    fn record(
        &self,
        file_name: &str,
        mime_type: &str,
        bytes: Vec<u8>,
        mechanism: DownloadMechanism,
    ) {
        self.files.borrow_mut().push(SavedFile {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            bytes,
            mechanism,
        });
    }

    fn resolve_data_uri(&self, anchor: &Anchor, uri: &str) {
        let Some((mime_type, payload)) = uri.split_once(";base64,") else {
            log::warn!("unsupported data URI for '{}'", anchor.download);
            return;
        };
        match decode_base64_bytes(payload) {
            Ok(bytes) => {
                self.record(&anchor.download, mime_type, bytes, DownloadMechanism::DataUri)
            }
            Err(e) => log::warn!("dropping '{}': {}", anchor.download, e),
        }
    }
}

impl DownloadHost for RecordingHost {
    fn capabilities(&self) -> HostCapabilities {
        self.capabilities
    }

    fn save_blob(&self, blob: &BinaryObject, file_name: &str) {
        self.record(
            file_name,
            blob.mime_type(),
            blob.to_bytes(),
            DownloadMechanism::NativeSave,
        );
    }

    fn create_object_url(&self, blob: &BinaryObject) -> Option<String> {
        let id = self.next_url.get();
        self.next_url.set(id + 1);
        let url = format!("{OBJECT_URL_PREFIX}{id}");
        self.object_urls.borrow_mut().insert(url.clone(), blob.clone());
        Some(url)
    }

    fn revoke_object_url(&self, url: &str) {
        self.object_urls.borrow_mut().remove(url);
    }

    fn click_anchor(&self, anchor: &Anchor) {
        if let Some(uri) = anchor.href.strip_prefix("data:") {
            self.resolve_data_uri(anchor, uri);
            return;
        }

        let blob = self.object_urls.borrow().get(&anchor.href).cloned();
        match blob {
            Some(blob) => self.record(
                &anchor.download,
                blob.mime_type(),
                blob.to_bytes(),
                DownloadMechanism::ObjectUrl,
            ),
            None => log::warn!(
                "anchor for '{}' targets unknown URL {}",
                anchor.download,
                anchor.href
            ),
        }
    }
}
