//! Download strategies and the capability probe that picks one

use table_export_core::Result;

use crate::binary::{to_binary, DEFAULT_SLICE_SIZE};
use crate::host::{Anchor, DownloadHost, DownloadMechanism};
use crate::request::DownloadRequest;

/// Delivers a [`DownloadRequest`] to the host.
///
/// Every implementation saves the same bytes for the same request.
pub trait DownloadSink {
    /// The mechanism this sink uses
    fn mechanism(&self) -> DownloadMechanism;

    /// Hand the request to the host.
    ///
    /// Fails only when the payload cannot be decoded; failures of the host's
    /// own save are not observable.
    fn deliver(&self, request: &DownloadRequest) -> Result<()>;
}

/// Saves through the host's legacy "save blob" primitive
#[derive(Debug, Clone)]
pub struct NativeSaveSink<H> {
    host: H,
    slice_size: usize,
}

impl<H: DownloadHost> NativeSaveSink<H> {
    /// Create a sink with the default slice size
    pub fn new(host: H) -> Self {
        Self {
            host,
            slice_size: DEFAULT_SLICE_SIZE,
        }
    }

    /// Set the chunk size used when materializing the payload
    pub fn with_slice_size(mut self, slice_size: usize) -> Self {
        self.slice_size = slice_size;
        self
    }
}

impl<H: DownloadHost> DownloadSink for NativeSaveSink<H> {
    fn mechanism(&self) -> DownloadMechanism {
        DownloadMechanism::NativeSave
    }

    fn deliver(&self, request: &DownloadRequest) -> Result<()> {
        let blob = to_binary(&request.payload_base64, &request.mime_type, self.slice_size)?;
        log::debug!("saving '{}' ({} bytes) via save blob", request.file_name, blob.len());
        self.host.save_blob(&blob, &request.file_name);
        Ok(())
    }
}

/// Saves by clicking an anchor that targets an object URL for the payload
#[derive(Debug, Clone)]
pub struct ObjectUrlSink<H> {
    host: H,
    slice_size: usize,
}

impl<H: DownloadHost> ObjectUrlSink<H> {
    /// Create a sink with the default slice size
    pub fn new(host: H) -> Self {
        Self {
            host,
            slice_size: DEFAULT_SLICE_SIZE,
        }
    }

    /// Set the chunk size used when materializing the payload
    pub fn with_slice_size(mut self, slice_size: usize) -> Self {
        self.slice_size = slice_size;
        self
    }
}

impl<H: DownloadHost> DownloadSink for ObjectUrlSink<H> {
    fn mechanism(&self) -> DownloadMechanism {
        DownloadMechanism::ObjectUrl
    }

    fn deliver(&self, request: &DownloadRequest) -> Result<()> {
        let blob = to_binary(&request.payload_base64, &request.mime_type, self.slice_size)?;
        let Some(url) = self.host.create_object_url(&blob) else {
            log::warn!("host refused an object URL for '{}'", request.file_name);
            return Ok(());
        };

        log::debug!("saving '{}' ({} bytes) via {}", request.file_name, blob.len(), url);
        self.host.click_anchor(&Anchor::new(url.as_str(), &request.file_name));
        self.host.revoke_object_url(&url);
        Ok(())
    }
}

/// Saves by clicking an anchor whose target is a `data:` URI
#[derive(Debug, Clone)]
pub struct DataUriSink<H> {
    host: H,
}

impl<H: DownloadHost> DataUriSink<H> {
    /// Create a sink for a host
    pub fn new(host: H) -> Self {
        Self { host }
    }
}

impl<H: DownloadHost> DownloadSink for DataUriSink<H> {
    fn mechanism(&self) -> DownloadMechanism {
        DownloadMechanism::DataUri
    }

    fn deliver(&self, request: &DownloadRequest) -> Result<()> {
        log::debug!("saving '{}' via data URI", request.file_name);
        self.host
            .click_anchor(&Anchor::new(request.data_uri(), &request.file_name));
        Ok(())
    }
}

/// Pick the first sink the host supports: native save, then object URL,
/// then `data:` URI
pub fn select_sink<H>(host: H) -> Box<dyn DownloadSink>
where
    H: DownloadHost + 'static,
{
    let caps = host.capabilities();
    let sink: Box<dyn DownloadSink> = if caps.native_save {
        Box::new(NativeSaveSink::new(host))
    } else if caps.object_url {
        Box::new(ObjectUrlSink::new(host))
    } else {
        Box::new(DataUriSink::new(host))
    };
    log::debug!("selected {} download sink", sink.mechanism());
    sink
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::encode_base64;
    use crate::host::HostCapabilities;
    use crate::recording::RecordingHost;
    use std::rc::Rc;

    #[test]
    fn test_probe_priority() {
        let cases = [
            (true, true, DownloadMechanism::NativeSave),
            (true, false, DownloadMechanism::NativeSave),
            (false, true, DownloadMechanism::ObjectUrl),
            (false, false, DownloadMechanism::DataUri),
        ];
        for (native_save, object_url, expected) in cases {
            let host = RecordingHost::new(HostCapabilities {
                native_save,
                object_url,
            });
            assert_eq!(select_sink(host).mechanism(), expected);
        }
    }

    #[test]
    fn test_object_url_is_revoked() {
        let host = Rc::new(RecordingHost::new(HostCapabilities::preferring(
            DownloadMechanism::ObjectUrl,
        )));
        let sink = ObjectUrlSink::new(Rc::clone(&host));
        let req = DownloadRequest::new("a.txt", encode_base64("abc"), "text/plain");

        sink.deliver(&req).unwrap();

        assert_eq!(host.outstanding_object_urls(), 0);
        assert_eq!(host.files()[0].bytes, b"abc");
    }

    #[test]
    fn test_invalid_payload_is_reported_without_saving() {
        let host = Rc::new(RecordingHost::new(HostCapabilities::preferring(
            DownloadMechanism::NativeSave,
        )));
        let sink = NativeSaveSink::new(Rc::clone(&host));
        let req = DownloadRequest::new("a.txt", "***", "text/plain");

        assert!(sink.deliver(&req).is_err());
        assert!(host.files().is_empty());
    }
}
