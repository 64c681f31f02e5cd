//! Host environment primitives used to save files

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::binary::BinaryObject;

/// The ways a host can be asked to save a file, in order of preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DownloadMechanism {
    /// Legacy "save blob" primitive taking a binary object and a file name
    NativeSave,
    /// Object URL for a binary object, targeted by a clicked anchor
    ObjectUrl,
    /// `data:` URI targeted by a clicked anchor
    DataUri,
}

impl DownloadMechanism {
    /// Name used on the command line and in logs
    pub fn as_str(self) -> &'static str {
        match self {
            DownloadMechanism::NativeSave => "native",
            DownloadMechanism::ObjectUrl => "object-url",
            DownloadMechanism::DataUri => "data-uri",
        }
    }
}

impl fmt::Display for DownloadMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DownloadMechanism {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" => Ok(DownloadMechanism::NativeSave),
            "object-url" => Ok(DownloadMechanism::ObjectUrl),
            "data-uri" => Ok(DownloadMechanism::DataUri),
            other => Err(format!(
                "unknown download mechanism '{other}' (expected native, object-url or data-uri)"
            )),
        }
    }
}

/// Which optional primitives a host provides.
///
/// `data:` URI anchors are always available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostCapabilities {
    pub native_save: bool,
    pub object_url: bool,
}

impl HostCapabilities {
    /// Capabilities under which `mechanism` is the one selected
    pub fn preferring(mechanism: DownloadMechanism) -> Self {
        match mechanism {
            DownloadMechanism::NativeSave => Self {
                native_save: true,
                object_url: true,
            },
            DownloadMechanism::ObjectUrl => Self {
                native_save: false,
                object_url: true,
            },
            DownloadMechanism::DataUri => Self::default(),
        }
    }
}

/// A synthetic anchor: clicking it saves `href` under the name `download`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub href: String,
    pub download: String,
    /// Visible text of the anchor
    pub label: String,
}

impl Anchor {
    /// Anchor targeting `href` that saves under `file_name`
    pub fn new<H: Into<String>>(href: H, file_name: &str) -> Self {
        Self {
            href: href.into(),
            download: file_name.to_string(),
            label: file_name.to_string(),
        }
    }
}

/// Primitives of the environment that performs the actual save.
///
/// Hosts report nothing back: a save the environment silently drops is not
/// observable here.
pub trait DownloadHost {
    /// Optional primitives this host provides
    fn capabilities(&self) -> HostCapabilities;

    /// Hand a binary object to the legacy save primitive
    fn save_blob(&self, blob: &BinaryObject, file_name: &str);

    /// Create a transient URL referencing `blob`
    fn create_object_url(&self, blob: &BinaryObject) -> Option<String>;

    /// Release a URL from [`DownloadHost::create_object_url`]
    fn revoke_object_url(&self, url: &str);

    /// Attach the anchor to the document, click it, then detach it
    fn click_anchor(&self, anchor: &Anchor);
}

impl<H: DownloadHost + ?Sized> DownloadHost for Rc<H> {
    fn capabilities(&self) -> HostCapabilities {
        (**self).capabilities()
    }

    fn save_blob(&self, blob: &BinaryObject, file_name: &str) {
        (**self).save_blob(blob, file_name)
    }

    fn create_object_url(&self, blob: &BinaryObject) -> Option<String> {
        (**self).create_object_url(blob)
    }

    fn revoke_object_url(&self, url: &str) {
        (**self).revoke_object_url(url)
    }

    fn click_anchor(&self, anchor: &Anchor) {
        (**self).click_anchor(anchor)
    }
}
