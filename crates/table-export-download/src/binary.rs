//! Binary objects materialized from base64 payloads

use table_export_core::Result;

use crate::encoding::decode_base64_bytes;

/// Default chunk size, in bytes, for [`to_binary`]
pub const DEFAULT_SLICE_SIZE: usize = 512;

/// A MIME-tagged byte buffer assembled from consecutive parts.
///
/// Mirrors a browser `Blob`: the parts are kept as given and their
/// concatenation is the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryObject {
    mime_type: String,
    parts: Vec<Vec<u8>>,
}

impl BinaryObject {
    /// Create a binary object from parts
    pub fn new<S: Into<String>>(mime_type: S, parts: Vec<Vec<u8>>) -> Self {
        Self {
            mime_type: mime_type.into(),
            parts,
        }
    }

    /// MIME type of the content
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Parts in order
    pub fn parts(&self) -> &[Vec<u8>] {
        &self.parts
    }

    /// Total content length in bytes
    pub fn len(&self) -> usize {
        self.parts.iter().map(Vec::len).sum()
    }

    /// Whether the content is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The content as one contiguous buffer
    pub fn to_bytes(&self) -> Vec<u8> {
        self.parts.concat()
    }
}

/// Decode a base64 payload into a binary object tagged with `mime_type`.
///
/// The decoded bytes are split into consecutive parts of at most
/// `slice_size` bytes (0 means [`DEFAULT_SLICE_SIZE`]). Part boundaries never
/// change the content.
pub fn to_binary(base64: &str, mime_type: &str, slice_size: usize) -> Result<BinaryObject> {
    let slice_size = if slice_size == 0 {
        DEFAULT_SLICE_SIZE
    } else {
        slice_size
    };

    let bytes = decode_base64_bytes(base64)?;
    let parts = bytes.chunks(slice_size).map(<[u8]>::to_vec).collect();
    Ok(BinaryObject::new(mime_type, parts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::encode_base64;
    use proptest::prelude::*;

    #[test]
    fn test_parts_respect_slice_size() {
        let b64 = encode_base64("abcdefg");
        let blob = to_binary(&b64, "text/plain", 3).unwrap();
        assert_eq!(blob.parts(), &[b"abc".to_vec(), b"def".to_vec(), b"g".to_vec()]);
        assert_eq!(blob.len(), 7);
        assert_eq!(blob.mime_type(), "text/plain");
    }

    #[test]
    fn test_zero_slice_size_uses_default() {
        let text = "x".repeat(DEFAULT_SLICE_SIZE + 1);
        let blob = to_binary(&encode_base64(&text), "text/plain", 0).unwrap();
        assert_eq!(blob.parts().len(), 2);
        assert_eq!(blob.parts()[0].len(), DEFAULT_SLICE_SIZE);
    }

    #[test]
    fn test_empty_payload() {
        let blob = to_binary("", "application/csv", DEFAULT_SLICE_SIZE).unwrap();
        assert!(blob.is_empty());
        assert!(blob.parts().is_empty());
    }

    #[test]
    fn test_invalid_payload() {
        assert!(to_binary("%%%", "text/plain", 4).is_err());
    }

    proptest! {
        #[test]
        fn prop_slice_size_does_not_change_bytes(s in any::<String>()) {
            let b64 = encode_base64(&s);
            let payload_len = s.len().max(1);
            for size in [1, DEFAULT_SLICE_SIZE, payload_len] {
                let blob = to_binary(&b64, "application/octet-stream", size).unwrap();
                prop_assert_eq!(blob.to_bytes(), s.as_bytes().to_vec());
                prop_assert!(blob.parts().iter().all(|p| !p.is_empty() && p.len() <= size));
            }
        }
    }
}
