//! Base64 encoding of export payloads
//!
//! Payloads are encoded over the UTF-8 bytes of the text, so every Unicode
//! scalar value survives the trip through base64 and back.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use table_export_core::{Error, Result};

/// Encode text as standard, padded base64 over its UTF-8 bytes
pub fn encode_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Encode UTF-16 text as base64 over its UTF-8 bytes.
///
/// Surrogate pairs are combined into one character. An unpaired surrogate
/// cannot be represented in UTF-8 and fails with [`Error::Encoding`].
pub fn encode_base64_utf16(units: &[u16]) -> Result<String> {
    let text = char::decode_utf16(units.iter().copied())
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| {
            Error::encoding(format!(
                "unpaired surrogate {:#06x} cannot be encoded",
                e.unpaired_surrogate()
            ))
        })?;
    Ok(encode_base64(&text))
}

/// Decode base64 into raw bytes
pub fn decode_base64_bytes(b64: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(b64)
        .map_err(|e| Error::encoding(format!("invalid base64 payload: {e}")))
}

/// Decode base64 back into UTF-8 text
pub fn decode_base64(b64: &str) -> Result<String> {
    let bytes = decode_base64_bytes(b64)?;
    String::from_utf8(bytes).map_err(|e| Error::encoding(format!("payload is not UTF-8: {e}")))
}
