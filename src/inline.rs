//! Inline data-URI encoding for rendered SVG markup.
//!
//! The binary-to-text primitive is a capability chosen once by the caller
//! (usually [`Base64Codec`]) instead of being probed on every call.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::BarcodeError;

pub const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

/// A reversible bytes-to-text transform.
pub trait BinaryToText: Send + Sync {
    fn name(&self) -> &'static str;
    /// `None` when the transform is not available.
    fn encode(&self, bytes: &[u8]) -> Option<String>;
    fn decode(&self, text: &str) -> Option<Vec<u8>>;
}

/// Standard alphabet, padded base64.
#[derive(Debug, Default, Clone, Copy)]
pub struct Base64Codec;

impl BinaryToText for Base64Codec {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn encode(&self, bytes: &[u8]) -> Option<String> {
        Some(STANDARD.encode(bytes))
    }

    fn decode(&self, text: &str) -> Option<Vec<u8>> {
        STANDARD.decode(text).ok()
    }
}

/// Stand-in for environments without any binary-to-text primitive.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableCodec;

impl BinaryToText for UnavailableCodec {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn encode(&self, _bytes: &[u8]) -> Option<String> {
        None
    }

    fn decode(&self, _text: &str) -> Option<Vec<u8>> {
        None
    }
}

/// Wrap SVG markup into a `data:` URI. The markup is encoded from its UTF-8
/// bytes, so any Unicode content survives the trip.
pub fn to_inline_image<C: BinaryToText + ?Sized>(
    markup: &str,
    codec: &C,
) -> Result<String, BarcodeError> {
    let payload = codec
        .encode(markup.as_bytes())
        .ok_or(BarcodeError::EncodingFailed)?;
    Ok(format!("{SVG_DATA_URI_PREFIX}{payload}"))
}

/// Inverse of [`to_inline_image`].
pub fn from_inline_image<C: BinaryToText + ?Sized>(
    uri: &str,
    codec: &C,
) -> Result<String, BarcodeError> {
    let payload = uri
        .strip_prefix(SVG_DATA_URI_PREFIX)
        .ok_or(BarcodeError::EncodingFailed)?;
    let bytes = codec.decode(payload).ok_or(BarcodeError::EncodingFailed)?;
    String::from_utf8(bytes).map_err(|_| BarcodeError::EncodingFailed)
}
