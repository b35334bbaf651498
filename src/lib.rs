//! Core library for Code 39 and Code 128 barcode encoding.
//!
//! Text goes through validation, segment layout and SVG rendering, and comes
//! out as a self-contained `data:` URI. The free functions below use the
//! default base64 codec; build a [`Barcoder`] to pick another one.

mod barcoder;
mod batch;
mod config;
pub mod core;
mod error;
mod image;
mod inline;

pub use barcoder::{Barcoder, EncodedImage};
pub use batch::{BatchCode, BatchOptions, BatchResult};
pub use config::{RenderConfig, ResolvedConfig};
pub use crate::core::code128::symbol_values as code128_values;
pub use crate::core::{LinearEncoding, Segment, SegmentKind, Symbol, Symbology, UnknownSymbology};
pub use error::BarcodeError;
pub use crate::image::{VectorImage, parse_color, render_png, render_svg};
pub use inline::{
    Base64Codec, BinaryToText, SVG_DATA_URI_PREFIX, UnavailableCodec, from_inline_image,
    to_inline_image,
};

/// Check `value` against a symbology, returning the normalized form.
pub fn validate_value(symbology: Symbology, value: &str) -> Result<String, BarcodeError> {
    crate::core::validate(symbology.encoding(), value)
}

/// Lay out `value` without rendering it.
pub fn encode(
    symbology: Symbology,
    value: &str,
    config: &RenderConfig,
) -> Result<Symbol, BarcodeError> {
    crate::core::encode(symbology, value, config)
}

/// Encode one value into an inline SVG image.
pub fn encode_to_image(
    symbology: Symbology,
    value: &str,
    config: &RenderConfig,
) -> Result<EncodedImage, BarcodeError> {
    Barcoder::default().encode_to_image(symbology, value, config)
}

/// Encode every non-blank line of `input`, collecting per-line errors.
pub fn encode_batch(
    symbology: Symbology,
    input: &str,
    config: &RenderConfig,
    options: BatchOptions,
) -> BatchResult {
    Barcoder::default().encode_batch(symbology, input, config, options)
}

pub fn supported_characters(symbology: Symbology) -> Vec<char> {
    symbology.supported_characters()
}

pub fn max_length(symbology: Symbology) -> usize {
    symbology.max_len()
}
