use log::debug;
use serde::Serialize;

use crate::config::RenderConfig;
use crate::core::{self as symbols, Symbology};
use crate::error::BarcodeError;
use crate::image::render_svg;
use crate::inline::{Base64Codec, BinaryToText, to_inline_image};

/// One encoded value, ready to drop into an `<img src>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodedImage {
    /// `data:image/svg+xml;base64,...`
    pub image: String,
    /// The SVG document behind `image`.
    #[serde(skip)]
    pub svg: String,
    pub width: u32,
    pub height: u32,
    /// Normalized value that was encoded.
    pub value: String,
}

/// Encoder front end bound to one binary-to-text codec.
///
/// The codec is picked once at construction; every call after that is a
/// pure function of its arguments.
pub struct Barcoder {
    codec: Box<dyn BinaryToText>,
}

impl Default for Barcoder {
    fn default() -> Self {
        Self::new(Base64Codec)
    }
}

impl std::fmt::Debug for Barcoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Barcoder")
            .field("codec", &self.codec.name())
            .finish()
    }
}

impl Barcoder {
    pub fn new<C: BinaryToText + 'static>(codec: C) -> Self {
        Self {
            codec: Box::new(codec),
        }
    }

    pub fn codec(&self) -> &dyn BinaryToText {
        self.codec.as_ref()
    }

    /// Validate without encoding. Returns the normalized value on success.
    pub fn validate_value(&self, symbology: Symbology, value: &str) -> Result<String, BarcodeError> {
        symbols::validate(symbology.encoding(), value)
    }

    /// Validate, lay out, render and wrap `value` as an inline SVG image.
    pub fn encode_to_image(
        &self,
        symbology: Symbology,
        value: &str,
        config: &RenderConfig,
    ) -> Result<EncodedImage, BarcodeError> {
        let symbol = symbols::encode(symbology, value, config)?;
        let rendered = render_svg(&symbol);
        let image = to_inline_image(&rendered.markup, self.codec())?;
        debug!(
            "inline {} image for {:?}: {} bytes",
            symbology,
            symbol.normalized_value,
            image.len()
        );
        Ok(EncodedImage {
            image,
            svg: rendered.markup,
            width: rendered.width,
            height: rendered.height,
            value: symbol.normalized_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::{UnavailableCodec, from_inline_image};
    use pretty_assertions::assert_eq;

    #[test]
    fn image_payload_is_the_svg() {
        let barcoder = Barcoder::default();
        let out = barcoder
            .encode_to_image(Symbology::Code39, "abc", &RenderConfig::default())
            .unwrap();
        assert_eq!(out.value, "ABC");
        assert_eq!(from_inline_image(&out.image, &Base64Codec).unwrap(), out.svg);
    }

    #[test]
    fn validation_runs_before_codec() {
        let barcoder = Barcoder::new(UnavailableCodec);
        let cfg = RenderConfig::default();
        assert_eq!(
            barcoder.encode_to_image(Symbology::Code128, "", &cfg),
            Err(BarcodeError::EmptyInput)
        );
        assert_eq!(
            barcoder.encode_to_image(Symbology::Code128, "ok", &cfg),
            Err(BarcodeError::EncodingFailed)
        );
    }

    #[test]
    fn debug_names_the_codec() {
        assert_eq!(
            format!("{:?}", Barcoder::default()),
            r#"Barcoder { codec: "base64" }"#
        );
    }
}
