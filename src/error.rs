use thiserror::Error;

/// Everything that can go wrong between a raw string and a finished image.
///
/// Validation failures are ordinary values: interactive callers show the
/// `Display` text next to the offending input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarcodeError {
    #[error("content must not be empty.")]
    EmptyInput,
    #[error("length must be under {max} characters.")]
    TooLong { max: usize, actual: usize },
    #[error("unsupported character: '{0}' (U+{1:04X})")]
    UnsupportedCharacter(char, u32),
    #[error("encoding failed")]
    EncodingFailed,
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

impl BarcodeError {
    pub(crate) fn unsupported(ch: char) -> Self {
        BarcodeError::UnsupportedCharacter(ch, ch as u32)
    }
}
