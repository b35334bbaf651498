use crate::core::symbology::LinearEncoding;
use crate::error::BarcodeError;

/// Check `value` against a symbology and return the normalized string.
///
/// Rules apply in order and the first failure wins: blank input, then
/// length after normalization, then the first unsupported character.
pub fn validate<E: LinearEncoding + ?Sized>(enc: &E, value: &str) -> Result<String, BarcodeError> {
    if value.trim().is_empty() {
        return Err(BarcodeError::EmptyInput);
    }
    let normalized = enc.normalize(value);
    let len = normalized.chars().count();
    if len > enc.max_len() {
        return Err(BarcodeError::TooLong {
            max: enc.max_len(),
            actual: len,
        });
    }
    if let Some(bad) = normalized.chars().find(|ch| !enc.is_supported(*ch)) {
        return Err(BarcodeError::unsupported(bad));
    }
    Ok(normalized)
}
