use log::debug;

use crate::config::RenderConfig;
use crate::core::segment::Symbol;
use crate::core::symbology::Symbology;
use crate::core::validate::validate;
use crate::error::BarcodeError;

/// Validate, normalize and lay out `value` as a complete symbol.
pub fn encode(
    symbology: Symbology,
    value: &str,
    config: &RenderConfig,
) -> Result<Symbol, BarcodeError> {
    let enc = symbology.encoding();
    let normalized = validate(enc, value)?;
    let resolved = config.resolve();
    let (segments, total_width) = enc.layout(&normalized, &resolved)?;
    debug!(
        "encoded {:?} as {} ({} segments, {}px wide)",
        normalized,
        enc.name(),
        segments.len(),
        total_width
    );
    Ok(Symbol {
        symbology,
        segments,
        total_width,
        height: resolved.height,
        normalized_value: normalized,
        background_color: resolved.background_color,
        bar_color: resolved.bar_color,
    })
}
