use image::{ImageBuffer, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::core::Symbol;
use crate::error::BarcodeError;

/// Rasterize a symbol into an RGBA image, one pixel per layout unit.
pub fn render_png(symbol: &Symbol) -> Result<RgbaImage, BarcodeError> {
    let background = parse_color(&symbol.background_color)?;
    let bar_color = parse_color(&symbol.bar_color)?;

    let mut img = ImageBuffer::from_pixel(symbol.total_width, symbol.height, background);
    for bar in symbol.bars() {
        let x = i32::try_from(bar.x).map_err(|_| BarcodeError::EncodingFailed)?;
        draw_filled_rect_mut(
            &mut img,
            Rect::at(x, 0).of_size(bar.width, symbol.height),
            bar_color,
        );
    }
    Ok(img)
}

/// Parse `#RGB` or `#RRGGBB` into an opaque pixel.
pub fn parse_color(raw: &str) -> Result<Rgba<u8>, BarcodeError> {
    let invalid = || BarcodeError::InvalidColor(raw.to_string());
    let hex = raw.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    match hex.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, slot) in rgb.iter_mut().enumerate() {
                let v = channel(&hex[i..i + 1])?;
                *slot = v * 17;
            }
            Ok(rgba(rgb[0], rgb[1], rgb[2], 0xff))
        }
        6 => Ok(rgba(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            0xff,
        )),
        _ => Err(invalid()),
    }
}

fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba<u8> {
    Rgba([r, g, b, a])
}
