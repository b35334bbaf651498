use std::fmt::Write;

use crate::core::Symbol;

/// A rendered SVG document and its pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorImage {
    pub markup: String,
    pub width: u32,
    pub height: u32,
}

/// Render a symbol as a standalone SVG: one background rect, then one rect
/// per bar. Spaces are left as background.
pub fn render_svg(symbol: &Symbol) -> VectorImage {
    let width = symbol.total_width;
    let height = symbol.height;
    let background = escape_attr(&symbol.background_color);
    let bar_color = escape_attr(&symbol.bar_color);

    let mut markup = String::with_capacity(256 + symbol.segments.len() * 64);
    write!(
        &mut markup,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )
    .ok();
    write!(
        &mut markup,
        r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{background}" />"#
    )
    .ok();
    for bar in symbol.bars() {
        write!(
            &mut markup,
            r#"<rect x="{}" y="0" width="{}" height="{height}" fill="{bar_color}" />"#,
            bar.x, bar.width
        )
        .ok();
    }
    markup.push_str("</svg>");

    VectorImage {
        markup,
        width,
        height,
    }
}

fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
