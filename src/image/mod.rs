//! Renderers turning laid-out symbols into SVG markup or PNG rasters.

mod paint;
mod svg;

pub use paint::{parse_color, render_png};
pub use svg::{VectorImage, render_svg};
