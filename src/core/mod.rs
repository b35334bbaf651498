//! Core domain primitives: symbol tables, validation and segment layout.

pub mod code128;
pub mod code39;
pub mod encode;
pub mod segment;
pub mod symbology;
pub mod validate;

pub use code39::Code39;
pub use code128::Code128;
pub use encode::encode;
pub use segment::{Segment, SegmentBuilder, SegmentKind, Symbol};
pub use symbology::{LinearEncoding, Symbology, UnknownSymbology};
pub use validate::validate;
