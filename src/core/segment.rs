use serde::Serialize;

use crate::core::symbology::Symbology;

/// Whether a segment is printed or left as background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Bar,
    Space,
}

/// One bar or space of a finished symbol, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub kind: SegmentKind,
    pub x: u32,
    pub width: u32,
}

impl Segment {
    pub fn is_bar(&self) -> bool {
        self.kind == SegmentKind::Bar
    }

    pub fn end(&self) -> u32 {
        self.x + self.width
    }
}

/// A fully laid out symbol: segments between two quiet zones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    pub symbology: Symbology,
    pub segments: Vec<Segment>,
    pub total_width: u32,
    pub height: u32,
    /// The exact string that was encoded, after case folding.
    pub normalized_value: String,
    pub background_color: String,
    pub bar_color: String,
}

impl Symbol {
    pub fn bars(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|s| s.is_bar())
    }
}

/// Appends segments left to right so that every segment starts where the
/// previous one ended.
#[derive(Debug)]
pub struct SegmentBuilder {
    cursor: u32,
    quiet_zone: u32,
    segments: Vec<Segment>,
}

impl SegmentBuilder {
    /// Start after a leading quiet zone of `quiet_zone` pixels.
    pub fn new(quiet_zone: u32) -> Self {
        Self {
            cursor: quiet_zone,
            quiet_zone,
            segments: Vec::new(),
        }
    }

    pub fn push(&mut self, kind: SegmentKind, width: u32) {
        self.segments.push(Segment {
            kind,
            x: self.cursor,
            width,
        });
        self.cursor += width;
    }

    pub fn bar(&mut self, width: u32) {
        self.push(SegmentKind::Bar, width);
    }

    pub fn space(&mut self, width: u32) {
        self.push(SegmentKind::Space, width);
    }

    /// Close the trailing quiet zone and return `(segments, total_width)`.
    pub fn finish(self) -> (Vec<Segment>, u32) {
        let total = self.cursor + self.quiet_zone;
        (self.segments, total)
    }
}
