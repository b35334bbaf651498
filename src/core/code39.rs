use crate::config::ResolvedConfig;
use crate::core::segment::{Segment, SegmentBuilder};
use crate::core::symbology::LinearEncoding;
use crate::error::BarcodeError;

pub const MAX_CODE39_LENGTH: usize = 32;

/// Start/stop sentinel. Never accepted as user input.
pub const START_STOP: char = '*';

/// Nine elements per character, alternating bar/space starting with a bar.
/// `n` is one narrow module, `w` is one wide element.
#[rustfmt::skip]
static CODE39_TABLE: [(char, &str); 44] = [
    ('0', "nnnwwnwnn"), ('1', "wnnwnnnnw"), ('2', "nnwwnnnnw"), ('3', "wnwwnnnnn"),
    ('4', "nnnwwnnnw"), ('5', "wnnwwnnnn"), ('6', "nnwwwnnnn"), ('7', "nnnwnnwnw"),
    ('8', "wnnwnnwnn"), ('9', "nnwwnnwnn"), ('A', "wnnnnwnnw"), ('B', "nnwnnwnnw"),
    ('C', "wnwnnwnnn"), ('D', "nnnnwwnnw"), ('E', "wnnnwwnnn"), ('F', "nnwnwwnnn"),
    ('G', "nnnnnwwnw"), ('H', "wnnnnwwnn"), ('I', "nnwnnwwnn"), ('J', "nnnnwwwnn"),
    ('K', "wnnnnnnww"), ('L', "nnwnnnnww"), ('M', "wnwnnnnwn"), ('N', "nnnnwnnww"),
    ('O', "wnnnwnnwn"), ('P', "nnwnwnnwn"), ('Q', "nnnnnnwww"), ('R', "wnnnnnwwn"),
    ('S', "nnwnnnwwn"), ('T', "nnnnwnwwn"), ('U', "wwnnnnnnw"), ('V', "nwwnnnnnw"),
    ('W', "wwwnnnnnn"), ('X', "nwnnwnnnw"), ('Y', "wwnnwnnnn"), ('Z', "nwwnwnnnn"),
    ('-', "nwnnnnwnw"), ('.', "wwnnnnwnn"), (' ', "nwwnnnwnn"), ('$', "nwnwnwnnn"),
    ('/', "nwnwnnnwn"), ('+', "nwnnnwnwn"), ('%', "nnnwnwnwn"), ('*', "nwnnwnwnn"),
];

fn pattern(ch: char) -> Option<&'static str> {
    CODE39_TABLE
        .iter()
        .find(|(c, _)| *c == ch)
        .map(|(_, p)| *p)
}

/// Code 39: uppercase letters, digits and `-. $/+%`, framed by `*`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Code39;

impl LinearEncoding for Code39 {
    fn name(&self) -> &'static str {
        "Code 39"
    }

    fn max_len(&self) -> usize {
        MAX_CODE39_LENGTH
    }

    fn supported_characters(&self) -> Vec<char> {
        CODE39_TABLE
            .iter()
            .map(|(c, _)| *c)
            .filter(|c| *c != START_STOP)
            .collect()
    }

    fn is_supported(&self, ch: char) -> bool {
        ch != START_STOP && pattern(ch).is_some()
    }

    /// Code 39 has no lowercase; fold ASCII letters up.
    fn normalize(&self, value: &str) -> String {
        value.to_ascii_uppercase()
    }

    fn helper_text(&self) -> &'static str {
        "Supports 0-9, A-Z (lowercase is folded to uppercase), space and - . $ / + %"
    }

    fn layout(
        &self,
        normalized: &str,
        config: &ResolvedConfig,
    ) -> Result<(Vec<Segment>, u32), BarcodeError> {
        let narrow = config.module_width;
        let wide = config.wide_width();
        let mut builder = SegmentBuilder::new(config.quiet_zone);

        let framed = std::iter::once(START_STOP)
            .chain(normalized.chars())
            .chain(std::iter::once(START_STOP));
        for (idx, ch) in framed.enumerate() {
            if idx > 0 {
                // inter-character gap
                builder.space(narrow);
            }
            let elements = pattern(ch).ok_or_else(|| BarcodeError::unsupported(ch))?;
            for (pos, token) in elements.bytes().enumerate() {
                let width = if token == b'w' { wide } else { narrow };
                if pos % 2 == 0 {
                    builder.bar(width);
                } else {
                    builder.space(width);
                }
            }
        }
        Ok(builder.finish())
    }
}
