use crate::config::ResolvedConfig;
use crate::core::segment::{Segment, SegmentBuilder};
use crate::core::symbology::LinearEncoding;
use crate::error::BarcodeError;

pub const MAX_CODE128_LENGTH: usize = 80;

pub const START_B: u8 = 104;
pub const STOP: u8 = 106;
const CHECKSUM_MODULUS: u32 = 103;

/// Module patterns for symbol values 0..=106, `1` = bar module, `0` = space.
///
/// Values 0..=105 are eleven modules wide. The stop value carries the
/// two-module termination bar and is thirteen wide.
#[rustfmt::skip]
pub static CODE128_PATTERNS: [&str; 107] = [
    "11011001100", "11001101100", "11001100110", "10010011000", // 0
    "10010001100", "10001001100", "10011001000", "10011000100", // 4
    "10001100100", "11001001000", "11001000100", "11000100100", // 8
    "10110011100", "10011011100", "10011001110", "10111001100", // 12
    "10011101100", "10011100110", "11001110010", "11001011100", // 16
    "11001001110", "11011100100", "11001110100", "11101101110", // 20
    "11101001100", "11100101100", "11100100110", "11101100100", // 24
    "11100110100", "11100110010", "11011011000", "11011000110", // 28
    "11000110110", "10100011000", "10001011000", "10001000110", // 32
    "10110001000", "10001101000", "10001100010", "11010001000", // 36
    "11000101000", "11000100010", "10110111000", "10110001110", // 40
    "10001101110", "10111011000", "10111000110", "10001110110", // 44
    "11101110110", "11010001110", "11000101110", "11011101000", // 48
    "11011100010", "11011101110", "11101011000", "11101000110", // 52
    "11100010110", "11101101000", "11101100010", "11100011010", // 56
    "11101111010", "11001000010", "11110001010", "10100110000", // 60
    "10100001100", "10010110000", "10010000110", "10000101100", // 64
    "10000100110", "10110010000", "10110000100", "10011010000", // 68
    "10011000010", "10000110100", "10000110010", "11000010010", // 72
    "11001010000", "11110111010", "11000010100", "10001111010", // 76
    "10100111100", "10010111100", "10010011110", "10111100100", // 80
    "10011110100", "10011110010", "11110100100", "11110010100", // 84
    "11110010010", "11011011110", "11011110110", "11110110110", // 88
    "10101111000", "10100011110", "10001011110", "10111101000", // 92
    "10111100010", "11110101000", "11110100010", "10111011110", // 96
    "10111101110", "11101011110", "11110101110", "11010000100", // 100
    "11010010000", "11010011100", "1100011101011",              // 104
];

/// Subset B value of a printable ASCII character (space through tilde).
pub fn char_value(ch: char) -> Option<u8> {
    match ch {
        ' '..='~' => Some(ch as u8 - b' '),
        _ => None,
    }
}

/// Weighted modulo-103 checksum over the data values, seeded with Start B.
pub fn checksum(values: &[u8]) -> u8 {
    let sum = values
        .iter()
        .enumerate()
        .fold(START_B as u32, |acc, (idx, v)| acc + *v as u32 * (idx as u32 + 1));
    (sum % CHECKSUM_MODULUS) as u8
}

/// Full value sequence: start, data, checksum, stop.
pub fn symbol_values(value: &str) -> Result<Vec<u8>, BarcodeError> {
    let data = value
        .chars()
        .map(|ch| char_value(ch).ok_or_else(|| BarcodeError::unsupported(ch)))
        .collect::<Result<Vec<_>, _>>()?;
    let mut values = Vec::with_capacity(data.len() + 3);
    values.push(START_B);
    values.extend_from_slice(&data);
    values.push(checksum(&data));
    values.push(STOP);
    Ok(values)
}

/// Code 128 restricted to subset B: all printable ASCII.
#[derive(Debug, Default, Clone, Copy)]
pub struct Code128;

impl LinearEncoding for Code128 {
    fn name(&self) -> &'static str {
        "Code 128"
    }

    fn max_len(&self) -> usize {
        MAX_CODE128_LENGTH
    }

    fn supported_characters(&self) -> Vec<char> {
        (' '..='~').collect()
    }

    fn is_supported(&self, ch: char) -> bool {
        char_value(ch).is_some()
    }

    fn helper_text(&self) -> &'static str {
        "Supports all printable ASCII characters (0-9, A-Z, a-z, space and symbols)"
    }

    fn layout(
        &self,
        normalized: &str,
        config: &ResolvedConfig,
    ) -> Result<(Vec<Segment>, u32), BarcodeError> {
        let mut builder = SegmentBuilder::new(config.quiet_zone);
        for value in symbol_values(normalized)? {
            let pattern = CODE128_PATTERNS[value as usize];
            for module in pattern.bytes() {
                if module == b'1' {
                    builder.bar(config.module_width);
                } else {
                    builder.space(config.module_width);
                }
            }
        }
        Ok(builder.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderConfig;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn checksum_for_single_letter() {
        assert_eq!(symbol_values("A").unwrap(), vec![104, 33, 34, 106]);
    }

    #[test]
    fn checksum_weights_by_position() {
        // 104 + 1*1 + 2*2 + 3*3 = 118 -> 15
        assert_eq!(checksum(&[1, 2, 3]), 15);
        assert_eq!(checksum(&[]), 1);
    }

    #[test]
    fn subset_b_covers_printable_ascii_only() {
        assert_eq!(char_value(' '), Some(0));
        assert_eq!(char_value('~'), Some(94));
        assert_eq!(char_value('\x7f'), None);
        assert_eq!(char_value('\t'), None);
        assert_eq!(char_value('é'), None);
        assert_eq!(Code128.supported_characters().len(), 95);
    }

    #[test]
    fn patterns_are_unique_and_sized() {
        let unique: HashSet<_> = CODE128_PATTERNS.iter().collect();
        assert_eq!(unique.len(), CODE128_PATTERNS.len());
        for (value, p) in CODE128_PATTERNS.iter().enumerate() {
            let expected = if value == STOP as usize { 13 } else { 11 };
            assert_eq!(p.len(), expected, "value {value}");
            assert!(p.starts_with('1'), "value {value}");
        }
        assert_eq!(CODE128_PATTERNS[START_B as usize], "11010010000");
    }

    #[test]
    fn layout_packs_modules_without_gaps() {
        let cfg = RenderConfig::default().resolve();
        let (segments, total) = Code128.layout("A", &cfg).unwrap();
        // start + data + checksum at 11 modules, stop at 13
        let modules = 11 * 3 + 13;
        assert_eq!(segments.len(), modules);
        assert_eq!(total, cfg.quiet_zone * 2 + modules as u32 * cfg.module_width);
        assert!(segments.iter().all(|s| s.width == cfg.module_width));
    }
}
