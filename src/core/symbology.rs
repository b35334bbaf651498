use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ResolvedConfig;
use crate::core::code39::Code39;
use crate::core::code128::Code128;
use crate::core::segment::Segment;
use crate::error::BarcodeError;

/// A linear symbology: its character set, framing and bar/space layout.
///
/// Implementations hold no state; the tables they consult are constants.
pub trait LinearEncoding {
    fn name(&self) -> &'static str;

    /// Longest accepted value, counted in characters after normalization.
    fn max_len(&self) -> usize;

    /// Characters a user may type. Reserved framing characters are excluded.
    fn supported_characters(&self) -> Vec<char>;

    fn is_supported(&self, ch: char) -> bool;

    /// Rewrite input into the form that is actually encoded.
    fn normalize(&self, value: &str) -> String {
        value.to_string()
    }

    fn helper_text(&self) -> &'static str;

    /// Lay out an already validated, normalized value.
    ///
    /// Returns the contiguous segments and the total width including both
    /// quiet zones.
    fn layout(
        &self,
        normalized: &str,
        config: &ResolvedConfig,
    ) -> Result<(Vec<Segment>, u32), BarcodeError>;
}

/// The symbologies this crate can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbology {
    Code39,
    #[default]
    Code128,
}

impl Symbology {
    pub const ALL: [Symbology; 2] = [Symbology::Code39, Symbology::Code128];

    pub fn encoding(self) -> &'static dyn LinearEncoding {
        match self {
            Symbology::Code39 => &Code39,
            Symbology::Code128 => &Code128,
        }
    }

    pub fn max_len(self) -> usize {
        self.encoding().max_len()
    }

    pub fn supported_characters(self) -> Vec<char> {
        self.encoding().supported_characters()
    }

    pub fn helper_text(self) -> &'static str {
        self.encoding().helper_text()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Symbology::Code39 => "code39",
            Symbology::Code128 => "code128",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown symbology '{0}' (expected code39 or code128)")]
pub struct UnknownSymbology(pub String);

impl FromStr for Symbology {
    type Err = UnknownSymbology;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code39" | "code-39" => Ok(Symbology::Code39),
            "code128" | "code-128" => Ok(Symbology::Code128),
            _ => Err(UnknownSymbology(s.to_string())),
        }
    }
}
