use log::{info, warn};
use serde::Serialize;

use crate::barcoder::Barcoder;
use crate::config::RenderConfig;
use crate::core::Symbology;

/// Caller preferences for [`Barcoder::encode_batch`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Report line errors even when no line succeeded.
    pub include_errors_with_results: bool,
}

/// One successfully encoded batch line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCode {
    pub value: String,
    pub image: String,
    pub suggested_file_name: String,
}

/// Outcome of a batch run, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub codes: Vec<BatchCode>,
    /// `Line <n>: <reason>`, where `n` counts non-blank lines only.
    pub errors: Vec<String>,
}

impl BatchResult {
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty() && self.errors.is_empty()
    }
}

impl Barcoder {
    /// Encode every non-blank line of `input` independently.
    ///
    /// Blank lines are skipped silently and do not advance the line number
    /// used in error messages and fallback file names. A failing line is
    /// reported in `errors` and never stops the rest of the batch. When
    /// nothing succeeded and `include_errors_with_results` is off, the result
    /// is empty.
    pub fn encode_batch(
        &self,
        symbology: Symbology,
        input: &str,
        config: &RenderConfig,
        options: BatchOptions,
    ) -> BatchResult {
        let mut result = BatchResult::default();

        let lines = input.lines().map(str::trim).filter(|line| !line.is_empty());
        for (idx, line) in lines.enumerate() {
            let line_no = idx + 1;
            match self.encode_to_image(symbology, line, config) {
                Ok(encoded) => {
                    let suggested_file_name = suggested_file_name(&encoded.value, line_no);
                    result.codes.push(BatchCode {
                        value: encoded.value,
                        image: encoded.image,
                        suggested_file_name,
                    });
                }
                Err(err) => {
                    warn!("{} batch line {} rejected: {}", symbology, line_no, err);
                    result.errors.push(format!("Line {line_no}: {err}"));
                }
            }
        }

        info!(
            "{} batch: {} code(s), {} error(s)",
            symbology,
            result.codes.len(),
            result.errors.len()
        );

        if result.codes.is_empty() && !result.errors.is_empty() && !options.include_errors_with_results
        {
            return BatchResult::default();
        }
        result
    }
}

fn suggested_file_name(value: &str, line_no: usize) -> String {
    if value.is_empty() {
        format!("barcode_{line_no}.svg")
    } else {
        format!("{value}.svg")
    }
}
