//! Newline-delimited JSON decoder.

use std::io::BufRead;

use super::{Format, FormatError, FormatKind, RawRecord};

const UTF8_BOM: char = '\u{feff}';

/// JSONL decoder: one JSON value per line, read with serde_json.
///
/// Blank lines are skipped and never produce a record.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonlFormat;

impl Format for JsonlFormat {
    fn kind(&self) -> FormatKind {
        FormatKind::Jsonl
    }

    fn decode(
        &self,
        reader: &mut dyn BufRead,
        emit: &mut dyn FnMut(RawRecord) -> bool,
    ) -> Result<(), FormatError> {
        let mut line = String::new();
        let mut line_no = 0u64;

        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Ok(());
            }
            line_no += 1;

            let mut text = line.trim();
            if line_no == 1 {
                text = text.trim_start_matches(UTF8_BOM);
            }
            if text.is_empty() {
                continue;
            }

            let value: serde_json::Value =
                serde_json::from_str(text).map_err(|e| FormatError::Malformed {
                    position: line_no,
                    message: e.to_string(),
                })?;

            if !emit(RawRecord::new(FormatKind::Jsonl, line_no, value)) {
                return Ok(());
            }
        }
    }
}
