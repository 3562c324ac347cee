//! Plaintext decoder.

use std::io::BufRead;

use super::{Format, FormatError, FormatKind, RawRecord};

/// Plaintext decoder.
///
/// Every non-blank line is one record, trimmed and emitted as a JSON string.
/// Typical input is a list of URLs or hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextFormat;

impl Format for PlaintextFormat {
    fn kind(&self) -> FormatKind {
        FormatKind::Plaintext
    }

    fn decode(
        &self,
        reader: &mut dyn BufRead,
        emit: &mut dyn FnMut(RawRecord) -> bool,
    ) -> Result<(), FormatError> {
        for (idx, line) in reader.lines().enumerate() {
            // Invalid UTF-8 surfaces here as an InvalidData I/O error.
            let line = line?;
            let item = line.trim();
            if item.is_empty() {
                continue;
            }

            let record = RawRecord::new(
                FormatKind::Plaintext,
                idx as u64 + 1,
                serde_json::Value::String(item.to_string()),
            );
            if !emit(record) {
                break;
            }
        }
        Ok(())
    }
}
