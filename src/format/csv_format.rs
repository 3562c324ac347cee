//! CSV decoder.

use std::io::BufRead;

use super::{Format, FormatError, FormatKind, RawRecord};

/// CSV decoder using the csv crate.
///
/// The first row is the header. Every following row becomes a JSON object
/// mapping header names to string fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFormat;

impl Format for CsvFormat {
    fn kind(&self) -> FormatKind {
        FormatKind::Csv
    }

    fn decode(
        &self,
        reader: &mut dyn BufRead,
        emit: &mut dyn FnMut(RawRecord) -> bool,
    ) -> Result<(), FormatError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| row_error(0, e))?
            .clone();

        let mut record = csv::StringRecord::new();
        let mut row = 0u64;
        loop {
            row += 1;
            // Rows whose width differs from the header fail here.
            let more = rdr
                .read_record(&mut record)
                .map_err(|e| row_error(row, e))?;
            if !more {
                return Ok(());
            }

            let mut obj = serde_json::Map::new();
            for (header, field) in headers.iter().zip(record.iter()) {
                obj.insert(
                    header.to_string(),
                    serde_json::Value::String(field.to_string()),
                );
            }

            let raw = RawRecord::new(FormatKind::Csv, row, serde_json::Value::Object(obj));
            if !emit(raw) {
                return Ok(());
            }
        }
    }
}

fn row_error(position: u64, err: csv::Error) -> FormatError {
    if !err.is_io_error() {
        return FormatError::Malformed {
            position,
            message: err.to_string(),
        };
    }
    match err.into_kind() {
        csv::ErrorKind::Io(io) => FormatError::Io(io),
        other => FormatError::Malformed {
            position,
            message: format!("{other:?}"),
        },
    }
}
