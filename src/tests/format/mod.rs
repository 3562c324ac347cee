//! Format module tests.


#[cfg(feature = "csv")]
mod csv_tests;
#[cfg(feature = "plaintext")]
mod plaintext_tests;

use std::io::Cursor;

use crate::format::{Format, FormatError, RawRecord};

/// Decode `input` fully, collecting every record.
fn decode_all(format: &dyn Format, input: &[u8]) -> Result<Vec<RawRecord>, FormatError> {
    let mut records = Vec::new();
    format.decode(&mut Cursor::new(input), &mut |raw| {
        records.push(raw);
        true
    })?;
    Ok(records)
}

/// Decode `input`, asking the decoder to stop after `limit` records.
fn decode_until(
    format: &dyn Format,
    input: &[u8],
    limit: usize,
) -> Result<Vec<RawRecord>, FormatError> {
    let mut records = Vec::new();
    format.decode(&mut Cursor::new(input), &mut |raw| {
        records.push(raw);
        records.len() < limit
    })?;
    Ok(records)
}
