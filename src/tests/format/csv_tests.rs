use serde_json::json;

use super::{decode_all, decode_until};
use crate::format::{CsvFormat, FormatError, FormatKind};

#[test]
fn csv_rows_become_objects_keyed_by_header() {
    let input = b"url,method\nhttps://a.example,GET\nhttps://b.example,POST\n";

    let records = decode_all(&CsvFormat, input).expect("valid csv");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].format, FormatKind::Csv);
    assert_eq!(records[0].position, 1);
    assert_eq!(
        records[0].value,
        json!({"url": "https://a.example", "method": "GET"})
    );
    assert_eq!(records[1].position, 2);
    assert_eq!(
        records[1].value,
        json!({"url": "https://b.example", "method": "POST"})
    );
}

#[test]
fn csv_header_only_yields_nothing() {
    let records = decode_all(&CsvFormat, b"url,method\n").expect("header only is valid");
    assert!(records.is_empty());
}

#[test]
fn csv_row_with_wrong_width_is_malformed() {
    let input = b"url,method\nhttps://a.example,GET\nhttps://b.example\n";

    let err = decode_all(&CsvFormat, input).expect_err("row 2 is short");

    match err {
        FormatError::Malformed { position, .. } => assert_eq!(position, 2),
        other => panic!("expected Malformed, got: {other:?}"),
    }
}

#[test]
fn csv_stops_when_emit_returns_false() {
    let input = b"url\na\nb\nc\n";

    let records = decode_until(&CsvFormat, input, 2).expect("stop is not an error");

    assert_eq!(records.len(), 2);
}
