use serde_json::Value;

use super::{decode_all, decode_until};
use crate::format::{FormatError, PlaintextFormat};

#[test]
fn plaintext_yields_trimmed_non_blank_lines() {
    let input = b"  https://a.example  \n\nhttps://b.example\n\t\nhttps://c.example";

    let records = decode_all(&PlaintextFormat, input).expect("lines should parse");

    let items: Vec<(u64, Value)> = records.into_iter().map(|r| (r.position, r.value)).collect();
    assert_eq!(
        items,
        vec![
            (1, Value::String("https://a.example".into())),
            (3, Value::String("https://b.example".into())),
            (5, Value::String("https://c.example".into())),
        ]
    );
}

#[test]
fn plaintext_stops_when_emit_returns_false() {
    let input = b"one\ntwo\nthree\nfour\n";

    let records = decode_until(&PlaintextFormat, input, 1).expect("stop is not an error");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].value, Value::String("one".into()));
}

#[test]
fn plaintext_invalid_utf8_is_an_io_error() {
    let input = b"ok\n\xff\xfe\n";

    let err = decode_all(&PlaintextFormat, input).expect_err("invalid utf-8");

    match err {
        FormatError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
        other => panic!("expected Io, got: {other:?}"),
    }
}
