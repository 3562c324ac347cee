//! Shared fixtures for the unit tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tempfile::NamedTempFile;
use tracing_subscriber::fmt::MakeWriter;

use crate::format::{FormatKind, default_registry};

/// Modes the default registry can construct in this build.
pub(crate) fn supported_kinds() -> Vec<FormatKind> {
    default_registry().formats().to_vec()
}

/// Write `contents` to a temp file carrying the kind's first extension.
pub(crate) fn temp_input(kind: FormatKind, contents: &[u8]) -> NamedTempFile {
    let suffix = format!(".{}", kind.extensions()[0]);
    let mut file = tempfile::Builder::new()
        .prefix("reqfeed-")
        .suffix(&suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// URL used for the i-th record of generated fixtures.
pub(crate) fn url(i: usize) -> String {
    format!("https://example.com/item/{i}")
}

/// A well-formed input with `n` records, each carrying `url(i)`.
pub(crate) fn well_formed(kind: FormatKind, n: usize) -> Vec<u8> {
    let mut out = String::new();
    match kind {
        FormatKind::Jsonl => {
            for i in 0..n {
                out.push_str(&format!(
                    "{{\"url\":\"{}\",\"method\":\"GET\",\"seq\":{i}}}\n",
                    url(i)
                ));
            }
        }
        FormatKind::Yaml => {
            for i in 0..n {
                out.push_str(&format!("---\nurl: {}\nmethod: GET\nseq: {i}\n", url(i)));
            }
        }
        FormatKind::Csv => {
            out.push_str("url,method\n");
            for i in 0..n {
                out.push_str(&format!("{},GET\n", url(i)));
            }
        }
        FormatKind::Plaintext => {
            for i in 0..n {
                out.push_str(&url(i));
                out.push('\n');
            }
        }
    }
    out.into_bytes()
}

/// An input the kind's decoder rejects after one good record.
pub(crate) fn malformed(kind: FormatKind) -> Vec<u8> {
    match kind {
        FormatKind::Jsonl => b"{\"url\":\"https://a.example\"}\n{not json\n".to_vec(),
        FormatKind::Yaml => b"url: https://a.example\n---\nurl: [unclosed\n".to_vec(),
        FormatKind::Csv => b"url,method\nhttps://a.example,GET\nhttps://b.example\n".to_vec(),
        FormatKind::Plaintext => b"https://a.example\n\xff\xfe\n".to_vec(),
    }
}

#[derive(Clone, Default)]
pub(crate) struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer lock")).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log buffer lock")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a subscriber that records every event as text.
pub(crate) fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buf = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buf.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, buf.contents())
}
