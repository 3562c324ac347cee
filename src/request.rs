//! The common request representation handed to scan callbacks.

use std::sync::Arc;

use crate::format::{FormatKind, RawRecord};

/// Normalized request delivered to consumers, independent of source format.
///
/// Wraps exactly one [`RawRecord`] behind shared indirection, so clones are
/// cheap and the wrapped record is never altered.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonRequest {
    raw: Arc<RawRecord>,
}

/// Convert a decoded record into the request representation.
pub fn normalize(raw: RawRecord) -> CommonRequest {
    CommonRequest { raw: Arc::new(raw) }
}

impl From<RawRecord> for CommonRequest {
    fn from(raw: RawRecord) -> Self {
        normalize(raw)
    }
}

impl CommonRequest {
    /// The wrapped raw record.
    pub fn raw(&self) -> &RawRecord {
        &self.raw
    }

    /// The decoded payload.
    pub fn value(&self) -> &serde_json::Value {
        &self.raw.value
    }

    /// Format that produced the record.
    pub fn format(&self) -> FormatKind {
        self.raw.format
    }

    /// 1-based position of the record in its source.
    pub fn position(&self) -> u64 {
        self.raw.position
    }

    /// Unwrap into the raw record, cloning only if other handles exist.
    pub fn into_raw(self) -> RawRecord {
        Arc::try_unwrap(self.raw).unwrap_or_else(|shared| (*shared).clone())
    }

    /// Look up a top-level field of an object payload.
    ///
    /// Keys match case-insensitively; an exact match wins.
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        let obj = self.raw.value.as_object()?;
        obj.get(name).or_else(|| {
            obj.iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value)
        })
    }

    /// Target URL of the request.
    ///
    /// Plaintext records are the URL itself; structured records carry it in
    /// a `url` field.
    pub fn url(&self) -> Option<&str> {
        match &self.raw.value {
            serde_json::Value::String(s) => Some(s.as_str()),
            _ => self.field("url").and_then(|v| v.as_str()),
        }
    }

    /// HTTP method of the request, if the record carries one.
    pub fn method(&self) -> Option<&str> {
        self.field("method").and_then(|v| v.as_str())
    }
}
