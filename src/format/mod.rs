//! Format abstraction for streaming record decoders.
//!
//! This module provides:
//! - `FormatKind`: Closed set of supported input modes
//! - `Format`: The decoder contract every input mode implements
//! - `RawRecord`: One decoded, format-specific unit of input
//! - `FormatError`: Errors that can occur while resolving or decoding
//! - `FormatRegistry`: Registry selecting which modes a provider may use

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

#[cfg(feature = "csv")]
mod csv_format;
#[cfg(feature = "json")]
mod jsonl;
#[cfg(feature = "plaintext")]
mod plaintext;
#[cfg(feature = "yaml")]
mod yaml;

#[cfg(feature = "csv")]
pub use csv_format::CsvFormat;
#[cfg(feature = "json")]
pub use jsonl::JsonlFormat;
#[cfg(feature = "plaintext")]
pub use plaintext::PlaintextFormat;
#[cfg(feature = "yaml")]
pub use yaml::YamlFormat;

/// Represents the supported input modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// Newline-delimited JSON, one value per line
    Jsonl,
    /// Multi-document YAML stream
    Yaml,
    /// CSV with a header row
    Csv,
    /// One plain text item per line
    Plaintext,
}

/// Symbolic names accepted for each kind. Lookups are case-insensitive.
const FORMAT_NAMES: &[(&str, FormatKind)] = &[
    ("jsonl", FormatKind::Jsonl),
    ("ndjson", FormatKind::Jsonl),
    ("json-lines", FormatKind::Jsonl),
    ("yaml", FormatKind::Yaml),
    ("yml", FormatKind::Yaml),
    ("csv", FormatKind::Csv),
    ("plaintext", FormatKind::Plaintext),
    ("text", FormatKind::Plaintext),
    ("txt", FormatKind::Plaintext),
    ("list", FormatKind::Plaintext),
];

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatKind::Jsonl => write!(f, "jsonl"),
            FormatKind::Yaml => write!(f, "yaml"),
            FormatKind::Csv => write!(f, "csv"),
            FormatKind::Plaintext => write!(f, "plaintext"),
        }
    }
}

impl FormatKind {
    /// All kinds known to this crate, regardless of enabled features.
    pub const ALL: [FormatKind; 4] = [
        FormatKind::Jsonl,
        FormatKind::Yaml,
        FormatKind::Csv,
        FormatKind::Plaintext,
    ];

    /// Parse a format kind from a symbolic mode name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        FORMAT_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s.trim()))
            .map(|(_, kind)| *kind)
    }

    /// Get file extensions for this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            FormatKind::Jsonl => &["jsonl", "ndjson"],
            FormatKind::Yaml => &["yaml", "yml"],
            FormatKind::Csv => &["csv"],
            FormatKind::Plaintext => &["txt", "list"],
        }
    }

    /// Check if this format is available (feature enabled).
    pub fn is_available(&self) -> bool {
        match self {
            FormatKind::Jsonl => cfg!(feature = "json"),
            FormatKind::Yaml => cfg!(feature = "yaml"),
            FormatKind::Csv => cfg!(feature = "csv"),
            FormatKind::Plaintext => cfg!(feature = "plaintext"),
        }
    }

    /// Construct the decoder for this kind.
    pub fn decoder(&self) -> Result<Box<dyn Format>, FormatError> {
        match self {
            #[cfg(feature = "json")]
            FormatKind::Jsonl => Ok(Box::new(JsonlFormat)),

            #[cfg(feature = "yaml")]
            FormatKind::Yaml => Ok(Box::new(YamlFormat)),

            #[cfg(feature = "csv")]
            FormatKind::Csv => Ok(Box::new(CsvFormat)),

            #[cfg(feature = "plaintext")]
            FormatKind::Plaintext => Ok(Box::new(PlaintextFormat)),

            #[allow(unreachable_patterns)]
            _ => Err(FormatError::NotEnabled(*self)),
        }
    }
}

/// One decoded unit of input.
///
/// The payload is kept as a dynamic JSON value; no schema is imposed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// Format that produced this record
    pub format: FormatKind,
    /// 1-based position in the source (line, row or document index)
    pub position: u64,
    /// Decoded payload
    pub value: serde_json::Value,
}

impl RawRecord {
    /// Create a new raw record.
    pub fn new(format: FormatKind, position: u64, value: serde_json::Value) -> Self {
        Self {
            format,
            position,
            value,
        }
    }
}

/// Errors that can occur during format operations.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The requested mode name is unknown or not registered
    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// Format feature not enabled
    #[error("Format '{0}' is not enabled. Enable the corresponding feature.")]
    NotEnabled(FormatKind),

    /// I/O error while reading the input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A unit of input could not be decoded
    #[error("malformed record at position {position}: {message}")]
    Malformed { position: u64, message: String },
}

/// Contract implemented by every record decoder.
///
/// `emit` is invoked once per decoded record. Returning `false` from it stops
/// the decoder, which then returns `Ok(())` without reading further.
pub trait Format: Send + Sync + std::fmt::Debug {
    /// The kind this decoder handles.
    fn kind(&self) -> FormatKind;

    /// Stream records from an already opened reader.
    fn decode(
        &self,
        reader: &mut dyn BufRead,
        emit: &mut dyn FnMut(RawRecord) -> bool,
    ) -> Result<(), FormatError>;

    /// Open `path` read-only and stream its records.
    ///
    /// Every call opens its own handle, so repeated calls are independent.
    fn parse(
        &self,
        path: &Path,
        emit: &mut dyn FnMut(RawRecord) -> bool,
    ) -> Result<(), FormatError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.decode(&mut reader, emit)
    }
}

/// Registry of the input modes a provider may be constructed with.
#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    formats: Vec<FormatKind>,
}

impl FormatRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            formats: Vec::new(),
        }
    }

    /// Register a format.
    pub fn register(&mut self, kind: FormatKind) {
        if !self.formats.contains(&kind) {
            self.formats.push(kind);
        }
    }

    /// Register a format (builder pattern).
    pub fn with_format(mut self, kind: FormatKind) -> Self {
        self.register(kind);
        self
    }

    /// Check if a format is registered.
    pub fn has_format(&self, kind: &FormatKind) -> bool {
        self.formats.contains(kind)
    }

    /// Get all registered format kinds.
    pub fn formats(&self) -> &[FormatKind] {
        &self.formats
    }

    /// Map a mode name to a registered, available kind.
    pub fn kind_for_mode(&self, mode: &str) -> Result<FormatKind, FormatError> {
        match FormatKind::from_str(mode) {
            Some(kind) if self.has_format(&kind) && kind.is_available() => Ok(kind),
            _ => Err(FormatError::UnsupportedFormat(mode.to_string())),
        }
    }

    /// Resolve a mode name into a decoder.
    ///
    /// Unknown or unregistered names are rejected here, never at scan time.
    pub fn resolve(&self, mode: &str) -> Result<Box<dyn Format>, FormatError> {
        self.kind_for_mode(mode)?.decoder()
    }

    /// Get format kind for a file extension.
    pub fn kind_for_extension(&self, ext: &str) -> Option<FormatKind> {
        self.formats.iter().copied().find(|kind| {
            kind.extensions()
                .iter()
                .any(|e| e.eq_ignore_ascii_case(ext))
        })
    }

    /// Get format kind from a path's extension.
    pub fn kind_for_path(&self, path: &Path) -> Option<FormatKind> {
        let ext = path.extension()?.to_str()?;
        self.kind_for_extension(ext)
    }
}

/// Create a default registry with all enabled formats.
pub fn default_registry() -> FormatRegistry {
    let mut registry = FormatRegistry::new();

    #[cfg(feature = "json")]
    registry.register(FormatKind::Jsonl);

    #[cfg(feature = "yaml")]
    registry.register(FormatKind::Yaml);

    #[cfg(feature = "csv")]
    registry.register(FormatKind::Csv);

    #[cfg(feature = "plaintext")]
    registry.register(FormatKind::Plaintext);

    registry
}
