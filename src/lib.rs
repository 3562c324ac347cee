//! # reqfeed
//!
//! Streaming input providers for request files.
//!
//! ## Overview
//!
//! reqfeed provides:
//! - **Format abstraction**: Built-in decoders for JSONL, YAML, CSV and plaintext
//! - **Validated construction**: A provider parses its file once up front and
//!   fails immediately on malformed input
//! - **Counting without retention**: The record count is known before any
//!   record is consumed, and no record is kept in memory
//! - **Lazy scanning**: Each scan re-reads the file and hands one
//!   `CommonRequest` at a time to a callback that can stop the pass early
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reqfeed::InputProvider;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = InputProvider::new("requests.jsonl", "jsonl")?;
//!     println!("{} requests", provider.count());
//!
//!     provider.scan(|request| {
//!         println!("{:?}", request.url());
//!         true
//!     });
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `json` - JSONL decoder (enabled by default)
//! - `plaintext` - line list decoder (enabled by default)
//! - `yaml` - multi-document YAML decoder, and YAML configuration files
//! - `csv` - CSV decoder
//! - `miette` - Pretty error reporting with miette
//!
//! ## Scan semantics
//!
//! - Construction runs a full pass and fails with `InputError::Parse` if the
//!   decoder rejects the file. Unknown modes fail with
//!   `InputError::UnsupportedFormat` before the file is touched.
//! - `InputProvider::scan` never returns an error. If the file fails to
//!   decode on a later pass (for example because it was removed), a warning
//!   `Could not parse input file: <error>` is logged through `tracing` and
//!   the pass ends. `InputProvider::try_scan` returns that error instead.
//! - Records are not cached between passes, so memory use stays flat at the
//!   cost of reading the file twice. If the file changes after construction,
//!   `count()` can disagree with what a scan delivers.
//! - YAML decoding streams documents, but serde_yaml buffers the whole input
//!   internally first.

// Core modules
pub mod config;
pub mod error;
pub mod format;
pub mod provider;
pub mod request;

// Re-exports for convenience
pub use config::{InputConfig, ProvidersConfig};
pub use error::{InputError, Stage};
pub use format::{Format, FormatError, FormatKind, FormatRegistry, RawRecord, default_registry};
pub use provider::{InputProvider, ScanSummary};
pub use request::{CommonRequest, normalize};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::InputDiagnostic;

/// Build every provider declared in a configuration file using the default
/// registry.
pub fn load_providers(
    path: impl AsRef<std::path::Path>,
) -> Result<Vec<(String, InputProvider)>, InputError> {
    let config = ProvidersConfig::load(path.as_ref())?;
    config.build_providers(&default_registry())
}

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
