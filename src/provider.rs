//! File-backed input provider.
//!
//! A provider is bound to one file and one decoder. Construction runs a full
//! validation pass that counts records without keeping them; every scan is a
//! fresh pass over the file that hands normalized requests to a callback.
//!
//! Nothing is cached between passes. If the file changes after construction,
//! `count()` may no longer match what a scan delivers.

use std::path::{Path, PathBuf};

use crate::error::InputError;
use crate::format::{Format, FormatKind, FormatRegistry, default_registry};
use crate::request::{CommonRequest, normalize};

/// Outcome of a completed scan pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    /// Requests handed to the callback
    pub delivered: u64,
    /// Whether the callback returned `false` and ended the pass
    pub stopped_early: bool,
}

/// Input provider bound to a single file and input mode.
#[derive(Debug)]
pub struct InputProvider {
    format: Box<dyn Format>,
    path: PathBuf,
    count: u64,
}

impl InputProvider {
    /// Create a provider using the default registry.
    ///
    /// Fails if `mode` is unknown or if the file cannot be parsed in full.
    pub fn new(path: impl Into<PathBuf>, mode: &str) -> Result<Self, InputError> {
        Self::with_registry(path, mode, &default_registry())
    }

    /// Create a provider resolving `mode` against `registry`.
    pub fn with_registry(
        path: impl Into<PathBuf>,
        mode: &str,
        registry: &FormatRegistry,
    ) -> Result<Self, InputError> {
        let path = path.into();
        let format = registry
            .resolve(mode)
            .map_err(|source| InputError::UnsupportedFormat {
                mode: mode.to_string(),
                source,
            })?;

        let mut count = 0u64;
        format
            .parse(&path, &mut |_| {
                count += 1;
                true
            })
            .map_err(|source| InputError::Parse {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(
            path = %path.display(),
            format = %format.kind(),
            count,
            "validated input file"
        );

        Ok(Self {
            format,
            path,
            count,
        })
    }

    /// Number of records found when the provider was created.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Input mode the provider decodes with.
    pub fn format(&self) -> FormatKind {
        self.format.kind()
    }

    /// Iterate the input, passing each request to `callback`.
    ///
    /// Returning `false` from the callback stops the pass. A decoding failure
    /// here is logged as a warning and ends the pass; records already handed
    /// out stay delivered.
    pub fn scan<F>(&self, callback: F)
    where
        F: FnMut(CommonRequest) -> bool,
    {
        if let Err(InputError::Scan { source, .. }) = self.try_scan(callback) {
            tracing::warn!("Could not parse input file: {source}");
        }
    }

    /// Like [`scan`](Self::scan), but returns the decoding failure instead of
    /// logging it.
    pub fn try_scan<F>(&self, mut callback: F) -> Result<ScanSummary, InputError>
    where
        F: FnMut(CommonRequest) -> bool,
    {
        let mut summary = ScanSummary::default();
        self.format
            .parse(&self.path, &mut |raw| {
                summary.delivered += 1;
                let keep_going = callback(normalize(raw));
                summary.stopped_early = !keep_going;
                keep_going
            })
            .map_err(|source| InputError::Scan {
                path: self.path.clone(),
                source,
            })?;
        Ok(summary)
    }

    /// Add a single item to the provider.
    ///
    /// Reserved for programmatic inputs; currently a no-op that never fails
    /// and leaves `count()` and scans untouched.
    pub fn set(&mut self, value: impl Into<String>) {
        let value = value.into();
        tracing::trace!(%value, "ignoring programmatic input item");
    }
}
