//! Error types for input providers.
//!
//! This module provides:
//! - `Stage`: Indicates where in the provider lifecycle an error occurred
//! - `InputError`: Errors surfaced by provider construction and scanning

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::format::FormatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Mapping the mode name to a decoder
    Resolve,
    /// The validation and counting pass run at construction
    Count,
    /// A later scan pass
    Scan,
    /// Reading or applying a providers configuration
    Config,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Resolve => write!(f, "Resolve"),
            Stage::Count => write!(f, "Count"),
            Stage::Scan => write!(f, "Scan"),
            Stage::Config => write!(f, "Config"),
        }
    }
}

#[derive(Debug, Error)]
pub enum InputError {
    /// The mode name is not in the registry.
    #[error("invalid input mode {mode}")]
    UnsupportedFormat {
        mode: String,
        #[source]
        source: FormatError,
    },

    /// The decoder rejected the file during the construction pass.
    #[error("could not parse input file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// The decoder failed during a scan pass.
    #[error("could not scan input file {}: {source}", .path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// A configured input could not be turned into a provider.
    #[error("input '{id}': {message}")]
    Config {
        id: String,
        message: String,
        #[source]
        source: Option<Box<InputError>>,
    },
}

impl InputError {
    /// Stage of the provider lifecycle that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            InputError::UnsupportedFormat { .. } => Stage::Resolve,
            InputError::Parse { .. } => Stage::Count,
            InputError::Scan { .. } => Stage::Scan,
            InputError::Config { .. } => Stage::Config,
        }
    }

    /// The decoder error underneath, if any.
    pub fn format_error(&self) -> Option<&FormatError> {
        match self {
            InputError::UnsupportedFormat { source, .. }
            | InputError::Parse { source, .. }
            | InputError::Scan { source, .. } => Some(source),
            InputError::Config { source, .. } => {
                source.as_deref().and_then(InputError::format_error)
            }
        }
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
