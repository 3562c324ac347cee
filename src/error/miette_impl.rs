//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{InputError, Stage};

/// A diagnostic wrapper for provider errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct InputDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<InputError>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage) -> &'static str {
    match stage {
        Stage::Resolve => "Pick one of the supported input modes: jsonl, yaml, csv, plaintext",
        Stage::Count => "Check that the input file is well-formed for the selected mode",
        Stage::Scan => "The input file changed or disappeared after it was validated",
        Stage::Config => "Check the inputs section of your configuration",
    }
}

impl From<InputError> for InputDiagnostic {
    fn from(e: InputError) -> Self {
        let stage = e.stage();
        InputDiagnostic {
            message: format!("[{stage}] {e}"),
            source: Some(e),
            help: Some(help_for(stage).into()),
            severity: Severity::Error,
        }
    }
}

impl From<InputError> for miette::Report {
    fn from(e: InputError) -> Self {
        miette::Report::new(InputDiagnostic::from(e))
    }
}
