//! Result types produced by the conversion driver.

use crate::error::{ConvertError, ErrorKind};
use crate::format::{Format, Strategy, TargetFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What a successful conversion produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub source_format: Format,
    pub target_format: TargetFormat,
    pub strategy: Strategy,
    /// Size of the committed output file.
    pub bytes_written: u64,
    /// Pages, slides or paragraphs carried into the output (1 for images).
    pub units: usize,
    pub duration_ms: u64,
}

/// The single, final result of one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ConversionOutcome {
    Success {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        report: Option<ConversionReport>,
    },
    Failure {
        reason: String,
        kind: ErrorKind,
    },
}

impl ConversionOutcome {
    pub(crate) fn success(report: ConversionReport) -> Self {
        let message = format!(
            "Successfully converted {} to {}",
            report.input.display(),
            report.target_format.label()
        );
        ConversionOutcome::Success {
            message,
            report: Some(report),
        }
    }

    pub(crate) fn failure(err: &ConvertError) -> Self {
        let reason = match err {
            // Resolution failures read as-is; everything else is a failed conversion.
            ConvertError::InputNotFound { .. } => err.to_string(),
            ConvertError::UnsupportedFormat { extension, .. } => {
                format!("Unsupported file format: {extension}")
            }
            other => format!("Error converting file: {other}"),
        };
        ConversionOutcome::Failure {
            reason,
            kind: err.kind(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Success { .. })
    }

    /// The one-line status message for the terminal.
    pub fn message(&self) -> &str {
        match self {
            ConversionOutcome::Success { message, .. } => message,
            ConversionOutcome::Failure { reason, .. } => reason,
        }
    }

    /// Process exit status: 0 on success, the error kind's code otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConversionOutcome::Success { .. } => 0,
            ConversionOutcome::Failure { kind, .. } => kind.exit_code(),
        }
    }
}
