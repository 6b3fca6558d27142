//! Error types for the docshift library.
//!
//! Every failure a conversion can hit is a [`ConvertError`]. The driver
//! ([`crate::convert::run`]) is the only place that turns one into a
//! process-level outcome; strategies and engines just return `Err`.
//!
//! Each variant belongs to one [`ErrorKind`], the four-way taxonomy the CLI
//! reports on:
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | `Usage` | wrong argument count (produced by the CLI parser, never by the library) |
//! | `InputNotFound` | the input path does not exist |
//! | `UnsupportedFormat` | the extension has no strategy for the requested target |
//! | `EngineFailure` | an external engine or the output write failed |

use crate::format::TargetFormat;
use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the docshift library.
#[derive(Debug, Error)]
pub enum ConvertError {
    // ── Resolution errors ─────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The input extension has no strategy for the requested target.
    ///
    /// `extension` is lowercased and includes the leading dot, or is empty
    /// when the path has no extension at all.
    #[error("Unsupported file format: {extension} (cannot convert to {target})")]
    UnsupportedFormat {
        extension: String,
        target: TargetFormat,
    },

    // ── Engine errors ─────────────────────────────────────────────────────
    /// An external engine ran but reported a failure. `detail` is the
    /// engine's own message, kept verbatim.
    #[error("{engine} failed: {detail}")]
    EngineFailed { engine: &'static str, detail: String },

    /// An external engine could not be located or started.
    #[error("{engine} is not available: {detail}")]
    EngineUnavailable { engine: &'static str, detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create, write or commit the output file.
    #[error("Failed to write output file '{}': {source}", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Other filesystem error while reading input or managing scratch files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// The coarse error taxonomy surfaced to CLI users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Usage,
    InputNotFound,
    UnsupportedFormat,
    EngineFailure,
}

impl ConvertError {
    /// Shorthand for [`ConvertError::EngineFailed`].
    pub fn engine(engine: &'static str, detail: impl ToString) -> Self {
        Self::EngineFailed {
            engine,
            detail: detail.to_string(),
        }
    }

    /// Which taxonomy bucket this error falls into.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::InputNotFound { .. } => ErrorKind::InputNotFound,
            ConvertError::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            ConvertError::InvalidConfig(_) => ErrorKind::Usage,
            ConvertError::EngineFailed { .. }
            | ConvertError::EngineUnavailable { .. }
            | ConvertError::OutputWriteFailed { .. }
            | ConvertError::Io(_)
            | ConvertError::Internal(_) => ErrorKind::EngineFailure,
        }
    }
}

impl ErrorKind {
    /// Process exit status for this kind. Usage errors share clap's code.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Usage => 2,
            ErrorKind::InputNotFound | ErrorKind::UnsupportedFormat | ErrorKind::EngineFailure => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_not_found_display() {
        let e = ConvertError::InputNotFound {
            path: PathBuf::from("/tmp/missing.pdf"),
        };
        assert_eq!(e.to_string(), "Input file not found: /tmp/missing.pdf");
        assert_eq!(e.kind(), ErrorKind::InputNotFound);
    }

    #[test]
    fn unsupported_display_names_target() {
        let e = ConvertError::UnsupportedFormat {
            extension: ".txt".into(),
            target: TargetFormat::Pptx,
        };
        let msg = e.to_string();
        assert!(msg.contains(".txt"), "got: {msg}");
        assert!(msg.contains("PPTX"), "got: {msg}");
    }

    #[test]
    fn engine_error_keeps_detail_verbatim() {
        let e = ConvertError::engine("tesseract", "Error opening data file eng.traineddata");
        assert_eq!(
            e.to_string(),
            "tesseract failed: Error opening data file eng.traineddata"
        );
        assert_eq!(e.kind(), ErrorKind::EngineFailure);
    }

    #[test]
    fn exit_codes_are_non_zero() {
        for kind in [
            ErrorKind::Usage,
            ErrorKind::InputNotFound,
            ErrorKind::UnsupportedFormat,
            ErrorKind::EngineFailure,
        ] {
            assert_ne!(kind.exit_code(), 0);
        }
    }
}
