//! Conversion driver.
//!
//! One request in, one outcome out:
//!
//! 1. the input must exist ([`ConvertError::InputNotFound`] otherwise)
//! 2. its extension picks a [`Strategy`] for the target
//!    ([`ConvertError::UnsupportedFormat`] otherwise)
//! 3. the strategy writes into a staging file beside the destination
//! 4. staging is renamed over the destination only if the strategy succeeded
//!
//! Step 4 means a failed conversion never leaves a truncated or half-written
//! file at the destination path, and never touches a file already there.

use crate::config::ConversionConfig;
use crate::error::ConvertError;
use crate::format::{self, Format, Strategy, TargetFormat};
use crate::output::{ConversionOutcome, ConversionReport};
use crate::strategy::{self, Job};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::TempPath;
use tracing::{debug, error, info};

/// A validated conversion: the input exists and has a strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
    pub source_format: Format,
    pub target_format: TargetFormat,
    pub strategy: Strategy,
}

impl ConversionRequest {
    /// Check the input and resolve its strategy. Nothing is written.
    pub fn new(
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        target: TargetFormat,
    ) -> Result<Self, ConvertError> {
        let input = input.as_ref();
        if !input.exists() {
            return Err(ConvertError::InputNotFound {
                path: input.to_path_buf(),
            });
        }
        let (source_format, strategy) = format::resolve(input, target)?;
        Ok(Self {
            source_path: input.to_path_buf(),
            destination_path: output.as_ref().to_path_buf(),
            source_format,
            target_format: target,
            strategy,
        })
    }
}

/// Convert `input` to `target`, writing `output`.
///
/// This is the primary entry point for the library.
///
/// # Errors
/// Any [`ConvertError`]; on error the destination path is left untouched.
///
/// # Example
/// ```rust,no_run
/// use docshift::{convert, ConversionConfig, TargetFormat};
///
/// let report = convert("scan.png", "scan.pdf", TargetFormat::Pdf, &ConversionConfig::default())?;
/// println!("{} bytes", report.bytes_written);
/// # Ok::<(), docshift::ConvertError>(())
/// ```
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    target: TargetFormat,
    config: &ConversionConfig,
) -> Result<ConversionReport, ConvertError> {
    let request = ConversionRequest::new(input, output, target)?;
    execute(&request, config)
}

/// Run an already-validated request.
pub fn execute(
    request: &ConversionRequest,
    config: &ConversionConfig,
) -> Result<ConversionReport, ConvertError> {
    let start = Instant::now();
    info!(
        "Converting {} ({}) → {} ({})",
        request.source_path.display(),
        request.source_format,
        request.destination_path.display(),
        request.target_format
    );

    let result = stage_and_commit(request, config);
    if let Some(cb) = &config.progress_callback {
        cb.on_conversion_complete(result.is_ok());
    }
    let (units, bytes_written) = result?;

    let report = ConversionReport {
        input: request.source_path.clone(),
        output: request.destination_path.clone(),
        source_format: request.source_format,
        target_format: request.target_format,
        strategy: request.strategy,
        bytes_written,
        units,
        duration_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        "Conversion complete: {} units, {} bytes, {}ms",
        report.units, report.bytes_written, report.duration_ms
    );
    Ok(report)
}

/// Like [`convert`], but folds every error into a [`ConversionOutcome`].
pub fn run(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    target: TargetFormat,
    config: &ConversionConfig,
) -> ConversionOutcome {
    match convert(input, output, target, config) {
        Ok(report) => ConversionOutcome::success(report),
        Err(e) => {
            error!("{e}");
            ConversionOutcome::failure(&e)
        }
    }
}

fn stage_and_commit(
    request: &ConversionRequest,
    config: &ConversionConfig,
) -> Result<(usize, u64), ConvertError> {
    let destination = &request.destination_path;
    let staging = Staging::beside(destination, request.target_format)?;
    debug!("Staging output at {}", staging.path().display());

    let units = strategy::run(
        request.strategy,
        &Job {
            input: &request.source_path,
            staging: staging.path(),
            config,
        },
    )?;

    let bytes = std::fs::metadata(staging.path())
        .map_err(|source| ConvertError::OutputWriteFailed {
            path: destination.clone(),
            source,
        })?
        .len();
    if bytes == 0 {
        return Err(ConvertError::Internal(format!(
            "{:?} produced an empty file",
            request.strategy
        )));
    }

    staging.commit(destination)?;
    Ok((units, bytes))
}

/// A closed temporary file in the destination's directory.
///
/// Dropping it without [`Staging::commit`] deletes the file along with any
/// directories that had to be created to hold it.
struct Staging {
    file: Option<TempPath>,
    /// Deepest first.
    created_dirs: Vec<PathBuf>,
}

impl Staging {
    fn beside(destination: &Path, target: TargetFormat) -> Result<Self, ConvertError> {
        let write_failed = |source| ConvertError::OutputWriteFailed {
            path: destination.to_path_buf(),
            source,
        };

        let parent = match destination.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let created_dirs: Vec<PathBuf> = parent
            .ancestors()
            .take_while(|dir| !dir.as_os_str().is_empty() && !dir.exists())
            .map(Path::to_path_buf)
            .collect();
        std::fs::create_dir_all(parent).map_err(write_failed)?;
        // From here on, dropping `staging` undoes the directories on error.
        let mut staging = Self {
            file: None,
            created_dirs,
        };

        let suffix = format!(".{}", target.extension());
        let mut builder = tempfile::Builder::new();
        builder.prefix(".docshift-").suffix(&suffix);
        // Same mode a plain `File::create` would get once the umask applies.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let file = builder.tempfile_in(parent).map_err(write_failed)?;
        staging.file = Some(file.into_temp_path());
        Ok(staging)
    }

    fn path(&self) -> &Path {
        self.file.as_deref().unwrap_or_else(|| Path::new(""))
    }

    /// Rename the staged file over `destination`.
    fn commit(mut self, destination: &Path) -> Result<(), ConvertError> {
        let Some(file) = self.file.take() else {
            return Err(ConvertError::Internal("staging file already released".into()));
        };
        file.persist(destination)
            .map_err(|e| ConvertError::OutputWriteFailed {
                path: destination.to_path_buf(),
                source: e.error,
            })?;
        self.created_dirs.clear();
        Ok(())
    }
}

impl Drop for Staging {
    fn drop(&mut self) {
        drop(self.file.take());
        for dir in &self.created_dirs {
            // Only empty directories go; anything else was put there by someone else.
            if std::fs::remove_dir(dir).is_err() {
                break;
            }
            debug!("Removed staging directory {}", dir.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn missing_input_is_reported_before_format() {
        let err = ConversionRequest::new("/no/such/file.txt", "out.pdf", TargetFormat::Pdf)
            .unwrap_err();
        assert!(matches!(err, ConvertError::InputNotFound { .. }), "got: {err}");
    }

    #[test]
    fn unsupported_pair_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.txt");
        std::fs::write(&input, "hello").unwrap();
        let output = dir.path().join("notes.pdf");

        let outcome = run(&input, &output, TargetFormat::Pdf, &ConversionConfig::default());
        assert_eq!(outcome.message(), "Unsupported file format: .txt");
        assert!(!output.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn request_records_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Deck.PPTX");
        std::fs::write(&input, b"").unwrap();

        let request = ConversionRequest::new(&input, "deck.pdf", TargetFormat::Pdf).unwrap();
        assert_eq!(request.source_format, Format::Pptx);
        assert_eq!(request.strategy, Strategy::PptxToPdf);
    }

    #[test]
    fn failed_strategy_leaves_existing_destination_alone() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.png");
        std::fs::write(&input, b"not really a png").unwrap();
        let output = dir.path().join("broken.pdf");
        std::fs::write(&output, b"previous").unwrap();

        let outcome = run(&input, &output, TargetFormat::Pdf, &ConversionConfig::default());
        assert!(!outcome.is_success());
        assert_eq!(outcome.exit_code(), ErrorKind::EngineFailure.exit_code());
        assert!(outcome.message().starts_with("Error converting file: "));
        assert_eq!(std::fs::read(&output).unwrap(), b"previous");
        // Only the input and the untouched destination remain.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn staging_lives_beside_destination() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("nested").join("out.docx");
        let staging = Staging::beside(&dest, TargetFormat::Docx).unwrap();
        assert_eq!(staging.path().parent(), dest.parent());
        assert!(staging.path().to_string_lossy().ends_with(".docx"));
        let path = staging.path().to_path_buf();
        drop(staging);
        assert!(!path.exists());
    }

    #[test]
    fn abandoned_staging_removes_directories_it_created() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("nested").join("deeper").join("out.pdf");
        let staging = Staging::beside(&dest, TargetFormat::Pdf).unwrap();
        assert!(dest.parent().unwrap().is_dir());
        drop(staging);
        assert!(!dir.path().join("nested").exists());
        assert!(dir.path().is_dir());
    }

    #[test]
    fn failed_conversion_into_new_directory_leaves_no_directory() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.png");
        std::fs::write(&input, b"not really a png").unwrap();
        let output = dir.path().join("out").join("sub").join("broken.pdf");

        let outcome = run(&input, &output, TargetFormat::Pdf, &ConversionConfig::default());
        assert!(!outcome.is_success());
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn committed_staging_keeps_directories() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("nested").join("out.pdf");
        let staging = Staging::beside(&dest, TargetFormat::Pdf).unwrap();
        std::fs::write(staging.path(), b"%PDF").unwrap();
        staging.commit(&dest).unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), b"%PDF");
    }

    #[cfg(unix)]
    #[test]
    fn output_mode_matches_a_plain_write() {
        use image::{Rgb, RgbImage};
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("dot.png");
        RgbImage::from_pixel(4, 4, Rgb([10, 20, 30])).save(&input).unwrap();
        let output = dir.path().join("dot.pdf");
        let reference = dir.path().join("reference.bin");
        std::fs::write(&reference, b"x").unwrap();

        convert(&input, &output, TargetFormat::Pdf, &ConversionConfig::default()).unwrap();

        let mode = |p: &Path| std::fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&output), mode(&reference));
    }
}
