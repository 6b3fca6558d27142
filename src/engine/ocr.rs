//! OCR collaborator.
//!
//! Recognition sits behind [`TextRecognizer`] so strategies never know which
//! Tesseract they talk to:
//!
//! - [`TesseractCli`] (default) spawns the `tesseract` executable on a PNG
//!   written to the conversion's scratch directory and reads text from stdout.
//! - [`LepTessRecognizer`] (feature `tesseract`) links libtesseract through
//!   `leptess` and recognises from memory.

use crate::config::ConversionConfig;
use crate::error::ConvertError;
use crate::imaging;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, instrument};

const ENGINE: &str = "tesseract";

/// Recognise text in a raster image.
pub trait TextRecognizer {
    /// Return the recognised text; an empty string is a valid result.
    fn recognize(&self, image: &DynamicImage) -> Result<String, ConvertError>;
}

/// The recognizer selected by build features and `config`.
///
/// `scratch` receives any temporary files the backend needs.
pub fn recognizer(config: &ConversionConfig, scratch: &Path) -> Box<dyn TextRecognizer> {
    #[cfg(feature = "tesseract")]
    {
        let _ = scratch;
        Box::new(LepTessRecognizer::new(&config.ocr_language))
    }
    #[cfg(not(feature = "tesseract"))]
    {
        Box::new(TesseractCli::new(config, scratch))
    }
}

// ── CLI backend ──────────────────────────────────────────────────────────────

/// Runs `tesseract <image> stdout -l <lang>`.
pub struct TesseractCli {
    binary: PathBuf,
    language: String,
    scratch: PathBuf,
}

impl TesseractCli {
    pub fn new(config: &ConversionConfig, scratch: &Path) -> Self {
        Self {
            binary: config.tesseract_binary.clone(),
            language: config.ocr_language.clone(),
            scratch: scratch.to_path_buf(),
        }
    }
}

impl TextRecognizer for TesseractCli {
    #[instrument(skip(self, image), fields(w = image.width(), h = image.height()))]
    fn recognize(&self, image: &DynamicImage) -> Result<String, ConvertError> {
        let input = self.scratch.join("ocr-input.png");
        std::fs::write(&input, imaging::encode_png(image)?)?;

        let output = Command::new(&self.binary)
            .arg(&input)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ConvertError::EngineUnavailable {
                engine: ENGINE,
                detail: format!("cannot run '{}': {e}", self.binary.display()),
            });
        // The input PNG goes whether or not tesseract ran.
        let _ = std::fs::remove_file(&input);
        let output = output?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConvertError::engine(ENGINE, stderr.trim()));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("Recognised {} chars", text.len());
        Ok(text)
    }
}

// ── In-process backend ───────────────────────────────────────────────────────

/// libtesseract via `leptess`, fed a PNG from memory.
#[cfg(feature = "tesseract")]
pub struct LepTessRecognizer {
    language: String,
}

#[cfg(feature = "tesseract")]
impl LepTessRecognizer {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
        }
    }
}

#[cfg(feature = "tesseract")]
impl TextRecognizer for LepTessRecognizer {
    #[instrument(skip(self, image), fields(w = image.width(), h = image.height()))]
    fn recognize(&self, image: &DynamicImage) -> Result<String, ConvertError> {
        let mut lt = leptess::LepTess::new(None, &self.language).map_err(|e| {
            ConvertError::EngineUnavailable {
                engine: ENGINE,
                detail: format!("failed to initialise language '{}': {e}", self.language),
            }
        })?;

        let png = imaging::encode_png(image)?;
        lt.set_image_from_mem(&png)
            .map_err(|e| ConvertError::engine(ENGINE, format!("failed to load image: {e}")))?;

        let text = lt
            .get_utf8_text()
            .map_err(|e| ConvertError::engine(ENGINE, format!("invalid UTF-8 in result: {e}")))?;
        debug!("Recognised {} chars", text.len());
        Ok(text)
    }
}
