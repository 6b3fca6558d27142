//! Configuration types for document conversion.
//!
//! Every engine knob lives in [`ConversionConfig`], built via its
//! [`ConversionConfigBuilder`]. The CLI maps its flags onto the builder; the
//! library never reads the environment on its own except where an engine does
//! (pdfium's `PDFIUM_LIB_PATH`).

use crate::error::ConvertError;
use crate::progress::ProgressCallback;
use std::fmt;
use std::path::PathBuf;

/// Configuration for a single conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use docshift::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .ocr_language("deu")
///     .office_binary("/opt/libreoffice/program/soffice")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct ConversionConfig {
    /// Longest edge, in pixels, of a rendered PDF page. Default: 2000.
    ///
    /// Pages are rendered for PDF→PPTX slides and PDF→DOCX pictures. The cap
    /// is independent of physical page size, so poster-sized PDFs do not
    /// exhaust memory. The builder clamps it to 100..=10000.
    pub max_rendered_pixels: u32,

    /// Resolution used to size image→PDF pages. Default: 100.
    ///
    /// A 1000×500 px image becomes a 10×5 inch page.
    pub image_pdf_dpi: f32,

    /// Tesseract language code(s), e.g. `eng` or `eng+fra`. Default: `eng`.
    pub ocr_language: String,

    /// Tesseract executable used by the CLI OCR backend. Default: `tesseract`.
    pub tesseract_binary: PathBuf,

    /// Office automation host executable. Default: `soffice`.
    pub office_binary: PathBuf,

    /// Explicit libpdfium path. Falls back to `PDFIUM_LIB_PATH`, then the
    /// system library search path.
    pub pdfium_library: Option<PathBuf>,

    /// Parent directory for per-conversion scratch directories.
    /// Default: the system temp dir.
    pub scratch_dir: Option<PathBuf>,

    /// PDF user password for encrypted documents.
    pub password: Option<String>,

    /// Receives per-page / per-slide events from multi-page strategies.
    pub progress_callback: Option<ProgressCallback>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            max_rendered_pixels: 2000,
            image_pdf_dpi: 100.0,
            ocr_language: "eng".to_string(),
            tesseract_binary: PathBuf::from("tesseract"),
            office_binary: PathBuf::from("soffice"),
            pdfium_library: None,
            scratch_dir: None,
            password: None,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for ConversionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionConfig")
            .field("max_rendered_pixels", &self.max_rendered_pixels)
            .field("image_pdf_dpi", &self.image_pdf_dpi)
            .field("ocr_language", &self.ocr_language)
            .field("tesseract_binary", &self.tesseract_binary)
            .field("office_binary", &self.office_binary)
            .field("pdfium_library", &self.pdfium_library)
            .field("scratch_dir", &self.scratch_dir)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn ConversionProgressCallback>"),
            )
            .finish()
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }

    /// Create a fresh scratch directory under [`Self::scratch_dir`].
    ///
    /// The directory and everything in it is removed when the returned
    /// handle drops.
    pub fn scratch(&self) -> Result<tempfile::TempDir, ConvertError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("docshift-");
        let dir = match &self.scratch_dir {
            Some(parent) => builder.tempdir_in(parent)?,
            None => builder.tempdir()?,
        };
        Ok(dir)
    }
}

/// Bounds applied by [`ConversionConfigBuilder::max_rendered_pixels`].
pub const MIN_RENDERED_PIXELS: u32 = 100;
pub const MAX_RENDERED_PIXELS: u32 = 10_000;

/// Builder for [`ConversionConfig`].
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn max_rendered_pixels(mut self, px: u32) -> Self {
        self.config.max_rendered_pixels = px.clamp(MIN_RENDERED_PIXELS, MAX_RENDERED_PIXELS);
        self
    }

    pub fn image_pdf_dpi(mut self, dpi: f32) -> Self {
        self.config.image_pdf_dpi = dpi;
        self
    }

    pub fn ocr_language(mut self, lang: impl Into<String>) -> Self {
        self.config.ocr_language = lang.into();
        self
    }

    pub fn tesseract_binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.tesseract_binary = path.into();
        self
    }

    pub fn office_binary(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.office_binary = path.into();
        self
    }

    pub fn pdfium_library(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.pdfium_library = Some(path.into());
        self
    }

    pub fn scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.scratch_dir = Some(dir.into());
        self
    }

    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn progress_callback(mut self, cb: ProgressCallback) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, ConvertError> {
        let c = &self.config;
        if !(c.image_pdf_dpi.is_finite() && c.image_pdf_dpi >= 1.0) {
            return Err(ConvertError::InvalidConfig(format!(
                "image PDF resolution must be at least 1 DPI, got {}",
                c.image_pdf_dpi
            )));
        }
        if c.ocr_language.trim().is_empty() {
            return Err(ConvertError::InvalidConfig(
                "OCR language must not be empty".into(),
            ));
        }
        if c.office_binary.as_os_str().is_empty() {
            return Err(ConvertError::InvalidConfig(
                "office host binary must not be empty".into(),
            ));
        }
        if let Some(dir) = &c.scratch_dir {
            if !dir.is_dir() {
                return Err(ConvertError::InvalidConfig(format!(
                    "scratch directory '{}' does not exist",
                    dir.display()
                )));
            }
        }
        Ok(self.config)
    }
}
