//! PDF collaborator: bind pdfium, rasterise pages, pull their text.
//!
//! A `Pdfium` binding is created per call and dropped before returning, so
//! no library handle or open document outlives a conversion.
//!
//! ## Library lookup
//!
//! First match wins:
//! 1. [`ConversionConfig::pdfium_library`]
//! 2. `PDFIUM_LIB_PATH`
//! 3. the platform's system library search path

use crate::config::ConversionConfig;
use crate::error::ConvertError;
use image::DynamicImage;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

const ENGINE: &str = "pdfium";

/// Bind to libpdfium following the lookup order above.
pub fn bind(config: &ConversionConfig) -> Result<Pdfium, ConvertError> {
    let explicit = config
        .pdfium_library
        .clone()
        .or_else(|| std::env::var_os("PDFIUM_LIB_PATH").map(PathBuf::from));

    let bindings = match &explicit {
        Some(path) => Pdfium::bind_to_library(library_file(path)),
        None => Pdfium::bind_to_system_library(),
    }
    .map_err(|e| ConvertError::EngineUnavailable {
        engine: ENGINE,
        detail: match &explicit {
            Some(path) => format!("cannot load '{}': {e}", path.display()),
            None => format!(
                "{e}. Install libpdfium or set PDFIUM_LIB_PATH to the library file"
            ),
        },
    })?;

    Ok(Pdfium::new(bindings))
}

/// Accept either the library file itself or the directory holding it.
fn library_file(path: &Path) -> PathBuf {
    if path.is_dir() {
        Pdfium::pdfium_platform_library_name_at_path(path)
    } else {
        path.to_path_buf()
    }
}

/// Open `pdf_path` and hand the document to `f`.
///
/// pdfium documents borrow the binding, so the work happens inside the
/// closure and both are released when it returns.
fn with_document<T>(
    pdf_path: &Path,
    config: &ConversionConfig,
    f: impl FnOnce(&PdfDocument<'_>) -> Result<T, ConvertError>,
) -> Result<T, ConvertError> {
    let pdfium = bind(config)?;
    let password = config.password.as_deref();

    let document = pdfium
        .load_pdf_from_file(pdf_path, password)
        .map_err(|e| {
            let err_str = format!("{:?}", e);
            let detail = if err_str.contains("Password") || err_str.contains("password") {
                if password.is_some() {
                    format!("wrong password for '{}'", pdf_path.display())
                } else {
                    format!("'{}' is encrypted and requires a password", pdf_path.display())
                }
            } else {
                format!("cannot open '{}': {err_str}", pdf_path.display())
            };
            ConvertError::engine(ENGINE, detail)
        })?;

    info!("PDF loaded: {} pages", document.pages().len());
    f(&document)
}

/// One rendered page.
pub struct RenderedPage {
    /// 0-based.
    pub index: usize,
    pub total: usize,
    pub image: DynamicImage,
    /// The page's text layer, when requested. Line endings are `\n`.
    pub text: Option<String>,
}

/// Rasterise every page, handing each to `on_page` in page order.
///
/// Returns the number of pages rendered.
#[instrument(skip(config, on_page), fields(path = %pdf_path.display()))]
pub fn render_pages(
    pdf_path: &Path,
    config: &ConversionConfig,
    on_page: impl FnMut(RenderedPage) -> Result<(), ConvertError>,
) -> Result<usize, ConvertError> {
    rasterise(pdf_path, config, false, on_page)
}

/// Like [`render_pages`], with each page's text layer filled in.
#[instrument(skip(config, on_page), fields(path = %pdf_path.display()))]
pub fn render_pages_with_text(
    pdf_path: &Path,
    config: &ConversionConfig,
    on_page: impl FnMut(RenderedPage) -> Result<(), ConvertError>,
) -> Result<usize, ConvertError> {
    rasterise(pdf_path, config, true, on_page)
}

fn rasterise(
    pdf_path: &Path,
    config: &ConversionConfig,
    with_text: bool,
    mut on_page: impl FnMut(RenderedPage) -> Result<(), ConvertError>,
) -> Result<usize, ConvertError> {
    let max_pixels = i32::try_from(config.max_rendered_pixels).map_err(|_| {
        ConvertError::InvalidConfig(format!(
            "pixel cap {} is out of range",
            config.max_rendered_pixels
        ))
    })?;

    with_document(pdf_path, config, |document| {
        let pages = document.pages();
        let total = pages.len() as usize;

        let render_config = PdfRenderConfig::new()
            .set_target_width(max_pixels)
            .set_maximum_height(max_pixels);

        for (index, page) in pages.iter().enumerate() {
            let bitmap = page.render_with_config(&render_config).map_err(|e| {
                ConvertError::engine(ENGINE, format!("rasterisation failed for page {}: {e:?}", index + 1))
            })?;

            let image = bitmap.as_image();
            debug!(
                "Rendered page {} → {}x{} px",
                index + 1,
                image.width(),
                image.height()
            );

            let text = if with_text {
                let text = page.text().map_err(|e| {
                    ConvertError::engine(ENGINE, format!("text extraction failed for page {}: {e:?}", index + 1))
                })?;
                let text = text.all().replace("\r\n", "\n").replace('\r', "\n");
                debug!("Page {} → {} chars of text", index + 1, text.len());
                Some(text)
            } else {
                None
            };

            on_page(RenderedPage {
                index,
                total,
                image,
                text,
            })?;
        }

        Ok(total)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_explicit_library_is_unavailable() {
        let config = ConversionConfig::builder()
            .pdfium_library("/definitely/not/libpdfium.so")
            .build()
            .unwrap();
        match bind(&config) {
            Err(ConvertError::EngineUnavailable { engine, detail }) => {
                assert_eq!(engine, "pdfium");
                assert!(detail.contains("/definitely/not/libpdfium.so"), "got: {detail}");
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("bound to a library that does not exist"),
        }
    }

    #[test]
    fn oversized_pixel_cap_is_rejected_before_binding() {
        let mut config = ConversionConfig::default();
        config.max_rendered_pixels = u32::MAX;
        let err = render_pages(Path::new("missing.pdf"), &config, |_| Ok(())).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidConfig(_)), "got: {err}");
    }

    #[test]
    fn library_dir_resolves_to_platform_name() {
        let dir = tempfile::tempdir().unwrap();
        let file = library_file(dir.path());
        assert!(file.starts_with(dir.path()));
        assert!(file.to_string_lossy().contains("pdfium"));
    }
}
