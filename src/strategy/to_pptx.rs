//! Strategies that produce a slide deck.

use super::Job;
use crate::engine::pdfium;
use crate::error::ConvertError;
use crate::imaging::{self, EmbeddedImage};
use crate::ooxml::{docx, pptx::PptxWriter};
use crate::progress::Progress;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One full-bleed picture slide per rendered page.
///
/// Each page is rasterised to a PNG in the conversion's scratch directory,
/// embedded, then deleted. The directory itself goes when the strategy
/// returns, so no raster survives a failure at any page.
pub(super) fn from_pdf(job: &Job<'_>) -> Result<usize, ConvertError> {
    let scratch = job.config.scratch()?;
    let mut deck = PptxWriter::create(job.staging)?;
    let mut progress: Option<Progress<'_>> = None;

    pdfium::render_pages(job.input, job.config, |page| {
        let progress = progress.get_or_insert_with(|| {
            Progress::start(job.config.progress_callback.as_ref(), page.total, "page")
        });

        let raster = RasterFile(scratch.path().join(format!("page-{:04}.png", page.index + 1)));
        std::fs::write(&raster.0, imaging::encode_png(&page.image)?)?;
        let image = EmbeddedImage {
            bytes: std::fs::read(&raster.0)?,
            extension: "png",
            width: page.image.width(),
            height: page.image.height(),
        };
        deck.add_picture_slide(&image)?;
        drop(raster);

        progress.step();
        Ok(())
    })?;

    let slides = deck.finish()?;
    info!("{slides} pages placed as slides");
    Ok(slides)
}

/// A single full-bleed picture slide.
pub(super) fn from_image(job: &Job<'_>) -> Result<usize, ConvertError> {
    let mut progress = Progress::start(job.config.progress_callback.as_ref(), 1, "image");
    let image = EmbeddedImage::from_path(job.input)?;

    let mut deck = PptxWriter::create(job.staging)?;
    deck.add_picture_slide(&image)?;
    progress.step();
    deck.finish()
}

/// One title-only slide per non-blank paragraph, in document order.
pub(super) fn from_docx(job: &Job<'_>) -> Result<usize, ConvertError> {
    let paragraphs: Vec<String> = docx::read_paragraphs(job.input)?
        .into_iter()
        .filter(|p| !p.trim().is_empty())
        .collect();
    let mut progress =
        Progress::start(job.config.progress_callback.as_ref(), paragraphs.len(), "slide");

    let mut deck = PptxWriter::create(job.staging)?;
    for paragraph in &paragraphs {
        deck.add_title_slide(paragraph)?;
        progress.step();
    }
    debug!("{} of the document's paragraphs became slides", deck.slide_count());
    deck.finish()
}

/// A scratch raster removed on drop.
struct RasterFile(PathBuf);

impl Drop for RasterFile {
    fn drop(&mut self) {
        remove_quietly(&self.0);
    }
}

fn remove_quietly(path: &Path) {
    if let Err(e) = std::fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            debug!("Could not remove {}: {e}", path.display());
        }
    }
}
