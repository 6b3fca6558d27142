//! Strategies that produce a Word document.

use super::Job;
use crate::engine::{ocr, pdfium};
use crate::error::ConvertError;
use crate::imaging;
use crate::ooxml::{docx::DocxBuilder, pptx};
use crate::progress::Progress;
use tracing::{debug, warn};

/// Each page becomes its rendered image, which keeps the layout, followed
/// by the page's text layer as one paragraph per non-blank line so the
/// content stays searchable and editable. Page breaks separate pages.
pub(super) fn from_pdf(job: &Job<'_>) -> Result<usize, ConvertError> {
    let mut doc = DocxBuilder::new();
    let mut progress: Option<Progress<'_>> = None;

    let pages = pdfium::render_pages_with_text(job.input, job.config, |page| {
        let progress = progress.get_or_insert_with(|| {
            Progress::start(job.config.progress_callback.as_ref(), page.total, "page")
        });

        if page.index > 0 {
            doc.page_break();
        }
        let image = imaging::flatten_alpha(page.image);
        doc.picture(imaging::encode_png(&image)?, image.width(), image.height());

        let text = page.text.unwrap_or_default();
        let mut lines = 0;
        for line in text.lines().map(str::trim_end).filter(|l| !l.trim().is_empty()) {
            doc.paragraph(line);
            lines += 1;
        }
        if lines == 0 {
            debug!("Page {} has no text layer; image only", page.index + 1);
        }
        progress.step();
        Ok(())
    })?;

    doc.write_to(job.staging)?;
    Ok(pages)
}

/// OCR the image and embed the recognised text as a single paragraph.
pub(super) fn from_image(job: &Job<'_>) -> Result<usize, ConvertError> {
    let mut progress = Progress::start(job.config.progress_callback.as_ref(), 1, "image");
    let scratch = job.config.scratch()?;

    let image = imaging::flatten_alpha(imaging::open(job.input)?);
    let text = ocr::recognizer(job.config, scratch.path()).recognize(&image)?;
    let text = text.trim_end();
    if text.trim().is_empty() {
        warn!("No text recognised in {}", job.input.display());
    }

    let mut doc = DocxBuilder::new();
    doc.paragraph(text);
    doc.write_to(job.staging)?;
    progress.step();
    Ok(1)
}

/// Slide text → title as a heading, other text shapes as body paragraphs,
/// a page break between slides.
pub(super) fn from_pptx(job: &Job<'_>) -> Result<usize, ConvertError> {
    let slides = pptx::read_slides(job.input)?;
    let mut progress = Progress::start(job.config.progress_callback.as_ref(), slides.len(), "slide");

    let mut doc = DocxBuilder::new();
    for (idx, slide) in slides.iter().enumerate() {
        if idx > 0 {
            doc.page_break();
        }
        if let Some(title) = &slide.title {
            doc.heading(title.trim());
        }
        for text in &slide.body {
            for line in text.lines().map(str::trim_end).filter(|l| !l.trim().is_empty()) {
                doc.paragraph(line);
            }
        }
        debug!(
            "Slide {}: title={} body shapes={}",
            idx + 1,
            slide.title.is_some(),
            slide.body.len()
        );
        progress.step();
    }

    doc.write_to(job.staging)?;
    Ok(slides.len())
}
