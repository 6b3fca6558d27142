//! The nine conversion strategies, grouped by target.
//!
//! Every strategy has the same shape: read `job.input`, write the finished
//! artifact to `job.staging`, return how many pages, slides or images went
//! into it. Staging is a temporary file the driver commits only on success,
//! so a strategy may leave it half-written when it fails.
//!
//! Strategies that need scratch files (rendered pages, OCR input, the office
//! host's export directory) take a [`tempfile::TempDir`] from
//! [`ConversionConfig::scratch`] and let it drop on every exit path.

mod to_docx;
mod to_pdf;
mod to_pptx;

use crate::config::ConversionConfig;
use crate::error::ConvertError;
use crate::format::Strategy;
use std::path::Path;
use tracing::info;

/// Inputs shared by every strategy.
pub(crate) struct Job<'a> {
    pub input: &'a Path,
    pub staging: &'a Path,
    pub config: &'a ConversionConfig,
}

/// Run `strategy`, returning the number of units written.
pub(crate) fn run(strategy: Strategy, job: &Job<'_>) -> Result<usize, ConvertError> {
    info!(
        "Running {:?} via {} on {}",
        strategy,
        strategy.engine_name(),
        job.input.display()
    );
    match strategy {
        Strategy::PdfToDocx => to_docx::from_pdf(job),
        Strategy::ImageToDocx => to_docx::from_image(job),
        Strategy::PptxToDocx => to_docx::from_pptx(job),
        Strategy::WordToPdf => to_pdf::from_office(job, "document"),
        Strategy::PptxToPdf => to_pdf::from_office(job, "presentation"),
        Strategy::ImageToPdf => to_pdf::from_image(job),
        Strategy::PdfToPptx => to_pptx::from_pdf(job),
        Strategy::ImageToPptx => to_pptx::from_image(job),
        Strategy::DocxToPptx => to_pptx::from_docx(job),
    }
}
