//! Strategies that produce a PDF.

use super::Job;
use crate::engine::office::OfficeHost;
use crate::error::ConvertError;
use crate::imaging;
use crate::progress::Progress;
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Pt, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Print a Word document or presentation to PDF through the office host.
pub(super) fn from_office(job: &Job<'_>, what: &str) -> Result<usize, ConvertError> {
    let mut progress = Progress::start(job.config.progress_callback.as_ref(), 1, what);
    let outdir = job.config.scratch()?;
    let host = OfficeHost::start(job.config)?;

    let produced = host.export_pdf(job.input, outdir.path())?;
    std::fs::copy(&produced, job.staging).map_err(|source| ConvertError::OutputWriteFailed {
        path: job.staging.to_path_buf(),
        source,
    })?;
    info!("Office host exported {what} {}", job.input.display());
    progress.step();
    Ok(1)
}

/// Place the image on a single page sized to its pixels at
/// `config.image_pdf_dpi`. Transparent areas become white.
#[instrument(skip(job), fields(input = %job.input.display()))]
pub(super) fn from_image(job: &Job<'_>) -> Result<usize, ConvertError> {
    let mut progress = Progress::start(job.config.progress_callback.as_ref(), 1, "image");
    let dpi = job.config.image_pdf_dpi;

    let raw = page_raster(job.input)?;
    let (width, height) = (raw.width, raw.height);

    let title = job
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut doc = PdfDocument::new(&title);
    let xobject = doc.add_image(&raw);

    let page_w = Mm(width as f32 / dpi * 25.4);
    let page_h = Mm(height as f32 / dpi * 25.4);
    let ops = vec![Op::UseXobject {
        id: xobject,
        transform: XObjectTransform {
            translate_x: Some(Pt(0.0)),
            translate_y: Some(Pt(0.0)),
            scale_x: Some(1.0),
            scale_y: Some(1.0),
            dpi: Some(dpi),
            rotate: None,
        },
    }];
    doc.with_pages(vec![PdfPage::new(page_w, page_h, ops)]);

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    for w in &warnings {
        warn!("printpdf: {w:?}");
    }
    debug!("Page {:.1}x{:.1} mm, {} bytes", page_w.0, page_h.0, bytes.len());

    std::fs::write(job.staging, &bytes).map_err(|source| ConvertError::OutputWriteFailed {
        path: job.staging.to_path_buf(),
        source,
    })?;
    progress.step();
    Ok(1)
}

/// Decoded RGB pixels for the page, alpha composited onto white.
fn page_raster(path: &Path) -> Result<RawImage, ConvertError> {
    let rgb = imaging::flatten_alpha(imaging::open(path)?).to_rgb8();
    Ok(RawImage {
        width: rgb.width() as usize,
        height: rgb.height() as usize,
        pixels: RawImageData::U8(rgb.into_raw()),
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    })
}
