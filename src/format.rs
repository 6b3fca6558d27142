//! Format resolution: file extension → [`Format`] → [`Strategy`].
//!
//! The extension is the only signal. Content is never sniffed, so a PNG
//! renamed to `.pdf` is handed to the PDF engine and fails there.
//!
//! The (source, target) table lives in [`Strategy::select`]. Every arm names
//! exactly one strategy and the match is exhaustive over both enums, so a new
//! format or target cannot be added without deciding what it maps to.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A source format recognised from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Pdf,
    Docx,
    /// Legacy binary Word. Only the automation host can read it.
    Doc,
    Pptx,
    /// `.jpg` or `.jpeg`
    Jpeg,
    Png,
}

impl Format {
    /// Map a bare extension (no dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Format::Pdf),
            "docx" => Some(Format::Docx),
            "doc" => Some(Format::Doc),
            "pptx" => Some(Format::Pptx),
            "jpg" | "jpeg" => Some(Format::Jpeg),
            "png" => Some(Format::Png),
            _ => None,
        }
    }

    /// Format of `path`, judged by its extension alone.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    pub fn is_image(self) -> bool {
        matches!(self, Format::Jpeg | Format::Png)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Format::Pdf => "pdf",
            Format::Docx => "docx",
            Format::Doc => "doc",
            Format::Pptx => "pptx",
            Format::Jpeg => "jpeg",
            Format::Png => "png",
        };
        f.write_str(s)
    }
}

/// The three conversion directions, one per CLI entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    Docx,
    Pdf,
    Pptx,
}

impl TargetFormat {
    /// Upper-case label used in status lines ("... to DOCX").
    pub fn label(self) -> &'static str {
        match self {
            TargetFormat::Docx => "DOCX",
            TargetFormat::Pdf => "PDF",
            TargetFormat::Pptx => "PPTX",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            TargetFormat::Docx => "docx",
            TargetFormat::Pdf => "pdf",
            TargetFormat::Pptx => "pptx",
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One concrete (source, target) conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// pdfium page text → DOCX paragraphs, one page per section.
    PdfToDocx,
    /// OCR the image, embed the recognised text.
    ImageToDocx,
    /// Slide titles and text shapes → headings and paragraphs.
    PptxToDocx,
    /// Word document printed to PDF by the automation host.
    WordToPdf,
    /// Presentation printed to PDF by the automation host.
    PptxToPdf,
    /// Image placed on a single PDF page, alpha flattened.
    ImageToPdf,
    /// Each rendered page becomes a full-bleed picture slide.
    PdfToPptx,
    /// The image becomes one full-bleed picture slide.
    ImageToPptx,
    /// Each non-empty paragraph becomes a title-only slide.
    DocxToPptx,
}

impl Strategy {
    /// The dispatch table. `None` means the pair is unsupported.
    pub fn select(source: Format, target: TargetFormat) -> Option<Self> {
        use Format::*;
        match (target, source) {
            (TargetFormat::Docx, Pdf) => Some(Strategy::PdfToDocx),
            (TargetFormat::Docx, Jpeg | Png) => Some(Strategy::ImageToDocx),
            (TargetFormat::Docx, Pptx) => Some(Strategy::PptxToDocx),
            (TargetFormat::Docx, Docx | Doc) => None,

            (TargetFormat::Pdf, Docx | Doc) => Some(Strategy::WordToPdf),
            (TargetFormat::Pdf, Pptx) => Some(Strategy::PptxToPdf),
            (TargetFormat::Pdf, Jpeg | Png) => Some(Strategy::ImageToPdf),
            (TargetFormat::Pdf, Pdf) => None,

            (TargetFormat::Pptx, Pdf) => Some(Strategy::PdfToPptx),
            (TargetFormat::Pptx, Jpeg | Png) => Some(Strategy::ImageToPptx),
            (TargetFormat::Pptx, Docx) => Some(Strategy::DocxToPptx),
            (TargetFormat::Pptx, Doc | Pptx) => None,
        }
    }

    /// Source extensions accepted for `target`, for help text.
    pub fn accepted_extensions(target: TargetFormat) -> &'static [&'static str] {
        match target {
            TargetFormat::Docx => &["pdf", "jpg", "jpeg", "png", "pptx"],
            TargetFormat::Pdf => &["docx", "doc", "pptx", "jpg", "jpeg", "png"],
            TargetFormat::Pptx => &["pdf", "jpg", "jpeg", "png", "docx"],
        }
    }

    /// Name of the external engine this strategy depends on.
    pub fn engine_name(self) -> &'static str {
        match self {
            Strategy::PdfToDocx | Strategy::PdfToPptx => "pdfium",
            Strategy::ImageToDocx => "tesseract",
            Strategy::WordToPdf | Strategy::PptxToPdf => "office host",
            Strategy::ImageToPdf => "printpdf",
            Strategy::PptxToDocx | Strategy::DocxToPptx | Strategy::ImageToPptx => "ooxml",
        }
    }
}

/// Resolve `path` for conversion to `target`.
///
/// Returns the detected [`Format`] and the [`Strategy`] that handles it, or
/// [`ConvertError::UnsupportedFormat`] with the lowercased extension.
pub fn resolve(path: &Path, target: TargetFormat) -> Result<(Format, Strategy), ConvertError> {
    let unsupported = || ConvertError::UnsupportedFormat {
        extension: dotted_extension(path),
        target,
    };
    let format = Format::from_path(path).ok_or_else(unsupported)?;
    let strategy = Strategy::select(format, target).ok_or_else(unsupported)?;
    Ok((format, strategy))
}

/// `.ext` in lowercase, or an empty string when there is no extension.
pub fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(Format::from_extension("PDF"), Some(Format::Pdf));
        assert_eq!(Format::from_extension("JpEg"), Some(Format::Jpeg));
        assert_eq!(Format::from_extension("jpg"), Some(Format::Jpeg));
        assert_eq!(Format::from_extension("txt"), None);
    }

    #[test]
    fn path_without_extension_is_unknown() {
        assert_eq!(Format::from_path(Path::new("/tmp/README")), None);
        assert_eq!(dotted_extension(Path::new("/tmp/README")), "");
    }

    #[test]
    fn table_matches_cli_surface() {
        let cases = [
            ("a.pdf", TargetFormat::Docx, Some(Strategy::PdfToDocx)),
            ("a.PNG", TargetFormat::Docx, Some(Strategy::ImageToDocx)),
            ("a.pptx", TargetFormat::Docx, Some(Strategy::PptxToDocx)),
            ("a.docx", TargetFormat::Docx, None),
            ("a.doc", TargetFormat::Pdf, Some(Strategy::WordToPdf)),
            ("a.docx", TargetFormat::Pdf, Some(Strategy::WordToPdf)),
            ("a.pptx", TargetFormat::Pdf, Some(Strategy::PptxToPdf)),
            ("a.jpg", TargetFormat::Pdf, Some(Strategy::ImageToPdf)),
            ("a.pdf", TargetFormat::Pdf, None),
            ("a.pdf", TargetFormat::Pptx, Some(Strategy::PdfToPptx)),
            ("a.jpeg", TargetFormat::Pptx, Some(Strategy::ImageToPptx)),
            ("a.docx", TargetFormat::Pptx, Some(Strategy::DocxToPptx)),
            ("a.doc", TargetFormat::Pptx, None),
        ];
        for (path, target, expected) in cases {
            let got = resolve(&PathBuf::from(path), target).ok().map(|(_, s)| s);
            assert_eq!(got, expected, "{path} → {target}");
        }
    }

    #[test]
    fn accepted_extensions_agree_with_table() {
        for target in [TargetFormat::Docx, TargetFormat::Pdf, TargetFormat::Pptx] {
            for ext in Strategy::accepted_extensions(target) {
                let format = Format::from_extension(ext).unwrap();
                assert!(
                    Strategy::select(format, target).is_some(),
                    "{ext} listed for {target} but has no strategy"
                );
            }
        }
    }

    #[test]
    fn unsupported_reports_lowercased_extension() {
        let err = resolve(Path::new("notes.TXT"), TargetFormat::Pdf).unwrap_err();
        match err {
            ConvertError::UnsupportedFormat { extension, target } => {
                assert_eq!(extension, ".txt");
                assert_eq!(target, TargetFormat::Pdf);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
