//! External collaborators.
//!
//! Each submodule wraps exactly one engine the crate does not implement
//! itself and converts its failures into [`crate::error::ConvertError`]
//! with the engine's message preserved.
//!
//! ```text
//! pdfium  ──  PDF page rendering and text extraction (libpdfium)
//! ocr     ──  text recognition (tesseract executable or libtesseract)
//! office  ──  headless LibreOffice as the document automation host
//! ```

pub mod ocr;
pub mod office;
pub mod pdfium;
