//! # docshift
//!
//! Convert documents between PDF, DOCX, PPTX and raster images.
//!
//! Each (source, target) pair maps to exactly one strategy, chosen from the
//! input's file extension. Strategies hand the real work to an engine:
//!
//! ```text
//!                 ┌──────────── to DOCX ─────────────┬──── to PDF ────┬──────── to PPTX ────────┐
//!  pdf            │ pdfium render + text → pages     │       -        │ pdfium render → slides  │
//!  jpg/jpeg/png   │ tesseract OCR → paragraph        │ printpdf page  │ full-bleed slide        │
//!  pptx           │ slide titles + text → headings   │ office host    │           -             │
//!  docx           │               -                  │ office host    │ paragraphs → slides     │
//!  doc            │               -                  │ office host    │           -             │
//!                 └──────────────────────────────────┴────────────────┴─────────────────────────┘
//! ```
//!
//! Conversions are synchronous and self-contained: nothing is cached between
//! calls, external hosts are started and torn down per conversion, and the
//! destination file appears only once the output is complete.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docshift::{run, ConversionConfig, TargetFormat};
//!
//! let outcome = run("slides.pptx", "slides.docx", TargetFormat::Docx, &ConversionConfig::default());
//! println!("{}", outcome.message());
//! std::process::exit(outcome.exit_code());
//! ```
//!
//! ## Fidelity
//!
//! Slide↔document conversions carry text only: slide titles, non-empty text
//! shapes and non-empty paragraphs. Formatting, images, tables and layout are
//! dropped. PDF→DOCX keeps each page as a rendered picture, followed by
//! the page's text layer line by line.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | The `convert_to_{docx,pdf,pptx}` binaries (clap + anyhow + tracing-subscriber + indicatif) |
//! | `tesseract` | off | Link libtesseract via `leptess` instead of running the `tesseract` executable |
//!
//! ## External engines
//!
//! | Engine | Used for | Located by |
//! |--------|----------|------------|
//! | libpdfium | PDF input | `pdfium_library`, `PDFIUM_LIB_PATH`, system path |
//! | tesseract | image → DOCX | `tesseract_binary` (default `tesseract`) |
//! | LibreOffice | DOCX/DOC/PPTX → PDF | `office_binary` (default `soffice`) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod engine;
pub mod error;
pub mod format;
pub mod imaging;
pub mod ooxml;
pub mod output;
pub mod progress;
mod strategy;

#[cfg(feature = "cli")]
pub mod cli;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use convert::{convert, execute, run, ConversionRequest};
pub use error::{ConvertError, ErrorKind};
pub use format::{Format, Strategy, TargetFormat};
pub use output::{ConversionOutcome, ConversionReport};
pub use progress::{ConversionProgressCallback, NoopProgressCallback, ProgressCallback};
