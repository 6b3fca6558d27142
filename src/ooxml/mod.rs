//! Office Open XML packages.
//!
//! DOCX and PPTX files are ZIP archives of XML parts. Reading walks the parts
//! with `quick-xml`; writing uses `docx-rs` for Word documents and emits the
//! PresentationML parts directly for slide decks.
//!
//! Only text survives the slide↔document pairs: slide titles, non-empty text
//! shapes and non-empty paragraphs. Formatting, images, tables and layout are
//! not carried across.

pub mod docx;
pub mod pptx;

use crate::error::ConvertError;
use quick_xml::events::BytesStart;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

const ENGINE: &str = "ooxml";

/// An opened OOXML package. The archive handle closes on drop.
pub(crate) struct Package {
    archive: ZipArchive<File>,
    path: String,
}

impl Package {
    pub(crate) fn open(path: &Path) -> Result<Self, ConvertError> {
        let file = File::open(path)?;
        let archive = ZipArchive::new(file).map_err(|e| {
            ConvertError::engine(ENGINE, format!("'{}' is not an OOXML package: {e}", path.display()))
        })?;
        Ok(Self {
            archive,
            path: path.display().to_string(),
        })
    }

    /// Read a part as UTF-8 text.
    pub(crate) fn part(&mut self, name: &str) -> Result<String, ConvertError> {
        let mut entry = self.archive.by_name(name).map_err(|e| {
            ConvertError::engine(ENGINE, format!("'{}' has no part {name}: {e}", self.path))
        })?;
        let mut xml = String::new();
        entry.read_to_string(&mut xml)?;
        Ok(xml)
    }
}

/// Attribute value by qualified name.
pub(crate) fn attr(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(Result::ok)
        .find(|a| a.key.as_ref() == key)
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}

pub(crate) fn xml_error(part: &str, e: impl std::fmt::Display) -> ConvertError {
    ConvertError::engine(ENGINE, format!("malformed {part}: {e}"))
}

/// Escape text for element content, dropping characters XML 1.0 forbids
/// (form feeds from OCR output, stray NULs from PDF text layers).
pub(crate) fn xml_text(s: &str) -> String {
    let cleaned = clean_text(s);
    quick_xml::escape::escape(cleaned.as_str()).into_owned()
}

/// Strip control characters other than tab and newline.
pub(crate) fn clean_text(s: &str) -> String {
    s.chars()
        .filter(|&c| c == '\t' || c == '\n' || !c.is_control())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xml_text_escapes_and_strips_controls() {
        assert_eq!(xml_text("a < b & \u{c}c"), "a &lt; b &amp; c");
        assert_eq!(clean_text("x\ty\nz\u{0}"), "x\ty\nz");
    }

    #[test]
    fn open_rejects_non_zip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.docx");
        std::fs::write(&path, b"plain text").unwrap();
        let err = match Package::open(&path) {
            Err(e) => e,
            Ok(_) => panic!("plain text opened as a package"),
        };
        assert!(err.to_string().contains("not an OOXML package"), "got: {err}");
    }
}
