//! Word documents: paragraph text in, headings and paragraphs out.

use super::{attr, clean_text, xml_error, Package};
use crate::error::ConvertError;
use docx_rs::{BreakType, Docx, Paragraph, Pic, Run, Style, StyleType};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::path::Path;
use tracing::debug;

const DOCUMENT_PART: &str = "word/document.xml";
const HEADING_STYLE: &str = "Heading1";

/// Text area of the default A4 section (twips × 635), in EMU.
const CONTENT_WIDTH_EMU: u64 = 8504 * 635;
/// Kept a little short of the full text height so the paragraph holding
/// the picture never spills onto a second page.
const CONTENT_HEIGHT_EMU: u64 = 12700 * 635;
const EMU_PER_PX: u64 = 9525;

/// Text of every body paragraph in document order, empty ones included.
///
/// `w:tab` reads as `\t`, `w:br`/`w:cr` as `\n`. Deleted revisions and field
/// instructions are skipped. Paragraphs nested in text boxes are returned
/// before the paragraph that anchors them.
pub fn read_paragraphs(path: &Path) -> Result<Vec<String>, ConvertError> {
    let xml = Package::open(path)?.part(DOCUMENT_PART)?;
    let paragraphs = parse_paragraphs(&xml)?;
    debug!("{}: {} paragraphs", path.display(), paragraphs.len());
    Ok(paragraphs)
}

fn parse_paragraphs(xml: &str) -> Result<Vec<String>, ConvertError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    // One open buffer per nesting level of w:p.
    let mut open: Vec<String> = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => open.push(String::new()),
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                let piece = match e.name().as_ref() {
                    b"w:p" => {
                        paragraphs.push(String::new());
                        continue;
                    }
                    b"w:tab" => "\t",
                    // Page and column breaks split nothing; line breaks do.
                    b"w:br" if attr(&e, b"w:type").is_some_and(|t| t != "textWrapping") => continue,
                    b"w:br" | b"w:cr" => "\n",
                    _ => continue,
                };
                if let Some(p) = open.last_mut() {
                    p.push_str(piece);
                }
            }
            Ok(Event::Text(t)) if in_text => {
                let text = t.unescape().map_err(|e| xml_error(DOCUMENT_PART, e))?;
                if let Some(p) = open.last_mut() {
                    p.push_str(&text);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    if let Some(p) = open.pop() {
                        paragraphs.push(p);
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_error(DOCUMENT_PART, e)),
            _ => {}
        }
    }
    Ok(paragraphs)
}

/// One unit of generated document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A `Heading 1` paragraph.
    Heading(String),
    /// A body paragraph. `\n` becomes a line break, `\t` a tab.
    Paragraph(String),
    /// A PNG shown inline, scaled down to fit the text area.
    Picture {
        png: Vec<u8>,
        width_px: u32,
        height_px: u32,
    },
    /// A hard page break.
    PageBreak,
}

/// Accumulates [`Block`]s and packs them into a `.docx`.
#[derive(Debug, Default)]
pub struct DocxBuilder {
    blocks: Vec<Block>,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(&mut self, text: &str) -> &mut Self {
        self.blocks.push(Block::Heading(text.to_string()));
        self
    }

    pub fn paragraph(&mut self, text: &str) -> &mut Self {
        self.blocks.push(Block::Paragraph(text.to_string()));
        self
    }

    /// Add a PNG-encoded picture of `width_px` × `height_px`.
    pub fn picture(&mut self, png: Vec<u8>, width_px: u32, height_px: u32) -> &mut Self {
        self.blocks.push(Block::Picture {
            png,
            width_px,
            height_px,
        });
        self
    }

    pub fn page_break(&mut self) -> &mut Self {
        self.blocks.push(Block::PageBreak);
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Write the document to `path`, replacing anything already there.
    pub fn write_to(&self, path: &Path) -> Result<(), ConvertError> {
        let mut docx = Docx::new().add_style(
            Style::new(HEADING_STYLE, StyleType::Paragraph)
                .name("Heading 1")
                .bold()
                .size(32),
        );
        for block in &self.blocks {
            docx = docx.add_paragraph(to_paragraph(block));
        }

        let file = File::create(path).map_err(|source| ConvertError::OutputWriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
        docx.build()
            .pack(file)
            .map_err(|e| ConvertError::engine("docx writer", e))?;
        debug!("Packed {} blocks into {}", self.blocks.len(), path.display());
        Ok(())
    }
}

fn to_paragraph(block: &Block) -> Paragraph {
    match block {
        Block::Heading(text) => Paragraph::new()
            .style(HEADING_STYLE)
            .add_run(text_run(text)),
        Block::Paragraph(text) => Paragraph::new().add_run(text_run(text)),
        Block::Picture {
            png,
            width_px,
            height_px,
        } => {
            let (w, h) = fit_to_text_area(*width_px, *height_px);
            let pic = Pic::new_with_dimensions(png.clone(), *width_px, *height_px).size(w, h);
            Paragraph::new().add_run(Run::new().add_image(pic))
        }
        Block::PageBreak => Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
    }
}

/// Size in EMU at 96 DPI, shrunk (never grown) to fit the text area with
/// the aspect ratio kept.
fn fit_to_text_area(width_px: u32, height_px: u32) -> (u32, u32) {
    let w = (width_px.max(1) as u64) * EMU_PER_PX;
    let h = (height_px.max(1) as u64) * EMU_PER_PX;
    // Compare w/h against the box ratio without floats.
    let (w, h) = if w * CONTENT_HEIGHT_EMU > h * CONTENT_WIDTH_EMU {
        if w <= CONTENT_WIDTH_EMU {
            (w, h)
        } else {
            (CONTENT_WIDTH_EMU, h * CONTENT_WIDTH_EMU / w)
        }
    } else if h <= CONTENT_HEIGHT_EMU {
        (w, h)
    } else {
        (w * CONTENT_HEIGHT_EMU / h, CONTENT_HEIGHT_EMU)
    };
    (w.max(1) as u32, h.max(1) as u32)
}

fn text_run(text: &str) -> Run {
    let text = clean_text(text);
    let mut run = Run::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        for (j, piece) in line.split('\t').enumerate() {
            if j > 0 {
                run = run.add_tab();
            }
            if !piece.is_empty() {
                run = run.add_text(piece);
            }
        }
    }
    run
}
