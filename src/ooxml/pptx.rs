//! PowerPoint decks: slide text in, picture and title slides out.
//!
//! The writer streams a minimal PresentationML package: one master, a blank
//! layout for picture slides, a title-only layout for text slides and a
//! default theme. Slides and their media are written as they are added, so a
//! long PDF never holds more than one rendered page in memory.

use super::{attr, xml_error, xml_text, Package};
use crate::error::ConvertError;
use crate::imaging::EmbeddedImage;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Slide width in EMU (10 in).
pub const SLIDE_WIDTH: u64 = 9_144_000;
/// Slide height in EMU (7.5 in).
pub const SLIDE_HEIGHT: u64 = 6_858_000;

const PRESENTATION_PART: &str = "ppt/presentation.xml";
const PRESENTATION_RELS: &str = "ppt/_rels/presentation.xml.rels";

// ── Reading ──────────────────────────────────────────────────────────────────

/// Text content of one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideText {
    /// Text of the title placeholder, when the slide has a non-blank one.
    pub title: Option<String>,
    /// Every other shape with non-blank text, in shape-tree order.
    pub body: Vec<String>,
}

/// Read every slide's text in presentation order.
pub fn read_slides(path: &Path) -> Result<Vec<SlideText>, ConvertError> {
    let mut package = Package::open(path)?;
    let parts = slide_parts(&mut package)?;
    let mut slides = Vec::with_capacity(parts.len());
    for part in &parts {
        let xml = package.part(part)?;
        slides.push(parse_slide(&xml, part)?);
    }
    debug!("{}: {} slides", path.display(), slides.len());
    Ok(slides)
}

/// Slide part names in the order `p:sldIdLst` lists them.
fn slide_parts(package: &mut Package) -> Result<Vec<String>, ConvertError> {
    let presentation = package.part(PRESENTATION_PART)?;
    let mut rel_ids = Vec::new();
    let mut reader = Reader::from_str(&presentation);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e) | Event::Empty(e)) if e.name().as_ref() == b"p:sldId" => {
                if let Some(id) = attr(&e, b"r:id") {
                    rel_ids.push(id);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_error(PRESENTATION_PART, e)),
            _ => {}
        }
    }

    let rels = package.part(PRESENTATION_RELS)?;
    let mut targets = Vec::new();
    let mut reader = Reader::from_str(&rels);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e) | Event::Empty(e)) if e.name().as_ref() == b"Relationship" => {
                if let (Some(id), Some(target)) = (attr(&e, b"Id"), attr(&e, b"Target")) {
                    targets.push((id, target));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_error(PRESENTATION_RELS, e)),
            _ => {}
        }
    }

    rel_ids
        .iter()
        .map(|id| {
            targets
                .iter()
                .find(|(rid, _)| rid == id)
                .map(|(_, target)| part_name(target))
                .ok_or_else(|| xml_error(PRESENTATION_RELS, format!("no target for slide {id}")))
        })
        .collect()
}

/// Resolve a relationship target from `ppt/_rels/presentation.xml.rels`.
fn part_name(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("ppt/{target}"),
    }
}

#[derive(Default)]
struct Shape {
    is_title: bool,
    paragraphs: Vec<String>,
    paragraph: Option<String>,
}

fn parse_slide(xml: &str, part: &str) -> Result<SlideText, ConvertError> {
    let mut reader = Reader::from_str(xml);
    let mut slide = SlideText::default();
    let mut shape: Option<Shape> = None;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match (e.name().as_ref(), shape.as_mut()) {
                (b"p:sp", _) => shape = Some(Shape::default()),
                (b"p:ph", Some(s)) => s.is_title |= is_title_placeholder(attr(&e, b"type")),
                (b"a:p", Some(s)) => s.paragraph = Some(String::new()),
                (b"a:t", Some(_)) => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match (e.name().as_ref(), shape.as_mut()) {
                (b"p:ph", Some(s)) => s.is_title |= is_title_placeholder(attr(&e, b"type")),
                (b"a:p", Some(s)) => s.paragraphs.push(String::new()),
                (b"a:br", Some(s)) => {
                    if let Some(p) = s.paragraph.as_mut() {
                        p.push('\n');
                    }
                }
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t.unescape().map_err(|e| xml_error(part, e))?;
                if let Some(p) = shape.as_mut().and_then(|s| s.paragraph.as_mut()) {
                    p.push_str(&text);
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"a:t" => in_text = false,
                b"a:p" => {
                    if let Some(s) = shape.as_mut() {
                        if let Some(p) = s.paragraph.take() {
                            s.paragraphs.push(p);
                        }
                    }
                }
                b"p:sp" => {
                    if let Some(s) = shape.take() {
                        let text = s.paragraphs.join("\n");
                        if text.trim().is_empty() {
                            continue;
                        }
                        if s.is_title && slide.title.is_none() {
                            slide.title = Some(text);
                        } else {
                            slide.body.push(text);
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_error(part, e)),
            _ => {}
        }
    }
    Ok(slide)
}

fn is_title_placeholder(kind: Option<String>) -> bool {
    matches!(kind.as_deref(), Some("title" | "ctrTitle"))
}

// ── Writing ──────────────────────────────────────────────────────────────────

enum Layout {
    Blank = 1,
    TitleOnly = 2,
}

/// Streams slides into a new `.pptx` file.
///
/// Call [`PptxWriter::finish`] to write the package structure; a writer
/// dropped without finishing leaves an unreadable file behind, which the
/// conversion driver discards.
pub struct PptxWriter {
    zip: ZipWriter<File>,
    slides: usize,
    options: SimpleFileOptions,
}

impl PptxWriter {
    pub fn create(path: &Path) -> Result<Self, ConvertError> {
        let file = File::create(path).map_err(|source| ConvertError::OutputWriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            zip: ZipWriter::new(file),
            slides: 0,
            options: SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slides
    }

    /// Add a slide showing `image` stretched over the whole slide.
    pub fn add_picture_slide(&mut self, image: &EmbeddedImage) -> Result<(), ConvertError> {
        let n = self.slides + 1;
        let media = format!("image{n}.{}", image.extension);
        self.put(&format!("ppt/media/{media}"), &image.bytes)?;
        self.put(
            &format!("ppt/slides/_rels/slide{n}.xml.rels"),
            slide_rels(Layout::Blank, Some(&media)).as_bytes(),
        )?;
        self.put(&format!("ppt/slides/slide{n}.xml"), picture_slide(n).as_bytes())?;
        debug!(
            "Slide {n}: picture {}x{} ({} bytes)",
            image.width,
            image.height,
            image.bytes.len()
        );
        self.slides = n;
        Ok(())
    }

    /// Add a title-only slide. Trailing whitespace is trimmed; each line of
    /// `title` becomes its own paragraph.
    pub fn add_title_slide(&mut self, title: &str) -> Result<(), ConvertError> {
        let n = self.slides + 1;
        self.put(
            &format!("ppt/slides/_rels/slide{n}.xml.rels"),
            slide_rels(Layout::TitleOnly, None).as_bytes(),
        )?;
        self.put(&format!("ppt/slides/slide{n}.xml"), title_slide(title.trim_end()).as_bytes())?;
        debug!("Slide {n}: title ({} chars)", title.len());
        self.slides = n;
        Ok(())
    }

    /// Write the package structure and close the archive. Returns the slide count.
    pub fn finish(mut self) -> Result<usize, ConvertError> {
        let n = self.slides;
        self.put("[Content_Types].xml", content_types(n).as_bytes())?;
        self.put("_rels/.rels", ROOT_RELS.as_bytes())?;
        self.put("docProps/core.xml", CORE_PROPS.as_bytes())?;
        self.put("docProps/app.xml", app_props(n).as_bytes())?;
        self.put(PRESENTATION_PART, presentation(n).as_bytes())?;
        self.put(PRESENTATION_RELS, presentation_rels(n).as_bytes())?;
        self.put("ppt/slideMasters/slideMaster1.xml", SLIDE_MASTER.as_bytes())?;
        self.put("ppt/slideMasters/_rels/slideMaster1.xml.rels", MASTER_RELS.as_bytes())?;
        self.put("ppt/slideLayouts/slideLayout1.xml", LAYOUT_BLANK.as_bytes())?;
        self.put("ppt/slideLayouts/slideLayout2.xml", LAYOUT_TITLE_ONLY.as_bytes())?;
        for i in 1..=2 {
            self.put(&format!("ppt/slideLayouts/_rels/slideLayout{i}.xml.rels"), LAYOUT_RELS.as_bytes())?;
        }
        self.put("ppt/theme/theme1.xml", THEME.as_bytes())?;

        self.zip
            .finish()
            .map_err(|e| ConvertError::engine("pptx writer", e))?;
        debug!("Packed {n} slides");
        Ok(n)
    }

    fn put(&mut self, name: &str, bytes: &[u8]) -> Result<(), ConvertError> {
        self.zip
            .start_file(name, self.options)
            .map_err(|e| ConvertError::engine("pptx writer", format!("{name}: {e}")))?;
        self.zip.write_all(bytes)?;
        Ok(())
    }
}

const NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;
const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_TYPE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const CT_PML: &str = "application/vnd.openxmlformats-officedocument.presentationml";

/// Empty group header every `p:spTree` starts with.
const TREE_HEADER: &str = r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#;

fn slide_rels(layout: Layout, media: Option<&str>) -> String {
    let mut rels = format!(
        r#"{XML_DECL}<Relationships xmlns="{REL_NS}"><Relationship Id="rId1" Type="{REL_TYPE}/slideLayout" Target="../slideLayouts/slideLayout{}.xml"/>"#,
        layout as u8
    );
    if let Some(media) = media {
        rels.push_str(&format!(
            r#"<Relationship Id="rId2" Type="{REL_TYPE}/image" Target="../media/{media}"/>"#
        ));
    }
    rels.push_str("</Relationships>");
    rels
}

fn picture_slide(n: usize) -> String {
    format!(
        r#"{XML_DECL}<p:sld {NS}><p:cSld><p:spTree>{TREE_HEADER}<p:pic><p:nvPicPr><p:cNvPr id="2" name="Picture {n}"/><p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="rId2"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{SLIDE_WIDTH}" cy="{SLIDE_HEIGHT}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic></p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#
    )
}

fn title_slide(title: &str) -> String {
    let paragraphs: String = title
        .split('\n')
        .map(|line| {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                r#"<a:p><a:endParaRPr lang="en-US"/></a:p>"#.to_string()
            } else {
                format!(
                    r#"<a:p><a:r><a:rPr lang="en-US" dirty="0"/><a:t>{}</a:t></a:r></a:p>"#,
                    xml_text(line)
                )
            }
        })
        .collect();
    format!(
        r#"{XML_DECL}<p:sld {NS}><p:cSld><p:spTree>{TREE_HEADER}<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/>{paragraphs}</p:txBody></p:sp></p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>"#
    )
}

fn content_types(slides: usize) -> String {
    let mut xml = format!(
        r#"{XML_DECL}<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Default Extension="png" ContentType="image/png"/><Default Extension="jpeg" ContentType="image/jpeg"/><Override PartName="/{PRESENTATION_PART}" ContentType="{CT_PML}.presentation.main+xml"/><Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="{CT_PML}.slideMaster+xml"/><Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="{CT_PML}.slideLayout+xml"/><Override PartName="/ppt/slideLayouts/slideLayout2.xml" ContentType="{CT_PML}.slideLayout+xml"/><Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/><Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#
    );
    for n in 1..=slides {
        xml.push_str(&format!(
            r#"<Override PartName="/ppt/slides/slide{n}.xml" ContentType="{CT_PML}.slide+xml"/>"#
        ));
    }
    xml.push_str("</Types>");
    xml
}

fn presentation(slides: usize) -> String {
    let mut ids = String::new();
    if slides > 0 {
        ids.push_str("<p:sldIdLst>");
        for n in 1..=slides {
            ids.push_str(&format!(r#"<p:sldId id="{}" r:id="rId{}"/>"#, 255 + n, n + 2));
        }
        ids.push_str("</p:sldIdLst>");
    }
    format!(
        r#"{XML_DECL}<p:presentation {NS} saveSubsetFonts="1"><p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>{ids}<p:sldSz cx="{SLIDE_WIDTH}" cy="{SLIDE_HEIGHT}" type="screen4x3"/><p:notesSz cx="{SLIDE_HEIGHT}" cy="{SLIDE_WIDTH}"/></p:presentation>"#
    )
}

fn presentation_rels(slides: usize) -> String {
    let mut xml = format!(
        r#"{XML_DECL}<Relationships xmlns="{REL_NS}"><Relationship Id="rId1" Type="{REL_TYPE}/slideMaster" Target="slideMasters/slideMaster1.xml"/><Relationship Id="rId2" Type="{REL_TYPE}/theme" Target="theme/theme1.xml"/>"#
    );
    for n in 1..=slides {
        xml.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="{REL_TYPE}/slide" Target="slides/slide{n}.xml"/>"#,
            n + 2
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

fn app_props(slides: usize) -> String {
    format!(
        r#"{XML_DECL}<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties"><Application>docshift</Application><Slides>{slides}</Slides></Properties>"#
    )
}

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/><Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/></Relationships>"#;

const CORE_PROPS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"><dc:creator>docshift</dc:creator></cp:coreProperties>"#;

const SLIDE_MASTER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sldMaster xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr><p:sp><p:nvSpPr><p:cNvPr id="2" name="Title Placeholder 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr><a:xfrm><a:off x="457200" y="274638"/><a:ext cx="8229600" cy="1143000"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr><p:txBody><a:bodyPr anchor="ctr"/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp></p:spTree></p:cSld><p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/><p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/><p:sldLayoutId id="2147483650" r:id="rId2"/></p:sldLayoutIdLst><p:txStyles><p:titleStyle><a:lvl1pPr algn="ctr"><a:defRPr sz="4400"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mj-lt"/><a:ea typeface="+mj-ea"/><a:cs typeface="+mj-cs"/></a:defRPr></a:lvl1pPr></p:titleStyle><p:bodyStyle><a:lvl1pPr><a:defRPr sz="3200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl1pPr></p:bodyStyle><p:otherStyle><a:lvl1pPr><a:defRPr sz="1800"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill></a:defRPr></a:lvl1pPr></p:otherStyle></p:txStyles></p:sldMaster>"#;

const MASTER_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout2.xml"/><Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme" Target="../theme/theme1.xml"/></Relationships>"#;

const LAYOUT_BLANK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="blank" preserve="1"><p:cSld name="Blank"><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr></p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#;

const LAYOUT_TITLE_ONLY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" type="titleOnly" preserve="1"><p:cSld name="Title Only"><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr><p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/><p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp></p:spTree></p:cSld><p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>"#;

const LAYOUT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="../slideMasters/slideMaster1.xml"/></Relationships>"#;

const THEME: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme"><a:themeElements><a:clrScheme name="Office"><a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1><a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1><a:dk2><a:srgbClr val="1F497D"/></a:dk2><a:lt2><a:srgbClr val="EEECE1"/></a:lt2><a:accent1><a:srgbClr val="4F81BD"/></a:accent1><a:accent2><a:srgbClr val="C0504D"/></a:accent2><a:accent3><a:srgbClr val="9BBB59"/></a:accent3><a:accent4><a:srgbClr val="8064A2"/></a:accent4><a:accent5><a:srgbClr val="4BACC6"/></a:accent5><a:accent6><a:srgbClr val="F79646"/></a:accent6><a:hlink><a:srgbClr val="0000FF"/></a:hlink><a:folHlink><a:srgbClr val="800080"/></a:folHlink></a:clrScheme><a:fontScheme name="Office"><a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont><a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont></a:fontScheme><a:fmtScheme name="Office"><a:fillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:fillStyleLst><a:lnStyleLst><a:ln w="9525"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="25400"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln><a:ln w="38100"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln></a:lnStyleLst><a:effectStyleLst><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle><a:effectStyle><a:effectLst/></a:effectStyle></a:effectStyleLst><a:bgFillStyleLst><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:bgFillStyleLst></a:fmtScheme></a:themeElements></a:theme>"#;
