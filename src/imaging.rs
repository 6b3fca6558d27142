//! Raster helpers shared by the image strategies.
//!
//! Formats without alpha support (PDF image XObjects as written here, OCR
//! input) turn transparent pixels black. Everything that embeds a
//! user-supplied image therefore goes through [`flatten_alpha`] first, which
//! composites onto opaque white.

use crate::error::ConvertError;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

const DECODER: &str = "image decoder";

/// Decode an image file, format chosen by its extension.
pub fn open(path: &Path) -> Result<DynamicImage, ConvertError> {
    let img = image::open(path).map_err(|e| ConvertError::engine(DECODER, e))?;
    debug!(
        "Decoded {} → {}x{} {:?}",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img)
}

/// Composite an image with alpha onto opaque white. Images without an alpha
/// channel are returned unchanged.
pub fn flatten_alpha(img: DynamicImage) -> DynamicImage {
    if !img.color().has_alpha() {
        return img;
    }
    let rgba = img.to_rgba8();
    let mut out = RgbImage::new(rgba.width(), rgba.height());
    for (x, y, px) in rgba.enumerate_pixels() {
        let [r, g, b, a] = px.0;
        out.put_pixel(x, y, Rgb([over_white(r, a), over_white(g, a), over_white(b, a)]));
    }
    debug!("Flattened alpha channel onto white");
    DynamicImage::ImageRgb8(out)
}

/// `c·α + 255·(1−α)` in integer arithmetic, rounded.
fn over_white(c: u8, a: u8) -> u8 {
    let (c, a) = (c as u32, a as u32);
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

/// PNG-encode an image in memory.
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, ConvertError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| ConvertError::engine("PNG encoder", e))?;
    Ok(buf)
}

/// An image ready to be embedded in an OOXML package.
pub struct EmbeddedImage {
    pub bytes: Vec<u8>,
    /// Part extension, `png` or `jpeg`.
    pub extension: &'static str,
    pub width: u32,
    pub height: u32,
}

impl EmbeddedImage {
    /// Load `path` for embedding. Opaque JPEG/PNG bytes are kept as-is;
    /// anything with alpha is flattened and re-encoded as PNG.
    pub fn from_path(path: &Path) -> Result<Self, ConvertError> {
        let img = open(path)?;
        let (width, height) = (img.width(), img.height());
        if img.color().has_alpha() {
            return Self::from_image(&flatten_alpha(img));
        }
        let extension = match ImageFormat::from_path(path) {
            Ok(ImageFormat::Jpeg) => "jpeg",
            Ok(ImageFormat::Png) => "png",
            _ => return Self::from_image(&img),
        };
        Ok(Self {
            bytes: std::fs::read(path)?,
            extension,
            width,
            height,
        })
    }

    /// Embed an already-decoded image as PNG.
    pub fn from_image(img: &DynamicImage) -> Result<Self, ConvertError> {
        Ok(Self {
            bytes: encode_png(img)?,
            extension: "png",
            width: img.width(),
            height: img.height(),
        })
    }
}
