use std::{io::Cursor, path::Path};

use anyhow::Context as _;
use image::{ImageEncoder as _, buffer::ConvertBuffer as _};

use crate::{
    foundation::{
        core::OutputFormat,
        error::{ConcatError, ConcatResult},
    },
};

/// JPEG quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Encoder knobs.
pub struct EncodeOptions {
    /// JPEG quality in `1..=100`.
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl EncodeOptions {
    /// Reject out-of-range settings.
    pub fn validate(&self) -> ConcatResult<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConcatError::invalid_config(format!(
                "jpeg_quality must be in 1..=100 (got {})",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}

/// Drop the alpha plane.
///
/// A composed canvas already holds every paste blended into its white
/// background, so the colour bands are kept as they are.
pub fn flatten_to_rgb(img: &image::RgbaImage) -> image::RgbImage {
    img.convert()
}

/// Encode the canvas. PNG keeps RGBA; JPEG is flattened to RGB first.
pub fn encode_image(
    canvas: &image::RgbaImage,
    format: OutputFormat,
    opts: &EncodeOptions,
) -> ConcatResult<Vec<u8>> {
    opts.validate()?;
    let (w, h) = canvas.dimensions();
    let mut buf = Vec::new();
    match format {
        OutputFormat::Png => {
            image::codecs::png::PngEncoder::new(Cursor::new(&mut buf))
                .write_image(canvas.as_raw(), w, h, image::ExtendedColorType::Rgba8)
                .map_err(|e| ConcatError::encode(format!("png: {e}")))?;
        }
        OutputFormat::Jpeg => {
            let rgb = flatten_to_rgb(canvas);
            image::codecs::jpeg::JpegEncoder::new_with_quality(
                Cursor::new(&mut buf),
                opts.jpeg_quality,
            )
            .write_image(rgb.as_raw(), w, h, image::ExtendedColorType::Rgb8)
            .map_err(|e| ConcatError::encode(format!("jpeg: {e}")))?;
        }
    }
    Ok(buf)
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> ConcatResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Write encoded bytes to `path`, creating intermediate directories.
pub fn write_image(path: &Path, bytes: &[u8]) -> ConcatResult<()> {
    ensure_parent_dir(path)?;
    std::fs::write(path, bytes).with_context(|| format!("write image '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/output.rs"]
mod tests;
